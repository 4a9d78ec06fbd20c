// Chart projector - combines a snapshot with per-session view state
use crate::domain::chart::{ChartSpec, PointPair, TableView};
use crate::domain::series::SeriesCatalog;
use crate::domain::snapshot::Snapshot;
use crate::domain::view::{Tab, ViewState};

const NO_DATA_TITLE: &str = "(No data)";

/// Build one chart spec per requested series, in catalog order. Pure: the
/// same snapshot and view state always yield the same specs, whether the
/// trigger was a refresh tick or a view mutation.
pub fn project(
    catalog: &SeriesCatalog,
    snapshot: Option<&Snapshot>,
    view: &ViewState,
) -> Vec<ChartSpec> {
    match view.active_tab() {
        Tab::All => view
            .selected_in_order(catalog)
            .into_iter()
            .map(|name| chart_for(name, snapshot, view))
            .collect(),
        Tab::Single => catalog
            .name_at(view.single_index())
            .map(|name| vec![chart_for(name, snapshot, view)])
            .unwrap_or_default(),
        Tab::Table => Vec::new(),
    }
}

/// Expose the snapshot as an undifferentiated row/column table. Cells are
/// passed through as text; unparsed cells come out empty.
pub fn project_table(snapshot: Option<&Snapshot>) -> TableView {
    let Some(snapshot) = snapshot else {
        return TableView::empty();
    };

    let mut columns = Vec::with_capacity(snapshot.columns().len() + 1);
    columns.push("timestamp".to_string());
    columns.extend(snapshot.columns().iter().cloned());

    let rows = snapshot
        .rows()
        .iter()
        .map(|row| {
            let mut cells = Vec::with_capacity(row.cells.len() + 1);
            cells.push(row.timestamp.clone());
            cells.extend(
                row.cells
                    .iter()
                    .map(|c| c.map(|v| v.to_string()).unwrap_or_default()),
            );
            cells
        })
        .collect();

    TableView { columns, rows }
}

fn chart_for(name: &str, snapshot: Option<&Snapshot>, view: &ViewState) -> ChartSpec {
    let mut spec = match snapshot {
        None => ChartSpec::placeholder(name, NO_DATA_TITLE.to_string()),
        Some(snapshot) => match snapshot.column_index(name) {
            None => ChartSpec::placeholder(name, format!("{name} (missing)")),
            Some(idx) => {
                let points = snapshot
                    .rows()
                    .iter()
                    .filter_map(|row| {
                        row.cells
                            .get(idx)
                            .copied()
                            .flatten()
                            .map(|v| PointPair::new(row.timestamp.clone(), v))
                    })
                    .collect();
                ChartSpec::new(name.to_string(), name.to_string(), points)
            }
        },
    };
    spec.axis_override = view.override_for(name).copied();
    spec
}
