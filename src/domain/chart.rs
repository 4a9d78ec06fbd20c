// Chart specification domain model
use crate::domain::series::AxisOverride;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PointPair {
    pub x: String,
    pub y: f64,
}

impl PointPair {
    pub fn new(x: String, y: f64) -> Self {
        Self { x, y }
    }
}

/// One chart to draw. Recomputed on every tick and every view mutation;
/// never persisted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSpec {
    pub series_id: String,
    pub title: String,
    pub points: Vec<PointPair>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub axis_override: Option<AxisOverride>,
}

impl ChartSpec {
    pub fn new(series_id: String, title: String, points: Vec<PointPair>) -> Self {
        Self {
            series_id,
            title,
            points,
            axis_override: None,
        }
    }

    /// Empty-points spec that keeps output cardinality stable when data for a
    /// series is unavailable.
    pub fn placeholder(series_id: &str, title: String) -> Self {
        Self::new(series_id.to_string(), title, Vec::new())
    }
}

/// Raw row/column projection for the table tab. Header order is the
/// timestamp column followed by the snapshot columns in file order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableView {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl TableView {
    pub fn empty() -> Self {
        Self {
            columns: Vec::new(),
            rows: Vec::new(),
        }
    }
}
