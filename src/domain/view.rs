// View state domain model
use crate::domain::series::{Axis, AxisOverride, AxisRange, SeriesCatalog};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tab {
    #[default]
    All,
    Single,
    Table,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Prev,
    Next,
}

impl Direction {
    fn delta(self) -> isize {
        match self {
            Direction::Prev => -1,
            Direction::Next => 1,
        }
    }
}

/// A UI interaction, as an explicit discriminated event. Which trigger fired
/// is carried in the event itself, never inferred from call context.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ViewEvent {
    SelectTab {
        tab: Tab,
    },
    ToggleSeries {
        series: String,
    },
    CycleSingle {
        direction: Direction,
    },
    SetAxisOverride {
        series: String,
        axis: Axis,
        range: AxisRange,
    },
    ClearAxisOverride {
        series: String,
        axis: Option<Axis>,
    },
}

/// Per-session UI selections. Mutated only by user interaction events; the
/// refresh tick never touches it.
#[derive(Debug, Clone, Default)]
pub struct ViewState {
    active_tab: Tab,
    selected: HashSet<String>,
    single_index: usize,
    overrides: HashMap<String, AxisOverride>,
}

impl ViewState {
    /// Fresh session state with every catalog series selected.
    pub fn for_catalog(catalog: &SeriesCatalog) -> Self {
        Self {
            selected: catalog.names().iter().cloned().collect(),
            ..Self::default()
        }
    }

    pub fn active_tab(&self) -> Tab {
        self.active_tab
    }

    pub fn single_index(&self) -> usize {
        self.single_index
    }

    pub fn is_selected(&self, name: &str) -> bool {
        self.selected.contains(name)
    }

    /// Selected series in catalog order, regardless of toggle order.
    pub fn selected_in_order<'a>(&self, catalog: &'a SeriesCatalog) -> Vec<&'a str> {
        catalog
            .names()
            .iter()
            .filter(|n| self.selected.contains(n.as_str()))
            .map(String::as_str)
            .collect()
    }

    pub fn override_for(&self, name: &str) -> Option<&AxisOverride> {
        self.overrides.get(name)
    }

    pub fn apply(&mut self, catalog: &SeriesCatalog, event: ViewEvent) {
        match event {
            ViewEvent::SelectTab { tab } => {
                self.active_tab = tab;
            }
            ViewEvent::ToggleSeries { series } => {
                if !catalog.contains(&series) {
                    tracing::debug!(%series, "ignoring toggle for unknown series");
                    return;
                }
                if !self.selected.remove(&series) {
                    self.selected.insert(series);
                }
            }
            ViewEvent::CycleSingle { direction } => {
                if catalog.is_empty() {
                    return;
                }
                let len = catalog.len() as isize;
                let next = (self.single_index as isize + direction.delta()).rem_euclid(len);
                self.single_index = next as usize;
            }
            ViewEvent::SetAxisOverride {
                series,
                axis,
                range,
            } => {
                if !catalog.contains(&series) {
                    tracing::debug!(%series, "ignoring axis override for unknown series");
                    return;
                }
                self.overrides.entry(series).or_default().set(axis, range);
            }
            ViewEvent::ClearAxisOverride { series, axis } => match axis {
                Some(axis) => {
                    if let Some(pinned) = self.overrides.get_mut(&series) {
                        pinned.clear(axis);
                        if pinned.is_empty() {
                            self.overrides.remove(&series);
                        }
                    }
                }
                None => {
                    self.overrides.remove(&series);
                }
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> SeriesCatalog {
        SeriesCatalog::new(vec![
            "sensor1".to_string(),
            "sensor2".to_string(),
            "power (%)".to_string(),
        ])
    }

    #[test]
    fn test_cycle_single_wraps_both_ways() {
        let catalog = catalog();
        let mut view = ViewState::for_catalog(&catalog);

        for _ in 0..catalog.len() {
            view.apply(
                &catalog,
                ViewEvent::CycleSingle {
                    direction: Direction::Next,
                },
            );
        }
        assert_eq!(view.single_index(), 0);

        view.apply(
            &catalog,
            ViewEvent::CycleSingle {
                direction: Direction::Prev,
            },
        );
        assert_eq!(view.single_index(), catalog.len() - 1);

        for _ in 0..catalog.len() {
            view.apply(
                &catalog,
                ViewEvent::CycleSingle {
                    direction: Direction::Prev,
                },
            );
        }
        assert_eq!(view.single_index(), catalog.len() - 1);
    }

    #[test]
    fn test_selected_order_follows_catalog_not_insertion() {
        let catalog = catalog();
        let mut view = ViewState::default();

        view.apply(
            &catalog,
            ViewEvent::ToggleSeries {
                series: "power (%)".to_string(),
            },
        );
        view.apply(
            &catalog,
            ViewEvent::ToggleSeries {
                series: "sensor1".to_string(),
            },
        );

        assert_eq!(view.selected_in_order(&catalog), vec!["sensor1", "power (%)"]);
    }

    #[test]
    fn test_toggle_removes_on_second_apply() {
        let catalog = catalog();
        let mut view = ViewState::for_catalog(&catalog);

        view.apply(
            &catalog,
            ViewEvent::ToggleSeries {
                series: "sensor2".to_string(),
            },
        );
        assert!(!view.is_selected("sensor2"));

        view.apply(
            &catalog,
            ViewEvent::ToggleSeries {
                series: "sensor2".to_string(),
            },
        );
        assert!(view.is_selected("sensor2"));
    }

    #[test]
    fn test_unknown_series_toggle_is_ignored() {
        let catalog = catalog();
        let mut view = ViewState::for_catalog(&catalog);

        view.apply(
            &catalog,
            ViewEvent::ToggleSeries {
                series: "humidity".to_string(),
            },
        );
        assert!(!view.is_selected("humidity"));
        assert_eq!(view.selected_in_order(&catalog).len(), 3);
    }

    #[test]
    fn test_override_survives_unrelated_mutations() {
        let catalog = catalog();
        let mut view = ViewState::for_catalog(&catalog);

        view.apply(
            &catalog,
            ViewEvent::SetAxisOverride {
                series: "sensor1".to_string(),
                axis: Axis::X,
                range: AxisRange::new(10.0, 20.0),
            },
        );
        view.apply(&catalog, ViewEvent::SelectTab { tab: Tab::Table });
        view.apply(
            &catalog,
            ViewEvent::CycleSingle {
                direction: Direction::Next,
            },
        );
        view.apply(&catalog, ViewEvent::SelectTab { tab: Tab::All });

        let pinned = view.override_for("sensor1").expect("override kept");
        assert_eq!(pinned.x, Some(AxisRange::new(10.0, 20.0)));
        assert_eq!(pinned.y, None);
    }

    #[test]
    fn test_override_overwritten_by_new_interaction() {
        let catalog = catalog();
        let mut view = ViewState::for_catalog(&catalog);

        view.apply(
            &catalog,
            ViewEvent::SetAxisOverride {
                series: "sensor1".to_string(),
                axis: Axis::Y,
                range: AxisRange::new(0.0, 1.0),
            },
        );
        view.apply(
            &catalog,
            ViewEvent::SetAxisOverride {
                series: "sensor1".to_string(),
                axis: Axis::Y,
                range: AxisRange::new(-5.0, 5.0),
            },
        );

        let pinned = view.override_for("sensor1").unwrap();
        assert_eq!(pinned.y, Some(AxisRange::new(-5.0, 5.0)));
    }

    #[test]
    fn test_clear_axis_override() {
        let catalog = catalog();
        let mut view = ViewState::for_catalog(&catalog);

        view.apply(
            &catalog,
            ViewEvent::SetAxisOverride {
                series: "sensor1".to_string(),
                axis: Axis::X,
                range: AxisRange::new(10.0, 20.0),
            },
        );
        view.apply(
            &catalog,
            ViewEvent::SetAxisOverride {
                series: "sensor1".to_string(),
                axis: Axis::Y,
                range: AxisRange::new(0.0, 100.0),
            },
        );

        view.apply(
            &catalog,
            ViewEvent::ClearAxisOverride {
                series: "sensor1".to_string(),
                axis: Some(Axis::X),
            },
        );
        let pinned = view.override_for("sensor1").unwrap();
        assert_eq!(pinned.x, None);
        assert_eq!(pinned.y, Some(AxisRange::new(0.0, 100.0)));

        view.apply(
            &catalog,
            ViewEvent::ClearAxisOverride {
                series: "sensor1".to_string(),
                axis: None,
            },
        );
        assert!(view.override_for("sensor1").is_none());
    }
}
