// Series catalog domain model
use serde::{Deserialize, Serialize};

/// The fixed, ordered list of expected series columns. Built once from
/// configuration and immutable for the process lifetime.
#[derive(Debug, Clone)]
pub struct SeriesCatalog {
    names: Vec<String>,
}

impl SeriesCatalog {
    pub fn new(names: Vec<String>) -> Self {
        Self { names }
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }

    pub fn name_at(&self, index: usize) -> Option<&str> {
        self.names.get(index).map(String::as_str)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    X,
    Y,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisRange {
    pub min: f64,
    pub max: f64,
}

impl AxisRange {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }
}

/// User-pinned ranges for a chart's axes. Only the set axes are pinned;
/// an unset axis stays auto-scaled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct AxisOverride {
    pub x: Option<AxisRange>,
    pub y: Option<AxisRange>,
}

impl AxisOverride {
    pub fn set(&mut self, axis: Axis, range: AxisRange) {
        match axis {
            Axis::X => self.x = Some(range),
            Axis::Y => self.y = Some(range),
        }
    }

    pub fn clear(&mut self, axis: Axis) {
        match axis {
            Axis::X => self.x = None,
            Axis::Y => self.y = None,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_none() && self.y.is_none()
    }
}
