// Domain layer - core data model
pub mod chart;
pub mod series;
pub mod snapshot;
pub mod view;
