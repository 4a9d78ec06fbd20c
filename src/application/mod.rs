// Application layer - use cases
pub mod projector;
pub mod refresh_service;
pub mod tabular_source;
