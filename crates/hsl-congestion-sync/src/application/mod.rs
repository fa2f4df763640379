//! Application Layer (Use Cases)
//!
//! Orchestrates domain operations and coordinates between
//! repositories and external services.

mod route_pattern_repository;

pub use route_pattern_repository::RoutePatternRepository;
