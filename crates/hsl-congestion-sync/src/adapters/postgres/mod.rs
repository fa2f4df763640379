//! PostgreSQL Repository Implementations

mod route_pattern_store;
mod route_repository;

pub use route_pattern_store::PgRoutePatternStore;
pub use route_repository::PgRouteRepository;
