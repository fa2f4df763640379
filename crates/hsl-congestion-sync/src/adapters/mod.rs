//! Infrastructure Adapters
//!
//! Implementations of domain ports for external systems.

pub mod graphql;
pub mod postgres;

// Re-exports
pub use graphql::HttpTransitGraphQl;
pub use postgres::{PgRoutePatternStore, PgRouteRepository};
