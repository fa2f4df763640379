//! Service Ports
//!
//! Abstract interfaces for external services.

mod transit_graphql;

pub use transit_graphql::*;
