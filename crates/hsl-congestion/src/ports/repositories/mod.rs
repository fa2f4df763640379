//! Repository Ports
//!
//! Abstract interfaces for data persistence operations.

mod route_pattern_store;
mod route_repository;

pub use route_pattern_store::*;
pub use route_repository::*;
