//! Domain Entities
//!
//! - Route: Parent transit line, keyed by its GTFS id
//! - RoutePattern: Direction/headsign variant of a Route
//! - PatternData: Pattern as returned by the transit GraphQL API

mod pattern_data;
mod route;
mod route_pattern;

pub use pattern_data::*;
pub use route::*;
pub use route_pattern::*;
