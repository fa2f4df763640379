//! Route - Parent transit line

use serde::{Deserialize, Serialize};

/// Route referenced by route patterns. The id is the upstream GTFS id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Route {
    pub id: String,
}

impl Route {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}
