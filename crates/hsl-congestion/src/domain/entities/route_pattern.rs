//! RoutePattern - Direction and headsign variant of a Route
//!
//! Pure domain entity without infrastructure dependencies.

use serde::{Deserialize, Serialize};

/// Persisted route pattern
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoutePattern {
    /// Upstream pattern id (e.g. `HSL:1001_1`), never generated locally
    pub id: String,
    pub route_id: String,
    pub direction: i32,
    pub headsign: String,
}

/// Composite lookup key for find-or-create.
///
/// A row matches only when all four fields are equal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewRoutePattern {
    pub id: String,
    pub route_id: String,
    pub direction: i32,
    pub headsign: String,
}

impl NewRoutePattern {
    /// Whether an existing record has exactly this composite key.
    ///
    /// This is the equality `RoutePatternStore::find_or_create` must use to
    /// decide between returning a stored row and inserting a new one.
    pub fn matches(&self, pattern: &RoutePattern) -> bool {
        self.id == pattern.id
            && self.route_id == pattern.route_id
            && self.direction == pattern.direction
            && self.headsign == pattern.headsign
    }
}

impl From<NewRoutePattern> for RoutePattern {
    fn from(new: NewRoutePattern) -> Self {
        Self {
            id: new.id,
            route_id: new.route_id,
            direction: new.direction,
            headsign: new.headsign,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key() -> NewRoutePattern {
        NewRoutePattern {
            id: "HSL:1001_1".to_string(),
            route_id: "1001".to_string(),
            direction: 1,
            headsign: "Downtown".to_string(),
        }
    }

    #[test]
    fn test_matches_requires_every_field() {
        let pattern = RoutePattern::from(key());
        assert!(key().matches(&pattern));

        let other_headsign = RoutePattern {
            headsign: "Uptown".to_string(),
            ..pattern.clone()
        };
        assert!(!key().matches(&other_headsign));

        let other_direction = RoutePattern {
            direction: 0,
            ..pattern
        };
        assert!(!key().matches(&other_direction));
    }
}
