//! Pattern data as served by the transit GraphQL API

use serde::{Deserialize, Serialize};

use super::NewRoutePattern;

/// `pattern` object of the upstream response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatternData {
    pub direction_id: i32,
    pub headsign: String,
    pub route: PatternRoute,
}

/// Nested `route` object of an upstream pattern
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatternRoute {
    pub gtfs_id: String,
}

impl PatternData {
    /// Build the composite key for the pattern with the given id
    pub fn into_new_route_pattern(self, pattern_id: &str) -> NewRoutePattern {
        NewRoutePattern {
            id: pattern_id.to_string(),
            route_id: self.route.gtfs_id,
            direction: self.direction_id,
            headsign: self.headsign,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_camel_case() {
        let json = serde_json::json!({
            "directionId": 1,
            "headsign": "Downtown",
            "route": { "gtfsId": "1001" }
        });

        let data: PatternData = serde_json::from_value(json).unwrap();
        let key = data.into_new_route_pattern("HSL:1001_1");

        assert_eq!(key.id, "HSL:1001_1");
        assert_eq!(key.route_id, "1001");
        assert_eq!(key.direction, 1);
        assert_eq!(key.headsign, "Downtown");
    }

    #[test]
    fn test_missing_route_is_rejected() {
        let json = serde_json::json!({ "directionId": 0, "headsign": "Kamppi" });
        assert!(serde_json::from_value::<PatternData>(json).is_err());
    }
}
