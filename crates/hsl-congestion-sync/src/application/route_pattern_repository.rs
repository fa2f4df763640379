//! RoutePattern Application Service (Use Case)
//!
//! Reads persisted route patterns and imports new ones from the transit API.

use std::sync::Arc;

use serde_json::Value;

use hsl_congestion::{
    DomainError, GraphQlRequest, PatternData, RequestPriority, RouteError, RoutePattern,
    RoutePatternError, RoutePatternStore, RouteRepository, TransitGraphQl,
};

type BoxError = Box<dyn std::error::Error + Send + Sync>;

const PATTERN_QUERY: &str = r#"
query RoutePattern($id: String!) {
    pattern(id: $id) {
        directionId
        headsign
        route {
            gtfsId
        }
    }
}
"#;

/// Application service for RoutePattern operations
pub struct RoutePatternRepository<G, R, S>
where
    G: TransitGraphQl,
    R: RouteRepository,
    S: RoutePatternStore,
{
    graphql: Arc<G>,
    routes: Arc<R>,
    store: Arc<S>,
}

impl<G, R, S> RoutePatternRepository<G, R, S>
where
    G: TransitGraphQl,
    R: RouteRepository,
    S: RoutePatternStore,
{
    pub fn new(graphql: Arc<G>, routes: Arc<R>, store: Arc<S>) -> Self {
        Self {
            graphql,
            routes,
            store,
        }
    }

    /// Get all RoutePatterns in storage order
    pub async fn get_list(&self) -> Result<Vec<RoutePattern>, DomainError> {
        self.store.find_all().await
    }

    /// Get a RoutePattern by ID
    pub async fn get_by_id(
        &self,
        route_pattern_id: &str,
    ) -> Result<RoutePattern, RoutePatternError> {
        self.store
            .find_by_pk(route_pattern_id)
            .await?
            .ok_or_else(|| RoutePatternError::no_such_route_pattern(route_pattern_id))
    }

    /// Import a RoutePattern from the transit API.
    ///
    /// Creates the referenced Route when it does not exist yet. Returns the
    /// existing row when one with the same id, route, direction and headsign
    /// is already stored.
    pub async fn create_by_id(
        &self,
        route_pattern_id: &str,
    ) -> Result<RoutePattern, RoutePatternError> {
        self.save(route_pattern_id).await.map_err(|e| {
            let err = RoutePatternError::could_not_save(route_pattern_id, e);
            tracing::warn!("{}", err);
            err
        })
    }

    async fn save(&self, route_pattern_id: &str) -> Result<RoutePattern, BoxError> {
        let data = self.fetch_pattern_data(route_pattern_id).await?;
        let key = data.into_new_route_pattern(route_pattern_id);

        self.ensure_route(&key.route_id).await?;

        let (pattern, created) = self.store.find_or_create(&key).await?;
        if created {
            tracing::info!(
                "Saved RoutePattern: {} ({}, direction {})",
                pattern.id,
                pattern.headsign,
                pattern.direction
            );
        }

        Ok(pattern)
    }

    async fn fetch_pattern_data(&self, route_pattern_id: &str) -> Result<PatternData, BoxError> {
        let request = GraphQlRequest::new(PATTERN_QUERY)
            .variable("id", route_pattern_id)
            .priority(RequestPriority::High);

        let mut data = self.graphql.query(&request).await?;
        let pattern = data
            .get_mut("pattern")
            .map(Value::take)
            .unwrap_or(Value::Null);

        if pattern.is_null() {
            return Err(DomainError::not_found("RoutePattern", route_pattern_id).into());
        }

        let pattern = serde_json::from_value(pattern).map_err(|e| {
            DomainError::ExternalService(format!("Malformed pattern data: {e}"))
        })?;

        Ok(pattern)
    }

    async fn ensure_route(&self, route_id: &str) -> Result<(), RouteError> {
        match self.routes.get_by_id(route_id).await {
            Ok(_) => Ok(()),
            Err(RouteError::NoSuchRoute { .. }) => {
                self.routes.create_by_id(route_id).await?;
                Ok(())
            }
            Err(e) => Err(e),
        }
    }
}
