//! PostgreSQL implementation of RouteRepository

use async_trait::async_trait;
use sqlx::PgPool;

use hsl_congestion::{DomainError, Route, RouteError, RouteRepository};

/// PostgreSQL implementation of RouteRepository
pub struct PgRouteRepository {
    pool: PgPool,
}

impl PgRouteRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Internal row type for sqlx mapping
#[derive(sqlx::FromRow)]
struct RouteRow {
    id: String,
}

impl From<RouteRow> for Route {
    fn from(row: RouteRow) -> Self {
        Self { id: row.id }
    }
}

#[async_trait]
impl RouteRepository for PgRouteRepository {
    async fn get_by_id(&self, id: &str) -> Result<Route, RouteError> {
        let row = sqlx::query_as::<_, RouteRow>("SELECT id FROM routes WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::Repository(e.to_string()))?;

        row.map(Into::into)
            .ok_or_else(|| RouteError::no_such_route(id))
    }

    async fn create_by_id(&self, id: &str) -> Result<Route, RouteError> {
        // Concurrent creators converge on the same row
        let result = sqlx::query("INSERT INTO routes (id) VALUES ($1) ON CONFLICT (id) DO NOTHING")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::Repository(e.to_string()))?;

        if result.rows_affected() > 0 {
            tracing::info!("Created Route: {}", id);
        }

        let row = sqlx::query_as::<_, RouteRow>("SELECT id FROM routes WHERE id = $1")
            .bind(id)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| DomainError::Repository(e.to_string()))?;

        Ok(row.into())
    }
}
