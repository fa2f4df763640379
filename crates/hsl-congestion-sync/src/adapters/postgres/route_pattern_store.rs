//! PostgreSQL implementation of RoutePatternStore

use async_trait::async_trait;
use sqlx::PgPool;

use hsl_congestion::{DomainError, NewRoutePattern, RoutePattern, RoutePatternStore};

/// PostgreSQL implementation of RoutePatternStore
pub struct PgRoutePatternStore {
    pool: PgPool,
}

impl PgRoutePatternStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Internal row type for sqlx mapping
#[derive(sqlx::FromRow)]
struct RoutePatternRow {
    id: String,
    route_id: String,
    direction: i32,
    headsign: String,
}

impl From<RoutePatternRow> for RoutePattern {
    fn from(row: RoutePatternRow) -> Self {
        Self {
            id: row.id,
            route_id: row.route_id,
            direction: row.direction,
            headsign: row.headsign,
        }
    }
}

/// Message for a key whose id is taken by a row with other attributes
fn conflict_message(key: &NewRoutePattern) -> String {
    format!(
        "route pattern '{}' already exists with different attributes (route '{}', direction {}, headsign '{}' requested)",
        key.id, key.route_id, key.direction, key.headsign
    )
}

#[async_trait]
impl RoutePatternStore for PgRoutePatternStore {
    async fn find_all(&self) -> Result<Vec<RoutePattern>, DomainError> {
        let rows = sqlx::query_as::<_, RoutePatternRow>(
            "SELECT id, route_id, direction, headsign FROM route_patterns ORDER BY created_at, id",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::Repository(e.to_string()))?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn find_by_pk(&self, id: &str) -> Result<Option<RoutePattern>, DomainError> {
        let row = sqlx::query_as::<_, RoutePatternRow>(
            "SELECT id, route_id, direction, headsign FROM route_patterns WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::Repository(e.to_string()))?;

        Ok(row.map(Into::into))
    }

    async fn find_or_create(
        &self,
        key: &NewRoutePattern,
    ) -> Result<(RoutePattern, bool), DomainError> {
        // Insert first so concurrent callers race on the primary key, not on a read
        let inserted = sqlx::query_as::<_, RoutePatternRow>(
            r#"
            INSERT INTO route_patterns (id, route_id, direction, headsign)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT (id) DO NOTHING
            RETURNING id, route_id, direction, headsign
            "#,
        )
        .bind(&key.id)
        .bind(&key.route_id)
        .bind(key.direction)
        .bind(&key.headsign)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::Repository(e.to_string()))?;

        if let Some(row) = inserted {
            tracing::info!("Created RoutePattern: {} (route {})", row.id, row.route_id);
            return Ok((row.into(), true));
        }

        let existing = sqlx::query_as::<_, RoutePatternRow>(
            r#"
            SELECT id, route_id, direction, headsign
            FROM route_patterns
            WHERE id = $1 AND route_id = $2 AND direction = $3 AND headsign = $4
            "#,
        )
        .bind(&key.id)
        .bind(&key.route_id)
        .bind(key.direction)
        .bind(&key.headsign)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::Repository(e.to_string()))?;

        match existing {
            Some(row) => Ok((row.into(), false)),
            None => Err(DomainError::Conflict(conflict_message(key))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conflict_message_names_requested_key() {
        let key = NewRoutePattern {
            id: "HSL:1001_1".to_string(),
            route_id: "1001".to_string(),
            direction: 1,
            headsign: "Downtown".to_string(),
        };

        let message = conflict_message(&key);
        assert!(message.contains("'HSL:1001_1'"));
        assert!(message.contains("headsign 'Downtown'"));
    }
}
