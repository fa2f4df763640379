//! RoutePattern Store Port
//!
//! Table-level access to persisted route patterns.

use async_trait::async_trait;

use crate::domain::{errors::DomainError, NewRoutePattern, RoutePattern};

/// Storage interface for RoutePattern rows
#[async_trait]
pub trait RoutePatternStore: Send + Sync {
    /// All rows in storage order
    async fn find_all(&self) -> Result<Vec<RoutePattern>, DomainError>;

    /// Find a row by primary key
    async fn find_by_pk(&self, id: &str) -> Result<Option<RoutePattern>, DomainError>;

    /// Return the row matching every field of `key`, creating it when absent.
    ///
    /// The flag is `true` when a new row was inserted. Must be atomic with
    /// respect to concurrent callers using the same key.
    async fn find_or_create(
        &self,
        key: &NewRoutePattern,
    ) -> Result<(RoutePattern, bool), DomainError>;
}
