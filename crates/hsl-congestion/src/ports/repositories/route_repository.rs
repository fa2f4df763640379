//! Route Repository Port
//!
//! Abstract interface for Route lookup and creation.

use async_trait::async_trait;

use crate::domain::{errors::RouteError, Route};

/// Repository interface for Route entities
#[async_trait]
pub trait RouteRepository: Send + Sync {
    /// Get a Route by GTFS id, failing with `RouteError::NoSuchRoute` when absent
    async fn get_by_id(&self, id: &str) -> Result<Route, RouteError>;

    /// Create a Route by GTFS id
    async fn create_by_id(&self, id: &str) -> Result<Route, RouteError>;
}
