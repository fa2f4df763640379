//! Transit GraphQL Port
//!
//! Abstract interface for querying the transit data API.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::domain::errors::DomainError;

/// Scheduling priority of a GraphQL request
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RequestPriority {
    Low,
    #[default]
    Normal,
    High,
}

impl std::fmt::Display for RequestPriority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Low => write!(f, "low"),
            Self::Normal => write!(f, "normal"),
            Self::High => write!(f, "high"),
        }
    }
}

/// A GraphQL document with its variables.
///
/// Values are always passed as variables, never spliced into `query`.
#[derive(Debug, Clone, PartialEq)]
pub struct GraphQlRequest {
    pub query: String,
    pub variables: Map<String, Value>,
    pub priority: RequestPriority,
}

impl GraphQlRequest {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            variables: Map::new(),
            priority: RequestPriority::default(),
        }
    }

    /// Bind a variable
    pub fn variable(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.variables.insert(name.into(), value.into());
        self
    }

    /// Set the request priority
    pub fn priority(mut self, priority: RequestPriority) -> Self {
        self.priority = priority;
        self
    }
}

/// Service interface for the transit GraphQL API
#[async_trait]
pub trait TransitGraphQl: Send + Sync {
    /// Execute a request and return its `data` object
    async fn query(&self, request: &GraphQlRequest) -> Result<Value, DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_binds_variables_and_priority() {
        let request = GraphQlRequest::new("query($id: String!) { pattern(id: $id) { code } }")
            .variable("id", "HSL:1001_1")
            .priority(RequestPriority::High);

        assert_eq!(request.priority, RequestPriority::High);
        assert_eq!(request.variables["id"], Value::from("HSL:1001_1"));
    }

    #[test]
    fn test_default_priority_is_normal() {
        assert_eq!(GraphQlRequest::new("{ a }").priority, RequestPriority::Normal);
        assert_eq!(RequestPriority::High.to_string(), "high");
    }
}
