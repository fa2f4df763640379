//! Domain Errors
//!
//! Error types for domain operations.

use std::fmt::Display;

use thiserror::Error;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Entity not found: {entity_type} with id {id}")]
    NotFound { entity_type: String, id: String },

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Repository error: {0}")]
    Repository(String),

    #[error("External service error: {0}")]
    ExternalService(String),
}

impl DomainError {
    pub fn not_found<T: AsRef<str>>(entity_type: T, id: &str) -> Self {
        Self::NotFound {
            entity_type: entity_type.as_ref().to_string(),
            id: id.to_string(),
        }
    }
}

/// Errors of the route collaborator
#[derive(Debug, Error)]
pub enum RouteError {
    /// Lookup found no route. Callers may recover by creating it.
    #[error("Could not find route with ID '{id}'")]
    NoSuchRoute { id: String },

    #[error(transparent)]
    Domain(#[from] DomainError),
}

impl RouteError {
    pub fn no_such_route(id: &str) -> Self {
        Self::NoSuchRoute { id: id.to_string() }
    }
}

/// Errors of the route pattern repository
#[derive(Debug, Error)]
pub enum RoutePatternError {
    #[error("Could not find route pattern with ID '{id}'")]
    NoSuchRoutePattern { id: String },

    /// Any failure while fetching, linking or persisting a pattern.
    /// Only the cause's message is kept.
    #[error("Could not save route pattern with ID '{id}'. Reason: {reason}")]
    CouldNotSaveRoutePattern { id: String, reason: String },

    #[error(transparent)]
    Domain(#[from] DomainError),
}

impl RoutePatternError {
    pub fn no_such_route_pattern(id: &str) -> Self {
        Self::NoSuchRoutePattern { id: id.to_string() }
    }

    pub fn could_not_save(id: &str, cause: impl Display) -> Self {
        Self::CouldNotSaveRoutePattern {
            id: id.to_string(),
            reason: cause.to_string(),
        }
    }
}
