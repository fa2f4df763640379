//! HSL Congestion Domain Library
//!
//! Core domain types and interfaces for persisting HSL route patterns.
//!
//! # Architecture
//!
//! This crate follows Clean Architecture / Hexagonal Architecture principles:
//!
//! - **Domain Layer** (`domain/`): Pure business entities
//!   - `entities/`: Core domain models (Route, RoutePattern, PatternData)
//!   - `errors/`: Domain-specific error types
//!
//! - **Ports** (`ports/`): Abstract interfaces (traits)
//!   - `repositories/`: Data access interfaces
//!   - `services/`: External service interfaces (transit GraphQL API)
//!
//! # Usage
//!
//! ```rust,ignore
//! use hsl_congestion::domain::{Route, RoutePattern};
//! use hsl_congestion::ports::{RoutePatternStore, RouteRepository, TransitGraphQl};
//! ```

pub mod domain;
pub mod ports;

// Re-export commonly used types
pub use domain::{
    DomainError, NewRoutePattern, PatternData, PatternRoute, Route, RouteError, RoutePattern,
    RoutePatternError,
};
pub use ports::{
    // Transit API
    GraphQlRequest,
    RequestPriority,
    // Repositories
    RoutePatternStore,
    RouteRepository,
    TransitGraphQl,
};
