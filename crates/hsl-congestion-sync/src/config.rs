//! Configuration for the route pattern sync
//!
//! Read from the process environment (and `.env` via dotenvy).

use anyhow::{bail, Context, Result};
use std::str::FromStr;
use std::time::Duration;
use tokio::sync::Semaphore;

const DEFAULT_GRAPHQL_URL: &str = "https://api.digitransit.fi/routing/v2/hsl/gtfs/v1";
const DEFAULT_MAX_CONCURRENT_REQUESTS: usize = 4;
const DEFAULT_TIMEOUT_SECS: u64 = 30;
const DEFAULT_DATABASE_MAX_CONNECTIONS: u32 = 5;

/// Transit GraphQL client settings
#[derive(Debug, Clone, PartialEq)]
pub struct GraphQlConfig {
    pub endpoint: String,
    pub subscription_key: Option<String>,
    /// In-flight limit for non-high-priority requests
    pub max_concurrent_requests: usize,
    pub timeout: Duration,
}

/// Sync configuration
#[derive(Debug, Clone, PartialEq)]
pub struct SyncConfig {
    pub database_url: String,
    pub database_max_connections: u32,
    pub graphql: GraphQlConfig,
}

impl SyncConfig {
    /// Load config from environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load config through a variable lookup function
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL").context("DATABASE_URL is not set")?;

        let max_concurrent_requests = parse_or(
            &lookup,
            "GRAPHQL_MAX_CONCURRENT_REQUESTS",
            DEFAULT_MAX_CONCURRENT_REQUESTS,
        )?;
        if max_concurrent_requests == 0 {
            bail!("GRAPHQL_MAX_CONCURRENT_REQUESTS must be at least 1");
        }
        if max_concurrent_requests > Semaphore::MAX_PERMITS {
            bail!(
                "GRAPHQL_MAX_CONCURRENT_REQUESTS must be at most {}",
                Semaphore::MAX_PERMITS
            );
        }

        let timeout_secs = parse_or(&lookup, "GRAPHQL_TIMEOUT_SECS", DEFAULT_TIMEOUT_SECS)?;

        Ok(Self {
            database_url,
            database_max_connections: parse_or(
                &lookup,
                "DATABASE_MAX_CONNECTIONS",
                DEFAULT_DATABASE_MAX_CONNECTIONS,
            )?,
            graphql: GraphQlConfig {
                endpoint: lookup("HSL_GRAPHQL_URL")
                    .unwrap_or_else(|| DEFAULT_GRAPHQL_URL.to_string()),
                subscription_key: lookup("DIGITRANSIT_SUBSCRIPTION_KEY")
                    .filter(|key| !key.is_empty()),
                max_concurrent_requests,
                timeout: Duration::from_secs(timeout_secs),
            },
        })
    }
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> Result<T>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .with_context(|| format!("Invalid value for {}: {:?}", key, raw)),
        None => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config =
            SyncConfig::from_lookup(lookup_from(&[("DATABASE_URL", "postgres://localhost/hsl")]))
                .unwrap();

        assert_eq!(config.database_url, "postgres://localhost/hsl");
        assert_eq!(config.database_max_connections, 5);
        assert_eq!(config.graphql.endpoint, DEFAULT_GRAPHQL_URL);
        assert_eq!(config.graphql.subscription_key, None);
        assert_eq!(config.graphql.max_concurrent_requests, 4);
        assert_eq!(config.graphql.timeout, Duration::from_secs(30));
    }

    #[test]
    fn test_overrides() {
        let config = SyncConfig::from_lookup(lookup_from(&[
            ("DATABASE_URL", "postgres://db/hsl"),
            ("HSL_GRAPHQL_URL", "http://localhost:8080/graphql"),
            ("DIGITRANSIT_SUBSCRIPTION_KEY", "secret"),
            ("GRAPHQL_MAX_CONCURRENT_REQUESTS", "8"),
            ("GRAPHQL_TIMEOUT_SECS", "5"),
            ("DATABASE_MAX_CONNECTIONS", "2"),
        ]))
        .unwrap();

        assert_eq!(config.graphql.endpoint, "http://localhost:8080/graphql");
        assert_eq!(config.graphql.subscription_key.as_deref(), Some("secret"));
        assert_eq!(config.graphql.max_concurrent_requests, 8);
        assert_eq!(config.graphql.timeout, Duration::from_secs(5));
        assert_eq!(config.database_max_connections, 2);
    }

    #[test]
    fn test_missing_database_url() {
        let err = SyncConfig::from_lookup(lookup_from(&[])).unwrap_err();
        assert!(err.to_string().contains("DATABASE_URL"));
    }

    #[test]
    fn test_invalid_number() {
        let err = SyncConfig::from_lookup(lookup_from(&[
            ("DATABASE_URL", "postgres://db/hsl"),
            ("GRAPHQL_TIMEOUT_SECS", "soon"),
        ]))
        .unwrap_err();
        assert!(err.to_string().contains("GRAPHQL_TIMEOUT_SECS"));
    }

    #[test]
    fn test_zero_concurrency_rejected() {
        let result = SyncConfig::from_lookup(lookup_from(&[
            ("DATABASE_URL", "postgres://db/hsl"),
            ("GRAPHQL_MAX_CONCURRENT_REQUESTS", "0"),
        ]));
        assert!(result.is_err());
    }

    #[test]
    fn test_concurrency_above_semaphore_limit_rejected() {
        let too_many = (Semaphore::MAX_PERMITS + 1).to_string();
        let err = SyncConfig::from_lookup(lookup_from(&[
            ("DATABASE_URL", "postgres://db/hsl"),
            ("GRAPHQL_MAX_CONCURRENT_REQUESTS", too_many.as_str()),
        ]))
        .unwrap_err();
        assert!(err.to_string().contains("at most"));
    }
}
