//! HTTP GraphQL Implementation
//!
//! Queries the Digitransit routing API using reqwest.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tokio::sync::Semaphore;

use hsl_congestion::{DomainError, GraphQlRequest, RequestPriority, TransitGraphQl};

use crate::config::GraphQlConfig;

const SUBSCRIPTION_KEY_HEADER: &str = "digitransit-subscription-key";

/// HTTP implementation of TransitGraphQl.
///
/// `Normal` and `Low` requests share a bounded number of in-flight slots.
/// `High` requests skip the limiter.
pub struct HttpTransitGraphQl {
    client: Client,
    endpoint: String,
    subscription_key: Option<String>,
    limiter: Semaphore,
}

#[derive(Serialize)]
struct RequestBody<'a> {
    query: &'a str,
    variables: &'a Map<String, Value>,
}

#[derive(Debug, Deserialize)]
struct ResponseBody {
    data: Option<Value>,
    #[serde(default)]
    errors: Vec<ResponseError>,
}

#[derive(Debug, Deserialize)]
struct ResponseError {
    message: String,
}

impl ResponseBody {
    fn into_data(self) -> Result<Value, DomainError> {
        if !self.errors.is_empty() {
            let messages: Vec<String> = self.errors.into_iter().map(|e| e.message).collect();
            return Err(DomainError::ExternalService(format!(
                "GraphQL errors: {}",
                messages.join("; ")
            )));
        }

        self.data
            .ok_or_else(|| DomainError::ExternalService("GraphQL response has no data".into()))
    }
}

impl HttpTransitGraphQl {
    pub fn new(config: &GraphQlConfig) -> Result<Self, DomainError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| DomainError::ExternalService(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            endpoint: config.endpoint.clone(),
            subscription_key: config.subscription_key.clone(),
            limiter: Semaphore::new(config.max_concurrent_requests),
        })
    }

    async fn send(&self, request: &GraphQlRequest) -> Result<Value, DomainError> {
        let body = RequestBody {
            query: &request.query,
            variables: &request.variables,
        };

        let mut http = self.client.post(&self.endpoint).json(&body);
        if let Some(key) = &self.subscription_key {
            http = http.header(SUBSCRIPTION_KEY_HEADER, key);
        }

        let response = http
            .send()
            .await
            .map_err(|e| DomainError::ExternalService(format!("GraphQL request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(DomainError::ExternalService(format!(
                "GraphQL API error ({status}): {error_text}"
            )));
        }

        let body: ResponseBody = response.json().await.map_err(|e| {
            DomainError::ExternalService(format!("Invalid GraphQL response: {e}"))
        })?;

        body.into_data()
    }
}

#[async_trait]
impl TransitGraphQl for HttpTransitGraphQl {
    async fn query(&self, request: &GraphQlRequest) -> Result<Value, DomainError> {
        tracing::debug!(
            priority = %request.priority,
            endpoint = %self.endpoint,
            "Sending GraphQL request"
        );

        if request.priority == RequestPriority::High {
            return self.send(request).await;
        }

        let _permit = self
            .limiter
            .acquire()
            .await
            .map_err(|e| DomainError::ExternalService(format!("GraphQL limiter closed: {e}")))?;

        self.send(request).await
    }
}
