//! GraphQL transport for the PokeAPI species catalog.

use reqwest::Client;
use serde::Deserialize;
use std::future::Future;

use super::Transport;
use super::http::HttpConfig;
use super::query::QueryDescriptor;
use crate::domain::{Page, TransportError};

// ============================================================================
// Response Envelope
// ============================================================================

#[derive(Debug, Deserialize)]
struct GraphQlResponse<T> {
    #[serde(default)]
    data: Option<T>,
    #[serde(default)]
    errors: Option<Vec<GraphQlError>>,
}

#[derive(Debug, Deserialize)]
struct GraphQlError {
    message: String,
}

// ============================================================================
// GraphQL Client
// ============================================================================

/// Executes species searches against a GraphQL endpoint over HTTP.
#[derive(Debug, Clone)]
pub struct GraphQlClient {
    endpoint: String,
    client: Client,
}

impl GraphQlClient {
    /// Creates a client for `endpoint`.
    ///
    /// # Errors
    ///
    /// Returns `TransportError::ClientInit` if the HTTP client fails to build.
    pub fn new(endpoint: impl Into<String>, config: &HttpConfig) -> Result<Self, TransportError> {
        Ok(Self {
            endpoint: endpoint.into(),
            client: config.build_client()?,
        })
    }

    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Decode a successful response body.
    ///
    /// Payload errors win over data: a body that carries both is a failure.
    /// A body with neither is an empty page.
    pub(crate) fn decode_body(body: &str) -> Result<Page, TransportError> {
        let response: GraphQlResponse<Page> =
            serde_json::from_str(body).map_err(|e| TransportError::decode(e.to_string()))?;

        if let Some(errors) = response.errors
            && !errors.is_empty()
        {
            return Err(TransportError::query(
                errors.into_iter().map(|e| e.message),
            ));
        }

        Ok(response.data.unwrap_or_default())
    }
}

impl Transport for GraphQlClient {
    fn execute(
        &self,
        descriptor: QueryDescriptor,
    ) -> impl Future<Output = Result<Page, TransportError>> + Send {
        async move {
            tracing::debug!(
                endpoint = %self.endpoint,
                name = %descriptor.variables.name,
                offset = descriptor.variables.offset,
                "Sending species query"
            );

            let response = self
                .client
                .post(&self.endpoint)
                .header("accept", "application/json")
                .json(&descriptor)
                .send()
                .await
                .inspect_err(|e| tracing::debug!("Species query failed to send: {e}"))?;

            let status = response.status();
            if !status.is_success() {
                tracing::debug!("Species query returned status {status}");
                return Err(TransportError::Http {
                    status: status.as_u16(),
                });
            }

            let body = response.text().await?;
            Self::decode_body(&body).inspect_err(|e| {
                if e.is_query_error() {
                    tracing::debug!("Species query rejected by service: {e}");
                } else {
                    tracing::debug!("Species response could not be decoded: {e}");
                }
            })
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
