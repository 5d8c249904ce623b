//! HTTP client configuration for the catalog endpoint.

use reqwest::Client;
use std::time::Duration;

use crate::domain::TransportError;

// ============================================================================
// Constants
// ============================================================================

/// Default timeout for HTTP requests in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Idle connections kept per host
const POOL_MAX_IDLE_PER_HOST: usize = 4;

/// How long an idle pooled connection is kept
const POOL_IDLE_TIMEOUT_SECS: u64 = 30;

// ============================================================================
// Configuration
// ============================================================================

/// HTTP client configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpConfig {
    /// Request timeout
    pub timeout: Duration,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl HttpConfig {
    /// Create config with custom timeout
    #[must_use]
    pub fn with_timeout(timeout: Duration) -> Self {
        Self { timeout }
    }

    /// Build a pooled reqwest client from this configuration.
    ///
    /// # Errors
    ///
    /// Returns `TransportError::ClientInit` if the client fails to initialize
    /// (e.g., TLS backend unavailable).
    pub fn build_client(&self) -> Result<Client, TransportError> {
        Client::builder()
            .pool_max_idle_per_host(POOL_MAX_IDLE_PER_HOST)
            .pool_idle_timeout(Duration::from_secs(POOL_IDLE_TIMEOUT_SECS))
            .timeout(self.timeout)
            .build()
            .map_err(|e| TransportError::client_init(e.to_string()))
    }
}
