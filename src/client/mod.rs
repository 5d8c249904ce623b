//! Transport adapters for the species catalog.
//!
//! The search controller only knows the [`Transport`] trait. [`GraphQlClient`]
//! is the production implementation; tests script their own.
//!
//! # Example
//!
//! ```ignore
//! use crate::client::{GraphQlClient, HttpConfig, Transport, query};
//! use crate::domain::SortOrder;
//!
//! let client = GraphQlClient::new(DEFAULT_ENDPOINT, &HttpConfig::default())?;
//! let page = client.execute(query::build("pika", 0, SortOrder::Asc, 10)).await?;
//! ```

use std::future::Future;

use crate::domain::{Page, TransportError};

pub mod graphql;
pub mod http;
pub mod query;

// ============================================================================
// Re-exports
// ============================================================================

pub use graphql::GraphQlClient;
pub use http::HttpConfig;
pub use query::QueryDescriptor;

// ============================================================================
// Transport Trait
// ============================================================================

/// Executes a query descriptor against the remote catalog.
///
/// Implementations own timeouts; a timeout is reported like any other
/// failure.
pub trait Transport: Send + Sync + 'static {
    /// Fetch one page of species for `descriptor`.
    fn execute(
        &self,
        descriptor: QueryDescriptor,
    ) -> impl Future<Output = Result<Page, TransportError>> + Send;
}
