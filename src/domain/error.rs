//! Error types for species search operations.
//!
//! Input problems are resolved locally and never reach the network.
//! Transport problems cover everything the remote query service can do wrong,
//! including payload-level GraphQL errors on an otherwise successful response.

use thiserror::Error;

// ============================================================================
// Input Errors
// ============================================================================

/// Rejected search input. Raised before any request is built.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    /// Nothing was typed (or only whitespace).
    #[error("Please enter a name to search")]
    Empty,

    /// Input contained only characters outside the allowed set.
    #[error("Names may only contain letters and hyphens")]
    InvalidCharacters,
}

// ============================================================================
// Transport Errors
// ============================================================================

/// Coarse classification of a transport failure.
///
/// The search controller treats all kinds the same; the classification exists
/// for logging and for consumers that want to phrase messages differently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FailureKind {
    /// Connection refused, DNS failure, TLS problems and similar.
    Network,
    /// The request did not complete within the configured timeout.
    Timeout,
    /// The service answered with a non-success HTTP status.
    Http,
    /// The service answered successfully but reported query errors.
    Query,
    /// The response body could not be decoded.
    Decode,
}

/// Failure reported by a transport adapter.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    /// Network-level failure.
    #[error("Network error: {message}")]
    Network {
        /// Description from the underlying client.
        message: String,
    },

    /// The request timed out.
    #[error("Request timed out")]
    Timeout,

    /// Non-success HTTP status.
    #[error("HTTP error: {status}")]
    Http {
        /// The HTTP status code.
        status: u16,
    },

    /// The service reported errors in the response payload.
    #[error("{}", join_messages(.messages))]
    Query {
        /// One entry per reported error, in payload order.
        messages: Vec<String>,
    },

    /// The response body was not the expected shape.
    #[error("Parse error: {message}")]
    Decode {
        /// What failed to parse.
        message: String,
    },

    /// The HTTP client could not be constructed.
    #[error("Failed to initialize HTTP client: {message}")]
    ClientInit {
        /// Reason reported by the client builder.
        message: String,
    },
}

fn join_messages(messages: &[String]) -> String {
    if messages.is_empty() {
        "GraphQL error".to_string()
    } else {
        messages.join(", ")
    }
}

impl TransportError {
    /// Create a network error with the given message.
    #[must_use]
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network {
            message: message.into(),
        }
    }

    /// Create a decode error with the given message.
    #[must_use]
    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode {
            message: message.into(),
        }
    }

    /// Create a query error from the messages reported by the service.
    #[must_use]
    pub fn query<I, S>(messages: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Query {
            messages: messages.into_iter().map(Into::into).collect(),
        }
    }

    /// Create a client initialization error.
    #[must_use]
    pub fn client_init(message: impl Into<String>) -> Self {
        Self::ClientInit {
            message: message.into(),
        }
    }

    /// HTTP status code, when the failure carries one.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Http { status } => Some(*status),
            _ => None,
        }
    }

    /// Returns `true` if the service answered with GraphQL errors.
    #[must_use]
    pub fn is_query_error(&self) -> bool {
        matches!(self, Self::Query { .. })
    }

    /// Classify this failure.
    #[must_use]
    pub fn kind(&self) -> FailureKind {
        match self {
            Self::Network { .. } | Self::ClientInit { .. } => FailureKind::Network,
            Self::Timeout => FailureKind::Timeout,
            Self::Http { .. } => FailureKind::Http,
            Self::Query { .. } => FailureKind::Query,
            Self::Decode { .. } => FailureKind::Decode,
        }
    }
}

impl From<reqwest::Error> for TransportError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout
        } else if err.is_decode() {
            Self::decode(err.to_string())
        } else if let Some(status) = err.status() {
            Self::Http {
                status: status.as_u16(),
            }
        } else {
            Self::network(err.to_string())
        }
    }
}

// ============================================================================
// Controller Errors
// ============================================================================

/// Reasons a search could not be started.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    /// The input was rejected before any request was made.
    #[error(transparent)]
    InvalidInput(#[from] InputError),

    /// A search or load-more request is still outstanding.
    #[error("A search is already in progress")]
    RequestInFlight,
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_transport_error_display() {
        insta::assert_snapshot!(TransportError::Http { status: 503 }, @"HTTP error: 503");
        insta::assert_snapshot!(TransportError::network("connection refused"), @"Network error: connection refused");
        insta::assert_snapshot!(TransportError::Timeout, @"Request timed out");
        insta::assert_snapshot!(TransportError::decode("missing field `id`"), @"Parse error: missing field `id`");
    }

    #[test]
    fn test_query_error_joins_messages() {
        let err = TransportError::query(["field not found", "bad limit"]);
        assert_eq!(err.to_string(), "field not found, bad limit");

        let empty = TransportError::query(Vec::<String>::new());
        assert_eq!(empty.to_string(), "GraphQL error");
    }

    #[rstest]
    #[case::network(TransportError::network("down"), FailureKind::Network, None)]
    #[case::client_init(TransportError::client_init("tls"), FailureKind::Network, None)]
    #[case::timeout(TransportError::Timeout, FailureKind::Timeout, None)]
    #[case::http(TransportError::Http { status: 404 }, FailureKind::Http, Some(404))]
    #[case::query(TransportError::query(["x"]), FailureKind::Query, None)]
    #[case::decode(TransportError::decode("eof"), FailureKind::Decode, None)]
    fn test_transport_error_classification(
        #[case] err: TransportError,
        #[case] kind: FailureKind,
        #[case] status: Option<u16>,
    ) {
        assert_eq!(err.kind(), kind);
        assert_eq!(err.status(), status);
        assert_eq!(err.is_query_error(), kind == FailureKind::Query);
    }

    #[test]
    fn test_search_error_wraps_input_error() {
        let err: SearchError = InputError::Empty.into();
        assert_eq!(err, SearchError::InvalidInput(InputError::Empty));
        assert_eq!(err.to_string(), "Please enter a name to search");
    }
}
