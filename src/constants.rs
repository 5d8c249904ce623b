//! Application constants for dexsearch.
//!
//! Defaults for the search session and the remote endpoint. Everything here
//! can be overridden through [`crate::state::AppConfig`] or CLI flags.

use std::time::Duration;

// ============================================================================
// Search Session
// ============================================================================

/// Species returned per page.
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// Minimum time an initial search stays in `Loading` before showing an error,
/// in milliseconds.
pub const DEFAULT_MIN_LOADING_MS: u64 = 500;

/// [`DEFAULT_MIN_LOADING_MS`] as a duration.
pub const DEFAULT_MIN_LOADING: Duration = Duration::from_millis(DEFAULT_MIN_LOADING_MS);

// ============================================================================
// Endpoint
// ============================================================================

/// Public PokeAPI GraphQL endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://beta.pokeapi.co/graphql/v1beta";

// ============================================================================
// Command Line
// ============================================================================

/// Pages shown by `dexsearch search` when `--pages` is not given.
pub const DEFAULT_MAX_PAGES: u32 = 3;
