//! Search session state for dexsearch.
//!
//! This module holds everything with state or policy:
//!
//! - [`SearchController`] - the pagination state machine
//! - [`SearchState`] - the value the controller publishes
//! - [`sanitize`] - input filtering
//! - [`aggregate`] - merging pages into the result list
//! - [`AppConfig`] / [`SearchConfig`] - persistent and runtime settings
//! - [`LaunchPreferences`] - first-launch flag storage
//!
//! # Architecture
//!
//! ```text
//! ┌──────────┐ submit/load/edit ┌──────────────────┐  execute   ┌───────────┐
//! │    UI    │ ───────────────▶ │ SearchController │ ─────────▶ │ Transport │
//! │ consumer │ ◀─────────────── │  (Session, gen)  │ ◀───────── │           │
//! └──────────┘   SearchState    └──────────────────┘  Page/err  └───────────┘
//! ```

// ============================================================================
// Module Declarations
// ============================================================================

pub mod aggregate;
pub mod config;
pub mod controller;
pub mod paths;
pub mod preferences;
pub mod sanitize;
pub mod search;

// ============================================================================
// Re-exports
// ============================================================================

pub use config::{AppConfig, SearchConfig};
pub use controller::SearchController;
pub use preferences::{FilePreferences, LaunchPreferences, MemoryPreferences};
pub use sanitize::{Sanitized, sanitize};
pub use search::{SearchResults, SearchState};

// ============================================================================
// Tests
// ============================================================================
