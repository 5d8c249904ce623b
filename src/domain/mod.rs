//! Domain types for the dexsearch species catalog client.
//!
//! # Module Organization
//!
//! - [`error`] - Input, transport and controller error types
//! - [`query`] - Search parameters and sort order
//! - [`species`] - Catalog entities and result pages

// ============================================================================
// Module Declarations
// ============================================================================

pub mod error;
pub mod query;
pub mod species;

// ============================================================================
// Re-exports
// ============================================================================

pub use error::{FailureKind, InputError, SearchError, TransportError};
pub use query::{SearchQuery, SortOrder};
pub use species::{Ability, Page, Pokemon, Species, SpeciesColor};
