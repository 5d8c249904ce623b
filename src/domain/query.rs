//! Search query parameters.

use serde::{Deserialize, Serialize};

// ============================================================================
// Sort Order
// ============================================================================

/// Ordering by capture rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SortOrder {
    /// Hardest to catch first.
    #[default]
    Asc,
    /// Easiest to catch first.
    Desc,
}

impl SortOrder {
    /// Returns the lowercase name used in queries and config files.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }

    /// Returns the opposite order.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Asc => Self::Desc,
            Self::Desc => Self::Asc,
        }
    }
}

// ============================================================================
// Search Query
// ============================================================================

/// A name search at a specific page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    /// Sanitized name fragment, without wildcards.
    pub name: String,
    /// Zero-based page index.
    pub page: u32,
    /// Capture-rate ordering.
    pub sort_order: SortOrder,
}

impl SearchQuery {
    /// Creates a query for the first page.
    #[must_use]
    pub fn new(name: impl Into<String>, sort_order: SortOrder) -> Self {
        Self {
            name: name.into(),
            page: 0,
            sort_order,
        }
    }

    /// Same search at another page.
    #[must_use]
    pub fn at_page(&self, page: u32) -> Self {
        Self {
            page,
            ..self.clone()
        }
    }

    /// Row offset of this page.
    #[must_use]
    pub const fn offset(&self, page_size: u32) -> u32 {
        self.page.saturating_mul(page_size)
    }
}

// ============================================================================
// Tests
// ============================================================================
