//! Observable search state.

use crate::domain::{Page, Species};

// ============================================================================
// Search Results
// ============================================================================

/// Payload of a successful search.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SearchResults {
    /// Every species loaded so far, in arrival order.
    pub results: Vec<Species>,
    /// Whether another page may exist.
    pub has_next_page: bool,
    /// Whether a search has completed in this session.
    pub has_searched: bool,
    /// `true` for the first page of a search, `false` after load-more.
    pub is_new_search: bool,
    /// A load-more request is outstanding.
    pub is_loading_more: bool,
    /// The last load-more request failed. Results are kept.
    pub load_more_error: bool,
}

impl SearchResults {
    /// Results of a completed initial search.
    #[must_use]
    pub fn first_page(page: Page) -> Self {
        Self {
            has_next_page: !page.is_empty(),
            results: page.into_species(),
            has_searched: true,
            is_new_search: true,
            is_loading_more: false,
            load_more_error: false,
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.results.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// Returns `true` if `load_more` would start a request.
    #[must_use]
    pub fn can_load_more(&self) -> bool {
        self.has_next_page && !self.is_loading_more
    }
}

// ============================================================================
// Search State
// ============================================================================

/// State of a search session.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SearchState {
    /// Nothing searched yet, or the last result was dismissed.
    #[default]
    Idle,
    /// Initial search in progress.
    Loading,
    /// Results are available.
    Success(SearchResults),
    /// The initial search failed.
    Error {
        /// Human-readable failure description.
        message: String,
    },
}

impl SearchState {
    /// Returns `true` while any request is outstanding for this state.
    #[must_use]
    pub fn is_busy(&self) -> bool {
        match self {
            Self::Loading => true,
            Self::Success(results) => results.is_loading_more,
            Self::Idle | Self::Error { .. } => false,
        }
    }

    #[must_use]
    pub fn results(&self) -> Option<&SearchResults> {
        match self {
            Self::Success(results) => Some(results),
            _ => None,
        }
    }

    #[must_use]
    pub fn error_message(&self) -> Option<&str> {
        match self {
            Self::Error { message } => Some(message.as_str()),
            _ => None,
        }
    }

    /// Short variant name for logs.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Loading => "loading",
            Self::Success(_) => "success",
            Self::Error { .. } => "error",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::SpeciesMother;

    #[test]
    fn test_first_page_flags() {
        let results = SearchResults::first_page(Page::new(vec![SpeciesMother::pikachu()]));
        assert_eq!(results.len(), 1);
        assert!(results.has_next_page);
        assert!(results.has_searched);
        assert!(results.is_new_search);
        assert!(!results.is_loading_more);
        assert!(!results.load_more_error);
        assert!(results.can_load_more());
    }

    #[test]
    fn test_empty_first_page_has_no_next_page() {
        let results = SearchResults::first_page(Page::empty());
        assert!(results.is_empty());
        assert!(!results.has_next_page);
        assert!(results.has_searched);
        assert!(!results.can_load_more());
    }

    #[test]
    fn test_is_busy() {
        assert!(!SearchState::Idle.is_busy());
        assert!(SearchState::Loading.is_busy());
        assert!(
            !SearchState::Error {
                message: "x".into()
            }
            .is_busy()
        );

        let mut results = SearchResults::first_page(Page::new(vec![SpeciesMother::pikachu()]));
        assert!(!SearchState::Success(results.clone()).is_busy());
        results.is_loading_more = true;
        assert!(SearchState::Success(results).is_busy());
    }

    #[test]
    fn test_accessors() {
        let error = SearchState::Error {
            message: "HTTP error: 500".into(),
        };
        assert_eq!(error.error_message(), Some("HTTP error: 500"));
        assert!(error.results().is_none());
        assert_eq!(error.label(), "error");

        let success = SearchState::Success(SearchResults::default());
        assert!(success.results().is_some());
        assert_eq!(success.error_message(), None);
        assert_eq!(SearchState::default(), SearchState::Idle);
    }
}
