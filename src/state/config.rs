//! Application configuration with persistence.
//!
//! [`AppConfig`] is stored as JSON in the platform config directory (see
//! [`super::paths`]). [`SearchConfig`] is the subset the search controller
//! runs with.
//!
//! # Example
//!
//! ```ignore
//! use crate::state::AppConfig;
//!
//! let mut config = AppConfig::load();
//! config.page_size = 20;
//! config.save()?;
//!
//! let controller = SearchController::new(client, config.search_config());
//! ```

use color_eyre::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use super::paths::AppPaths;
use crate::client::HttpConfig;
use crate::client::http::DEFAULT_TIMEOUT_SECS;
use crate::constants::{
    DEFAULT_ENDPOINT, DEFAULT_MIN_LOADING, DEFAULT_MIN_LOADING_MS, DEFAULT_PAGE_SIZE,
};
use crate::domain::SortOrder;

// ============================================================================
// SearchConfig
// ============================================================================

/// Runtime settings of a search session.
///
/// Built through [`SearchConfig::default`] and the `with_*` methods so the
/// page size can never be zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchConfig {
    page_size: u32,
    min_loading: Duration,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            min_loading: DEFAULT_MIN_LOADING,
        }
    }
}

impl SearchConfig {
    /// Species per page. Never zero.
    #[must_use]
    pub const fn page_size(&self) -> u32 {
        self.page_size
    }

    /// Minimum time an initial search shows `Loading` before an error.
    #[must_use]
    pub const fn min_loading(&self) -> Duration {
        self.min_loading
    }

    /// Zero is raised to one.
    #[must_use]
    pub fn with_page_size(self, page_size: u32) -> Self {
        Self {
            page_size: page_size.max(1),
            ..self
        }
    }

    #[must_use]
    pub fn with_min_loading(self, min_loading: Duration) -> Self {
        Self {
            min_loading,
            ..self
        }
    }
}

// ============================================================================
// AppConfig
// ============================================================================

/// Application configuration structure for persistence.
///
/// Missing fields fall back to their defaults, so older or hand-written
/// files keep loading.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct AppConfig {
    /// GraphQL endpoint URL.
    pub endpoint: String,
    /// Species per page.
    pub page_size: u32,
    /// Minimum loading time before an initial-search error, in milliseconds.
    pub min_loading_ms: u64,
    /// HTTP request timeout in seconds.
    pub request_timeout_secs: u64,
    /// Default sort order for new searches.
    pub sort_order: SortOrder,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
            min_loading_ms: DEFAULT_MIN_LOADING_MS,
            request_timeout_secs: DEFAULT_TIMEOUT_SECS,
            sort_order: SortOrder::Asc,
        }
    }
}

impl AppConfig {
    /// Returns the path to the configuration file.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration directory cannot be determined
    /// or created.
    pub fn config_path() -> Result<PathBuf> {
        AppPaths::new().config_file()
    }

    /// Loads the configuration from disk.
    ///
    /// If the configuration file doesn't exist or cannot be parsed,
    /// returns the default configuration.
    #[must_use]
    pub fn load() -> Self {
        Self::or_default(Self::try_load())
    }

    fn or_default(loaded: Result<Self>) -> Self {
        loaded.unwrap_or_else(|err| {
            tracing::debug!("Config load failed, using defaults: {err}");
            Self::default()
        })
    }

    /// Attempts to load the configuration from disk.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The configuration path cannot be determined
    /// - The file cannot be read
    /// - The JSON content cannot be parsed
    pub fn try_load() -> Result<Self> {
        let path = Self::config_path()?;
        Self::load_from(&path)
    }

    /// Loads the configuration from a specific file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_from(path: &std::path::Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Saves the configuration to disk.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The configuration path cannot be determined
    /// - The configuration cannot be serialized
    /// - The file cannot be written
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;
        self.save_to(&path)
    }

    /// Saves the configuration to a specific file.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the write fails.
    pub fn save_to(&self, path: &std::path::Path) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Controller settings derived from this configuration.
    #[must_use]
    pub fn search_config(&self) -> SearchConfig {
        SearchConfig::default()
            .with_page_size(self.page_size)
            .with_min_loading(Duration::from_millis(self.min_loading_ms))
    }

    /// HTTP settings derived from this configuration.
    #[must_use]
    pub fn http_config(&self) -> HttpConfig {
        HttpConfig::with_timeout(Duration::from_secs(self.request_timeout_secs))
    }
}

// ============================================================================
// Tests
// ============================================================================
