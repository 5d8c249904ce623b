//! Where dexsearch keeps its files.
//!
//! Everything lives in one directory under the platform config root:
//!
//! | Platform | Directory |
//! |----------|-----------|
//! | Linux | `~/.config/dexsearch` |
//! | macOS | `~/Library/Application Support/dexsearch` |
//! | Windows | `%APPDATA%\dexsearch` |

use color_eyre::Result;
use color_eyre::eyre::eyre;
use std::fs;
use std::path::PathBuf;

/// Directory name under the config root.
pub const APP_NAME: &str = "dexsearch";

/// Settings file, see [`super::AppConfig`].
pub const CONFIG_FILE_NAME: &str = "config.json";

/// First-launch flag file, see [`super::FilePreferences`].
pub const PREFERENCES_FILE_NAME: &str = "preferences.json";

/// Resolves dexsearch's files inside a base directory.
///
/// The base is the platform config root unless overridden with
/// [`AppPaths::with_root`].
#[derive(Debug, Clone, Default)]
pub struct AppPaths {
    root: Option<PathBuf>,
}

impl AppPaths {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Use `root` instead of the platform config root.
    #[must_use]
    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        Self {
            root: Some(root.into()),
        }
    }

    /// The dexsearch directory, created on first use.
    ///
    /// # Errors
    ///
    /// Returns an error if the platform has no config root or the directory
    /// cannot be created.
    pub fn config_dir(&self) -> Result<PathBuf> {
        let root = match &self.root {
            Some(root) => root.clone(),
            None => dirs::config_dir()
                .ok_or_else(|| eyre!("No config directory on this platform (set XDG_CONFIG_HOME)"))?,
        };
        let dir = root.join(APP_NAME);
        fs::create_dir_all(&dir)?;
        Ok(dir)
    }

    /// # Errors
    ///
    /// See [`Self::config_dir`].
    pub fn config_file(&self) -> Result<PathBuf> {
        Ok(self.config_dir()?.join(CONFIG_FILE_NAME))
    }

    /// # Errors
    ///
    /// See [`Self::config_dir`].
    pub fn preferences_file(&self) -> Result<PathBuf> {
        Ok(self.config_dir()?.join(PREFERENCES_FILE_NAME))
    }
}
