//! First-launch flag storage.

use color_eyre::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use super::paths::AppPaths;

/// Remembers whether the welcome screen has been shown.
pub trait LaunchPreferences {
    /// Returns `true` once [`Self::mark_completed`] has been called.
    fn is_completed(&self) -> bool;

    /// Record that the welcome screen was shown.
    ///
    /// # Errors
    ///
    /// Returns an error if the flag cannot be persisted.
    fn mark_completed(&mut self) -> Result<()>;

    /// Forget the flag so the welcome screen shows again.
    ///
    /// # Errors
    ///
    /// Returns an error if the flag cannot be persisted.
    fn reset(&mut self) -> Result<()>;
}

// ============================================================================
// File-backed
// ============================================================================

#[derive(Debug, Default, Serialize, Deserialize)]
struct PreferencesFile {
    #[serde(default)]
    welcome_completed: bool,
}

/// Stores the flag as JSON on disk.
///
/// A missing or unreadable file reads as "not completed".
#[derive(Debug, Clone)]
pub struct FilePreferences {
    path: PathBuf,
}

impl FilePreferences {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Preferences at the default location in the config directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the config directory cannot be determined or created.
    pub fn open_default() -> Result<Self> {
        Ok(Self::new(AppPaths::new().preferences_file()?))
    }

    #[must_use]
    pub fn path(&self) -> &std::path::Path {
        &self.path
    }

    fn read(&self) -> PreferencesFile {
        fs::read_to_string(&self.path)
            .ok()
            .and_then(|content| serde_json::from_str(&content).ok())
            .unwrap_or_default()
    }

    fn write(&self, prefs: &PreferencesFile) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, serde_json::to_string_pretty(prefs)?)?;
        Ok(())
    }
}

impl LaunchPreferences for FilePreferences {
    fn is_completed(&self) -> bool {
        self.read().welcome_completed
    }

    fn mark_completed(&mut self) -> Result<()> {
        self.write(&PreferencesFile {
            welcome_completed: true,
        })
    }

    fn reset(&mut self) -> Result<()> {
        self.write(&PreferencesFile::default())
    }
}

// ============================================================================
// In-memory
// ============================================================================

/// Keeps the flag for the lifetime of the process only.
#[derive(Debug, Clone, Copy, Default)]
pub struct MemoryPreferences {
    completed: bool,
}

impl LaunchPreferences for MemoryPreferences {
    fn is_completed(&self) -> bool {
        self.completed
    }

    fn mark_completed(&mut self) -> Result<()> {
        self.completed = true;
        Ok(())
    }

    fn reset(&mut self) -> Result<()> {
        self.completed = false;
        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn exercise(prefs: &mut impl LaunchPreferences) {
        assert!(!prefs.is_completed());
        prefs.mark_completed().unwrap();
        assert!(prefs.is_completed());
        prefs.mark_completed().unwrap();
        assert!(prefs.is_completed());
        prefs.reset().unwrap();
        assert!(!prefs.is_completed());
    }

    #[test]
    fn test_memory_preferences() {
        exercise(&mut MemoryPreferences::default());
    }

    #[test]
    fn test_file_preferences() {
        let dir = tempfile::tempdir().unwrap();
        exercise(&mut FilePreferences::new(dir.path().join("prefs.json")));
    }

    #[test]
    fn test_file_preferences_persist_across_instances() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("prefs.json");

        FilePreferences::new(&path).mark_completed().unwrap();
        assert!(FilePreferences::new(&path).is_completed());
    }

    #[test]
    fn test_corrupt_file_reads_as_not_completed() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prefs.json");
        fs::write(&path, "not json").unwrap();

        let prefs = FilePreferences::new(&path);
        assert!(!prefs.is_completed());
        assert_eq!(prefs.path(), path.as_path());
    }
}
