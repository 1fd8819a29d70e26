//! Durable local storage for the five persisted state pieces.
//!
//! Each piece lives in its own JSON file inside the state directory:
//! `language.json`, `theme.json`, `bookmarks.json`, `recentlyViewed.json`
//! and `progress.json`. Values are plain UTF-8 JSON: a string enum, a
//! string enum, an array of strings, an array of strings (length ≤ 5),
//! and an object mapping guide id → status.
//!
//! Loading is total: a missing or malformed file falls back to that
//! piece's default with a logged warning, never an error. Writes are
//! synchronous and finish before the mutating call returns.

use anyhow::{Context, Result};
use camino::{Utf8Path, Utf8PathBuf};
use indexmap::{IndexMap, IndexSet};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fs;

use crate::models::{AppState, Language, ProgressStatus, ThemeMode};

const LANGUAGE_FILE: &str = "language.json";
const THEME_FILE: &str = "theme.json";
const BOOKMARKS_FILE: &str = "bookmarks.json";
const RECENTLY_VIEWED_FILE: &str = "recentlyViewed.json";
const PROGRESS_FILE: &str = "progress.json";

/// File-backed store for user state, one JSON file per key.
///
/// [`StateManager`](crate::state::StateManager) owns one of these and
/// persists exactly the pieces a mutation touched. Callers never see
/// write failures; the manager logs and swallows them so in-memory state
/// stays usable for the session.
#[derive(Debug, Clone)]
pub struct StorageManager {
    state_dir: Utf8PathBuf,
}

impl StorageManager {
    /// Create a StorageManager rooted at the given state directory,
    /// creating the directory if needed.
    pub fn new<P: AsRef<Utf8Path>>(state_dir: P) -> Result<Self> {
        let state_dir = state_dir.as_ref().to_path_buf();

        if !state_dir.exists() {
            fs::create_dir_all(&state_dir)
                .with_context(|| format!("Failed to create state directory: {}", state_dir))?;
        }

        Ok(Self { state_dir })
    }

    /// Load the full application state, defaulting each piece that is
    /// missing or malformed.
    pub fn load_state(&self) -> AppState {
        AppState {
            language: self.load_piece::<Language>(LANGUAGE_FILE),
            theme: self.load_piece::<ThemeMode>(THEME_FILE),
            bookmarks: self.load_piece::<IndexSet<String>>(BOOKMARKS_FILE),
            recently_viewed: self.load_piece::<Vec<String>>(RECENTLY_VIEWED_FILE),
            progress: self.load_piece::<IndexMap<String, ProgressStatus>>(PROGRESS_FILE),
        }
    }

    pub fn persist_language(&self, language: Language) -> Result<()> {
        self.write_piece(LANGUAGE_FILE, &language)
    }

    pub fn persist_theme(&self, theme: ThemeMode) -> Result<()> {
        self.write_piece(THEME_FILE, &theme)
    }

    pub fn persist_bookmarks(&self, bookmarks: &IndexSet<String>) -> Result<()> {
        self.write_piece(BOOKMARKS_FILE, bookmarks)
    }

    pub fn persist_recently_viewed(&self, recently_viewed: &[String]) -> Result<()> {
        self.write_piece(RECENTLY_VIEWED_FILE, &recently_viewed)
    }

    pub fn persist_progress(&self, progress: &IndexMap<String, ProgressStatus>) -> Result<()> {
        self.write_piece(PROGRESS_FILE, progress)
    }

    /// Get the state directory path.
    pub fn state_dir(&self) -> &Utf8Path {
        &self.state_dir
    }

    fn load_piece<T: DeserializeOwned + Default>(&self, file_name: &str) -> T {
        let path = self.state_dir.join(file_name);

        if !path.exists() {
            return T::default();
        }

        let contents = match fs::read_to_string(&path) {
            Ok(contents) => contents,
            Err(error) => {
                tracing::warn!("Failed to read {}, using default: {}", path, error);
                return T::default();
            }
        };

        match serde_json::from_str(&contents) {
            Ok(value) => value,
            Err(error) => {
                tracing::warn!("Malformed state in {}, using default: {}", path, error);
                T::default()
            }
        }
    }

    fn write_piece<T: Serialize + ?Sized>(&self, file_name: &str, value: &T) -> Result<()> {
        let path = self.state_dir.join(file_name);
        let json = serde_json::to_string(value)
            .with_context(|| format!("Failed to serialize state for {}", file_name))?;

        fs::write(&path, json).with_context(|| format!("Failed to write state: {}", path))?;

        tracing::debug!("Persisted {}", path);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn create_test_storage() -> (StorageManager, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let state_dir = Utf8PathBuf::try_from(temp_dir.path().to_path_buf()).unwrap();
        let storage = StorageManager::new(&state_dir).unwrap();
        (storage, temp_dir)
    }

    #[test]
    fn test_creates_state_directory() {
        let temp_dir = TempDir::new().unwrap();
        let state_dir = Utf8PathBuf::try_from(temp_dir.path().join("state")).unwrap();

        let storage = StorageManager::new(&state_dir).unwrap();
        assert!(storage.state_dir().exists());
    }

    #[test]
    fn test_empty_directory_loads_defaults() {
        let (storage, _temp_dir) = create_test_storage();
        let state = storage.load_state();

        assert_eq!(state, AppState::default());
    }

    #[test]
    fn test_round_trip_each_piece() {
        let (storage, _temp_dir) = create_test_storage();

        storage.persist_language(Language::Bengali).unwrap();
        storage.persist_theme(ThemeMode::Dark).unwrap();

        let mut bookmarks = IndexSet::new();
        bookmarks.insert("math-101".to_string());
        storage.persist_bookmarks(&bookmarks).unwrap();

        let recent = vec!["bio-9".to_string(), "math-101".to_string()];
        storage.persist_recently_viewed(&recent).unwrap();

        let mut progress = IndexMap::new();
        progress.insert("math-101".to_string(), ProgressStatus::Completed);
        storage.persist_progress(&progress).unwrap();

        let state = storage.load_state();
        assert_eq!(state.language, Language::Bengali);
        assert_eq!(state.theme, ThemeMode::Dark);
        assert!(state.is_bookmarked("math-101"));
        assert_eq!(state.recently_viewed, recent);
        assert_eq!(state.progress_for("math-101"), ProgressStatus::Completed);
    }

    #[test]
    fn test_persisted_values_are_plain_json() {
        let (storage, _temp_dir) = create_test_storage();
        storage.persist_language(Language::English).unwrap();

        let raw = fs::read_to_string(storage.state_dir().join("language.json")).unwrap();
        assert_eq!(raw, "\"en\"");
    }

    #[test]
    fn test_malformed_piece_falls_back_to_default() {
        let (storage, _temp_dir) = create_test_storage();
        storage.persist_theme(ThemeMode::Dark).unwrap();

        fs::write(storage.state_dir().join("theme.json"), "not json at all").unwrap();
        fs::write(storage.state_dir().join("bookmarks.json"), "{\"wrong\": 1}").unwrap();

        let state = storage.load_state();
        assert_eq!(state.theme, ThemeMode::Light);
        assert!(state.bookmarks.is_empty());
    }
}
