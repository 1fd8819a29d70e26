//! Integration tests for state persistence
//!
//! These tests verify that:
//! - Every store mutation is mirrored to the state directory and
//!   observed by a fresh manager over the same directory (reload
//!   survival)
//! - Missing and malformed persisted data falls back to defaults
//! - Storage failures degrade gracefully: mutations still apply
//!   in memory

use camino::Utf8PathBuf;
use pathshala::{Language, ProgressStatus, StateManager, StorageManager, ThemeMode};
use std::fs;
use tempfile::TempDir;

fn state_dir(temp_dir: &TempDir) -> Utf8PathBuf {
    Utf8PathBuf::try_from(temp_dir.path().join("state")).unwrap()
}

#[test]
fn test_state_survives_reload() {
    let temp_dir = TempDir::new().unwrap();
    let dir = state_dir(&temp_dir);

    {
        let manager = StateManager::with_storage(StorageManager::new(&dir).unwrap());
        manager.toggle_language();
        manager.toggle_theme();
        manager.add_bookmark("class5-math");
        manager.add_to_recently_viewed("class5-math");
        manager.add_to_recently_viewed("class6-science");
        manager.update_progress("class5-math", ProgressStatus::InProgress);
    }

    // Fresh manager over the same directory, as after a restart
    let reloaded = StateManager::with_storage(StorageManager::new(&dir).unwrap());
    let state = reloaded.snapshot();

    assert_eq!(state.language, Language::Bengali);
    assert_eq!(state.theme, ThemeMode::Dark);
    assert!(state.is_bookmarked("class5-math"));
    assert_eq!(
        state.recently_viewed,
        vec!["class6-science", "class5-math"]
    );
    assert_eq!(
        state.progress_for("class5-math"),
        ProgressStatus::InProgress
    );
}

#[test]
fn test_only_mutated_pieces_are_written() {
    let temp_dir = TempDir::new().unwrap();
    let dir = state_dir(&temp_dir);

    let manager = StateManager::with_storage(StorageManager::new(&dir).unwrap());
    manager.add_bookmark("class5-math");

    assert!(dir.join("bookmarks.json").exists());
    assert!(!dir.join("language.json").exists());
    assert!(!dir.join("progress.json").exists());
}

#[test]
fn test_persisted_shapes_match_storage_contract() {
    let temp_dir = TempDir::new().unwrap();
    let dir = state_dir(&temp_dir);

    let manager = StateManager::with_storage(StorageManager::new(&dir).unwrap());
    manager.toggle_language();
    manager.add_bookmark("class5-math");
    manager.update_progress("class5-math", ProgressStatus::Completed);

    assert_eq!(
        fs::read_to_string(dir.join("language.json")).unwrap(),
        "\"bn\""
    );
    assert_eq!(
        fs::read_to_string(dir.join("bookmarks.json")).unwrap(),
        "[\"class5-math\"]"
    );
    assert_eq!(
        fs::read_to_string(dir.join("progress.json")).unwrap(),
        "{\"class5-math\":\"completed\"}"
    );
}

#[test]
fn test_malformed_files_fall_back_to_defaults() {
    let temp_dir = TempDir::new().unwrap();
    let dir = state_dir(&temp_dir);
    fs::create_dir_all(&dir).unwrap();

    fs::write(dir.join("language.json"), "\"fr\"").unwrap();
    fs::write(dir.join("theme.json"), "midnight").unwrap();
    fs::write(dir.join("bookmarks.json"), "{}").unwrap();
    fs::write(dir.join("recentlyViewed.json"), "\"oops\"").unwrap();
    fs::write(dir.join("progress.json"), "[1, 2, 3]").unwrap();

    let manager = StateManager::with_storage(StorageManager::new(&dir).unwrap());
    let state = manager.snapshot();

    assert_eq!(state.language, Language::English);
    assert_eq!(state.theme, ThemeMode::Light);
    assert!(state.bookmarks.is_empty());
    assert!(state.recently_viewed.is_empty());
    assert!(state.progress.is_empty());
}

#[test]
fn test_partial_corruption_keeps_healthy_pieces() {
    let temp_dir = TempDir::new().unwrap();
    let dir = state_dir(&temp_dir);

    {
        let manager = StateManager::with_storage(StorageManager::new(&dir).unwrap());
        manager.toggle_theme();
        manager.add_bookmark("class5-math");
    }

    fs::write(dir.join("theme.json"), "???").unwrap();

    let reloaded = StateManager::with_storage(StorageManager::new(&dir).unwrap());
    let state = reloaded.snapshot();

    assert_eq!(state.theme, ThemeMode::Light);
    assert!(state.is_bookmarked("class5-math"));
}

#[test]
fn test_unwritable_storage_degrades_gracefully() {
    let temp_dir = TempDir::new().unwrap();
    let dir = state_dir(&temp_dir);
    let storage = StorageManager::new(&dir).unwrap();

    // Replace the state directory with a plain file so writes fail
    fs::remove_dir_all(&dir).unwrap();
    fs::write(&dir, "not a directory").unwrap();

    let manager = StateManager::with_storage(storage);
    let changes = manager.add_bookmark("class5-math");

    // The mutation still applies in memory and still emits its event
    assert_eq!(changes.len(), 1);
    assert!(manager.is_bookmarked("class5-math"));
}
