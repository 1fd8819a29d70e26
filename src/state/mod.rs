// State management module
//
// This module provides the StateManager which wraps AppState with
// thread-safe access using Arc<RwLock<T>>, emits change events for the
// view layer, and mirrors every mutation to local storage.

use crate::models::{AppState, Language, ProgressStatus, ThemeMode};
use crate::storage::StorageManager;
use std::sync::{Arc, RwLock};
use tokio::sync::broadcast;

/// Change events emitted when state is modified.
///
/// These events are emitted to notify interested parties (primarily the
/// view layer, which turns them into user-visible notifications) about
/// state changes without requiring them to poll the state.
#[derive(Clone, Debug, PartialEq)]
pub enum StateChange {
    /// Interface language was toggled
    LanguageChanged { language: Language },

    /// Display theme was toggled
    ThemeChanged { theme: ThemeMode },

    /// A guide id was newly bookmarked
    BookmarkAdded { id: String },

    /// A guide id was removed from the bookmarks
    BookmarkRemoved { id: String },

    /// The recently-viewed list changed
    RecentlyViewedChanged { ids: Vec<String> },

    /// Progress status for a guide changed
    ProgressChanged { id: String, status: ProgressStatus },
}

/// Thread-safe state manager with event emission and persistence.
///
/// This is the central state management component that:
/// - Provides shared access to [`AppState`] via `Arc<RwLock<T>>`
/// - Detects state changes by diffing old and new state and emits
///   [`StateChange`] events over a tokio broadcast channel
/// - Persists exactly the mutated pieces through [`StorageManager`],
///   swallowing storage failures so mutations never fail for callers
///
/// # Usage
///
/// Always use `StateManager` instead of mutating [`AppState`] directly:
/// - [`read()`](Self::read) for reading state without holding locks
/// - [`update()`](Self::update) for mutations with automatic event
///   emission and persistence
/// - [`subscribe()`](Self::subscribe) for listening to state changes
///
/// The operation wrappers ([`toggle_language()`](Self::toggle_language),
/// [`add_bookmark()`](Self::add_bookmark), ...) cover the full store
/// surface; `update()` is the escape hatch they are built on.
pub struct StateManager {
    /// The application state protected by RwLock for shared access
    state: Arc<RwLock<AppState>>,

    /// Broadcast channel for emitting state change events.
    /// Multiple subscribers can listen for state changes.
    state_tx: broadcast::Sender<StateChange>,

    /// Durable storage mirror. `None` for purely in-memory managers
    /// (tests, dry runs).
    storage: Option<StorageManager>,
}

impl StateManager {
    /// Create a StateManager with default state and no storage mirror.
    pub fn new() -> Self {
        let (state_tx, _) = broadcast::channel(100);
        Self {
            state: Arc::new(RwLock::new(AppState::default())),
            state_tx,
            storage: None,
        }
    }

    /// Create a StateManager hydrated from the given storage.
    ///
    /// Each persisted piece that is missing or malformed falls back to
    /// its default; hydration emits no events and writes nothing back.
    pub fn with_storage(storage: StorageManager) -> Self {
        let initial = storage.load_state();
        let (state_tx, _) = broadcast::channel(100);

        tracing::info!(
            "State hydrated: language={:?}, theme={:?}, bookmarks={}, recently_viewed={}, progress={}",
            initial.language,
            initial.theme,
            initial.bookmarks.len(),
            initial.recently_viewed.len(),
            initial.progress.len()
        );

        Self {
            state: Arc::new(RwLock::new(initial)),
            state_tx,
            storage: Some(storage),
        }
    }

    /// Get a read-only snapshot of the current state.
    ///
    /// This clones the entire state, so it's safe to use without holding
    /// locks. For checking individual fields, prefer `read()` with a
    /// closure.
    pub fn snapshot(&self) -> AppState {
        self.state.read().unwrap().clone()
    }

    /// Execute a function with read access to the state.
    pub fn read<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&AppState) -> R,
    {
        let state = self.state.read().unwrap();
        f(&state)
    }

    /// Update the state, emit change events, and persist what changed.
    ///
    /// This is the primary way to modify state. It:
    /// 1. Captures the old state
    /// 2. Applies the update function
    /// 3. Diffs old and new state into [`StateChange`] events
    /// 4. Emits the events and persists the affected pieces
    ///
    /// # Returns
    /// The StateChange events that were emitted. A no-op update (for
    /// example re-adding an existing bookmark) returns an empty vector
    /// and persists nothing.
    pub fn update<F>(&self, update_fn: F) -> Vec<StateChange>
    where
        F: FnOnce(&mut AppState),
    {
        let mut state = self.state.write().unwrap();
        let old_state = state.clone();

        update_fn(&mut state);

        let changes = detect_changes(&old_state, &state);

        self.persist_changes(&state, &changes);

        for change in &changes {
            // Ignore send errors - it's OK if no one is listening
            let _ = self.state_tx.send(change.clone());
        }

        changes
    }

    /// Subscribe to state change events.
    ///
    /// Returns a receiver that will get notified of all future state
    /// changes. Multiple subscribers can listen simultaneously.
    pub fn subscribe(&self) -> broadcast::Receiver<StateChange> {
        self.state_tx.subscribe()
    }

    // Store operations

    /// Flip the interface language between English and Bengali.
    pub fn toggle_language(&self) -> Vec<StateChange> {
        self.update(|state| {
            state.toggle_language();
        })
    }

    /// Flip the display theme between light and dark.
    pub fn toggle_theme(&self) -> Vec<StateChange> {
        self.update(|state| {
            state.toggle_theme();
        })
    }

    /// Bookmark a guide id. Idempotent-silent: re-adding an existing
    /// bookmark emits nothing and persists nothing.
    pub fn add_bookmark(&self, id: &str) -> Vec<StateChange> {
        self.update(|state| {
            state.add_bookmark(id);
        })
    }

    /// Remove a bookmark. Removing an absent id is a silent no-op.
    pub fn remove_bookmark(&self, id: &str) -> Vec<StateChange> {
        self.update(|state| {
            state.remove_bookmark(id);
        })
    }

    /// Whether a guide id is currently bookmarked.
    pub fn is_bookmarked(&self, id: &str) -> bool {
        self.read(|state| state.is_bookmarked(id))
    }

    /// Record a guide visit: move the id to the front of the
    /// recently-viewed list, de-duplicated and capped at 5.
    pub fn add_to_recently_viewed(&self, id: &str) -> Vec<StateChange> {
        self.update(|state| {
            state.touch_recently_viewed(id);
        })
    }

    /// Set progress for a guide id to the given status.
    pub fn update_progress(&self, id: &str, status: ProgressStatus) -> Vec<StateChange> {
        self.update(|state| {
            state.set_progress(id, status);
        })
    }

    /// Progress for a guide id; an id never written reads not-started.
    pub fn progress_for(&self, id: &str) -> ProgressStatus {
        self.read(|state| state.progress_for(id))
    }

    /// Mirror the pieces named by `changes` to storage. Failures are
    /// logged and swallowed: in-memory state stays correct for the
    /// session even when the disk is unavailable.
    fn persist_changes(&self, state: &AppState, changes: &[StateChange]) {
        let Some(storage) = &self.storage else {
            return;
        };

        for change in changes {
            let result = match change {
                StateChange::LanguageChanged { language } => storage.persist_language(*language),
                StateChange::ThemeChanged { theme } => storage.persist_theme(*theme),
                StateChange::BookmarkAdded { .. } | StateChange::BookmarkRemoved { .. } => {
                    storage.persist_bookmarks(&state.bookmarks)
                }
                StateChange::RecentlyViewedChanged { .. } => {
                    storage.persist_recently_viewed(&state.recently_viewed)
                }
                StateChange::ProgressChanged { .. } => storage.persist_progress(&state.progress),
            };

            if let Err(error) = result {
                tracing::warn!("Failed to persist state change {:?}: {:#}", change, error);
            }
        }
    }
}

/// Diff two states into the events that describe the transition.
fn detect_changes(old: &AppState, new: &AppState) -> Vec<StateChange> {
    let mut changes = Vec::new();

    if old.language != new.language {
        changes.push(StateChange::LanguageChanged {
            language: new.language,
        });
    }

    if old.theme != new.theme {
        changes.push(StateChange::ThemeChanged { theme: new.theme });
    }

    for id in new.bookmarks.difference(&old.bookmarks) {
        changes.push(StateChange::BookmarkAdded { id: id.clone() });
    }

    for id in old.bookmarks.difference(&new.bookmarks) {
        changes.push(StateChange::BookmarkRemoved { id: id.clone() });
    }

    if old.recently_viewed != new.recently_viewed {
        changes.push(StateChange::RecentlyViewedChanged {
            ids: new.recently_viewed.clone(),
        });
    }

    for (id, status) in &new.progress {
        if old.progress.get(id) != Some(status) {
            changes.push(StateChange::ProgressChanged {
                id: id.clone(),
                status: *status,
            });
        }
    }

    changes
}

impl Default for StateManager {
    fn default() -> Self {
        Self::new()
    }
}

// Make StateManager cloneable for sharing across the view layer
impl Clone for StateManager {
    fn clone(&self) -> Self {
        Self {
            state: Arc::clone(&self.state),
            state_tx: self.state_tx.clone(),
            storage: self.storage.clone(),
        }
    }
}
