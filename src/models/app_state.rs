use indexmap::{IndexMap, IndexSet};
use serde::{Deserialize, Serialize};

/// Maximum number of entries kept in the recently-viewed list.
///
/// Re-viewing a guide moves its id back to the front; once the list is
/// full, the oldest entry is dropped. The cap is part of the persisted
/// format: `recentlyViewed.json` never holds more than this many ids.
pub const RECENTLY_VIEWED_LIMIT: usize = 5;

/// Interface language.
///
/// Serialized spellings (`en` / `bn`) match the persisted `language.json`
/// value and the bilingual fields of the catalog document.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Language {
    #[default]
    #[serde(rename = "en")]
    English,
    #[serde(rename = "bn")]
    Bengali,
}

impl Language {
    /// The other language. Toggling twice returns the original value.
    pub fn toggled(self) -> Self {
        match self {
            Language::English => Language::Bengali,
            Language::Bengali => Language::English,
        }
    }

    /// Pick the variant of a bilingual string pair for this language.
    pub fn pick<'a>(self, en: &'a str, bn: &'a str) -> &'a str {
        match self {
            Language::English => en,
            Language::Bengali => bn,
        }
    }
}

/// Display theme. Serialized as `light` / `dark` in `theme.json`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }
}

/// Per-guide progress status.
///
/// A guide with no entry in the progress map reads as [`NotStarted`].
/// Serialized spellings (`not-started`, `in-progress`, `completed`)
/// match `progress.json`.
///
/// [`NotStarted`]: ProgressStatus::NotStarted
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum ProgressStatus {
    #[default]
    NotStarted,
    InProgress,
    Completed,
}

impl ProgressStatus {
    /// The next status in the click cycle:
    /// not-started → in-progress → completed → not-started.
    pub fn cycled(self) -> Self {
        match self {
            ProgressStatus::NotStarted => ProgressStatus::InProgress,
            ProgressStatus::InProgress => ProgressStatus::Completed,
            ProgressStatus::Completed => ProgressStatus::NotStarted,
        }
    }

    /// Localized label, as shown in guide listings and status toasts.
    pub fn label(self, language: Language) -> &'static str {
        match (self, language) {
            (ProgressStatus::NotStarted, Language::English) => "Not Started",
            (ProgressStatus::NotStarted, Language::Bengali) => "শুরু হয়নি",
            (ProgressStatus::InProgress, Language::English) => "In Progress",
            (ProgressStatus::InProgress, Language::Bengali) => "চলমান",
            (ProgressStatus::Completed, Language::English) => "Completed",
            (ProgressStatus::Completed, Language::Bengali) => "সম্পন্ন",
        }
    }
}

/// Single source of truth for user preferences and per-guide state.
///
/// Five independent pieces: language, theme, bookmark set, recently-viewed
/// list, and progress map. Each piece is persisted separately by
/// [`StorageManager`](crate::storage::StorageManager) and defaults when
/// its stored value is missing or malformed.
///
/// The methods here are pure transitions with no I/O. Persistence and
/// change notification live in [`StateManager`](crate::state::StateManager),
/// which wraps this struct in `Arc<RwLock<AppState>>`; do not mutate an
/// `AppState` owned by a manager directly.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AppState {
    pub language: Language,
    pub theme: ThemeMode,

    /// Bookmarked guide ids. No duplicates; insertion order is kept only
    /// for stable rendering, membership is what matters.
    pub bookmarks: IndexSet<String>,

    /// Most-recent-first, de-duplicated, capped at
    /// [`RECENTLY_VIEWED_LIMIT`] entries.
    pub recently_viewed: Vec<String>,

    /// Guide id → progress status. Absent key means not-started.
    pub progress: IndexMap<String, ProgressStatus>,
}

impl AppState {
    /// Flip the interface language. Returns the new value.
    pub fn toggle_language(&mut self) -> Language {
        self.language = self.language.toggled();
        self.language
    }

    /// Flip the display theme. Returns the new value.
    pub fn toggle_theme(&mut self) -> ThemeMode {
        self.theme = self.theme.toggled();
        self.theme
    }

    /// Insert a bookmark. Returns `true` only when the id was actually
    /// new; re-adding an existing bookmark is a silent no-op.
    pub fn add_bookmark(&mut self, id: &str) -> bool {
        self.bookmarks.insert(id.to_string())
    }

    /// Remove a bookmark. Returns `true` when something was removed.
    pub fn remove_bookmark(&mut self, id: &str) -> bool {
        self.bookmarks.shift_remove(id)
    }

    pub fn is_bookmarked(&self, id: &str) -> bool {
        self.bookmarks.contains(id)
    }

    /// Move an id to the front of the recently-viewed list, dropping any
    /// prior occurrence, then truncate to [`RECENTLY_VIEWED_LIMIT`].
    pub fn touch_recently_viewed(&mut self, id: &str) {
        self.recently_viewed.retain(|seen| seen != id);
        self.recently_viewed.insert(0, id.to_string());
        self.recently_viewed.truncate(RECENTLY_VIEWED_LIMIT);
    }

    /// Set the progress status for a guide id.
    pub fn set_progress(&mut self, id: &str, status: ProgressStatus) {
        self.progress.insert(id.to_string(), status);
    }

    /// Progress for a guide id, defaulting to not-started.
    pub fn progress_for(&self, id: &str) -> ProgressStatus {
        self.progress.get(id).copied().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_state() {
        let state = AppState::default();
        assert_eq!(state.language, Language::English);
        assert_eq!(state.theme, ThemeMode::Light);
        assert!(state.bookmarks.is_empty());
        assert!(state.recently_viewed.is_empty());
        assert!(state.progress.is_empty());
    }

    #[test]
    fn test_toggle_language_round_trip() {
        let mut state = AppState::default();
        assert_eq!(state.toggle_language(), Language::Bengali);
        assert_eq!(state.toggle_language(), Language::English);
    }

    #[test]
    fn test_toggle_theme_round_trip() {
        let mut state = AppState::default();
        assert_eq!(state.toggle_theme(), ThemeMode::Dark);
        assert_eq!(state.toggle_theme(), ThemeMode::Light);
    }

    #[test]
    fn test_add_bookmark_idempotent() {
        let mut state = AppState::default();
        assert!(state.add_bookmark("math-101"));
        assert!(!state.add_bookmark("math-101"));
        assert_eq!(state.bookmarks.len(), 1);
        assert!(state.is_bookmarked("math-101"));
    }

    #[test]
    fn test_remove_bookmark() {
        let mut state = AppState::default();
        state.add_bookmark("math-101");
        assert!(state.remove_bookmark("math-101"));
        assert!(!state.is_bookmarked("math-101"));
        // Removing again is a no-op
        assert!(!state.remove_bookmark("math-101"));
    }

    #[test]
    fn test_recently_viewed_moves_to_front() {
        let mut state = AppState::default();
        state.touch_recently_viewed("a");
        state.touch_recently_viewed("b");
        state.touch_recently_viewed("a");

        assert_eq!(state.recently_viewed, vec!["a", "b"]);
    }

    #[test]
    fn test_recently_viewed_cap() {
        let mut state = AppState::default();
        for id in ["a", "b", "c", "d", "e", "f"] {
            state.touch_recently_viewed(id);
        }

        assert_eq!(state.recently_viewed, vec!["f", "e", "d", "c", "b"]);
    }

    #[test]
    fn test_progress_defaults_to_not_started() {
        let state = AppState::default();
        assert_eq!(state.progress_for("never-seen"), ProgressStatus::NotStarted);
    }

    #[test]
    fn test_set_progress() {
        let mut state = AppState::default();
        state.set_progress("math-101", ProgressStatus::Completed);
        assert_eq!(state.progress_for("math-101"), ProgressStatus::Completed);

        state.set_progress("math-101", ProgressStatus::InProgress);
        assert_eq!(state.progress_for("math-101"), ProgressStatus::InProgress);
        assert_eq!(state.progress.len(), 1);
    }

    #[test]
    fn test_progress_cycle() {
        let status = ProgressStatus::NotStarted;
        let status = status.cycled();
        assert_eq!(status, ProgressStatus::InProgress);
        let status = status.cycled();
        assert_eq!(status, ProgressStatus::Completed);
        assert_eq!(status.cycled(), ProgressStatus::NotStarted);
    }

    #[test]
    fn test_serde_spellings() {
        assert_eq!(serde_json::to_string(&Language::Bengali).unwrap(), "\"bn\"");
        assert_eq!(serde_json::to_string(&ThemeMode::Dark).unwrap(), "\"dark\"");
        assert_eq!(
            serde_json::to_string(&ProgressStatus::InProgress).unwrap(),
            "\"in-progress\""
        );

        let status: ProgressStatus = serde_json::from_str("\"not-started\"").unwrap();
        assert_eq!(status, ProgressStatus::NotStarted);
    }

    #[test]
    fn test_labels_follow_language() {
        assert_eq!(
            ProgressStatus::Completed.label(Language::English),
            "Completed"
        );
        assert_eq!(ProgressStatus::Completed.label(Language::Bengali), "সম্পন্ন");
    }
}
