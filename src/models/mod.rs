//! Data models for the Pathshala application.
//!
//! This module contains the core data structures used throughout the
//! application:
//! - [`AppState`]: the central state container holding language, theme,
//!   bookmarks, the recently-viewed list, and per-guide progress
//! - [`Catalog`]: the static class → subject → guide tree plus the quote
//!   list, loaded once from `guides.json` and never mutated
//! - [`UserConfig`]: user settings loaded from `Pathshala Settings.yaml`
//!
//! # Architecture Note
//!
//! `AppState` methods are pure transitions with no I/O; persistence and
//! change notification are layered on top by
//! [`StateManager`](crate::state::StateManager), which wraps the state in
//! `Arc<RwLock<>>` and mirrors every mutation to
//! [`StorageManager`](crate::storage::StorageManager).

pub mod app_state;
pub mod catalog;
pub mod config;

pub use app_state::{AppState, Language, ProgressStatus, RECENTLY_VIEWED_LIMIT, ThemeMode};
pub use catalog::{Catalog, ClassEntry, Quote, Subject};
pub use config::{Settings, UserConfig};
