// Pathshala - Bilingual study-guide catalog browser
//
// This is the library crate containing the core business logic and data
// structures. The binary crate (main.rs) provides the CLI entry point.

pub mod config;
pub mod logging;
pub mod models;
pub mod services;
pub mod state;
pub mod storage;
pub mod ui;

// Re-export commonly used types for convenience
pub use config::ConfigManager;
pub use models::{AppState, Catalog, Language, ProgressStatus, ThemeMode, UserConfig};
pub use services::{CatalogError, CatalogService};
pub use state::{StateChange, StateManager};
pub use storage::StorageManager;

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name
pub const APP_NAME: &str = env!("CARGO_PKG_NAME");
