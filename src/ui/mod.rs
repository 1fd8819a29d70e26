//! View layer: CLI surface over the store and catalog.
//!
//! Each invocation reads the store and catalog, renders one view (or
//! applies one mutation), and prints the resulting notifications. The
//! commands mirror the browsing surface: home, class, guide, bookmarks,
//! recently viewed, plus the mutation and toggle commands.

pub mod cli;
pub mod controller;

pub use cli::{Cli, Command, ProgressStatusArg};
pub use controller::CliController;
