//! Pathshala - Bilingual study-guide catalog browser
//!
//! Main entry point for the CLI application.
//!
//! # Execution Flow
//!
//! 1. Parse the command line
//! 2. Initialize logging → logs/pathshala.<date>
//! 3. Load `Pathshala Settings.yaml` from the data directory (defaults
//!    when missing)
//! 4. Hydrate [`StateManager`] from the state directory (each persisted
//!    piece falls back to its default when missing or malformed)
//! 5. Load the catalog document
//! 6. Dispatch the command through [`CliController`] and exit with its
//!    code (lookup misses render the not-found view and exit non-zero)
//!
//! # Data layout
//!
//! Expected under the data directory (default `Pathshala Data/`):
//! - `Pathshala Settings.yaml`: catalog path, state dir, log dir, debug
//! - `state/`: `language.json`, `theme.json`, `bookmarks.json`,
//!   `recentlyViewed.json`, `progress.json`

use anyhow::Result;
use camino::Utf8PathBuf;
use clap::Parser;
use pathshala::ui::{Cli, CliController};
use pathshala::{APP_NAME, CatalogService, ConfigManager, StateManager, StorageManager, VERSION};
use std::process::ExitCode;
use std::sync::Arc;

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(&cli) {
        Ok(code) => ExitCode::from(code as u8),
        Err(error) => {
            eprintln!("error: {error:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<i32> {
    let config_manager = ConfigManager::new(&cli.data_dir)?;
    let user_config = config_manager.load_user_config()?;
    let settings = &user_config.settings;

    let _log_guard = pathshala::logging::setup_logging(
        &settings.log_dir,
        APP_NAME,
        cli.debug || settings.debug_mode,
        cli.verbose,
    )?;

    tracing::info!("Starting {} v{}", APP_NAME, VERSION);

    let storage = StorageManager::new(Utf8PathBuf::from(settings.state_dir.as_str()))?;
    let state_manager = Arc::new(StateManager::with_storage(storage));

    let catalog_path = cli.catalog.as_deref().unwrap_or(&settings.catalog_file);
    let catalog = CatalogService::load(Utf8PathBuf::from(catalog_path))?;

    let controller = CliController::new(state_manager, catalog);
    let code = controller.run(&cli.command)?;

    tracing::info!("Command finished with exit code {}", code);
    Ok(code)
}
