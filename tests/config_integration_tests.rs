//! Integration tests for the settings file
//!
//! These tests exercise ConfigManager end to end: defaults for a fresh
//! data directory, round-tripping the YAML file, and tolerating a
//! partially specified file.

use camino::Utf8PathBuf;
use pathshala::{ConfigManager, UserConfig};
use std::fs;
use tempfile::TempDir;

fn create_test_config_manager() -> (ConfigManager, TempDir) {
    let temp_dir = TempDir::new().unwrap();
    let config_path = Utf8PathBuf::try_from(temp_dir.path().to_path_buf()).unwrap();
    let manager = ConfigManager::new(&config_path).unwrap();
    (manager, temp_dir)
}

#[test]
fn test_fresh_directory_uses_defaults() {
    let (manager, _temp_dir) = create_test_config_manager();

    let config = manager.load_user_config().unwrap();
    assert_eq!(config.settings.catalog_file, "data/guides.json");
    assert_eq!(config.settings.state_dir, "Pathshala Data/state");
    assert_eq!(config.settings.log_dir, "logs");
    assert!(!config.settings.debug_mode);
}

#[test]
fn test_settings_round_trip() {
    let (manager, _temp_dir) = create_test_config_manager();

    let mut config = UserConfig::default();
    config.settings.catalog_file = "/srv/catalog/guides.json".to_string();
    config.settings.state_dir = "/var/lib/pathshala".to_string();
    config.settings.debug_mode = true;

    manager.save_user_config(&config).unwrap();
    let loaded = manager.load_user_config().unwrap();

    assert_eq!(loaded.settings.catalog_file, "/srv/catalog/guides.json");
    assert_eq!(loaded.settings.state_dir, "/var/lib/pathshala");
    assert!(loaded.settings.debug_mode);
}

#[test]
fn test_partial_settings_file_fills_defaults() {
    let (manager, _temp_dir) = create_test_config_manager();

    fs::write(
        manager.config_dir().join("Pathshala Settings.yaml"),
        "Pathshala_Settings:\n  Debug Mode: true\n",
    )
    .unwrap();

    let config = manager.load_user_config().unwrap();
    assert!(config.settings.debug_mode);
    assert_eq!(config.settings.catalog_file, "data/guides.json");
    assert_eq!(config.settings.log_dir, "logs");
}

#[test]
fn test_invalid_settings_file_is_an_error() {
    let (manager, _temp_dir) = create_test_config_manager();

    fs::write(
        manager.config_dir().join("Pathshala Settings.yaml"),
        "Pathshala_Settings: [not, a, mapping]\n",
    )
    .unwrap();

    assert!(manager.load_user_config().is_err());
}
