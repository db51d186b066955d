//! Integration tests for configuration management

use study_bloom::config::{Config, ConfigOverrides, StorageBackend};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Helper to create a temporary config directory
fn setup_temp_config() -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_file = temp_dir.path().join("nested").join("config.toml");
    (temp_dir, config_file)
}

#[test]
fn test_config_from_defaults() {
    let config = Config::from_defaults();

    assert!(
        !config.logging.level.is_empty(),
        "Default log level should not be empty"
    );
    assert!(
        !config.storage.dir.is_empty(),
        "Default store dir should not be empty"
    );
    assert!(
        !config.paths.reports_dir.is_empty(),
        "Default reports_dir should not be empty"
    );
    assert_eq!(config.storage.backend, StorageBackend::File);
    assert!(config.reminders.enabled);
    assert_eq!(config.reminders.streak_hour, 19);
}

#[test]
fn test_defaults_have_no_unexpanded_variables() {
    let config = Config::from_defaults();
    assert!(!config.logging.file.contains("$STUDY_BLOOM"));
    assert!(!config.storage.dir.contains("$STUDY_BLOOM"));
    assert!(!config.paths.reports_dir.contains("$STUDY_BLOOM"));
}

#[test]
fn test_config_from_toml_basic() {
    let toml_str = r#"
[logging]
level = "info"
file = "/tmp/test.log"
verbose = true

[storage]
backend = "memory"
dir = "/tmp/bloom-store"

[reminders]
enabled = false
streak_hour = 8

[paths]
reports_dir = "./reports"
"#;

    let config = Config::from_toml(toml_str).expect("Failed to parse TOML");

    assert_eq!(config.logging.level, "info");
    assert_eq!(config.logging.file, "/tmp/test.log");
    assert!(config.logging.verbose);
    assert_eq!(config.storage.backend, StorageBackend::Memory);
    assert_eq!(config.storage.dir, "/tmp/bloom-store");
    assert!(!config.reminders.enabled);
    assert_eq!(config.reminders.streak_hour, 8);
    assert_eq!(config.paths.reports_dir, "./reports");
}

#[test]
fn test_config_from_toml_partial() {
    let toml_str = r#"
[logging]
level = "error"

[reminders]
streak_hour = 21
"#;

    let config = Config::from_toml(toml_str).expect("Failed to parse partial TOML");

    assert_eq!(config.logging.level, "error");
    assert_eq!(config.logging.file, "");
    assert!(!config.logging.verbose);
    assert_eq!(config.storage.backend, StorageBackend::File);
    assert!(config.reminders.enabled);
    assert_eq!(config.reminders.streak_hour, 21);
}

#[test]
fn test_config_rejects_unknown_backend() {
    let toml_str = r#"
[storage]
backend = "sqlite"
"#;
    assert!(Config::from_toml(toml_str).is_err());
}

#[test]
fn test_config_variable_expansion() {
    let toml_str = r#"
[logging]
file = "$STUDY_BLOOM/test.log"

[storage]
dir = "$STUDY_BLOOM/store"
"#;

    let config = Config::from_toml(toml_str).expect("Failed to parse TOML with variables");

    assert!(config.logging.file.contains("studybloom"));
    assert!(!config.logging.file.contains("$STUDY_BLOOM"));
    assert!(config.storage.dir.ends_with("store"));
    assert!(!config.storage.dir.contains("$STUDY_BLOOM"));
}

#[test]
fn test_config_get_set() {
    let mut config = Config::from_defaults();

    assert!(config.get("level").is_some());

    config.set("level", "debug").expect("Failed to set level");
    assert_eq!(config.get("level").unwrap(), "debug");

    config
        .set("verbose", "true")
        .expect("Failed to set verbose");
    assert_eq!(config.get("verbose").unwrap(), "true");
    assert!(config.logging.verbose);

    config
        .set("store-dir", "/tmp/other")
        .expect("Failed to set store dir");
    assert_eq!(config.get("store_dir").unwrap(), "/tmp/other");

    config
        .set("reminders", "false")
        .expect("Failed to set reminders");
    assert!(!config.reminders.enabled);

    assert!(config.get("unknown_key").is_none());
    assert!(config.set("unknown_key", "value").is_err());
    assert!(config.set("backend", "cloud").is_err());
}

#[test]
fn test_config_unset() {
    let mut config = Config::from_defaults();
    let defaults = Config::from_defaults();

    config.set("level", "error").expect("Failed to set level");
    config.set("streak_hour", "6").expect("Failed to set hour");

    config
        .unset("level", &defaults)
        .expect("Failed to unset level");
    config
        .unset("streak_hour", &defaults)
        .expect("Failed to unset hour");
    assert_eq!(config.logging.level, defaults.logging.level);
    assert_eq!(config.reminders.streak_hour, defaults.reminders.streak_hour);
    assert!(config.unset("nope", &defaults).is_err());
}

#[test]
fn test_config_save_and_load() {
    let (_temp_dir, config_file) = setup_temp_config();

    let mut config = Config::from_defaults();
    config.set("level", "info").expect("Failed to set level");
    config.set("backend", "memory").expect("Failed to set backend");
    config.save_to(&config_file).expect("Failed to save config");

    let loaded = Config::load_from(&config_file);
    assert_eq!(loaded.logging.level, "info");
    assert_eq!(loaded.storage.backend, StorageBackend::Memory);
}

#[test]
fn test_first_load_writes_defaults() {
    let (_temp_dir, config_file) = setup_temp_config();
    assert!(!config_file.exists());

    let config = Config::load_from(&config_file);
    assert!(config_file.exists());
    assert_eq!(config.logging.level, Config::from_defaults().logging.level);
}

#[test]
fn test_load_merges_and_resaves_missing_fields() {
    let (_temp_dir, config_file) = setup_temp_config();
    fs::create_dir_all(config_file.parent().unwrap()).unwrap();
    fs::write(&config_file, "[logging]\nlevel = \"error\"\n").unwrap();

    let config = Config::load_from(&config_file);
    assert_eq!(config.logging.level, "error");
    assert!(!config.storage.dir.is_empty());

    let saved = fs::read_to_string(&config_file).unwrap();
    assert!(saved.contains("[storage]"));
    assert!(saved.contains("reports_dir"));
}

#[test]
fn test_load_falls_back_on_garbage() {
    let (_temp_dir, config_file) = setup_temp_config();
    fs::create_dir_all(config_file.parent().unwrap()).unwrap();
    fs::write(&config_file, "this is = = not toml").unwrap();

    let config = Config::load_from(&config_file);
    assert_eq!(config.logging.level, Config::from_defaults().logging.level);
}

#[test]
fn test_reset_at_removes_file() {
    let (_temp_dir, config_file) = setup_temp_config();
    Config::from_defaults().save_to(&config_file).unwrap();
    Config::reset_at(&config_file).unwrap();
    assert!(!config_file.exists());
    Config::reset_at(&config_file).unwrap();
}

#[test]
fn test_config_overrides_apply() {
    let mut config = Config::from_defaults();

    let overrides = ConfigOverrides {
        level: Some("error".to_string()),
        file: Some("/custom/path.log".to_string()),
        verbose: Some(true),
        backend: Some(StorageBackend::Memory),
        store_dir: Some("./custom_store".to_string()),
        reports_dir: Some("./custom_reports".to_string()),
    };

    config.apply_overrides(&overrides);

    assert_eq!(config.logging.level, "error");
    assert_eq!(config.logging.file, "/custom/path.log");
    assert!(config.logging.verbose);
    assert_eq!(config.storage.backend, StorageBackend::Memory);
    assert_eq!(config.storage.dir, "./custom_store");
    assert_eq!(config.paths.reports_dir, "./custom_reports");
}

#[test]
fn test_config_overrides_partial() {
    let mut config = Config::from_defaults();
    let before = config.storage.dir.clone();

    let overrides = ConfigOverrides {
        level: Some("debug".to_string()),
        ..Default::default()
    };

    config.apply_overrides(&overrides);

    assert_eq!(config.logging.level, "debug");
    assert_eq!(config.storage.dir, before);
}

#[test]
fn test_config_display_format() {
    let config = Config::from_defaults();
    let display_str = format!("{config}");

    assert!(display_str.contains("[logging]"));
    assert!(display_str.contains("[storage]"));
    assert!(display_str.contains("[reminders]"));
    assert!(display_str.contains("[paths]"));
    assert!(display_str.contains("streak_hour = 19"));
    assert!(display_str.contains("backend = \"file\""));
}

#[test]
fn test_merge_defaults_adds_missing_fields() {
    let toml_str = r#"
[logging]
level = "error"
file = ""
verbose = false

[storage]
dir = ""

[paths]
reports_dir = ""
"#;

    let mut config = Config::from_toml(toml_str).expect("Failed to parse minimal config");
    let defaults = Config::from_defaults();

    assert!(
        config.merge_defaults(&defaults),
        "merge_defaults should return true when fields are added"
    );
    assert_eq!(config.storage.dir, defaults.storage.dir);
    assert!(!config.merge_defaults(&defaults));
}

#[test]
fn test_merge_defaults_preserves_existing() {
    let toml_str = r#"
[logging]
level = "error"
file = "/my/custom/path.log"
verbose = false
"#;

    let mut config = Config::from_toml(toml_str).expect("Failed to parse config");
    let defaults = Config::from_defaults();

    config.merge_defaults(&defaults);

    assert_eq!(config.logging.level, "error");
    assert_eq!(config.logging.file, "/my/custom/path.log");
}

#[test]
fn test_get_studybloom_dir() {
    let dir = Config::get_studybloom_dir();

    assert!(dir.to_string_lossy().contains("studybloom"));
    assert_ne!(dir, PathBuf::from("."));
}

#[test]
fn test_get_config_file_path() {
    let path = Config::get_config_file_path();

    let path_str = path.to_string_lossy();
    assert!(path_str.ends_with("config.toml") || path_str.ends_with("dconfig.toml"));
}
