//! Configuration module for `StudyBloom`

use bloom_logger::Level;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Default CLI configuration loaded based on build profile.
/// Uses release defaults in release mode, debug defaults in debug mode.
#[cfg(not(debug_assertions))]
const CONFIG_DEFAULTS: &str = include_str!("../assets/DefaultCLIConfigRelease.toml");

#[cfg(debug_assertions)]
const CONFIG_DEFAULTS: &str = include_str!("../assets/DefaultCLIConfigDebug.toml");

#[cfg(not(debug_assertions))]
const CONFIG_FILE_NAME: &str = "config.toml";

#[cfg(debug_assertions)]
const CONFIG_FILE_NAME: &str = "dconfig.toml";

/// Variable expanded to the config directory inside string values
const DIR_VARIABLE: &str = "$STUDY_BLOOM";

/// Logging configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (error, warn, info, debug)
    #[serde(default)]
    pub level: String,
    /// Log file path
    #[serde(default)]
    pub file: String,
    /// Enable verbose output
    #[serde(default)]
    pub verbose: bool,
}

/// Where plans and reminders are kept
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    /// One file per key under `storage.dir`
    #[default]
    File,
    /// Process memory only; nothing survives the run
    Memory,
}

impl fmt::Display for StorageBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::File => "file",
            Self::Memory => "memory",
        })
    }
}

impl FromStr for StorageBackend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "file" => Ok(Self::File),
            "memory" => Ok(Self::Memory),
            _ => Err(format!(
                "Invalid storage backend: '{s}' (expected file or memory)"
            )),
        }
    }
}

/// Storage configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Backend kind
    #[serde(default)]
    pub backend: StorageBackend,
    /// Directory used by the file backend
    #[serde(default)]
    pub dir: String,
}

/// Reminder configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RemindersConfig {
    /// Whether reminders may be scheduled at all
    pub enabled: bool,
    /// Hour of the next day the streak reminder fires (0-23)
    pub streak_hour: u32,
}

impl Default for RemindersConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            streak_hour: crate::core::reminders::DEFAULT_STREAK_HOUR,
        }
    }
}

/// Paths configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PathsConfig {
    /// Directory for exported plans
    #[serde(default)]
    pub reports_dir: String,
}

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Logging settings
    #[serde(default)]
    pub logging: LoggingConfig,
    /// Storage settings
    #[serde(default)]
    pub storage: StorageConfig,
    /// Reminder settings
    #[serde(default)]
    pub reminders: RemindersConfig,
    /// Path settings
    #[serde(default)]
    pub paths: PathsConfig,
}

/// Optional CLI overrides for configuration values
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    /// Override logging level
    pub level: Option<String>,
    /// Override log file path
    pub file: Option<String>,
    /// Override verbose flag
    pub verbose: Option<bool>,
    /// Override storage backend
    pub backend: Option<StorageBackend>,
    /// Override storage directory
    pub store_dir: Option<String>,
    /// Override exports directory
    pub reports_dir: Option<String>,
}

impl Config {
    /// Get the `$STUDY_BLOOM` directory path
    ///
    /// Returns:
    /// - Linux: `~/.config/studybloom`
    /// - macOS: `~/Library/Application Support/studybloom`
    /// - Windows: `%APPDATA%\studybloom`
    #[must_use]
    pub fn get_studybloom_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("studybloom")
    }

    /// Get the user config file path (`config.toml`, or `dconfig.toml` in debug builds)
    #[must_use]
    pub fn get_config_file_path() -> PathBuf {
        Self::get_studybloom_dir().join(CONFIG_FILE_NAME)
    }

    /// Merge missing fields from defaults into this config
    ///
    /// Only string fields that are empty here and non-empty in `defaults` are
    /// filled in, so upgrading adds new settings without touching user choices.
    ///
    /// Returns `true` if any field changed.
    #[allow(clippy::useless_let_if_seq)]
    pub fn merge_defaults(&mut self, defaults: &Self) -> bool {
        let mut changed = false;

        if self.logging.level.is_empty() && !defaults.logging.level.is_empty() {
            self.logging.level.clone_from(&defaults.logging.level);
            changed = true;
        }
        if self.logging.file.is_empty() && !defaults.logging.file.is_empty() {
            self.logging.file.clone_from(&defaults.logging.file);
            changed = true;
        }
        if self.storage.dir.is_empty() && !defaults.storage.dir.is_empty() {
            self.storage.dir.clone_from(&defaults.storage.dir);
            changed = true;
        }
        if self.paths.reports_dir.is_empty() && !defaults.paths.reports_dir.is_empty() {
            self.paths
                .reports_dir
                .clone_from(&defaults.paths.reports_dir);
            changed = true;
        }

        changed
    }

    /// Apply CLI-provided overrides onto the loaded configuration
    ///
    /// Overrides last for this run only; the configuration file is not touched.
    pub fn apply_overrides(&mut self, overrides: &ConfigOverrides) {
        if let Some(level) = &overrides.level {
            self.logging.level.clone_from(level);
        }
        if let Some(file) = &overrides.file {
            self.logging.file.clone_from(file);
        }
        if let Some(verbose) = overrides.verbose {
            self.logging.verbose = verbose;
        }

        if let Some(backend) = overrides.backend {
            self.storage.backend = backend;
        }
        if let Some(dir) = &overrides.store_dir {
            self.storage.dir.clone_from(dir);
        }

        if let Some(reports_dir) = &overrides.reports_dir {
            self.paths.reports_dir.clone_from(reports_dir);
        }
    }

    /// Expand `$STUDY_BLOOM` in a string to the config directory
    #[must_use]
    fn expand_variables(value: &str) -> String {
        if value.contains(DIR_VARIABLE) {
            let dir = Self::get_studybloom_dir();
            value.replace(DIR_VARIABLE, dir.to_str().unwrap_or("."))
        } else {
            value.to_string()
        }
    }

    /// Initialize config from a TOML string
    ///
    /// Missing sections and fields take their serde defaults, and
    /// `$STUDY_BLOOM` is expanded in path values.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML cannot be parsed or doesn't match the expected schema
    ///
    /// # Examples
    ///
    /// ```ignore
    /// let config = Config::from_toml(r#"
    /// [logging]
    /// level = "info"
    /// file = "$STUDY_BLOOM/logs/studybloom.log"
    /// "#)?;
    /// ```
    pub fn from_toml(toml_str: &str) -> Result<Self, toml::de::Error> {
        let mut config: Self = toml::from_str(toml_str)?;

        config.logging.file = Self::expand_variables(&config.logging.file);
        config.storage.dir = Self::expand_variables(&config.storage.dir);
        config.paths.reports_dir = Self::expand_variables(&config.paths.reports_dir);

        Ok(config)
    }

    /// Load configuration from embedded defaults
    ///
    /// The defaults differ between debug and release builds:
    /// - Debug: Uses `DefaultCLIConfigDebug.toml`
    /// - Release: Uses `DefaultCLIConfigRelease.toml`
    ///
    /// # Panics
    /// Panics if the embedded default configuration is invalid TOML. The
    /// defaults are compiled into the binary, so this is a build defect.
    #[must_use]
    pub fn from_defaults() -> Self {
        Self::from_toml(CONFIG_DEFAULTS).expect("Failed to parse compiled-in default configuration")
    }

    /// Load configuration from the user config file, or create it from defaults
    ///
    /// See [`load_from`](Self::load_from).
    #[must_use]
    pub fn load() -> Self {
        Self::load_from(&Self::get_config_file_path())
    }

    /// Load configuration from `config_file`
    ///
    /// - If the file exists: loads it, merges missing fields from defaults and
    ///   saves the result back when anything was added
    /// - If it doesn't exist (first run): writes the defaults there
    ///
    /// Falls back to the defaults if the file cannot be read or parsed.
    #[must_use]
    pub fn load_from(config_file: &Path) -> Self {
        let defaults = Self::from_defaults();

        if config_file.exists() {
            if let Ok(content) = fs::read_to_string(config_file) {
                if let Ok(mut config) = Self::from_toml(&content) {
                    if config.merge_defaults(&defaults) {
                        let _ = config.save_to(config_file);
                    }
                    return config;
                }
            }
        } else {
            let _ = defaults.save_to(config_file);
        }

        defaults
    }

    /// Save configuration to the user config file
    ///
    /// # Errors
    /// Returns an error if the directory cannot be created or the file cannot
    /// be written.
    pub fn save(&self) -> Result<(), Box<dyn std::error::Error>> {
        self.save_to(&Self::get_config_file_path())
    }

    /// Save configuration as TOML to `config_file`, creating parent directories
    ///
    /// The saved file will use the format:
    /// ```toml
    /// [logging]
    /// level = "info"
    /// file = "/home/user/.config/studybloom/logs/studybloom.log"
    /// verbose = false
    ///
    /// [storage]
    /// backend = "file"
    /// dir = "/home/user/.config/studybloom/store"
    ///
    /// [reminders]
    /// enabled = true
    /// streak_hour = 19
    ///
    /// [paths]
    /// reports_dir = "/home/user/.config/studybloom/reports"
    /// ```
    ///
    /// # Errors
    /// Returns an error if serialization, directory creation or writing fails.
    pub fn save_to(&self, config_file: &Path) -> Result<(), Box<dyn std::error::Error>> {
        if let Some(parent) = config_file.parent() {
            fs::create_dir_all(parent)?;
        }
        let toml_str = toml::to_string_pretty(self)?;
        fs::write(config_file, toml_str)?;
        Ok(())
    }

    /// Directory the file store lives in
    #[must_use]
    pub fn store_dir(&self) -> PathBuf {
        if self.storage.dir.is_empty() {
            Self::get_studybloom_dir().join("store")
        } else {
            PathBuf::from(&self.storage.dir)
        }
    }

    /// Directory exported plans are written to
    #[must_use]
    pub fn reports_dir(&self) -> PathBuf {
        if self.paths.reports_dir.is_empty() {
            Self::get_studybloom_dir().join("reports")
        } else {
            PathBuf::from(&self.paths.reports_dir)
        }
    }

    /// Get a configuration value by key
    ///
    /// Supported keys:
    /// - `level`, `file`, `verbose`: logging
    /// - `backend`, `store_dir`: storage
    /// - `reminders`, `streak_hour`: reminders
    /// - `reports_dir`: export directory
    ///
    /// Returns `None` if the key is not recognized.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "level" => Some(self.logging.level.clone()),
            "file" => Some(self.logging.file.clone()),
            "verbose" => Some(self.logging.verbose.to_string()),
            "backend" => Some(self.storage.backend.to_string()),
            "store_dir" | "store-dir" => Some(self.storage.dir.clone()),
            "reminders" => Some(self.reminders.enabled.to_string()),
            "streak_hour" | "streak-hour" => Some(self.reminders.streak_hour.to_string()),
            "reports_dir" | "reports-dir" => Some(self.paths.reports_dir.clone()),
            _ => None,
        }
    }

    /// Set a configuration value by key
    ///
    /// Values are validated and converted to the field's type. Updates the
    /// in-memory config only; call [`save()`](Config::save) to persist.
    ///
    /// # Errors
    /// Returns an error if the key is unknown or the value is invalid for it.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), String> {
        match key {
            "level" => {
                let level = Level::from_str(value)?;
                self.logging.level = level.to_string();
            }
            "file" => self.logging.file = value.to_string(),
            "verbose" => {
                self.logging.verbose = parse_bool("verbose", value)?;
            }
            "backend" => self.storage.backend = value.parse()?,
            "store_dir" | "store-dir" => self.storage.dir = value.to_string(),
            "reminders" => {
                self.reminders.enabled = parse_bool("reminders", value)?;
            }
            "streak_hour" | "streak-hour" => {
                self.reminders.streak_hour = value
                    .trim()
                    .parse::<u32>()
                    .ok()
                    .filter(|hour| *hour < 24)
                    .ok_or_else(|| format!("Invalid hour for 'streak_hour': '{value}' (0-23)"))?;
            }
            "reports_dir" | "reports-dir" => self.paths.reports_dir = value.to_string(),
            _ => return Err(format!("Unknown config key: '{key}'")),
        }
        Ok(())
    }

    /// Unset a configuration value by key (reset to its value in `defaults`)
    ///
    /// # Errors
    /// Returns an error if the key is not recognized.
    pub fn unset(&mut self, key: &str, defaults: &Self) -> Result<(), String> {
        match key {
            "level" => self.logging.level.clone_from(&defaults.logging.level),
            "file" => self.logging.file.clone_from(&defaults.logging.file),
            "verbose" => self.logging.verbose = defaults.logging.verbose,
            "backend" => self.storage.backend = defaults.storage.backend,
            "store_dir" | "store-dir" => self.storage.dir.clone_from(&defaults.storage.dir),
            "reminders" => self.reminders.enabled = defaults.reminders.enabled,
            "streak_hour" | "streak-hour" => {
                self.reminders.streak_hour = defaults.reminders.streak_hour;
            }
            "reports_dir" | "reports-dir" => self
                .paths
                .reports_dir
                .clone_from(&defaults.paths.reports_dir),
            _ => return Err(format!("Unknown config key: '{key}'")),
        }
        Ok(())
    }

    /// Reset all configuration to defaults
    ///
    /// Deletes the configuration file so the next [`load()`](Config::load)
    /// recreates it. Succeeds if there is no file.
    ///
    /// # Errors
    /// Returns an error if the file exists but cannot be deleted.
    pub fn reset() -> Result<(), std::io::Error> {
        Self::reset_at(&Self::get_config_file_path())
    }

    /// Delete the configuration file at `config_file`, if any
    ///
    /// # Errors
    /// Returns an error if the file exists but cannot be deleted.
    pub fn reset_at(config_file: &Path) -> Result<(), std::io::Error> {
        if config_file.exists() {
            fs::remove_file(config_file)?;
        }
        Ok(())
    }
}

fn parse_bool(key: &str, value: &str) -> Result<bool, String> {
    value
        .trim()
        .parse::<bool>()
        .map_err(|_| format!("Invalid boolean value for '{key}': '{value}'"))
}

impl fmt::Display for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "[logging]")?;
        writeln!(f, "  level = \"{}\"", self.logging.level)?;
        writeln!(f, "  file = \"{}\"", self.logging.file)?;
        writeln!(f, "  verbose = {}", self.logging.verbose)?;

        writeln!(f, "\n[storage]")?;
        writeln!(f, "  backend = \"{}\"", self.storage.backend)?;
        writeln!(f, "  dir = \"{}\"", self.storage.dir)?;

        writeln!(f, "\n[reminders]")?;
        writeln!(f, "  enabled = {}", self.reminders.enabled)?;
        writeln!(f, "  streak_hour = {}", self.reminders.streak_hour)?;

        writeln!(f, "\n[paths]")?;
        writeln!(f, "  reports_dir = \"{}\"", self.paths.reports_dir)?;

        Ok(())
    }
}
