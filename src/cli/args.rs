//! CLI argument definitions for `StudyBloom`

use clap::{builder::BoolishValueParser, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use bloom_logger::Level;
use study_bloom::config::{ConfigOverrides, StorageBackend};
use study_bloom::core::models::{ProficiencyLevel, Skill, Timeframe, Weekday};

/// CLI log level argument
///
/// Represents log levels that can be passed via CLI arguments. Converts to lowercase
/// strings for config storage and to `bloom_logger::Level` for runtime use.
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq)]
pub enum LogLevelArg {
    /// Error-level logging
    Error,
    /// Warning-level logging
    Warn,
    /// Info-level logging
    Info,
    /// Debug-level logging
    Debug,
}

impl From<LogLevelArg> for Level {
    fn from(arg: LogLevelArg) -> Self {
        match arg {
            LogLevelArg::Error => Self::Error,
            LogLevelArg::Warn => Self::Warn,
            LogLevelArg::Info => Self::Info,
            LogLevelArg::Debug => Self::Debug,
        }
    }
}

impl std::fmt::Display for LogLevelArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let as_str = match self {
            Self::Error => "error",
            Self::Warn => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
        };
        write!(f, "{as_str}")
    }
}

#[derive(Debug, Subcommand)]
pub enum ConfigSubcommand {
    /// Display configuration values.
    ///
    /// If a KEY is provided, displays only that configuration value.
    /// If no KEY is provided, displays all configuration values.
    Get {
        /// Optional configuration key to display (e.g., `level`, `backend`, `streak_hour`)
        #[arg(value_name = "KEY")]
        key: Option<String>,
    },
    /// Set a configuration value.
    Set {
        /// Configuration key to set
        #[arg(value_name = "KEY")]
        key: String,
        /// Value to set
        #[arg(value_name = "VALUE")]
        value: String,
    },
    /// Unset a configuration value.
    Unset {
        /// Configuration key to unset
        #[arg(value_name = "KEY")]
        key: String,
    },
    /// Reset configuration to defaults (requires confirmation).
    Reset,
}

#[derive(Debug, Subcommand)]
pub enum PlanSubcommand {
    /// Create a new weekly plan, replacing the current one.
    ///
    /// Options not given on the command line keep the plan creator's
    /// defaults (medium timeframe, 10 hours, intermediate, grammar + vocabulary).
    Create {
        /// Preparation timeframe: short, medium or long
        #[arg(long, value_name = "TIMEFRAME")]
        timeframe: Option<Timeframe>,

        /// Weekly study hours (3-35)
        #[arg(long, value_name = "HOURS", value_parser = clap::value_parser!(u8).range(3..=35))]
        hours: Option<u8>,

        /// Proficiency level: elementary, intermediate or advanced
        #[arg(long, value_name = "LEVEL")]
        level: Option<ProficiencyLevel>,

        /// Focus areas (at least two): grammar, vocabulary, reading, listening
        #[arg(long, value_name = "SKILLS", num_args = 1.., value_delimiter = ',')]
        focus: Vec<Skill>,

        /// Walk through the three plan-creation steps on the terminal
        #[arg(short, long, conflicts_with_all = ["timeframe", "hours", "level", "focus"])]
        interactive: bool,
    },
    /// Show the current plan.
    Show {
        /// Only show one day (e.g. `monday` or `mon`)
        #[arg(long, value_name = "DAY")]
        day: Option<Weekday>,
    },
    /// Show today's sessions.
    Today,
    /// Mark a session as completed.
    Complete {
        /// Day of the session
        #[arg(value_name = "DAY")]
        day: Weekday,
        /// Session id, e.g. `monday-grammar`
        #[arg(value_name = "SESSION_ID")]
        session_id: String,
    },
    /// Export the current plan.
    Export {
        /// Export format: markdown (md) or html
        #[arg(short, long, value_name = "FORMAT", default_value = "md")]
        format: String,

        /// Output file path (optional; defaults to the configured reports directory)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },
    /// Discard the current plan.
    Clear {
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
}

#[derive(Debug, Subcommand)]
pub enum RemindSubcommand {
    /// Schedule a reminder for one session of the current plan.
    Session {
        /// Day of the session
        #[arg(value_name = "DAY")]
        day: Weekday,
        /// Session id, e.g. `monday-grammar`
        #[arg(value_name = "SESSION_ID")]
        session_id: String,
        /// Local time to fire at: `YYYY-MM-DD HH:MM`
        #[arg(long, value_name = "DATETIME")]
        at: String,
    },
    /// Schedule the streak reminder for tomorrow.
    Streak,
    /// List pending reminders.
    List,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Create, inspect and update the weekly study plan.
    Plan {
        #[command(subcommand)]
        subcommand: PlanSubcommand,
    },
    /// Schedule study reminders.
    Remind {
        #[command(subcommand)]
        subcommand: RemindSubcommand,
    },
    /// Manage configuration.
    ///
    /// If no subcommand is provided, displays all configuration values.
    Config {
        #[command(subcommand)]
        subcommand: Option<ConfigSubcommand>,
    },
}

#[derive(Parser, Debug)]
#[command(
    name = "studybloom",
    about = "StudyBloom weekly study planner",
    version = env!("CARGO_PKG_VERSION")
)]
pub struct Cli {
    /// Set the runtime log level (error|warn|info|debug). Falls back to config if omitted.
    #[arg(long, value_enum)]
    pub log_level: Option<LogLevelArg>,

    /// Enable verbose output (runtime only)
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,

    /// Enable debug-level logging and runtime debug flag (shorthand)
    #[arg(long = "debug")]
    pub debug_flag: bool,

    /// Write runtime logs to a file
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    // --- Config overrides ---
    /// Override config logging level
    #[arg(long = "config-level", value_enum)]
    pub config_level: Option<LogLevelArg>,

    /// Override config log file path
    #[arg(long = "config-log-file", value_name = "PATH")]
    pub config_log_file: Option<PathBuf>,

    /// Override config verbose flag (true/false)
    #[arg(long = "config-verbose", value_parser = BoolishValueParser::new())]
    pub config_verbose: Option<bool>,

    /// Keep plans and reminders in this directory for this run
    #[arg(long = "store-dir", value_name = "DIR")]
    pub store_dir: Option<PathBuf>,

    /// Keep plans and reminders in memory only (nothing is saved)
    #[arg(long = "memory-store", conflicts_with = "store_dir")]
    pub memory_store: bool,

    /// Override the directory exports are written to
    #[arg(long = "reports-dir", value_name = "DIR")]
    pub reports_dir: Option<PathBuf>,

    /// Subcommand to execute.
    /// A subcommand is required to run the CLI.
    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Convert CLI flags into config overrides
    ///
    /// A `--store-dir` implies the file backend.
    pub fn to_config_overrides(&self) -> ConfigOverrides {
        let backend = if self.memory_store {
            Some(StorageBackend::Memory)
        } else {
            self.store_dir.as_ref().map(|_| StorageBackend::File)
        };

        ConfigOverrides {
            level: self.config_level.map(|lvl| lvl.to_string()),
            file: self
                .config_log_file
                .as_ref()
                .map(|p| p.to_string_lossy().to_string()),
            verbose: self.config_verbose,
            backend,
            store_dir: self
                .store_dir
                .as_ref()
                .map(|p| p.to_string_lossy().to_string()),
            reports_dir: self
                .reports_dir
                .as_ref()
                .map(|p| p.to_string_lossy().to_string()),
        }
    }
}
