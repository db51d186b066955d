//! Config command handler

use super::confirm;
use crate::args::ConfigSubcommand;
use bloom_logger::{error, info};
use study_bloom::config::Config;

/// Dispatch config subcommands
pub fn run(subcommand: Option<ConfigSubcommand>, config: &mut Config, defaults: &Config) {
    match subcommand {
        None => handle_config_get(config, None),
        Some(ConfigSubcommand::Get { key }) => handle_config_get(config, key),
        Some(ConfigSubcommand::Set { key, value }) => handle_config_set(config, &key, &value),
        Some(ConfigSubcommand::Unset { key }) => handle_config_unset(config, defaults, &key),
        Some(ConfigSubcommand::Reset) => handle_config_reset(),
    }
}

/// Handle the config get subcommand
pub fn handle_config_get(config: &Config, key: Option<String>) {
    if let Some(k) = key {
        if let Some(value) = config.get(&k) {
            println!("{value}");
        } else {
            eprintln!("✗ Unknown config key: '{k}'");
            std::process::exit(1);
        }
    } else {
        println!("\n=== Configuration ===");
        println!("({})\n", Config::get_config_file_path().display());
        print!("{config}");
    }
}

/// Persist `config`, exiting on failure
fn save_or_exit(config: &Config) {
    if let Err(e) = config.save() {
        error!("Failed to save config: {e}");
        eprintln!("✗ Failed to save config: {e}");
        std::process::exit(1);
    }
}

/// Handle the config set subcommand
pub fn handle_config_set(config: &mut Config, key: &str, value: &str) {
    if let Err(e) = config.set(key, value) {
        eprintln!("✗ {e}");
        std::process::exit(1);
    }
    save_or_exit(config);

    info!("Config key {key} set");
    println!("✓ Set {key} = {}", config.get(key).unwrap_or_default());
}

/// Handle the config unset subcommand
pub fn handle_config_unset(config: &mut Config, defaults: &Config, key: &str) {
    if let Err(e) = config.unset(key, defaults) {
        eprintln!("✗ {e}");
        std::process::exit(1);
    }
    save_or_exit(config);

    println!("✓ Reset {key} to default");
}

/// Handle the config reset subcommand
pub fn handle_config_reset() {
    if !Config::get_config_file_path().exists() {
        println!("✓ Config is already at defaults");
        return;
    }

    if !confirm("Are you sure you want to reset config to defaults?") {
        println!("✗ Reset cancelled");
        return;
    }

    if let Err(e) = Config::reset() {
        eprintln!("✗ Failed to remove config file: {e}");
        std::process::exit(1);
    }
    println!("✓ Config reset to defaults");
}
