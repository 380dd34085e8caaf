//! Config command handler

use crate::args::ConfigSubcommand;
use std::io::{self, Write};
use syllabus_tree::config::Config;
use syllabus_tree::logger::Level;
use syllabus_tree::{error, info};

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

fn unknown_key(key: &str) {
    eprintln!("Unknown config key: '{key}'");
    eprintln!("Known keys: {}", Config::KEYS.join(", "));
}

/// Handle the config get subcommand
pub fn handle_config_get(config: &Config, key: Option<String>) {
    if let Some(k) = key {
        match config.get(&k) {
            Some(value) => println!("{value}"),
            None => unknown_key(&k),
        }
    } else {
        println!("\n=== Configuration ===");
        println!("{}\n", Config::get_config_file_path().display());
        print!("{config}");
    }
}

/// Check a new value against the rules the runtime applies when reading it
fn validate(config: &Config, key: &str) -> Result<(), String> {
    match key {
        "level" => config
            .logging
            .level
            .parse::<Level>()
            .map(|_| ())
            .map_err(|e| format!("{e}. Use: error, warn, info, or debug")),
        "min_scale" | "min-scale" | "max_scale" | "max-scale" | "zoom_step" | "zoom-step"
        | "wheel_sensitivity" | "wheel-sensitivity" => config
            .viewer_settings_checked()
            .map(|_| ())
            .map_err(|e| format!("Rejected {key}: {e}")),
        _ => Ok(()),
    }
}

/// Handle the config set subcommand
pub fn handle_config_set(config: &mut Config, key: &str, value: &str) {
    if let Err(e) = config.set(key, value) {
        eprintln!("{e}");
        if config.get(key).is_none() {
            eprintln!("Known keys: {}", Config::KEYS.join(", "));
        }
        std::process::exit(1);
    }

    if let Err(e) = validate(config, key) {
        eprintln!("{e}");
        std::process::exit(1);
    }

    if let Err(e) = config.save() {
        error!("Failed to save config: {e}");
        eprintln!("Failed to save config: {e}");
        std::process::exit(1);
    }

    info!("Config key {key} set to {value}");
    println!("✓ Set {key} = {value}");
}

/// Handle the config unset subcommand
pub fn handle_config_unset(config: &mut Config, defaults: &Config, key: &str) {
    if config.unset(key, defaults).is_err() {
        unknown_key(key);
        std::process::exit(1);
    }

    if let Err(e) = config.save() {
        error!("Failed to save config: {e}");
        eprintln!("Failed to save config: {e}");
        std::process::exit(1);
    }

    println!(
        "✓ Reset {key} to default ({})",
        config.get(key).unwrap_or_default()
    );
}

/// Handle the config reset subcommand
pub fn handle_config_reset() {
    if !Config::get_config_file_path().exists() {
        println!("✓ Config is already at defaults");
        return;
    }

    print!("Reset configuration to defaults? (y/n): ");
    io::stdout().flush().ok();

    let mut response = String::new();
    io::stdin().read_line(&mut response).ok();

    if matches!(response.trim().to_ascii_lowercase().as_str(), "y" | "yes") {
        if let Err(e) = Config::reset() {
            eprintln!("Failed to remove config file: {e}");
            std::process::exit(1);
        }
        println!("✓ Config reset to defaults");
    } else {
        println!("✗ Reset cancelled");
    }
}
