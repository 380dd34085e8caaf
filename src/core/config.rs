//! Configuration module for `SyllabusTree`

use crate::core::viewer::ViewerSettings;
use crate::warn;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::PathBuf;

/// Default CLI configuration loaded based on build profile.
/// Uses release defaults in release mode, debug defaults in debug mode.
#[cfg(not(debug_assertions))]
const CONFIG_DEFAULTS: &str = include_str!("../../assets/DefaultCLIConfigRelease.toml");

#[cfg(debug_assertions)]
const CONFIG_DEFAULTS: &str = include_str!("../../assets/DefaultCLIConfigDebug.toml");

#[cfg(not(debug_assertions))]
const CONFIG_FILE_NAME: &str = "config.toml";

#[cfg(debug_assertions)]
const CONFIG_FILE_NAME: &str = "dconfig.toml";

/// Variable expanded to the config directory inside config values
const DIR_VARIABLE: &str = "$SYLLABUS_TREE";

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

const fn default_min_scale() -> f64 {
    ViewerSettings::MIN_SCALE
}

const fn default_max_scale() -> f64 {
    ViewerSettings::MAX_SCALE
}

const fn default_zoom_step() -> f64 {
    ViewerSettings::ZOOM_STEP
}

const fn default_wheel_sensitivity() -> f64 {
    ViewerSettings::WHEEL_SENSITIVITY
}

/// Pan and zoom tuning
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ViewerConfig {
    /// Smallest zoom scale
    #[serde(default = "default_min_scale")]
    pub min_scale: f64,
    /// Largest zoom scale
    #[serde(default = "default_max_scale")]
    pub max_scale: f64,
    /// Scale change per zoom control press
    #[serde(default = "default_zoom_step")]
    pub zoom_step: f64,
    /// Scale change per wheel delta unit
    #[serde(default = "default_wheel_sensitivity")]
    pub wheel_sensitivity: f64,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            min_scale: default_min_scale(),
            max_scale: default_max_scale(),
            zoom_step: default_zoom_step(),
            wheel_sensitivity: default_wheel_sensitivity(),
        }
    }
}

/// Syllabus selection
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SyllabusConfig {
    /// Class level shown when none is given on the command line
    #[serde(default)]
    pub default_class: String,
}

/// Paths configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PathsConfig {
    /// Directory for rendered HTML and Markdown files
    #[serde(default)]
    pub reports_dir: String,
}

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Logging settings
    pub logging: LoggingConfig,
    /// Viewer settings
    #[serde(default)]
    pub viewer: ViewerConfig,
    /// Syllabus settings
    #[serde(default)]
    pub syllabus: SyllabusConfig,
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
    /// Override default class level
    pub default_class: Option<String>,
    /// Override reports output directory
    pub reports_dir: Option<String>,
}

fn parse_scale_value(key: &str, value: &str) -> Result<f64, String> {
    value
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| format!("Invalid number for '{key}': '{value}'"))
}

impl Config {
    /// Get the `$SYLLABUS_TREE` directory path
    ///
    /// Returns:
    /// - Linux: `~/.config/syllabustree`
    /// - macOS: `~/Library/Application Support/syllabustree`
    /// - Windows: `%APPDATA%\syllabustree`
    #[must_use]
    pub fn get_app_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("syllabustree")
    }

    /// Merge missing fields from defaults into this config
    ///
    /// Only string fields that are empty here and non-empty in defaults are
    /// filled in; numeric viewer fields already fall back through serde.
    ///
    /// # Returns
    ///
    /// `true` if any fields were added/changed, `false` otherwise
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

        if self.syllabus.default_class.is_empty() && !defaults.syllabus.default_class.is_empty()
        {
            self.syllabus
                .default_class
                .clone_from(&defaults.syllabus.default_class);
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

    /// Apply CLI-provided overrides onto this configuration in place
    ///
    /// Saving afterwards writes the overridden values to disk.
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
        if let Some(default_class) = &overrides.default_class {
            self.syllabus.default_class.clone_from(default_class);
        }
        if let Some(reports_dir) = &overrides.reports_dir {
            self.paths.reports_dir.clone_from(reports_dir);
        }
    }

    /// Effective configuration for one run
    ///
    /// Returns a copy with the overrides applied and leaves `self` as
    /// stored on disk, so saving `self` never persists an override.
    #[must_use]
    pub fn with_overrides(&self, overrides: &ConfigOverrides) -> Self {
        let mut effective = self.clone();
        effective.apply_overrides(overrides);
        effective
    }

    /// Get the user config file path
    ///
    /// `config.toml` for release builds, `dconfig.toml` for debug builds,
    /// inside [`get_app_dir`](Self::get_app_dir).
    #[must_use]
    pub fn get_config_file_path() -> PathBuf {
        Self::get_app_dir().join(CONFIG_FILE_NAME)
    }

    /// Expand `$SYLLABUS_TREE` in a string
    #[must_use]
    fn expand_variables(value: &str) -> String {
        if value.contains(DIR_VARIABLE) {
            let app_dir = Self::get_app_dir();
            value.replace(DIR_VARIABLE, app_dir.to_str().unwrap_or("."))
        } else {
            value.to_string()
        }
    }

    /// Initialize config from a TOML string
    ///
    /// Missing fields use their serde defaults and `$SYLLABUS_TREE` is
    /// expanded in path values.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML cannot be parsed or doesn't match the expected schema
    pub fn from_toml(toml_str: &str) -> Result<Self, toml::de::Error> {
        let mut config: Self = toml::from_str(toml_str)?;

        config.logging.file = Self::expand_variables(&config.logging.file);
        config.paths.reports_dir = Self::expand_variables(&config.paths.reports_dir);

        Ok(config)
    }

    /// Load configuration from embedded defaults
    ///
    /// # Panics
    /// Panics if the embedded default configuration is invalid TOML. The
    /// defaults are compiled into the binary and covered by tests.
    #[must_use]
    pub fn from_defaults() -> Self {
        Self::from_toml(CONFIG_DEFAULTS).expect("Failed to parse compiled-in default configuration")
    }

    /// Load configuration from file, or create from defaults if not found
    ///
    /// - If the config file exists: load it, merge missing fields from defaults, save if changed
    /// - Otherwise (first run): create the config directory and write the defaults
    ///
    /// Falls back to defaults if the file cannot be read or parsed.
    #[must_use]
    pub fn load() -> Self {
        let config_file = Self::get_config_file_path();
        let defaults = Self::from_defaults();

        if config_file.exists() {
            if let Ok(content) = fs::read_to_string(&config_file) {
                if let Ok(mut config) = Self::from_toml(&content) {
                    if config.merge_defaults(&defaults) {
                        let _ = config.save();
                    }
                    return config;
                }
            }
            warn!(
                "Could not read {}; using default configuration",
                config_file.display()
            );
        } else {
            if let Some(parent) = config_file.parent() {
                let _ = fs::create_dir_all(parent);
            }
            let _ = defaults.save();
            return defaults;
        }

        defaults
    }

    /// Save configuration to file
    ///
    /// # Errors
    /// Returns an error if the config cannot be serialized, the directory
    /// cannot be created, or the file cannot be written
    pub fn save(&self) -> Result<(), Box<dyn std::error::Error>> {
        let config_file = Self::get_config_file_path();
        if let Some(parent) = config_file.parent() {
            fs::create_dir_all(parent)?;
        }
        let toml_str = toml::to_string_pretty(self)?;
        fs::write(&config_file, toml_str)?;
        Ok(())
    }

    /// Viewer settings described by the `[viewer]` section
    ///
    /// # Errors
    /// Returns a message when the section describes an unusable zoom range
    pub fn viewer_settings_checked(&self) -> Result<ViewerSettings, String> {
        let settings = ViewerSettings {
            min_scale: self.viewer.min_scale,
            max_scale: self.viewer.max_scale,
            zoom_step: self.viewer.zoom_step,
            wheel_sensitivity: self.viewer.wheel_sensitivity,
        };
        settings.validate().map(|()| settings)
    }

    /// Viewer settings described by the `[viewer]` section
    ///
    /// Falls back to the built-in bounds when the section describes an
    /// unusable zoom range.
    #[must_use]
    pub fn viewer_settings(&self) -> ViewerSettings {
        self.viewer_settings_checked().unwrap_or_else(|e| {
            warn!("Ignoring [viewer] settings: {e}");
            ViewerSettings::default()
        })
    }

    /// Keys accepted by [`get`](Config::get), [`set`](Config::set) and [`unset`](Config::unset)
    pub const KEYS: [&'static str; 9] = [
        "level",
        "file",
        "verbose",
        "min_scale",
        "max_scale",
        "zoom_step",
        "wheel_sensitivity",
        "default_class",
        "reports_dir",
    ];

    /// Get a configuration value by key
    ///
    /// Supported keys: `level`, `file`, `verbose`, `min_scale`, `max_scale`,
    /// `zoom_step`, `wheel_sensitivity`, `default_class`, `reports_dir`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "level" => Some(self.logging.level.clone()),
            "file" => Some(self.logging.file.clone()),
            "verbose" => Some(self.logging.verbose.to_string()),
            "min_scale" | "min-scale" => Some(self.viewer.min_scale.to_string()),
            "max_scale" | "max-scale" => Some(self.viewer.max_scale.to_string()),
            "zoom_step" | "zoom-step" => Some(self.viewer.zoom_step.to_string()),
            "wheel_sensitivity" | "wheel-sensitivity" => {
                Some(self.viewer.wheel_sensitivity.to_string())
            }
            "default_class" | "default-class" => Some(self.syllabus.default_class.clone()),
            "reports_dir" | "reports-dir" => Some(self.paths.reports_dir.clone()),
            _ => None,
        }
    }

    /// Set a configuration value by key
    ///
    /// Updates the in-memory config only; call [`save()`](Config::save) to persist.
    ///
    /// # Errors
    /// Returns an error if the key is unknown or the value cannot be parsed
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), String> {
        match key {
            "level" => self.logging.level = value.to_string(),
            "file" => self.logging.file = value.to_string(),
            "verbose" => {
                self.logging.verbose = value
                    .parse::<bool>()
                    .map_err(|_| format!("Invalid boolean value for 'verbose': '{value}'"))?;
            }
            "min_scale" | "min-scale" => self.viewer.min_scale = parse_scale_value(key, value)?,
            "max_scale" | "max-scale" => self.viewer.max_scale = parse_scale_value(key, value)?,
            "zoom_step" | "zoom-step" => self.viewer.zoom_step = parse_scale_value(key, value)?,
            "wheel_sensitivity" | "wheel-sensitivity" => {
                self.viewer.wheel_sensitivity = parse_scale_value(key, value)?;
            }
            "default_class" | "default-class" => self.syllabus.default_class = value.to_string(),
            "reports_dir" | "reports-dir" => self.paths.reports_dir = value.to_string(),
            _ => return Err(format!("Unknown config key: '{key}'")),
        }
        Ok(())
    }

    /// Unset a configuration value by key (reset to default)
    ///
    /// # Errors
    /// Returns an error if the key is not recognized.
    pub fn unset(&mut self, key: &str, defaults: &Self) -> Result<(), String> {
        match key {
            "level" => self.logging.level.clone_from(&defaults.logging.level),
            "file" => self.logging.file.clone_from(&defaults.logging.file),
            "verbose" => self.logging.verbose = defaults.logging.verbose,
            "min_scale" | "min-scale" => self.viewer.min_scale = defaults.viewer.min_scale,
            "max_scale" | "max-scale" => self.viewer.max_scale = defaults.viewer.max_scale,
            "zoom_step" | "zoom-step" => self.viewer.zoom_step = defaults.viewer.zoom_step,
            "wheel_sensitivity" | "wheel-sensitivity" => {
                self.viewer.wheel_sensitivity = defaults.viewer.wheel_sensitivity;
            }
            "default_class" | "default-class" => self
                .syllabus
                .default_class
                .clone_from(&defaults.syllabus.default_class),
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
    /// recreates it. Succeeds if the file does not exist.
    ///
    /// # Errors
    /// Returns an error if the config file exists but cannot be deleted
    pub fn reset() -> Result<(), std::io::Error> {
        let config_file = Self::get_config_file_path();
        if config_file.exists() {
            fs::remove_file(config_file)?;
        }
        Ok(())
    }
}

impl fmt::Display for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "[logging]")?;
        writeln!(f, "  level = \"{}\"", self.logging.level)?;
        writeln!(f, "  file = \"{}\"", self.logging.file)?;
        writeln!(f, "  verbose = {}", self.logging.verbose)?;

        writeln!(f, "\n[viewer]")?;
        writeln!(f, "  min_scale = {}", self.viewer.min_scale)?;
        writeln!(f, "  max_scale = {}", self.viewer.max_scale)?;
        writeln!(f, "  zoom_step = {}", self.viewer.zoom_step)?;
        writeln!(f, "  wheel_sensitivity = {}", self.viewer.wheel_sensitivity)?;

        writeln!(f, "\n[syllabus]")?;
        writeln!(f, "  default_class = \"{}\"", self.syllabus.default_class)?;

        writeln!(f, "\n[paths]")?;
        writeln!(f, "  reports_dir = \"{}\"", self.paths.reports_dir)?;

        Ok(())
    }
}
