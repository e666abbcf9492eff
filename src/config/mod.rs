//! Configuration for the roster viewer
//!
//! Configuration is loaded in order of precedence:
//! 1. Environment variables (highest priority)
//! 2. Config file (~/.config/roster/config.toml)
//! 3. Built-in defaults (lowest priority)
//!
//! CLI flags are applied on top of the result by `main`.

use crate::table::{DEFAULT_PAGE_SIZE, PAGE_SIZE_OPTIONS};
use serde::Deserialize;
use std::path::{Path, PathBuf};

// ─────────────────────────────────────────────────────────────────────────────
// Submodules
// ─────────────────────────────────────────────────────────────────────────────

mod logging;
mod serialization;

#[cfg(test)]
mod tests;

pub use logging::{FileLogging, LogRotation, LoggingConfig};

// ─────────────────────────────────────────────────────────────────────────────
// Constants
// ─────────────────────────────────────────────────────────────────────────────

/// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// ─────────────────────────────────────────────────────────────────────────────
// Application Configuration
// ─────────────────────────────────────────────────────────────────────────────

/// Application configuration
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Rows per page at startup
    pub page_size: usize,

    /// Sizes offered by the "Show N" select
    pub page_size_options: Vec<usize>,

    /// Numeric columns sort high-to-low on the first header click
    pub numeric_desc_first: bool,

    /// Theme name: "Dark", "Light", "Nord", "Monokai"
    pub theme: String,

    /// JSON dataset to show instead of the built-in roster
    pub data_path: Option<PathBuf>,

    /// Print the first page and exit instead of running the TUI
    pub headless: bool,

    /// Logging configuration
    pub logging: LoggingConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            page_size_options: PAGE_SIZE_OPTIONS.to_vec(),
            numeric_desc_first: false,
            theme: "Dark".to_string(),
            data_path: None,
            headless: false,
            logging: LoggingConfig::default(),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// File Configuration (deserialization layer)
// ─────────────────────────────────────────────────────────────────────────────

/// Config file structure (subset of Config that makes sense to persist)
#[derive(Debug, Deserialize, Default)]
pub(crate) struct FileConfig {
    pub page_size: Option<usize>,
    pub page_size_options: Option<Vec<usize>>,
    pub numeric_desc_first: Option<bool>,
    pub theme: Option<String>,
    pub data_path: Option<String>,

    /// Optional [logging] section
    pub logging: Option<FileLogging>,
}

// ─────────────────────────────────────────────────────────────────────────────
// Configuration Loading
// ─────────────────────────────────────────────────────────────────────────────

/// Truthy env flag: "1" or "true" (any case)
fn is_truthy(value: &str) -> bool {
    value == "1" || value.eq_ignore_ascii_case("true")
}

/// Sort, dedupe and drop zero; an empty list falls back to the presets
fn normalize_options(mut options: Vec<usize>) -> Vec<usize> {
    options.retain(|&o| o > 0);
    options.sort_unstable();
    options.dedup();
    if options.is_empty() {
        PAGE_SIZE_OPTIONS.to_vec()
    } else {
        options
    }
}

impl Config {
    /// Get the config file path: ~/.config/roster/config.toml
    /// Uses Unix-style ~/.config on all platforms for consistency
    pub fn config_path() -> Option<PathBuf> {
        dirs::home_dir().map(|p| p.join(".config").join("roster").join("config.toml"))
    }

    /// Create config file with defaults if it doesn't exist
    /// Called during startup to help users discover configuration options
    pub fn ensure_config_exists() {
        let Some(path) = Self::config_path() else {
            return;
        };

        // Don't overwrite existing config
        if path.exists() {
            return;
        }

        if let Some(parent) = path.parent() {
            if std::fs::create_dir_all(parent).is_err() {
                return; // Silently fail - config is optional
            }
        }

        // Use Config::default().to_toml() as single source of truth
        let _ = std::fs::write(&path, Self::default().to_toml());
    }

    /// Parse a config file, falling back to defaults on any problem
    ///
    /// A missing file is normal. An unreadable or malformed file is reported
    /// on stderr (logging is not up yet) and ignored.
    pub(crate) fn load_file_config(path: &Path) -> FileConfig {
        match std::fs::read_to_string(path) {
            Ok(contents) => match toml::from_str(&contents) {
                Ok(config) => config,
                Err(e) => {
                    eprintln!("Warning: ignoring invalid config {}: {}", path.display(), e);
                    FileConfig::default()
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => FileConfig::default(),
            Err(e) => {
                eprintln!("Warning: cannot read config {}: {}", path.display(), e);
                FileConfig::default()
            }
        }
    }

    /// Load configuration: env vars > config file > defaults
    pub fn from_env() -> Self {
        let file = Self::config_path()
            .map(|path| Self::load_file_config(&path))
            .unwrap_or_default();
        Self::resolve(file, |key| std::env::var(key).ok())
    }

    /// Merge a parsed file with environment lookups
    pub(crate) fn resolve(file: FileConfig, env: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        // Page size: env > file > default
        let page_size = env("ROSTER_PAGE_SIZE")
            .and_then(|v| v.trim().parse().ok())
            .or(file.page_size)
            .unwrap_or(defaults.page_size);

        // Offered sizes: file > default
        let page_size_options = file
            .page_size_options
            .map(normalize_options)
            .unwrap_or(defaults.page_size_options);

        // Sort cycle start: env > file > default
        let numeric_desc_first = env("ROSTER_NUMERIC_DESC_FIRST")
            .map(|v| is_truthy(&v))
            .or(file.numeric_desc_first)
            .unwrap_or(defaults.numeric_desc_first);

        // Theme: env > file > default
        let theme = env("ROSTER_THEME")
            .or(file.theme)
            .unwrap_or(defaults.theme);

        // Dataset: env > file > built-in
        let data_path = env("ROSTER_DATA")
            .or(file.data_path)
            .filter(|p| !p.trim().is_empty())
            .map(PathBuf::from);

        // Headless: env only (runtime flag)
        let headless = env("ROSTER_HEADLESS").is_some_and(|v| is_truthy(&v));

        // Log level: env > [logging] level; RUST_LOG still wins at filter time
        let mut logging = LoggingConfig::from_file(file.logging);
        if let Some(level) = env("ROSTER_LOG_LEVEL") {
            logging.level = level;
        }

        Self {
            page_size,
            page_size_options,
            numeric_desc_first,
            theme,
            data_path,
            headless,
            logging,
        }
    }
}
