//! Config serialization to TOML
//!
//! Single source of truth for config file format.

use super::Config;

/// Quote a string as a TOML basic string
fn toml_string(s: &str) -> String {
    toml::Value::String(s.to_string()).to_string()
}

impl Config {
    /// Render the config as a commented TOML file
    ///
    /// Runtime-only flags (`headless`) are not persisted.
    pub fn to_toml(&self) -> String {
        let data_path = match &self.data_path {
            Some(path) => format!("data_path = {}", toml_string(&path.display().to_string())),
            None => "# data_path = \"roster.json\"".to_string(),
        };

        format!(
            r#"# roster configuration

# Rows per page at startup
page_size = {page_size}

# Sizes offered by the "Show N" select
page_size_options = {options:?}

# Sort ID and Age high-to-low on the first header click
numeric_desc_first = {numeric_desc_first}

# Theme: Dark, Light, Nord, Monokai (press 't' in the TUI to cycle)
theme = {theme}

# JSON array of {{ "id": 1, "name": "...", "age": 30 }} records
# (built-in roster when unset)
{data_path}

# Logging configuration (ROSTER_LOG_LEVEL and RUST_LOG override)
[logging]
level = {log_level}
# JSON file logging (in addition to TUI buffer or stderr)
file_enabled = {log_file_enabled}
file_dir = {log_file_dir}
file_rotation = "{log_file_rotation}"  # hourly, daily, never
file_prefix = {log_file_prefix}
"#,
            page_size = self.page_size,
            options = self.page_size_options,
            numeric_desc_first = self.numeric_desc_first,
            theme = toml_string(&self.theme),
            data_path = data_path,
            log_level = toml_string(&self.logging.level),
            log_file_enabled = self.logging.file_enabled,
            log_file_dir = toml_string(&self.logging.file_dir.display().to_string()),
            log_file_rotation = self.logging.file_rotation.as_str(),
            log_file_prefix = toml_string(&self.logging.file_prefix),
        )
    }
}
