//! Configuration tests
//!
//! Round-trips through `to_toml()` guard the file format: every persisted
//! field must come back out of `FileConfig` unchanged.

use super::*;
use std::collections::HashMap;
use std::io::Write;

fn no_env(_: &str) -> Option<String> {
    None
}

fn env_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key: &str| map.get(key).cloned()
}

fn parse(toml_str: &str) -> FileConfig {
    toml::from_str(toml_str).unwrap_or_else(|e| panic!("TOML:\n{}\nError: {}", toml_str, e))
}

// ─────────────────────────────────────────────────────────────────────────────
// Round-trip tests
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_config_roundtrip_default() {
    let config = Config::default();
    let parsed = Config::resolve(parse(&config.to_toml()), no_env);
    assert_eq!(parsed, config);
}

#[test]
fn test_config_roundtrip_customized() {
    let config = Config {
        page_size: 10,
        page_size_options: vec![10, 25, 50],
        numeric_desc_first: true,
        theme: "Nord".to_string(),
        data_path: Some(PathBuf::from("/tmp/people \"v2\".json")),
        headless: false,
        logging: LoggingConfig {
            level: "debug".to_string(),
            file_enabled: true,
            file_dir: PathBuf::from("/var/log/roster"),
            file_rotation: LogRotation::Hourly,
            file_prefix: "people".to_string(),
        },
    };

    let parsed = Config::resolve(parse(&config.to_toml()), no_env);
    assert_eq!(parsed, config);
}

#[test]
fn test_headless_is_not_persisted() {
    let config = Config {
        headless: true,
        ..Config::default()
    };
    assert!(!config.to_toml().contains("headless"));
}

// ─────────────────────────────────────────────────────────────────────────────
// Precedence
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_env_overrides_file() {
    let file = parse(
        r#"
page_size = 10
theme = "Light"
data_path = "file.json"

[logging]
level = "warn"
"#,
    );
    let env = env_from(&[
        ("ROSTER_PAGE_SIZE", "3"),
        ("ROSTER_THEME", "Nord"),
        ("ROSTER_DATA", "env.json"),
        ("ROSTER_LOG_LEVEL", "trace"),
        ("ROSTER_NUMERIC_DESC_FIRST", "true"),
    ]);

    let config = Config::resolve(file, env);
    assert_eq!(config.page_size, 3);
    assert_eq!(config.theme, "Nord");
    assert_eq!(config.data_path, Some(PathBuf::from("env.json")));
    assert_eq!(config.logging.level, "trace");
    assert!(config.numeric_desc_first);
}

#[test]
fn test_file_overrides_defaults() {
    let file = parse("page_size = 20\n");
    let config = Config::resolve(file, no_env);
    assert_eq!(config.page_size, 20);
    assert_eq!(config.theme, "Dark");
    assert_eq!(config.page_size_options, PAGE_SIZE_OPTIONS.to_vec());
}

#[test]
fn test_unparsable_env_page_size_is_ignored() {
    let file = parse("page_size = 15\n");
    let config = Config::resolve(file, env_from(&[("ROSTER_PAGE_SIZE", "lots")]));
    assert_eq!(config.page_size, 15);
}

#[test]
fn test_headless_flag_values() {
    for (value, expected) in [("1", true), ("TRUE", true), ("0", false), ("no", false)] {
        let config = Config::resolve(
            FileConfig::default(),
            env_from(&[("ROSTER_HEADLESS", value)]),
        );
        assert_eq!(config.headless, expected, "ROSTER_HEADLESS={}", value);
    }
}

#[test]
fn test_page_size_options_are_normalized() {
    let file = parse("page_size_options = [20, 0, 5, 20]\n");
    let config = Config::resolve(file, no_env);
    assert_eq!(config.page_size_options, vec![5, 20]);

    let file = parse("page_size_options = []\n");
    let config = Config::resolve(file, no_env);
    assert_eq!(config.page_size_options, PAGE_SIZE_OPTIONS.to_vec());
}

#[test]
fn test_unknown_rotation_falls_back_to_daily() {
    let file = parse("[logging]\nfile_rotation = \"weekly\"\n");
    let config = Config::resolve(file, no_env);
    assert_eq!(config.logging.file_rotation, LogRotation::Daily);
}

// ─────────────────────────────────────────────────────────────────────────────
// File loading
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_missing_file_uses_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let file = Config::load_file_config(&dir.path().join("config.toml"));
    assert_eq!(Config::resolve(file, no_env), Config::default());
}

#[test]
fn test_malformed_file_falls_back_to_defaults() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "page_size = \"five").unwrap();

    let parsed = Config::load_file_config(file.path());
    assert_eq!(Config::resolve(parsed, no_env), Config::default());
}

#[test]
fn test_written_file_loads_back() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    let config = Config {
        page_size: 15,
        theme: "Monokai".to_string(),
        ..Config::default()
    };
    file.write_all(config.to_toml().as_bytes()).unwrap();

    let parsed = Config::load_file_config(file.path());
    assert_eq!(Config::resolve(parsed, no_env), config);
}
