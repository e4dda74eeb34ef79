//! Integration tests for configuration loading

use deal_calc::config::Config;
use deal_calc::telemetry::LogFormat;
use std::io::Write;

#[test]
fn test_load_config_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"
        [engine]
        default_reveal_count = 5

        [board]
        preset = "double-deal"

        [telemetry]
        log_level = "debug"
        log_format = "json"
    "#
    )
    .unwrap();

    let config = Config::load(file.path()).unwrap();
    assert_eq!(config.engine.default_reveal_count, 5);
    assert_eq!(config.board.preset, "double-deal");
    assert_eq!(config.board.million_cases, 4);
    assert_eq!(config.telemetry.log_format, LogFormat::Json);
}

#[test]
fn test_load_malformed_config() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "[engine\ndefault_reveal_count = ").unwrap();
    assert!(Config::load(file.path()).is_err());
}

#[test]
fn test_example_config_parses() {
    let config: Config = toml::from_str(include_str!("../../config.toml.example")).unwrap();
    assert_eq!(config.board.preset, "standard");
}
