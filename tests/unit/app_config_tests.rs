/*!
 * Tests for application configuration functionality
 */

use anyhow::Result;
use subcue::app_config::{Config, LogLevel, OutputFormat};
use crate::common;

/// Test default configuration values
#[test]
fn test_default_config_withNoParameters_shouldHaveCorrectDefaults() {
    let config = Config::default();

    assert_eq!(config.default_encoding, "utf-8");
    assert_eq!(config.output_format, OutputFormat::Summary);
    assert_eq!(config.log_level, LogLevel::Info);
    assert!(config.validate().is_ok());
}

/// Test configuration validation
#[test]
fn test_config_validation_withUnknownEncoding_shouldFail() {
    let mut config = Config::default();

    config.default_encoding = "windows-1252".to_string();
    assert!(config.validate().is_ok());

    config.default_encoding = "klingon".to_string();
    assert!(config.validate().is_err());
}

/// Test partial JSON configuration falling back to defaults
#[test]
fn test_config_deserialize_withMissingFields_shouldUseDefaults() -> Result<()> {
    let config: Config = serde_json::from_str(r#"{ "output_format": "json" }"#)?;

    assert_eq!(config.default_encoding, "utf-8");
    assert_eq!(config.output_format, OutputFormat::Json);
    assert_eq!(config.log_level, LogLevel::Info);
    Ok(())
}

/// Test that a default config file is written when none exists
#[test]
fn test_loadOrCreate_withMissingFile_shouldWriteDefaults() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let path = temp_dir.path().join("subcue.json");

    let created = Config::load_or_create(&path)?;
    assert!(path.exists());

    let loaded = Config::load_or_create(&path)?;
    assert_eq!(created, loaded);
    Ok(())
}

/// Test loading an existing config file
#[test]
fn test_loadOrCreate_withExistingFile_shouldLoadValues() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let path = common::create_test_file(
        temp_dir.path(),
        "subcue.json",
        r#"{ "default_encoding": "latin1", "output_format": "srt", "log_level": "debug" }"#,
    )?;

    let config = Config::load_or_create(&path)?;

    assert_eq!(config.default_encoding, "latin1");
    assert_eq!(config.output_format, OutputFormat::Srt);
    assert_eq!(config.log_level, LogLevel::Debug);
    Ok(())
}

#[test]
fn test_outputFormat_fromStr_shouldParseCaseInsensitive() {
    assert_eq!("JSON".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
    assert_eq!("srt".parse::<OutputFormat>().unwrap(), OutputFormat::Srt);
    assert!("vtt".parse::<OutputFormat>().is_err());
    assert_eq!(OutputFormat::Summary.to_string(), "summary");
}
