/*!
 * Tests for application configuration
 */

use anyhow::Result;
use log::LevelFilter;
use ttmlconv::app_config::{Config, LogLevel};
use ttmlconv::scaling::ScalingDescriptor;
use crate::common;

/// Test the default configuration
#[test]
fn test_default_shouldUseBroadcastScalingAndInfoLevel() {
    let config = Config::default();
    assert_eq!(config.scaling, ScalingDescriptor::default());
    assert_eq!(config.log_level, LogLevel::Info);
    assert!(config.validate().is_ok());
}

/// Test loading a partial configuration file
#[test]
fn test_fromFile_withPartialScaling_shouldFillDefaults() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let path = common::create_test_file(
        temp_dir.path(),
        "conf.json",
        r#"{"scaling": {"target_width": 1280, "target_height": 720}, "log_level": "debug"}"#,
    )?;

    let config = Config::from_file(&path)?;
    assert_eq!(config.scaling.source_width, 1600.0);
    assert_eq!(config.scaling.source_height, 900.0);
    assert_eq!(config.scaling.target_width, 1280.0);
    assert_eq!(config.scaling.target_height, 720.0);
    assert_eq!(config.log_level, LogLevel::Debug);
    Ok(())
}

/// Test that a missing file falls back to defaults
#[test]
fn test_loadOrDefault_withMissingFile_shouldReturnDefaults() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let config = Config::load_or_default(temp_dir.path().join("absent.json"))?;
    assert_eq!(config, Config::default());
    Ok(())
}

/// Test that invalid JSON is reported
#[test]
fn test_fromFile_withInvalidJson_shouldFail() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let path = common::create_test_file(temp_dir.path(), "conf.json", "{ not json")?;
    assert!(Config::from_file(&path).is_err());
    Ok(())
}

/// Test that bad scaling fails validation
#[test]
fn test_validate_withZeroTarget_shouldFail() {
    let mut config = Config::default();
    config.scaling.target_width = 0.0;
    assert!(config.validate().is_err());
}

/// Test log level mapping
#[test]
fn test_logLevel_toLevelFilter_shouldMapEachLevel() {
    assert_eq!(LogLevel::Error.to_level_filter(), LevelFilter::Error);
    assert_eq!(LogLevel::Warn.to_level_filter(), LevelFilter::Warn);
    assert_eq!(LogLevel::Info.to_level_filter(), LevelFilter::Info);
    assert_eq!(LogLevel::Debug.to_level_filter(), LevelFilter::Debug);
    assert_eq!(LogLevel::Trace.to_level_filter(), LevelFilter::Trace);
}

/// Test that a command line level overrides the configured one
#[test]
fn test_effectiveLogLevel_withCliLevel_shouldOverrideConfig() {
    let config = Config {
        log_level: LogLevel::Warn,
        ..Config::default()
    };
    assert_eq!(config.effective_log_level(Some(LogLevel::Trace)), LogLevel::Trace);
    assert_eq!(config.effective_log_level(None), LogLevel::Warn);
}
