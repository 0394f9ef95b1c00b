// ABOUTME: Tests for logging configuration parsing from the environment
// ABOUTME: Runs serially since RUST_LOG and LOG_FORMAT are process-wide
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use std::env;

use kpkn_engine::logging::{LogFormat, LoggingConfig};
use serial_test::serial;

fn clear_logging_env() {
    env::remove_var("RUST_LOG");
    env::remove_var("LOG_FORMAT");
    env::remove_var("LOG_INCLUDE_LOCATION");
}

#[test]
fn test_log_format_parsing() {
    assert_eq!("json".parse::<LogFormat>().unwrap(), LogFormat::Json);
    assert_eq!("PRETTY".parse::<LogFormat>().unwrap(), LogFormat::Pretty);
    assert_eq!("compact".parse::<LogFormat>().unwrap(), LogFormat::Compact);
    assert!("xml".parse::<LogFormat>().is_err());
}

#[test]
#[serial]
fn test_defaults_without_environment() {
    clear_logging_env();

    let config = LoggingConfig::from_env();
    assert_eq!(config, LoggingConfig::default());
    assert_eq!(config.level, "warn");
    assert_eq!(config.format, LogFormat::Compact);
    assert!(!config.include_location);
}

#[test]
#[serial]
fn test_environment_overrides() {
    clear_logging_env();
    env::set_var("RUST_LOG", "kpkn_engine=debug");
    env::set_var("LOG_FORMAT", "json");
    env::set_var("LOG_INCLUDE_LOCATION", "1");

    let config = LoggingConfig::from_env();
    assert_eq!(config.level, "kpkn_engine=debug");
    assert_eq!(config.format, LogFormat::Json);
    assert!(config.include_location);

    clear_logging_env();
}

#[test]
#[serial]
fn test_unknown_format_falls_back_to_compact() {
    clear_logging_env();
    env::set_var("LOG_FORMAT", "xml");

    assert_eq!(LoggingConfig::from_env().format, LogFormat::Compact);

    clear_logging_env();
}

#[test]
fn test_with_level_keeps_format() {
    let config = LoggingConfig {
        format: LogFormat::Pretty,
        ..LoggingConfig::default()
    }
    .with_level("trace");

    assert_eq!(config.level, "trace");
    assert_eq!(config.format, LogFormat::Pretty);
}
