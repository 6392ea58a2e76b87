// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use std::io::Write;
use yare::parameterized;

#[test]
fn default_is_fail_fast() {
    assert_eq!(RegistryConfig::default().delivery, DeliveryPolicy::FailFast);
}

#[test]
fn empty_document_uses_defaults() {
    let config = RegistryConfig::from_toml_str("").unwrap();
    assert_eq!(config, RegistryConfig::default());
}

#[parameterized(
    fail_fast = { r#"delivery = "fail_fast""#, DeliveryPolicy::FailFast },
    collect = { r#"delivery = "collect""#, DeliveryPolicy::Collect },
)]
fn parses_delivery_policy(input: &str, expected: DeliveryPolicy) {
    let config = RegistryConfig::from_toml_str(input).unwrap();
    assert_eq!(config.delivery, expected);
}

#[parameterized(
    unknown_policy = { r#"delivery = "retry""# },
    unknown_field = { r#"priority = 3"# },
    wrong_type = { r#"delivery = 1"# },
)]
fn rejects_invalid_config(input: &str) {
    let err = RegistryConfig::from_toml_str(input).unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
}

#[test]
fn load_reads_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, r#"delivery = "collect""#).unwrap();

    let config = RegistryConfig::load(file.path()).unwrap();
    assert_eq!(config.delivery, DeliveryPolicy::Collect);
}

#[test]
fn load_missing_file_reports_path() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("missing.toml");

    let err = RegistryConfig::load(&path).unwrap_err();
    match err {
        ConfigError::Read { path: reported, .. } => assert_eq!(reported, path),
        other => panic!("expected read error, got {other:?}"),
    }
}

#[test]
fn serializes_policy_in_snake_case() {
    let config = RegistryConfig::new(DeliveryPolicy::FailFast);
    let rendered = toml::to_string(&config).unwrap();
    assert_eq!(rendered.trim(), r#"delivery = "fail_fast""#);
}
