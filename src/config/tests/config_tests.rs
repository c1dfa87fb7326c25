// Copyright 2025 Eric Jingryd (tidynest@proton.me)
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Client configuration tests

use crate::config::{ClientConfig, ConfigError};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;
use tempfile::TempDir;

#[test]
fn test_defaults() {
    let config = ClientConfig::default();

    assert_eq!(config.api_base_url, "http://localhost:8000/api");
    assert_eq!(config.timeout_secs, 10);
    assert_eq!(config.timeout(), Duration::from_secs(10));
    assert_eq!(config.shortcuts_file, None);
}

#[test]
fn test_load_full_config() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.json");
    fs::write(
        &path,
        r#"{
            "api_base_url": "http://goblin.example:9000/api",
            "timeout_secs": 3,
            "shortcuts_file": "/tmp/shortcuts.conf"
        }"#,
    )
    .unwrap();

    let config = ClientConfig::load(&path).unwrap();

    assert_eq!(config.api_base_url, "http://goblin.example:9000/api");
    assert_eq!(config.timeout(), Duration::from_secs(3));
    assert_eq!(
        config.shortcuts_file,
        Some(PathBuf::from("/tmp/shortcuts.conf"))
    );
}

#[test]
fn test_partial_config_fills_defaults() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.json");
    fs::write(&path, r#"{ "timeout_secs": 30 }"#).unwrap();

    let config = ClientConfig::load(&path).unwrap();

    assert_eq!(config.timeout_secs, 30);
    assert_eq!(config.api_base_url, "http://localhost:8000/api");
}

#[test]
fn test_missing_file_falls_back_to_defaults() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nope.json");

    let config = ClientConfig::load_or_default(Some(&path)).unwrap();
    assert_eq!(config, ClientConfig::default());
}

#[test]
fn test_invalid_json_is_an_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.json");
    fs::write(&path, "timeout = lots").unwrap();

    let err = ClientConfig::load(&path).unwrap_err();
    assert!(matches!(err, ConfigError::Invalid { .. }));
}

#[test]
fn test_unknown_field_is_an_error() {
    // Typos must fail loudly, not silently revert to defaults
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.json");
    fs::write(&path, r#"{ "api_base_uri": "http://x" }"#).unwrap();

    let err = ClientConfig::load_or_default(Some(&path)).unwrap_err();
    assert!(matches!(err, ConfigError::Invalid { .. }));
}

#[test]
fn test_round_trip() {
    let config = ClientConfig {
        api_base_url: "http://localhost:8123/api".to_string(),
        timeout_secs: 5,
        shortcuts_file: Some(PathBuf::from("shortcuts.conf")),
    };

    let json = serde_json::to_string(&config).unwrap();
    let back: ClientConfig = serde_json::from_str(&json).unwrap();
    assert_eq!(back, config);
}
