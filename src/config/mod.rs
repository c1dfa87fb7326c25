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

//! Client configuration
//!
//! Loads the client's settings from a JSON file under the user config
//! directory. A missing file means defaults; an unreadable or invalid file
//! is an error. Unlike feed fetches, configuration problems are never
//! silently swallowed: a user who wrote a config wants to know it was
//! ignored.
//!
//! # Example
//!
//! ```no_run
//! use kezan_protocol::config::ClientConfig;
//!
//! let config = ClientConfig::load_or_default(None)?;
//! println!("API at {}", config.api_base_url);
//! # Ok::<(), kezan_protocol::config::ConfigError>(())
//! ```

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

/// Default API base URL (the local backend)
const DEFAULT_API_BASE_URL: &str = "http://localhost:8000/api";

/// Default per-request timeout in seconds
const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Errors that can occur while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Configuration file exists but cannot be read.
    #[error("Failed to read config {path}: {source}")]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Configuration file is not valid JSON for `ClientConfig`.
    #[error("Invalid config {path}: {message}")]
    Invalid { path: PathBuf, message: String },
}

/// Settings for the companion client.
///
/// All fields have defaults, and unknown fields in the file are rejected
/// so typos fail loudly instead of silently reverting to defaults.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct ClientConfig {
    /// Base URL of the Kezan Protocol API
    pub api_base_url: String,

    /// Per-request timeout, in seconds
    pub timeout_secs: u64,

    /// Optional shortcuts file overriding the built-in chord table
    pub shortcuts_file: Option<PathBuf>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            shortcuts_file: None,
        }
    }
}

impl ClientConfig {
    /// Default config file location under the user config directory.
    ///
    /// Returns None on systems with no config directory.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("kezan-protocol").join("config.json"))
    }

    /// Loads configuration from the given file.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Unreadable` when the file cannot be read and
    /// `ConfigError::Invalid` when it does not parse as a `ClientConfig`.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Unreadable {
            path: path.to_path_buf(),
            source,
        })?;

        serde_json::from_str(&content).map_err(|e| ConfigError::Invalid {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Loads configuration, falling back to defaults when no file exists.
    ///
    /// With `path = None`, the default location is used; a missing file at
    /// either location yields `ClientConfig::default()`.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, ConfigError> {
        let path = match path {
            Some(p) => p.to_path_buf(),
            None => match Self::default_path() {
                Some(p) => p,
                None => return Ok(Self::default()),
            },
        };

        if !path.exists() {
            return Ok(Self::default());
        }

        Self::load(&path)
    }

    /// Per-request timeout as a Duration.
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

#[cfg(test)]
mod tests;
