// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading or resolving configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The config file could not be read
    #[error("failed to read config file '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The config file is not valid YAML for the expected schema
    #[error("failed to parse YAML config '{}': {source}", path.display())]
    Yaml {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    /// The config file is not valid TOML for the expected schema
    #[error("failed to parse TOML config '{}': {source}", path.display())]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// The file extension maps to no known format
    #[error(
        "unsupported config file format '{}': expected .yaml, .yml or .toml",
        path.display()
    )]
    UnsupportedFormat { path: PathBuf },

    /// An environment override could not be parsed
    #[error("invalid value '{value}' for {key}: {reason}")]
    InvalidOverride {
        key: &'static str,
        value: String,
        reason: String,
    },

    /// Host and port do not resolve to a socket address
    #[error("invalid bind address '{address}': {reason}")]
    InvalidAddress { address: String, reason: String },
}
