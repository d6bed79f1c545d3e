// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::str::FromStr;

use crate::config::consts::{ENV_HOST, ENV_LOG_FILTER, ENV_LOG_FORMAT, ENV_PORT, ENV_TRUNCATE_POLICY};
use crate::config::Config;
use crate::errors::ConfigError;

/// Overlay environment variables onto `config`.
///
/// `lookup` stands in for `std::env::var` so callers (and tests) control the
/// source. Empty values are treated as unset.
pub fn apply_env_overrides<F>(mut config: Config, lookup: F) -> Result<Config, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

    if let Some(host) = get(ENV_HOST) {
        config.server.host = host;
    }
    if let Some(port) = get(ENV_PORT) {
        config.server.port = parse_override(ENV_PORT, port)?;
    }
    if let Some(policy) = get(ENV_TRUNCATE_POLICY) {
        config.service.truncate_policy = parse_override(ENV_TRUNCATE_POLICY, policy)?;
    }
    if let Some(format) = get(ENV_LOG_FORMAT) {
        config.logging.format = parse_override(ENV_LOG_FORMAT, format)?;
    }
    if let Some(filter) = get(ENV_LOG_FILTER) {
        config.logging.filter = filter;
    }

    Ok(config)
}

fn parse_override<T>(key: &'static str, value: String) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: ToString,
{
    match value.parse::<T>() {
        Ok(parsed) => Ok(parsed),
        Err(e) => Err(ConfigError::InvalidOverride {
            key,
            reason: e.to_string(),
            value,
        }),
    }
}
