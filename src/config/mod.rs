// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

pub mod consts;
mod env;
mod loader;

pub use env::apply_env_overrides;
pub use loader::{
    load_config, resolve_config, Config, LogFormat, LoggingConfig, ServerConfig, ServiceConfig,
};
pub use crate::service::TruncatePolicy;
