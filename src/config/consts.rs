// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

/// Default listen host (all interfaces)
pub const DEFAULT_HOST: &str = "0.0.0.0";
/// Default listen port
pub const DEFAULT_PORT: u16 = 8080;
/// Default `tracing_subscriber::EnvFilter` directive
pub const DEFAULT_LOG_FILTER: &str = "info";

pub const ENV_HOST: &str = "STRINGSVC_HOST";
pub const ENV_PORT: &str = "STRINGSVC_PORT";
pub const ENV_TRUNCATE_POLICY: &str = "STRINGSVC_TRUNCATE_POLICY";
pub const ENV_LOG_FORMAT: &str = "STRINGSVC_LOG_FORMAT";
/// Standard filter variable; overrides `logging.filter` when set
pub const ENV_LOG_FILTER: &str = "RUST_LOG";
