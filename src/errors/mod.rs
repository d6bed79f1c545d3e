// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

mod config;
mod service;
mod transport;

pub use config::ConfigError;
pub use service::ServiceError;
pub use transport::{RouteError, ServerError, TransportError};
