// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for server lifecycle events.

use std::fmt::{Display, Formatter};
use std::net::SocketAddr;

use tracing::Span;

use super::StructuredLog;

/// The server is about to bind.
///
/// # Log Level
/// `info!` - Important operational event
pub struct ServerStarting<'a> {
    pub address: SocketAddr,
    pub truncate_policy: &'a str,
}

impl Display for ServerStarting<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Starting string service on {} (truncate_policy={})",
            self.address, self.truncate_policy
        )
    }
}

impl StructuredLog for ServerStarting<'_> {
    fn log(&self) {
        tracing::info!(
            address = %self.address,
            truncate_policy = self.truncate_policy,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!(
            "server",
            span_name = name,
            address = %self.address,
        )
    }
}

/// A route was added to the route table.
///
/// # Log Level
/// `info!` - Important operational event
pub struct RouteRegistered<'a> {
    pub path: &'a str,
    pub endpoint: &'a str,
}

impl Display for RouteRegistered<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Registered POST {} -> endpoint '{}'", self.path, self.endpoint)
    }
}

impl StructuredLog for RouteRegistered<'_> {
    fn log(&self) {
        tracing::info!(path = self.path, endpoint = self.endpoint, "{}", self);
    }
}

/// The listener is bound and accepting connections.
///
/// # Log Level
/// `info!` - Important operational event
pub struct ServerListening {
    pub address: SocketAddr,
    pub route_count: usize,
}

impl Display for ServerListening {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Listening on http://{} with {} routes",
            self.address, self.route_count
        )
    }
}

impl StructuredLog for ServerListening {
    fn log(&self) {
        tracing::info!(
            address = %self.address,
            route_count = self.route_count,
            "{}", self
        );
    }
}

/// Binding the listen address failed. The process cannot continue.
///
/// # Log Level
/// `error!` - Fatal startup failure
pub struct BindFailed<'a> {
    pub address: SocketAddr,
    pub error: &'a dyn std::error::Error,
}

impl Display for BindFailed<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Failed to bind {}: {}", self.address, self.error)
    }
}

impl StructuredLog for BindFailed<'_> {
    fn log(&self) {
        tracing::error!(address = %self.address, error = %self.error, "{}", self);
    }
}

/// Shutdown was requested; in-flight requests are draining.
///
/// # Log Level
/// `info!` - Important operational event
pub struct ShutdownRequested<'a> {
    pub reason: &'a str,
}

impl Display for ShutdownRequested<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Shutdown requested: {}", self.reason)
    }
}

impl StructuredLog for ShutdownRequested<'_> {
    fn log(&self) {
        tracing::info!(reason = self.reason, "{}", self);
    }
}

/// The server loop returned.
///
/// # Log Level
/// `info!` - Important operational event
pub struct ServerStopped {
    pub address: SocketAddr,
}

impl Display for ServerStopped {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Server on {} stopped", self.address)
    }
}

impl StructuredLog for ServerStopped {
    fn log(&self) {
        tracing::info!(address = %self.address, "{}", self);
    }
}
