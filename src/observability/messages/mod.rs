// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Centralized message types for structured logging.

pub mod endpoint;
pub mod server;

use tracing::Span;

/// A log message that knows its own level and structured fields.
pub trait StructuredLog: std::fmt::Display {
    /// Emit the message at its level with its fields attached.
    fn log(&self);

    /// A span carrying the same fields, for wrapping the work the message
    /// describes.
    fn span(&self, name: &str) -> Span {
        tracing::info_span!("event", span_name = name)
    }
}
