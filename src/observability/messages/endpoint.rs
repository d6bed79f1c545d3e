// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for endpoint invocation and request handling.

use std::fmt::{Display, Formatter};
use std::time::Duration;

use tracing::Span;

use super::StructuredLog;
use crate::errors::ServiceError;

/// An endpoint received a decoded request.
///
/// # Log Level
/// `debug!` - Per-request event
pub struct EndpointInvoked<'a> {
    pub endpoint: &'a str,
    pub input_size: usize,
}

impl Display for EndpointInvoked<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Endpoint '{}' invoked: input_size={} bytes",
            self.endpoint, self.input_size
        )
    }
}

impl StructuredLog for EndpointInvoked<'_> {
    fn log(&self) {
        tracing::debug!(
            endpoint = self.endpoint,
            input_size = self.input_size,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!(
            "endpoint",
            span_name = name,
            endpoint = self.endpoint,
            input_size = self.input_size,
        )
    }
}

/// An endpoint produced a successful result.
///
/// # Log Level
/// `debug!` - Per-request event
pub struct EndpointCompleted<'a> {
    pub endpoint: &'a str,
    pub input_size: usize,
    pub output_size: usize,
    pub duration: Duration,
}

impl Display for EndpointCompleted<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Endpoint '{}' completed: input={} bytes, output={} bytes, duration={:?}",
            self.endpoint, self.input_size, self.output_size, self.duration
        )
    }
}

impl StructuredLog for EndpointCompleted<'_> {
    fn log(&self) {
        tracing::debug!(
            endpoint = self.endpoint,
            input_size = self.input_size,
            output_size = self.output_size,
            duration_us = self.duration.as_micros() as u64,
            "{}", self
        );
    }
}

/// An operation rejected its input. The client still gets a 200.
///
/// # Log Level
/// `warn!` - Client sent input the operation refuses
pub struct BusinessErrorReturned<'a> {
    pub endpoint: &'a str,
    pub error: &'a ServiceError,
}

impl Display for BusinessErrorReturned<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Endpoint '{}' returned business error: {}",
            self.endpoint, self.error
        )
    }
}

impl StructuredLog for BusinessErrorReturned<'_> {
    fn log(&self) {
        tracing::warn!(
            endpoint = self.endpoint,
            error = %self.error,
            "{}", self
        );
    }
}

/// A request body could not be decoded.
///
/// # Log Level
/// `warn!` - Malformed client input
pub struct RequestDecodeFailed<'a> {
    pub endpoint: &'a str,
    pub body_size: usize,
    pub error: &'a dyn std::error::Error,
}

impl Display for RequestDecodeFailed<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Failed to decode request for endpoint '{}' ({} bytes): {}",
            self.endpoint, self.body_size, self.error
        )
    }
}

impl StructuredLog for RequestDecodeFailed<'_> {
    fn log(&self) {
        tracing::warn!(
            endpoint = self.endpoint,
            body_size = self.body_size,
            error = %self.error,
            "{}", self
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn completed_message_includes_sizes() {
        let msg = EndpointCompleted {
            endpoint: "reverse",
            input_size: 5,
            output_size: 5,
            duration: Duration::from_millis(1),
        };
        let text = msg.to_string();
        assert!(text.contains("'reverse'"));
        assert!(text.contains("input=5 bytes"));
        assert!(text.contains("output=5 bytes"));
    }

    #[test]
    fn business_error_message_includes_error_text() {
        let error = ServiceError::EmptyInput;
        let msg = BusinessErrorReturned {
            endpoint: "uppercase",
            error: &error,
        };
        assert_eq!(
            msg.to_string(),
            "Endpoint 'uppercase' returned business error: empty string"
        );
    }
}
