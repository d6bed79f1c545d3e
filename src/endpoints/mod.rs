// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Endpoint adapters: one per operation.
//!
//! Each adapter implements [`Endpoint`](crate::traits::Endpoint) for a fixed
//! request/response pair, calls into a shared
//! [`StringService`](crate::traits::StringService), and turns the outcome
//! into a response envelope. Adapters never fail; business errors travel in
//! the envelope.

pub mod count;
pub mod factory;
pub mod reverse;
pub mod truncate;
pub mod uppercase;

pub use count::CountEndpoint;
pub use factory::EndpointSet;
pub use reverse::ReverseEndpoint;
pub use truncate::TruncateEndpoint;
pub use uppercase::UppercaseEndpoint;

use std::time::Instant;

use crate::envelope::ValueResponse;
use crate::errors::ServiceError;
use crate::observability::messages::endpoint::{
    BusinessErrorReturned, EndpointCompleted, EndpointInvoked,
};
use crate::observability::messages::StructuredLog;

/// What an operation hands back to its endpoint, as seen by the logs.
pub(crate) trait EndpointOutput {
    /// Bytes of output on success, the business error otherwise.
    fn output_size(&self) -> Result<usize, &ServiceError>;
}

impl EndpointOutput for Result<String, ServiceError> {
    fn output_size(&self) -> Result<usize, &ServiceError> {
        self.as_ref().map(String::len)
    }
}

impl EndpointOutput for usize {
    fn output_size(&self) -> Result<usize, &ServiceError> {
        // decimal digits as written into the JSON body
        Ok(self.checked_ilog10().map_or(1, |d| d as usize + 1))
    }
}

/// Runs an operation inside an endpoint span, logging its outcome.
pub(crate) fn observe<T, F>(endpoint: &'static str, input: &str, op: F) -> T
where
    T: EndpointOutput,
    F: FnOnce(&str) -> T,
{
    let start_msg = EndpointInvoked {
        endpoint,
        input_size: input.len(),
    };
    let span = start_msg.span("endpoint_call");
    let _guard = span.enter();
    start_msg.log();

    let start_time = Instant::now();
    let output = op(input);

    match output.output_size() {
        Ok(output_size) => EndpointCompleted {
            endpoint,
            input_size: start_msg.input_size,
            output_size,
            duration: start_time.elapsed(),
        }
        .log(),
        Err(error) => BusinessErrorReturned { endpoint, error }.log(),
    }

    output
}

/// [`observe`] for the string-producing operations.
pub(crate) fn respond_with_value<F>(endpoint: &'static str, input: &str, op: F) -> ValueResponse
where
    F: FnOnce(&str) -> Result<String, ServiceError>,
{
    ValueResponse::from(observe(endpoint, input, op))
}
