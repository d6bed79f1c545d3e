// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Errors for the HTTP side of the pipeline: request decoding, route
//! registration and the server lifecycle.

use std::net::SocketAddr;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

/// A request body that could not be decoded into the endpoint's request type.
///
/// Unlike [`crate::errors::ServiceError`], this is surfaced as a non-200
/// response.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("failed to decode {endpoint} request: {source}")]
    Decode {
        endpoint: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

impl TransportError {
    pub fn status(&self) -> StatusCode {
        match self {
            TransportError::Decode { .. } => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for TransportError {
    fn into_response(self) -> Response {
        let body = Json(json!({ "error": self.to_string() }));
        (self.status(), body).into_response()
    }
}

/// Errors raised while building a route table
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteError {
    #[error("route '{0}' is already registered")]
    DuplicatePath(String),

    #[error("route '{0}' must start with '/'")]
    InvalidPath(String),
}

/// Errors raised while starting or running the HTTP server
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("failed to bind {address}: {source}")]
    Bind {
        address: SocketAddr,
        #[source]
        source: std::io::Error,
    },

    #[error("server terminated with an I/O error: {0}")]
    Serve(#[source] std::io::Error),
}
