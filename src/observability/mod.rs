// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Observability module for structured logging and tracing.
//!
//! All diagnostic output goes through message structs that implement
//! `Display` and [`messages::StructuredLog`], so the log text lives in one
//! place and every event carries its fields as structured data.
//!
//! Messages are organized by subsystem:
//! * `messages::server` - server startup, route registration and shutdown
//! * `messages::endpoint` - per-request endpoint invocation and failures
//!
//! # Usage
//!
//! ```rust
//! use stringsvc::observability::messages::{endpoint::EndpointInvoked, StructuredLog};
//!
//! let msg = EndpointInvoked {
//!     endpoint: "uppercase",
//!     input_size: 5,
//! };
//!
//! let span = msg.span("endpoint_call");
//! let _guard = span.enter();
//! msg.log();
//! ```

pub mod messages;
