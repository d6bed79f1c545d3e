// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! JSON request and response envelopes.
//!
//! Requests are plain serde structs. String-valued responses hold a
//! `Result<String, ServiceError>` and only flatten it into the
//! `{"v": ..., "err": ...}` wire shape when serialized.

pub mod requests;
pub mod responses;

pub use requests::{StringRequest, TruncateRequest};
pub use responses::{CountResponse, ValueResponse};
