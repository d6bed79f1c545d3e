// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

pub mod config;        // config files + env overrides
pub mod endpoints;     // per-operation endpoint adapters
pub mod envelope;      // JSON request/response envelopes
pub mod errors;        // error handling
pub mod observability;
pub mod service;       // the string operations
pub mod transport;     // HTTP bindings, route table, server
pub mod traits;        // unified abstractions
