// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! HTTP transport for the endpoint adapters.
//!
//! ```text
//! body bytes → decode → Endpoint::call → encode → 200 JSON
//!                 └── TransportError → 400 JSON
//! ```
//!
//! * `binding` - the generic decode/invoke/encode handler for one endpoint
//! * `routes` - the explicit [`RouteTable`] handed to the server
//! * `server` - bind, serve and graceful shutdown

pub mod binding;
pub mod routes;
pub mod server;


pub use binding::{bind_endpoint, decode_request, serve_request};
pub use routes::{string_routes, RouteTable};
pub use server::{bind_listener, serve};
