// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Adapter between a decoded request envelope and a response envelope.
///
/// The transport layer is generic over this trait, so each route gets a
/// statically typed request and response pair. `call` is infallible: business
/// failures must be expressed inside `Self::Response`. A `null` body decodes
/// as `Self::Request::default()`.
#[async_trait]
pub trait Endpoint: Send + Sync {
    type Request: DeserializeOwned + Default + Send;
    type Response: Serialize + Send;

    async fn call(&self, request: Self::Request) -> Self::Response;

    fn name(&self) -> &'static str;
}
