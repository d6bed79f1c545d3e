// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use async_trait::async_trait;
use std::sync::Arc;

use super::respond_with_value;
use crate::envelope::{TruncateRequest, ValueResponse};
use crate::traits::{Endpoint, StringService};

/// `POST /truncate`
pub struct TruncateEndpoint {
    service: Arc<dyn StringService>,
}

impl TruncateEndpoint {
    pub fn new(service: Arc<dyn StringService>) -> Self {
        Self { service }
    }
}

#[async_trait]
impl Endpoint for TruncateEndpoint {
    type Request = TruncateRequest;
    type Response = ValueResponse;

    async fn call(&self, request: TruncateRequest) -> ValueResponse {
        let length = request.l;
        respond_with_value(self.name(), &request.s, |s| {
            self.service.truncate(s, length)
        })
    }

    fn name(&self) -> &'static str {
        "truncate"
    }
}
