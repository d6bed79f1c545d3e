// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use async_trait::async_trait;
use std::sync::Arc;

use super::respond_with_value;
use crate::envelope::{StringRequest, ValueResponse};
use crate::traits::{Endpoint, StringService};

/// `POST /uppercase`
pub struct UppercaseEndpoint {
    service: Arc<dyn StringService>,
}

impl UppercaseEndpoint {
    pub fn new(service: Arc<dyn StringService>) -> Self {
        Self { service }
    }
}

#[async_trait]
impl Endpoint for UppercaseEndpoint {
    type Request = StringRequest;
    type Response = ValueResponse;

    async fn call(&self, request: StringRequest) -> ValueResponse {
        respond_with_value(self.name(), &request.s, |s| self.service.uppercase(s))
    }

    fn name(&self) -> &'static str {
        "uppercase"
    }
}
