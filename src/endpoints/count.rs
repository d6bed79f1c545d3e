// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use async_trait::async_trait;
use std::sync::Arc;

use super::observe;
use crate::envelope::{CountResponse, StringRequest};
use crate::traits::{Endpoint, StringService};

/// `POST /count`
pub struct CountEndpoint {
    service: Arc<dyn StringService>,
}

impl CountEndpoint {
    pub fn new(service: Arc<dyn StringService>) -> Self {
        Self { service }
    }
}

#[async_trait]
impl Endpoint for CountEndpoint {
    type Request = StringRequest;
    type Response = CountResponse;

    async fn call(&self, request: StringRequest) -> CountResponse {
        let v = observe(self.name(), &request.s, |s| self.service.count(s));
        CountResponse { v }
    }

    fn name(&self) -> &'static str {
        "count"
    }
}
