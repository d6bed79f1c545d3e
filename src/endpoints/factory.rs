// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::sync::Arc;

use super::{CountEndpoint, ReverseEndpoint, TruncateEndpoint, UppercaseEndpoint};
use crate::config::ServiceConfig;
use crate::service::BasicStringService;
use crate::traits::StringService;

/// The four endpoint adapters, all sharing one service instance.
#[derive(Clone)]
pub struct EndpointSet {
    pub uppercase: Arc<UppercaseEndpoint>,
    pub count: Arc<CountEndpoint>,
    pub reverse: Arc<ReverseEndpoint>,
    pub truncate: Arc<TruncateEndpoint>,
}

impl EndpointSet {
    /// Build adapters over any [`StringService`] implementation
    pub fn from_service(service: Arc<dyn StringService>) -> Self {
        Self {
            uppercase: Arc::new(UppercaseEndpoint::new(Arc::clone(&service))),
            count: Arc::new(CountEndpoint::new(Arc::clone(&service))),
            reverse: Arc::new(ReverseEndpoint::new(Arc::clone(&service))),
            truncate: Arc::new(TruncateEndpoint::new(service)),
        }
    }

    /// Build adapters over a [`BasicStringService`] configured from `config`
    pub fn from_config(config: &ServiceConfig) -> Self {
        Self::from_service(Arc::new(BasicStringService::from_config(config)))
    }
}
