// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::config::ServiceConfig;
use crate::errors::ServiceError;
use crate::traits::StringService;

use super::operations::{self, TruncatePolicy};

/// Stateless [`StringService`] backed by the functions in
/// [`super::operations`].
#[derive(Debug, Clone, Copy, Default)]
pub struct BasicStringService {
    truncate_policy: TruncatePolicy,
}

impl BasicStringService {
    pub fn new(truncate_policy: TruncatePolicy) -> Self {
        Self { truncate_policy }
    }

    pub fn from_config(config: &ServiceConfig) -> Self {
        Self::new(config.truncate_policy)
    }

    pub fn truncate_policy(&self) -> TruncatePolicy {
        self.truncate_policy
    }
}

impl StringService for BasicStringService {
    fn uppercase(&self, s: &str) -> Result<String, ServiceError> {
        operations::uppercase(s)
    }

    fn count(&self, s: &str) -> usize {
        operations::count(s)
    }

    fn reverse(&self, s: &str) -> Result<String, ServiceError> {
        operations::reverse(s)
    }

    fn truncate(&self, s: &str, length: i64) -> Result<String, ServiceError> {
        operations::truncate(s, length, self.truncate_policy)
    }
}
