// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::errors::ServiceError;

/// The operation set exposed over HTTP.
///
/// Implementations must be pure: no shared mutable state, safe to call from
/// any number of concurrent requests.
pub trait StringService: Send + Sync {
    fn uppercase(&self, s: &str) -> Result<String, ServiceError>;

    /// Never fails; the empty string counts 0.
    fn count(&self, s: &str) -> usize;

    fn reverse(&self, s: &str) -> Result<String, ServiceError>;

    fn truncate(&self, s: &str, length: i64) -> Result<String, ServiceError>;
}
