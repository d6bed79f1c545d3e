// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::errors::ServiceError;

/// Reverses the characters of `s`. Operates on `char`s, so a multi-byte code
/// point is never split.
pub fn reverse(s: &str) -> Result<String, ServiceError> {
    if s.is_empty() {
        return Err(ServiceError::EmptyInput);
    }
    Ok(s.chars().rev().collect())
}
