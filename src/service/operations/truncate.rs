// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

use crate::errors::ServiceError;

/// How `truncate` treats a length outside `0..=count(s)`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TruncatePolicy {
    /// Report the length as a business error.
    #[default]
    Reject,
    /// Clamp negative lengths to 0 and long ones to the character count.
    Clamp,
}

impl fmt::Display for TruncatePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TruncatePolicy::Reject => write!(f, "reject"),
            TruncatePolicy::Clamp => write!(f, "clamp"),
        }
    }
}

impl FromStr for TruncatePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "reject" => Ok(TruncatePolicy::Reject),
            "clamp" => Ok(TruncatePolicy::Clamp),
            other => Err(format!("unknown truncate policy '{other}', expected 'reject' or 'clamp'")),
        }
    }
}

/// Returns the first `length` characters of `s`.
///
/// The empty-input check runs before the length check, so `truncate("", 99)`
/// reports `EmptyInput` regardless of policy.
pub fn truncate(s: &str, length: i64, policy: TruncatePolicy) -> Result<String, ServiceError> {
    if s.is_empty() {
        return Err(ServiceError::EmptyInput);
    }

    let available = s.chars().count();
    let take = match usize::try_from(length) {
        Ok(n) if n <= available => n,
        _ => match policy {
            TruncatePolicy::Reject => {
                return Err(ServiceError::InvalidLength { length, available });
            }
            TruncatePolicy::Clamp if length < 0 => 0,
            TruncatePolicy::Clamp => available,
        },
    };

    Ok(char_prefix(s, take).to_string())
}

fn char_prefix(s: &str, chars: usize) -> &str {
    match s.char_indices().nth(chars) {
        Some((byte_index, _)) => &s[..byte_index],
        None => s,
    }
}
