// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Business-level failures raised by the string operations.
//!
//! These never become HTTP error statuses. The response envelope carries
//! their `Display` text in its `err` field, so the messages are part of the
//! wire contract.

use thiserror::Error;

/// Domain rule violations for the string operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ServiceError {
    /// The input string was empty.
    #[error("empty string")]
    EmptyInput,

    /// A truncate length fell outside `0..=available`.
    #[error("invalid length {length}: string has {available} characters")]
    InvalidLength {
        /// The requested length as sent by the client
        length: i64,
        /// Number of characters in the input
        available: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_message_matches_wire_contract() {
        assert_eq!(ServiceError::EmptyInput.to_string(), "empty string");
    }

    #[test]
    fn invalid_length_message_names_both_bounds() {
        let error = ServiceError::InvalidLength {
            length: 10,
            available: 5,
        };
        assert_eq!(
            error.to_string(),
            "invalid length 10: string has 5 characters"
        );
    }
}
