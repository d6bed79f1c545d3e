// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::errors::ServiceError;

/// Converts `s` to uppercase using full Unicode case mapping, so the result
/// may hold more characters than the input (`"ß"` becomes `"SS"`).
pub fn uppercase(s: &str) -> Result<String, ServiceError> {
    if s.is_empty() {
        return Err(ServiceError::EmptyInput);
    }
    Ok(s.to_uppercase())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rstest::rstest;

    #[rstest]
    #[case("hello", "HELLO")]
    #[case("Hello World", "HELLO WORLD")]
    #[case("already UPPER", "ALREADY UPPER")]
    #[case("123 abc!", "123 ABC!")]
    #[case("straße", "STRASSE")]
    #[case("héllo", "HÉLLO")]
    fn uppercases_input(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(uppercase(input).unwrap(), expected);
    }

    #[test]
    fn rejects_empty_input() {
        assert_eq!(uppercase(""), Err(ServiceError::EmptyInput));
    }

    #[test]
    fn whitespace_is_not_empty() {
        assert_eq!(uppercase(" ").unwrap(), " ");
    }

    proptest! {
        #[test]
        fn ascii_result_has_no_lowercase(s in "[ -~]{1,64}") {
            let upper = uppercase(&s).unwrap();
            prop_assert!(!upper.chars().any(|c| c.is_ascii_lowercase()));
        }

        #[test]
        fn ascii_uppercase_is_idempotent(s in "[ -~]{1,64}") {
            let once = uppercase(&s).unwrap();
            let twice = uppercase(&once).unwrap();
            prop_assert_eq!(once, twice);
        }
    }
}
