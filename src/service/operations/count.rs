// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

/// Number of Unicode scalar values (code points) in `s`.
///
/// This is not the byte length: `"héllo"` counts 5 even though it is 6 bytes
/// of UTF-8.
pub fn count(s: &str) -> usize {
    s.chars().count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rstest::rstest;

    #[rstest]
    #[case("", 0)]
    #[case("hello", 5)]
    #[case("hello world", 11)]
    #[case("héllo", 5)]
    #[case("日本語", 3)]
    #[case("🦀🦀", 2)]
    fn counts_code_points(#[case] input: &str, #[case] expected: usize) {
        assert_eq!(count(input), expected);
    }

    #[test]
    fn differs_from_byte_length_for_multibyte_input() {
        let s = "naïve";
        assert_eq!(count(s), 5);
        assert_eq!(s.len(), 6);
    }

    proptest! {
        #[test]
        fn matches_char_iterator_length(s in any::<String>()) {
            prop_assert_eq!(count(&s), s.chars().count());
        }

        #[test]
        fn is_additive_over_concatenation(a in any::<String>(), b in any::<String>()) {
            let joined = format!("{a}{b}");
            prop_assert_eq!(count(&joined), count(&a) + count(&b));
        }
    }
}
