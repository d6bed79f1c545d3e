// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use serde::{Deserialize, Deserializer, Serialize};

/// Decode `null` as the field's zero value, as for a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Body of `/uppercase`, `/count` and `/reverse`.
///
/// A missing or `null` `s` decodes as the empty string, the field name is
/// also accepted as `S`, and unknown fields are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct StringRequest {
    #[serde(default, alias = "S", deserialize_with = "null_as_default")]
    pub s: String,
}

impl StringRequest {
    pub fn new(s: impl Into<String>) -> Self {
        Self { s: s.into() }
    }
}

/// Body of `/truncate`.
///
/// `l` is signed so negative lengths reach the operation and are handled by
/// its policy rather than failing to decode. Field names and `null` handling
/// follow [`StringRequest`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct TruncateRequest {
    #[serde(default, alias = "S", deserialize_with = "null_as_default")]
    pub s: String,
    #[serde(default, alias = "L", deserialize_with = "null_as_default")]
    pub l: i64,
}

impl TruncateRequest {
    pub fn new(s: impl Into<String>, l: i64) -> Self {
        Self { s: s.into(), l }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_string_request() {
        let req: StringRequest = serde_json::from_str(r#"{"s": "hello"}"#).unwrap();
        assert_eq!(req, StringRequest::new("hello"));
    }

    #[test]
    fn missing_fields_take_zero_values() {
        let req: StringRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(req.s, "");

        let req: TruncateRequest = serde_json::from_str(r#"{"s": "abc"}"#).unwrap();
        assert_eq!(req, TruncateRequest::new("abc", 0));
    }

    #[test]
    fn ignores_unknown_fields() {
        let req: StringRequest = serde_json::from_str(r#"{"s": "x", "extra": 1}"#).unwrap();
        assert_eq!(req.s, "x");
    }

    #[test]
    fn accepts_negative_length() {
        let req: TruncateRequest = serde_json::from_str(r#"{"s": "abc", "l": -2}"#).unwrap();
        assert_eq!(req.l, -2);
    }

    #[test]
    fn null_fields_take_zero_values() {
        let req: StringRequest = serde_json::from_str(r#"{"s": null}"#).unwrap();
        assert_eq!(req, StringRequest::default());

        let req: TruncateRequest = serde_json::from_str(r#"{"s": "abc", "l": null}"#).unwrap();
        assert_eq!(req, TruncateRequest::new("abc", 0));
    }

    #[test]
    fn accepts_capitalized_field_names() {
        let req: StringRequest = serde_json::from_str(r#"{"S": "hello"}"#).unwrap();
        assert_eq!(req.s, "hello");

        let req: TruncateRequest = serde_json::from_str(r#"{"S": "hello", "L": 2}"#).unwrap();
        assert_eq!(req, TruncateRequest::new("hello", 2));
    }

    #[test]
    fn rejects_wrong_field_types() {
        assert!(serde_json::from_str::<StringRequest>(r#"{"s": 5}"#).is_err());
        assert!(serde_json::from_str::<TruncateRequest>(r#"{"s": "a", "l": "3"}"#).is_err());
        assert!(serde_json::from_str::<TruncateRequest>(r#"{"s": "a", "l": 1.5}"#).is_err());
    }
}
