// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use serde::ser::{Serialize, SerializeStruct, Serializer};

use crate::errors::ServiceError;

/// Response of the string-producing endpoints.
///
/// Serializes as `{"v": "<value>"}` on success and as
/// `{"v": "", "err": "<message>"}` on a business failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValueResponse {
    pub outcome: Result<String, ServiceError>,
}

impl ValueResponse {
    pub fn ok(value: impl Into<String>) -> Self {
        Self {
            outcome: Ok(value.into()),
        }
    }

    pub fn err(error: ServiceError) -> Self {
        Self {
            outcome: Err(error),
        }
    }

    /// The `v` field as it goes on the wire.
    pub fn value(&self) -> &str {
        match &self.outcome {
            Ok(value) => value.as_str(),
            Err(_) => "",
        }
    }

    pub fn error(&self) -> Option<&ServiceError> {
        self.outcome.as_ref().err()
    }
}

impl From<Result<String, ServiceError>> for ValueResponse {
    fn from(outcome: Result<String, ServiceError>) -> Self {
        Self { outcome }
    }
}

impl Serialize for ValueResponse {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match &self.outcome {
            Ok(value) => {
                let mut state = serializer.serialize_struct("ValueResponse", 1)?;
                state.serialize_field("v", value)?;
                state.end()
            }
            Err(error) => {
                let mut state = serializer.serialize_struct("ValueResponse", 2)?;
                state.serialize_field("v", "")?;
                state.serialize_field("err", &error.to_string())?;
                state.end()
            }
        }
    }
}

/// Response of `/count`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct CountResponse {
    pub v: usize,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn success_omits_err_field() {
        let json = serde_json::to_value(ValueResponse::ok("HELLO")).unwrap();
        assert_eq!(json, json!({ "v": "HELLO" }));
    }

    #[test]
    fn empty_success_value_still_has_no_err() {
        let json = serde_json::to_value(ValueResponse::ok("")).unwrap();
        assert_eq!(json, json!({ "v": "" }));
    }

    #[test]
    fn failure_carries_fallback_and_message() {
        let json = serde_json::to_value(ValueResponse::err(ServiceError::EmptyInput)).unwrap();
        assert_eq!(json, json!({ "v": "", "err": "empty string" }));
    }

    #[test]
    fn invalid_length_is_rendered_as_message() {
        let response = ValueResponse::err(ServiceError::InvalidLength {
            length: -1,
            available: 3,
        });
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["v"], "");
        assert_eq!(json["err"], "invalid length -1: string has 3 characters");
    }

    #[test]
    fn accessors_reflect_outcome() {
        let ok = ValueResponse::from(Ok("abc".to_string()));
        assert_eq!(ok.value(), "abc");
        assert!(ok.error().is_none());

        let failed = ValueResponse::from(Err(ServiceError::EmptyInput));
        assert_eq!(failed.value(), "");
        assert_eq!(failed.error(), Some(&ServiceError::EmptyInput));
    }

    #[test]
    fn count_response_shape() {
        let json = serde_json::to_value(CountResponse { v: 5 }).unwrap();
        assert_eq!(json, json!({ "v": 5 }));
    }
}
