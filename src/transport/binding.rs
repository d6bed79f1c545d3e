// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::sync::Arc;

use axum::body::Bytes;
use axum::routing::{post, MethodRouter};
use axum::Json;
use serde::de::DeserializeOwned;

use crate::errors::TransportError;
use crate::observability::messages::endpoint::RequestDecodeFailed;
use crate::observability::messages::StructuredLog;
use crate::traits::Endpoint;

/// Decode a raw request body as JSON.
///
/// `Content-Type` is not inspected; any body that parses is accepted. A
/// `null` body yields `T::default()`. Data after the first JSON value is an
/// error.
pub fn decode_request<T: DeserializeOwned + Default>(
    endpoint: &'static str,
    body: &[u8],
) -> Result<T, TransportError> {
    serde_json::from_slice::<Option<T>>(body)
        .map(Option::unwrap_or_default)
        .map_err(|source| {
            let error = TransportError::Decode { endpoint, source };
            RequestDecodeFailed {
                endpoint,
                body_size: body.len(),
                error: &error,
            }
            .log();
            error
        })
}

/// Decode, invoke, encode.
pub async fn serve_request<E>(endpoint: &E, body: &[u8]) -> Result<Json<E::Response>, TransportError>
where
    E: Endpoint + ?Sized,
{
    let request = decode_request::<E::Request>(endpoint.name(), body)?;
    let response = endpoint.call(request).await;
    Ok(Json(response))
}

/// Wrap an endpoint in a POST-only axum handler.
pub fn bind_endpoint<E>(endpoint: Arc<E>) -> MethodRouter
where
    E: Endpoint + 'static,
{
    post(move |body: Bytes| {
        let endpoint = Arc::clone(&endpoint);
        async move { serve_request(endpoint.as_ref(), &body).await }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::endpoints::{CountEndpoint, UppercaseEndpoint};
    use crate::envelope::{StringRequest, ValueResponse};
    use crate::errors::ServiceError;
    use crate::service::BasicStringService;

    fn uppercase() -> UppercaseEndpoint {
        UppercaseEndpoint::new(Arc::new(BasicStringService::default()))
    }

    #[test]
    fn decodes_valid_body() {
        let req: StringRequest = decode_request("uppercase", br#"{"s":"abc"}"#).unwrap();
        assert_eq!(req.s, "abc");
    }

    #[test]
    fn null_body_decodes_as_default_request() {
        let req: StringRequest = decode_request("uppercase", b"null").unwrap();
        assert_eq!(req, StringRequest::default());
    }

    #[test]
    fn trailing_data_is_rejected() {
        let result = decode_request::<StringRequest>("uppercase", br#"{"s":"hi"} trailing"#);
        assert!(result.is_err());
    }

    #[test]
    fn decode_failure_names_endpoint() {
        let err = decode_request::<StringRequest>("reverse", b"not json").unwrap_err();
        assert!(err.to_string().contains("reverse"));
    }

    #[tokio::test]
    async fn serve_request_runs_pipeline() {
        let Json(response) = serve_request(&uppercase(), br#"{"s":"hello"}"#)
            .await
            .unwrap();
        assert_eq!(response, ValueResponse::ok("HELLO"));
    }

    #[tokio::test]
    async fn business_error_is_not_a_transport_error() {
        let Json(response) = serve_request(&uppercase(), br#"{"s":""}"#).await.unwrap();
        assert_eq!(response.error(), Some(&ServiceError::EmptyInput));
    }

    #[tokio::test]
    async fn malformed_body_is_a_transport_error() {
        let result = serve_request(&uppercase(), br#"{"s":"#).await;
        assert!(matches!(result, Err(TransportError::Decode { endpoint: "uppercase", .. })));
    }

    #[tokio::test]
    async fn wrong_shape_is_a_transport_error() {
        let count = CountEndpoint::new(Arc::new(BasicStringService::default()));
        let result = serve_request(&count, br#"["hello"]"#).await;
        assert!(result.is_err());
    }
}
