//! Errors produced while decoding and validating credential requests.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// A single validation failure with a user-facing reason.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{msg}")]
pub struct ErrAuthParam {
    msg: String,
}

impl ErrAuthParam {
    pub fn new(msg: impl Into<String>) -> Self {
        Self { msg: msg.into() }
    }

    /// The reason shown to the end user.
    pub fn message(&self) -> &str {
        &self.msg
    }
}

/// Everything that can stop a request before it reaches business logic.
#[derive(Debug, Error)]
pub enum RequestError {
    /// The payload could not be decoded into the expected shape.
    #[error("malformed payload: {0}")]
    MalformedPayload(#[from] serde_json::Error),
    /// The payload decoded but violates a field rule.
    #[error(transparent)]
    Invalid(#[from] ErrAuthParam),
}

impl RequestError {
    /// Returns the validation failure, if this error is one.
    pub fn as_invalid(&self) -> Option<&ErrAuthParam> {
        match self {
            RequestError::Invalid(err) => Some(err),
            RequestError::MalformedPayload(_) => None,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: String,
}

impl RequestError {
    /// Body sent back to the client for this error.
    pub fn to_error_response(&self) -> ErrorResponse {
        match self {
            RequestError::MalformedPayload(_) => ErrorResponse {
                error: "Bad request".to_string(),
                code: "BAD_REQUEST".to_string(),
            },
            RequestError::Invalid(err) => ErrorResponse {
                error: err.message().to_string(),
                code: "VALIDATION_ERROR".to_string(),
            },
        }
    }
}

impl IntoResponse for RequestError {
    fn into_response(self) -> Response {
        if let RequestError::MalformedPayload(err) = &self {
            tracing::debug!(error = %err, "Rejecting malformed payload");
        }
        (StatusCode::BAD_REQUEST, Json(self.to_error_response())).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn response_json(response: Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("read body");
        serde_json::from_slice(&bytes).expect("json")
    }

    #[test]
    fn err_auth_param_displays_message_verbatim() {
        let err = ErrAuthParam::new("username is required");
        assert_eq!(err.to_string(), "username is required");
        assert_eq!(err.message(), "username is required");
    }

    #[tokio::test]
    async fn invalid_maps_to_bad_request_with_message() {
        let response =
            RequestError::from(ErrAuthParam::new("invalid email format")).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = response_json(response).await;
        assert_eq!(json["error"], "invalid email format");
        assert_eq!(json["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn malformed_payload_hides_decoder_details() {
        let decode_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let response = RequestError::from(decode_err).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = response_json(response).await;
        assert_eq!(json["error"], "Bad request");
        assert_eq!(json["code"], "BAD_REQUEST");
    }

    #[test]
    fn as_invalid_only_matches_validation_failures() {
        let invalid = RequestError::from(ErrAuthParam::new("password is required"));
        assert_eq!(
            invalid.as_invalid().map(ErrAuthParam::message),
            Some("password is required")
        );

        let decode_err = serde_json::from_str::<serde_json::Value>("[").unwrap_err();
        assert!(RequestError::from(decode_err).as_invalid().is_none());
    }
}
