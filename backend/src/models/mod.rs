//! Request and response shapes exchanged by the credential endpoints.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};

use crate::error::RequestError;

pub mod auth;

pub use auth::{
    ChangeEmailRequest, ChangePasswordRequest, ChangeUsernameRequest, LoginRequest,
    LoginResponse, LoginType, RegisterRequest,
};

/// Decodes a raw JSON payload into a request shape.
///
/// Unknown fields are ignored and absent fields fall back to empty strings.
/// A top-level `null` yields the all-empty shape. Anything else that is not a
/// JSON object of the right field types is a [`RequestError::MalformedPayload`].
pub fn decode<T: DeserializeOwned + Default>(payload: &[u8]) -> Result<T, RequestError> {
    serde_json::from_slice::<Option<T>>(payload)
        .map(Option::unwrap_or_default)
        .map_err(malformed)
}

pub(crate) fn malformed(err: serde_json::Error) -> RequestError {
    tracing::debug!(error = %err, "Failed to decode request payload");
    RequestError::MalformedPayload(err)
}

/// Treats an explicit `null` like a missing field.
pub(crate) fn nullable_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn top_level_null_decodes_to_empty_shape() {
        let request: RegisterRequest = decode(b"null").expect("decode");
        assert_eq!(request, RegisterRequest::default());

        let request: ChangeEmailRequest = decode(b" null ").expect("decode");
        assert_eq!(request.password, "");
    }

    #[test]
    fn other_top_level_values_are_malformed() {
        for payload in [&b"[]"[..], &b"\"null\""[..], &b"7"[..], &b""[..]] {
            assert!(matches!(
                decode::<RegisterRequest>(payload),
                Err(RequestError::MalformedPayload(_))
            ));
        }
    }
}
