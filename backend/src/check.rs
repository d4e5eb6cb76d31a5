//! Decode-and-validate dispatch keyed by request kind name.

use std::fmt;
use std::str::FromStr;

use crate::error::RequestError;
use crate::models::{
    self, ChangeEmailRequest, ChangePasswordRequest, ChangeUsernameRequest, LoginRequest,
    LoginResponse, RegisterRequest,
};
use crate::validation::RequestValidator;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestKind {
    Login,
    LoginResponse,
    Register,
    ChangePassword,
    ChangeEmail,
    ChangeUsername,
}

impl RequestKind {
    pub const ALL: [RequestKind; 6] = [
        RequestKind::Login,
        RequestKind::LoginResponse,
        RequestKind::Register,
        RequestKind::ChangePassword,
        RequestKind::ChangeEmail,
        RequestKind::ChangeUsername,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            RequestKind::Login => "login",
            RequestKind::LoginResponse => "login-response",
            RequestKind::Register => "register",
            RequestKind::ChangePassword => "change-password",
            RequestKind::ChangeEmail => "change-email",
            RequestKind::ChangeUsername => "change-username",
        }
    }

    /// Whether payloads of this kind go through a validator after decoding.
    pub fn has_validator(&self) -> bool {
        !matches!(self, RequestKind::Login | RequestKind::LoginResponse)
    }
}

impl fmt::Display for RequestKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownRequestKind(pub String);

impl fmt::Display for UnknownRequestKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let known: Vec<&str> = RequestKind::ALL.iter().map(RequestKind::as_str).collect();
        write!(
            f,
            "unknown request kind '{}' (expected one of: {})",
            self.0,
            known.join(", ")
        )
    }
}

impl std::error::Error for UnknownRequestKind {}

impl FromStr for RequestKind {
    type Err = UnknownRequestKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RequestKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| UnknownRequestKind(s.to_string()))
    }
}

/// Decodes `payload` as `kind` and validates it when that kind has a validator.
pub fn check_payload(
    kind: RequestKind,
    payload: &[u8],
    validator: &RequestValidator,
) -> Result<(), RequestError> {
    match kind {
        RequestKind::Login => models::decode::<LoginRequest>(payload).map(|_| ()),
        RequestKind::LoginResponse => LoginResponse::from_reader(payload).map(|_| ()),
        RequestKind::Register => validator
            .decode_and_validate::<RegisterRequest>(payload)
            .map(|_| ()),
        RequestKind::ChangePassword => validator
            .decode_and_validate::<ChangePasswordRequest>(payload)
            .map(|_| ()),
        RequestKind::ChangeEmail => validator
            .decode_and_validate::<ChangeEmailRequest>(payload)
            .map(|_| ()),
        RequestKind::ChangeUsername => validator
            .decode_and_validate::<ChangeUsernameRequest>(payload)
            .map(|_| ()),
    }
}
