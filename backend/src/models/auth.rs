//! Credential-management payloads and their validation rules.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::io::Read;
use utoipa::ToSchema;

use super::{malformed, nullable_string};
use crate::error::{ErrAuthParam, RequestError};
use crate::validation::{rules, RequestValidator, Validatable};

/// Kind of login being attempted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginType {
    /// Username or email plus password.
    Normal,
    /// Any other value sent by the client, kept verbatim.
    Other(String),
}

impl Default for LoginType {
    fn default() -> Self {
        LoginType::Other(String::new())
    }
}

impl LoginType {
    pub fn as_str(&self) -> &str {
        match self {
            LoginType::Normal => "normal",
            LoginType::Other(value) => value,
        }
    }
}

impl Serialize for LoginType {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for LoginType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = nullable_string(deserializer)?;
        match s.as_str() {
            "normal" => Ok(LoginType::Normal),
            _ => Ok(LoginType::Other(s)),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
/// Credentials submitted by a user attempting to authenticate.
pub struct LoginRequest {
    /// Type of login, currently `normal`.
    #[serde(rename = "type", default)]
    #[schema(value_type = String, example = "normal")]
    pub login_type: LoginType,
    /// Login using this username when set.
    #[serde(default, deserialize_with = "nullable_string")]
    pub username: String,
    /// Login using this email when set.
    #[serde(default, deserialize_with = "nullable_string")]
    pub email: String,
    #[serde(default, deserialize_with = "nullable_string")]
    pub password: String,
    /// One-time code for accounts with MFA enabled.
    #[serde(default, deserialize_with = "nullable_string")]
    pub mfa_token: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
/// Session token returned after a successful login.
pub struct LoginResponse {
    #[serde(default, deserialize_with = "nullable_string")]
    pub token: String,
}

impl LoginResponse {
    /// Decodes the first JSON value of a streamed body.
    ///
    /// Content after that value is left unread.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, RequestError> {
        let mut deserializer = serde_json::Deserializer::from_reader(reader);
        Option::<Self>::deserialize(&mut deserializer)
            .map(Option::unwrap_or_default)
            .map_err(malformed)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
/// Payload for creating a new user account.
pub struct RegisterRequest {
    #[serde(default, deserialize_with = "nullable_string")]
    pub username: String,
    #[serde(default, deserialize_with = "nullable_string")]
    pub email: String,
    #[serde(default, deserialize_with = "nullable_string")]
    pub password: String,
    /// Registration authorization token.
    #[serde(default, deserialize_with = "nullable_string")]
    pub token: String,
}

impl Validatable for RegisterRequest {
    const KIND: &'static str = "register";

    fn is_valid(&self, validator: &RequestValidator) -> Result<(), ErrAuthParam> {
        rules::require_non_blank(&self.username, "username is required")?;
        rules::require_non_blank(&self.email, "email is required")?;
        validator.check_email(&self.email)?;
        rules::require_non_empty(&self.password, "password is required")?;
        validator.check_password(&self.password)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
/// Payload submitted when a user changes their password.
pub struct ChangePasswordRequest {
    #[serde(default, deserialize_with = "nullable_string")]
    pub old_password: String,
    #[serde(default, deserialize_with = "nullable_string")]
    pub new_password: String,
}

impl Validatable for ChangePasswordRequest {
    const KIND: &'static str = "change_password";

    fn is_valid(&self, validator: &RequestValidator) -> Result<(), ErrAuthParam> {
        rules::require_non_empty(&self.old_password, "old password is required")?;
        rules::require_non_empty(&self.new_password, "new password is required")?;
        validator.check_password(&self.new_password)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
/// Payload submitted when a user changes their email address.
pub struct ChangeEmailRequest {
    /// Current password, confirmed by the authentication layer.
    #[serde(default, deserialize_with = "nullable_string")]
    pub password: String,
    #[serde(default, deserialize_with = "nullable_string")]
    pub new_email: String,
}

impl Validatable for ChangeEmailRequest {
    const KIND: &'static str = "change_email";

    fn is_valid(&self, validator: &RequestValidator) -> Result<(), ErrAuthParam> {
        rules::require_non_blank(&self.password, "password is required")?;
        rules::require_non_blank(&self.new_email, "new email is required")?;
        validator.check_email(&self.new_email)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
/// Payload submitted when a user changes their username.
pub struct ChangeUsernameRequest {
    /// Current password, confirmed by the authentication layer.
    #[serde(default, deserialize_with = "nullable_string")]
    pub password: String,
    #[serde(default, deserialize_with = "nullable_string")]
    pub new_username: String,
}

impl Validatable for ChangeUsernameRequest {
    const KIND: &'static str = "change_username";

    fn is_valid(&self, validator: &RequestValidator) -> Result<(), ErrAuthParam> {
        rules::require_non_blank(&self.password, "password is required")?;
        rules::require_non_blank(&self.new_username, "new username is required")?;
        validator.check_username(&self.new_username)
    }
}
