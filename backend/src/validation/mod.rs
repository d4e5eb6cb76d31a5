//! Validation framework for credential request payloads.
//!
//! Every mutable credential request implements [`Validatable`]. A shared
//! [`RequestValidator`] carries the collaborators the rules delegate to (the
//! password policy and the email grammar) so request types stay plain data.

pub mod email;
pub mod password;
pub mod rules;

use serde::de::DeserializeOwned;

use crate::config::Config;
use crate::error::{ErrAuthParam, RequestError};
use crate::models;

pub use email::{EmailFormatChecker, StandardEmailChecker};
pub use password::PasswordPolicy;

pub const INVALID_EMAIL_FORMAT: &str = "invalid email format";

/// A request shape that can decide whether it is well-formed.
pub trait Validatable {
    /// Short name used when logging rejections.
    const KIND: &'static str;

    /// Runs the field checks in declared order and returns the first failure.
    fn is_valid(&self, validator: &RequestValidator) -> Result<(), ErrAuthParam>;
}

/// Holds the policies request validators delegate to.
pub struct RequestValidator {
    password_policy: PasswordPolicy,
    email_checker: Box<dyn EmailFormatChecker>,
}

impl RequestValidator {
    pub fn new<C>(password_policy: PasswordPolicy, email_checker: C) -> Self
    where
        C: EmailFormatChecker + 'static,
    {
        Self {
            password_policy,
            email_checker: Box::new(email_checker),
        }
    }

    /// Validator using the configured password minimum and the standard email grammar.
    pub fn from_config(config: &Config) -> Self {
        Self::new(PasswordPolicy::from_config(config), StandardEmailChecker)
    }

    pub fn password_policy(&self) -> &PasswordPolicy {
        &self.password_policy
    }

    pub fn check_password(&self, password: &str) -> Result<(), ErrAuthParam> {
        self.password_policy.check(password)
    }

    pub fn check_email(&self, email: &str) -> Result<(), ErrAuthParam> {
        if !self.email_checker.is_valid_email(email) {
            return Err(ErrAuthParam::new(INVALID_EMAIL_FORMAT));
        }
        Ok(())
    }

    pub fn check_username(&self, username: &str) -> Result<(), ErrAuthParam> {
        rules::validate_username(username)
    }

    /// Validates an already decoded request.
    pub fn validate<T: Validatable>(&self, request: &T) -> Result<(), ErrAuthParam> {
        request.is_valid(self).inspect_err(|err| {
            tracing::debug!(request = T::KIND, reason = %err, "Request failed validation");
        })
    }

    /// Decodes a raw JSON payload and validates it in one step.
    pub fn decode_and_validate<T>(&self, payload: &[u8]) -> Result<T, RequestError>
    where
        T: DeserializeOwned + Default + Validatable,
    {
        let request: T = models::decode(payload)?;
        self.validate(&request)?;
        Ok(request)
    }
}

impl Default for RequestValidator {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

impl std::fmt::Debug for RequestValidator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RequestValidator")
            .field("password_policy", &self.password_policy)
            .finish_non_exhaustive()
    }
}
