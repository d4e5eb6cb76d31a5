use serde::{Deserialize, Serialize};

use crate::config::{Config, DEFAULT_MIN_PASSWORD_LENGTH};
use crate::error::ErrAuthParam;

/// Minimum strength rules applied to new passwords.
///
/// Only the length is checked, counted in characters rather than bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PasswordPolicy {
    min_length: usize,
}

impl Default for PasswordPolicy {
    fn default() -> Self {
        Self {
            min_length: DEFAULT_MIN_PASSWORD_LENGTH,
        }
    }
}

impl PasswordPolicy {
    pub fn new(min_length: usize) -> Self {
        Self { min_length }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.min_password_length)
    }

    pub fn min_length(&self) -> usize {
        self.min_length
    }

    pub fn check(&self, password: &str) -> Result<(), ErrAuthParam> {
        if password.chars().count() < self.min_length {
            return Err(ErrAuthParam::new(format!(
                "password must be at least {} characters",
                self.min_length
            )));
        }
        Ok(())
    }
}
