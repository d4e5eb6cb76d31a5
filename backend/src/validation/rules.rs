//! Field rules shared across credential request payloads.

use crate::error::ErrAuthParam;

/// Fails with `message` when `value` is empty after trimming surrounding whitespace.
pub fn require_non_blank(value: &str, message: &str) -> Result<(), ErrAuthParam> {
    if value.trim().is_empty() {
        return Err(ErrAuthParam::new(message));
    }
    Ok(())
}

/// Fails with `message` only when `value` is exactly empty; whitespace counts as content.
pub fn require_non_empty(value: &str, message: &str) -> Result<(), ErrAuthParam> {
    if value.is_empty() {
        return Err(ErrAuthParam::new(message));
    }
    Ok(())
}

/// Validates username format.
///
/// No format rules are enforced yet; any non-blank username is accepted.
pub fn validate_username(_username: &str) -> Result<(), ErrAuthParam> {
    Ok(())
}
