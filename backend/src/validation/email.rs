use validator::ValidateEmail;

/// Decides whether a string is a syntactically valid email address.
///
/// Implementations must be deterministic and free of side effects.
#[cfg_attr(test, mockall::automock)]
pub trait EmailFormatChecker: Send + Sync {
    fn is_valid_email(&self, email: &str) -> bool;
}

/// Email grammar provided by the `validator` crate.
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardEmailChecker;

impl EmailFormatChecker for StandardEmailChecker {
    fn is_valid_email(&self, email: &str) -> bool {
        email.validate_email()
    }
}
