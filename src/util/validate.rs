//! Pure form-field validation for the credential pages.
//!
//! Each check returns `Some(message)` when the value is rejected, ready to
//! render next to the field, or `None` when it passes. The length rules
//! match what the backend enforces so local rejection and server rejection
//! read the same to the user.

#[cfg(test)]
#[path = "validate_test.rs"]
mod validate_test;

/// Minimum username length the backend accepts at signup.
const USERNAME_MIN: usize = 3;
/// Minimum password length the backend accepts at signup.
const PASSWORD_MIN: usize = 6;

/// Sign-in username: required only. Existing accounts may predate the
/// current length rules.
pub fn require_username(value: &str) -> Option<String> {
    if value.trim().is_empty() {
        Some("Username is required".to_owned())
    } else {
        None
    }
}

/// Sign-in password: required only.
pub fn require_password(value: &str) -> Option<String> {
    if value.is_empty() {
        Some("Password is required".to_owned())
    } else {
        None
    }
}

/// Sign-up username: required and at least [`USERNAME_MIN`] characters.
pub fn validate_new_username(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Some("Username is required".to_owned())
    } else if trimmed.chars().count() < USERNAME_MIN {
        Some(format!("Username must be at least {USERNAME_MIN} characters"))
    } else {
        None
    }
}

/// Sign-up email: required and must contain an `@`. Anything stricter is
/// the backend's call.
pub fn validate_email(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Some("Email is required".to_owned())
    } else if !trimmed.contains('@') {
        Some("Invalid email format".to_owned())
    } else {
        None
    }
}

/// Sign-up password: required and at least [`PASSWORD_MIN`] characters.
pub fn validate_new_password(value: &str) -> Option<String> {
    if value.is_empty() {
        Some("Password is required".to_owned())
    } else if value.chars().count() < PASSWORD_MIN {
        Some(format!("Password must be at least {PASSWORD_MIN} characters"))
    } else {
        None
    }
}
