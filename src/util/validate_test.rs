use super::*;

// =============================================================
// Sign-in checks
// =============================================================

#[test]
fn require_username_rejects_blank_input() {
    assert_eq!(require_username("").as_deref(), Some("Username is required"));
    assert_eq!(require_username("   ").as_deref(), Some("Username is required"));
}

#[test]
fn require_username_accepts_any_nonblank_value() {
    assert!(require_username("al").is_none());
    assert!(require_username("alice").is_none());
}

#[test]
fn require_password_rejects_empty_only() {
    assert_eq!(require_password("").as_deref(), Some("Password is required"));
    assert!(require_password("x").is_none());
}

// =============================================================
// Sign-up checks
// =============================================================

#[test]
fn new_username_enforces_minimum_length() {
    assert_eq!(
        validate_new_username("ab").as_deref(),
        Some("Username must be at least 3 characters")
    );
    assert!(validate_new_username("abc").is_none());
}

#[test]
fn new_username_trims_before_checking() {
    assert_eq!(
        validate_new_username("  ab  ").as_deref(),
        Some("Username must be at least 3 characters")
    );
    assert!(validate_new_username("  abc  ").is_none());
}

#[test]
fn new_username_counts_characters_not_bytes() {
    assert!(validate_new_username("äöü").is_none());
}

#[test]
fn email_requires_an_at_sign() {
    assert_eq!(validate_email("").as_deref(), Some("Email is required"));
    assert_eq!(
        validate_email("alice.example.com").as_deref(),
        Some("Invalid email format")
    );
    assert!(validate_email("alice@example.com").is_none());
}

#[test]
fn new_password_enforces_minimum_length() {
    assert_eq!(
        validate_new_password("").as_deref(),
        Some("Password is required")
    );
    assert_eq!(
        validate_new_password("12345").as_deref(),
        Some("Password must be at least 6 characters")
    );
    assert!(validate_new_password("123456").is_none());
}

#[test]
fn new_password_is_not_trimmed() {
    // Leading and trailing spaces are legal password characters.
    assert!(validate_new_password("      ").is_none());
}
