//! Charset validators for names and identifiers

use crate::control::Control;
use crate::foundation::ValidationError;

/// Punctuation allowed in usernames, alongside ASCII letters and digits.
/// Space is deliberately absent.
const USER_NAME_PUNCTUATION: &str = r##"!@#$%^&*()_+-=[]{};':"\|,.<>/?"##;

// ============================================================================
// INSTANCE NAME
// ============================================================================

crate::validator! {
    /// Validates an instance name: up to 40 characters, ASCII letters,
    /// digits, `-` and `_` only. Empty is allowed.
    pub InstanceName for Control;
    rule(control) {
        control.value().as_str().is_some_and(|s| {
            s.chars().count() <= 40
                && s.chars().all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
        })
    }
    error(control) {
        ValidationError::new(
            "invalidInstanceName",
            "Name must not contain spaces or special characters",
        )
    }
    fn instance_name();
}

// ============================================================================
// BUCKET NAME
// ============================================================================

crate::validator! {
    /// Validates a bucket name: up to 40 characters, lower-case letters,
    /// digits, `-` and `_` only. Empty is allowed.
    pub BucketName for Control;
    rule(control) {
        control.value().as_str().is_some_and(|s| {
            s.chars().count() <= 40
                && s.chars().all(|c| {
                    c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-' || c == '_'
                })
        })
    }
    error(control) {
        ValidationError::new("invalidBucketName", "Bucket name must be lower-case")
    }
    fn bucket_name();
}

// ============================================================================
// USER NAME
// ============================================================================

crate::validator! {
    /// Validates a username: every character must come from the
    /// allow-list of ASCII letters, digits, and punctuation. Spaces are
    /// the practical reason values fail.
    pub UserName for Control;
    rule(control) {
        control.value().as_str().is_some_and(|s| {
            s.chars()
                .all(|c| c.is_ascii_alphanumeric() || USER_NAME_PUNCTUATION.contains(c))
        })
    }
    error(control) {
        ValidationError::new("invalidUserName", "Username contains a disallowed character")
    }
    fn user_name();
}

// ============================================================================
// PAN
// ============================================================================

crate::validator! {
    /// Validates a PAN field: accepts any string of ASCII letters,
    /// digits, `_`, `.` and `-`, including the empty string.
    ///
    /// This is knowingly far broader than the ten-character PAN format
    /// its display message describes; the discrepancy is long-standing
    /// shipped behavior and is pinned by tests rather than fixed here.
    pub Pan for Control;
    rule(control) {
        control.value().as_str().is_some_and(|s| {
            s.chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '.' || c == '-')
        })
    }
    error(control) {
        ValidationError::new("invalidPanNumber", "Value contains a disallowed character")
    }
    fn pan();
}

// ============================================================================
// TESTS
// ============================================================================
