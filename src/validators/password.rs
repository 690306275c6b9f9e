//! Password validators
//!
//! Both rules restrict the alphabet to `[A-Za-z0-9!@#$%^&*]` and require
//! at least one digit; the Azure variant additionally requires a special
//! character and a longer minimum. Written as character scans — the
//! lookahead style these rules are usually expressed in is not a feature
//! of the `regex` crate.

use crate::control::Control;
use crate::foundation::ValidationError;

const SPECIALS: &str = "!@#$%^&*";

fn in_alphabet(c: char) -> bool {
    c.is_ascii_alphanumeric() || SPECIALS.contains(c)
}

fn password_shaped(s: &str, min_len: usize) -> bool {
    let len = s.chars().count();
    len >= min_len && len <= 100 && s.chars().all(in_alphabet)
}

// ============================================================================
// PASSWORD
// ============================================================================

crate::validator! {
    /// Validates a password: 6-100 characters from the allowed alphabet,
    /// at least one digit.
    pub Password for Control;
    rule(control) {
        control.value().as_str().is_some_and(|s| {
            password_shaped(s, 6) && s.chars().any(|c| c.is_ascii_digit())
        })
    }
    error(control) {
        ValidationError::new("invalidPassword", "Password does not meet the requirements")
    }
    fn password();
}

// ============================================================================
// AZURE WINDOWS PASSWORD
// ============================================================================

crate::validator! {
    /// Validates a Windows VM admin password: 12-100 characters from the
    /// allowed alphabet, at least one digit and one special character.
    pub AzureWindowsPassword for Control;
    rule(control) {
        control.value().as_str().is_some_and(|s| {
            password_shaped(s, 12)
                && s.chars().any(|c| c.is_ascii_digit())
                && s.chars().any(|c| SPECIALS.contains(c))
        })
    }
    error(control) {
        ValidationError::new(
            "invalidAzureWindowsPassword",
            "Password does not meet the Windows VM requirements",
        )
    }
    fn azure_windows_password();
}

// ============================================================================
// TESTS
// ============================================================================
