//! Phone number validator

use crate::control::Control;
use crate::foundation::ValidationError;

crate::validator! {
    /// Validates a mobile number: exactly 10 ASCII digits, no
    /// separators, no country code.
    pub Phone for Control;
    rule(control) {
        control
            .value()
            .as_str()
            .is_some_and(|s| s.len() == 10 && s.bytes().all(|b| b.is_ascii_digit()))
    }
    error(control) {
        ValidationError::new("invalidPhoneNumber", "Value is not a 10-digit phone number")
    }
    fn phone();
}

// ============================================================================
// TESTS
// ============================================================================
