//! Collection validators

use crate::control::Control;
use crate::foundation::ValidationError;

crate::validator! {
    /// Validates a multi-select value: must be an array with at least
    /// one element.
    pub NonEmptyList for Control;
    rule(control) {
        control
            .value()
            .as_array()
            .is_some_and(|items| !items.is_empty())
    }
    error(control) {
        ValidationError::new("invalidNonEmptyList", "At least one selection is required")
    }
    fn non_empty_list();
}

// ============================================================================
// TESTS
// ============================================================================
