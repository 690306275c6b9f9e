//! Presence and length validators
//!
//! These three checks layer the way the consuming form layer applies
//! them: [`Required`] decides presence, [`MinLength`]/[`MaxLength`]
//! bound the length of whatever is present. An empty value therefore
//! passes the length checks — flagging it twice would double-report.
//!
//! String length is measured in Unicode scalar values (chars).

use serde_json::Value;

use crate::control::Control;
use crate::foundation::ValidationError;

/// Length of a value, for the kinds of value that have one.
fn measured_len(value: &Value) -> Option<usize> {
    match value {
        Value::String(s) => Some(s.chars().count()),
        Value::Array(items) => Some(items.len()),
        _ => None,
    }
}

// ============================================================================
// REQUIRED
// ============================================================================

crate::validator! {
    /// Validates that a value is present: not `Null`, not an empty
    /// string, not an empty array.
    pub Required for Control;
    rule(control) {
        match control.value() {
            Value::Null => false,
            Value::String(s) => !s.is_empty(),
            Value::Array(items) => !items.is_empty(),
            _ => true,
        }
    }
    error(control) {
        ValidationError::new("required", "Value is required")
    }
    fn required();
}

// ============================================================================
// MIN LENGTH
// ============================================================================

crate::validator! {
    /// Validates that a string or array, when present and non-empty, has
    /// at least `min` elements.
    #[derive(Copy, PartialEq, Eq, Hash)]
    pub MinLength { min: usize } for Control;
    rule(self, control) {
        match measured_len(control.value()) {
            Some(len) => len == 0 || len >= self.min,
            None => true,
        }
    }
    error(self, control) {
        let actual = measured_len(control.value()).unwrap_or(0);
        ValidationError::new(
            "minlength",
            format!("Value must be at least {} characters", self.min),
        )
        .with_param("requiredLength", self.min.to_string())
        .with_param("actualLength", actual.to_string())
    }
    fn min_length(min: usize);
}

// ============================================================================
// MAX LENGTH
// ============================================================================

crate::validator! {
    /// Validates that a string or array, when present, has at most `max`
    /// elements.
    #[derive(Copy, PartialEq, Eq, Hash)]
    pub MaxLength { max: usize } for Control;
    rule(self, control) {
        match measured_len(control.value()) {
            Some(len) => len <= self.max,
            None => true,
        }
    }
    error(self, control) {
        let actual = measured_len(control.value()).unwrap_or(0);
        ValidationError::new(
            "maxlength",
            format!("Value must be at most {} characters", self.max),
        )
        .with_param("requiredLength", self.max.to_string())
        .with_param("actualLength", actual.to_string())
    }
    fn max_length(max: usize);
}

// ============================================================================
// MINIMUM LENGTH (fixed 4-40 name field)
// ============================================================================

crate::validator! {
    /// Validates a name field of 4 to 40 characters, any kind.
    pub MinimumLength for Control;
    rule(control) {
        control
            .value()
            .as_str()
            .is_some_and(|s| (4..=40).contains(&s.chars().count()))
    }
    error(control) {
        ValidationError::new("invalidMinimumLength", "Name must be 4 to 40 characters")
    }
    fn minimum_length();
}

// ============================================================================
// TESTS
// ============================================================================
