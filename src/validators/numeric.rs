//! Numeric validators

use crate::control::Control;
use crate::foundation::ValidationError;

crate::validator! {
    /// Validates a percentage: a number between 0 and 100 inclusive.
    /// Non-numeric values (including numeric strings) are rejected.
    pub Percentage for Control;
    rule(control) {
        control
            .value()
            .as_f64()
            .is_some_and(|n| (0.0..=100.0).contains(&n))
    }
    error(control) {
        ValidationError::new("invalidPercentage", "Value is not a percentage between 0 and 100")
    }
    fn percentage();
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::Validate;
    use serde_json::{Value, json};

    #[test]
    fn test_percentage_valid() {
        let validator = percentage();
        assert!(validator.validate(&Control::new(json!(50))).is_ok());
        assert!(validator.validate(&Control::new(json!(99.5))).is_ok());
    }

    #[test]
    fn test_percentage_boundaries_inclusive() {
        let validator = percentage();
        assert!(validator.validate(&Control::new(json!(0))).is_ok());
        assert!(validator.validate(&Control::new(json!(100))).is_ok());
    }

    #[test]
    fn test_percentage_out_of_range() {
        let validator = percentage();
        let err = validator.validate(&Control::new(json!(150))).unwrap_err();
        assert_eq!(err.code, "invalidPercentage");
        assert!(validator.validate(&Control::new(json!(-1))).is_err());
        assert!(validator.validate(&Control::new(json!(100.001))).is_err());
    }

    #[test]
    fn test_percentage_requires_a_number() {
        let validator = percentage();
        assert!(validator.validate(&Control::new(json!("50"))).is_err());
        assert!(validator.validate(&Control::new(Value::Null)).is_err());
    }
}
