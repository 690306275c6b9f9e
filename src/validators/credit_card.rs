//! Credit card number validator

use std::sync::LazyLock;

use crate::control::Control;
use crate::foundation::ValidationError;

// Visa, MasterCard, American Express, Diners Club, Discover, JCB.
static CARD_PATTERN: LazyLock<regex::Regex> = LazyLock::new(|| {
    regex::Regex::new(
        r"^(?:4[0-9]{12}(?:[0-9]{3})?|5[1-5][0-9]{14}|6(?:011|5[0-9][0-9])[0-9]{12}|3[47][0-9]{13}|3(?:0[0-5]|[68][0-9])[0-9]{11}|(?:2131|1800|35[0-9]{3})[0-9]{11})$"
    ).unwrap()
});

crate::validator! {
    /// Validates a card number against the supported issuers'
    /// prefix-and-length shapes. No separators allowed, digits only.
    pub CreditCard for Control;
    rule(control) {
        control
            .value()
            .as_str()
            .is_some_and(|s| CARD_PATTERN.is_match(s))
    }
    error(control) {
        ValidationError::new("invalidCreditCard", "Value is not a recognized card number")
    }
    fn credit_card();
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
    fn test_valid_issuers() {
        let validator = credit_card();
        assert!(validator.validate(&Control::new(json!("4111111111111111"))).is_ok()); // Visa 16
        assert!(validator.validate(&Control::new(json!("4222222222222"))).is_ok()); // Visa 13
        assert!(validator.validate(&Control::new(json!("5500005555555559"))).is_ok()); // MasterCard
        assert!(validator.validate(&Control::new(json!("371449635398431"))).is_ok()); // Amex
        assert!(validator.validate(&Control::new(json!("30569309025904"))).is_ok()); // Diners
        assert!(validator.validate(&Control::new(json!("6011000990139424"))).is_ok()); // Discover
        assert!(validator.validate(&Control::new(json!("3530111333300000"))).is_ok()); // JCB
    }

    #[test]
    fn test_invalid_numbers() {
        let validator = credit_card();
        let err = validator.validate(&Control::new(json!("1234"))).unwrap_err();
        assert_eq!(err.code, "invalidCreditCard");
        assert!(validator.validate(&Control::new(json!(""))).is_err());
        assert!(validator.validate(&Control::new(json!("4111-1111-1111-1111"))).is_err());
    }

    #[test]
    fn test_non_string_is_invalid() {
        let validator = credit_card();
        assert!(validator.validate(&Control::new(Value::Null)).is_err());
        assert!(validator.validate(&Control::new(json!(4111111111111111_i64))).is_err());
    }
}
