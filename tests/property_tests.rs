//! Property-based tests for formcheck.

use formcheck::prelude::*;
use proptest::prelude::*;
use serde_json::json;

// ============================================================================
// IDEMPOTENCY: validate(x) == validate(x)
// ============================================================================

proptest! {
    #[test]
    fn email_idempotent(s in ".*") {
        let control = Control::new(json!(s));
        let r1 = email().validate(&control);
        let r2 = email().validate(&control);
        prop_assert_eq!(r1.is_ok(), r2.is_ok());
    }

    #[test]
    fn credit_card_idempotent(s in "[0-9]{0,20}") {
        let control = Control::new(json!(s));
        let r1 = credit_card().validate(&control);
        let r2 = credit_card().validate(&control);
        prop_assert_eq!(r1.is_ok(), r2.is_ok());
    }

    #[test]
    fn percentage_idempotent(n in any::<f64>()) {
        let control = Control::new(json!(n));
        let r1 = percentage().validate(&control);
        let r2 = percentage().validate(&control);
        prop_assert_eq!(r1.is_ok(), r2.is_ok());
    }

    #[test]
    fn min_length_idempotent(s in ".*") {
        let v = min_length(3);
        let control = Control::new(json!(s));
        let r1 = v.validate(&control);
        let r2 = v.validate(&control);
        prop_assert_eq!(r1.is_ok(), r2.is_ok());
    }
}

// ============================================================================
// RANGE AND CHARSET PROPERTIES
// ============================================================================

proptest! {
    #[test]
    fn percentage_accepts_exactly_the_inclusive_range(n in -200.0f64..300.0) {
        let result = percentage().validate(&Control::new(json!(n)));
        prop_assert_eq!(result.is_ok(), (0.0..=100.0).contains(&n));
    }

    #[test]
    fn phone_accepts_exactly_ten_digits(s in "[0-9]{1,15}") {
        let result = phone().validate(&Control::new(json!(s.clone())));
        prop_assert_eq!(result.is_ok(), s.len() == 10);
    }

    // The PAN charset rule accepts every string drawn from its alphabet,
    // digits or not — the documented divergence from its display copy.
    #[test]
    fn pan_accepts_its_entire_alphabet(s in "[A-Za-z0-9_.-]{0,32}") {
        prop_assert!(pan().validate(&Control::new(json!(s))).is_ok());
    }

    #[test]
    fn bucket_name_never_accepts_upper_case(s in ".{1,40}") {
        let result = bucket_name().validate(&Control::new(json!(s.clone())));
        if s.chars().any(|c| c.is_ascii_uppercase()) {
            prop_assert!(result.is_err());
        }
    }

    #[test]
    fn password_never_accepts_digitless_values(s in "[A-Za-z!@#$%^&*]{6,30}") {
        prop_assert!(password().validate(&Control::new(json!(s))).is_err());
    }
}

// ============================================================================
// GROUP EQUALITY IS ORDER-SENSITIVE ONLY THROUGH ITS REFERENCE
// ============================================================================

proptest! {
    #[test]
    fn equal_values_accepts_any_uniform_group(value in ".*", extra in 1usize..5) {
        let mut group = ControlGroup::new();
        for i in 0..=extra {
            group.insert(format!("c{i}"), Control::touched(json!(value.clone())));
        }
        prop_assert!(equal_values().validate(&group).is_ok());
    }

    #[test]
    fn equal_values_flags_any_touched_difference(a in "[a-z]{1,8}", b in "[A-Z]{1,8}") {
        // a and b are drawn from disjoint alphabets, so they always differ.
        let group = ControlGroup::new()
            .with("first", Control::touched(json!(a)))
            .with("second", Control::touched(json!(b)));
        prop_assert!(equal_values().validate(&group).is_err());
    }
}
