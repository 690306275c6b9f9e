//! Email and URL validators
//!
//! The patterns here are deliberately permissive in two ways that are
//! part of the contract: both are *unanchored* (a value passes if it
//! contains a matching substring), and the email classes are lower-case
//! only, so an upper-cased address fails. Tests pin both behaviors.

use std::sync::LazyLock;

use serde_json::Value;

use crate::control::Control;
use crate::foundation::ValidationError;

static EMAIL_PATTERN: LazyLock<regex::Regex> = LazyLock::new(|| {
    regex::Regex::new(
        r"[a-z0-9!#$%&'*+/=?^_`{|}~-]+(?:\.[a-z0-9!#$%&'*+/=?^_`{|}~-]+)*@(?:[a-z0-9](?:[a-z0-9-]*[a-z0-9])?\.)+[a-z0-9](?:[a-z0-9-]*[a-z0-9])?"
    ).unwrap()
});

static RECIPIENTS_PATTERN: LazyLock<regex::Regex> = LazyLock::new(|| {
    regex::Regex::new(
        r"(([a-zA-Z0-9_\-\.]+)@((\[[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}\.)|(([a-zA-Z0-9\-]+\.)+))([a-zA-Z]{2,4}|[0-9]{1,3})(\]?)(\s*,\s*|\s*$))+"
    ).unwrap()
});

static URL_PATTERN: LazyLock<regex::Regex> = LazyLock::new(|| {
    regex::Regex::new(r"(http|ftp|https)://[\w-]+(\.[\w-]+)+([\w.,@?^=%&:/~+#-]*[\w@?^=%&/~+#-])?")
        .unwrap()
});

// ============================================================================
// EMAIL
// ============================================================================

crate::validator! {
    /// Validates a single email address.
    ///
    /// An absent or empty value is valid — presence is a separate
    /// concern (see [`Required`](crate::validators::Required)).
    pub Email for Control;
    rule(control) {
        match control.value() {
            Value::Null => true,
            Value::String(s) => s.is_empty() || EMAIL_PATTERN.is_match(s),
            _ => false,
        }
    }
    error(control) {
        ValidationError::new("invalidEmailAddress", "Value is not an email address")
    }
    fn email();
}

// ============================================================================
// EMAIL RECIPIENTS
// ============================================================================

crate::validator! {
    /// Validates a comma-separated list of one or more email addresses.
    pub EmailRecipients for Control;
    rule(control) {
        control
            .value()
            .as_str()
            .is_some_and(|s| RECIPIENTS_PATTERN.is_match(s))
    }
    error(control) {
        ValidationError::new(
            "invalidEmailRecipients",
            "Value is not a comma-separated list of email addresses",
        )
    }
    fn email_recipients();
}

// ============================================================================
// URL
// ============================================================================

crate::validator! {
    /// Validates an http/ftp/https URL.
    ///
    /// An absent or empty value is valid, like [`Email`].
    pub Url for Control;
    rule(control) {
        match control.value() {
            Value::Null => true,
            Value::String(s) => s.is_empty() || URL_PATTERN.is_match(s),
            _ => false,
        }
    }
    error(control) {
        ValidationError::new("invalidUrl", "Value is not a URL")
    }
    fn url();
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::Validate;
    use serde_json::json;

    #[test]
    fn test_email_valid() {
        let validator = email();
        assert!(validator.validate(&Control::new(json!("a@b.com"))).is_ok());
        assert!(validator.validate(&Control::new(json!("user.name@example.co.uk"))).is_ok());
    }

    #[test]
    fn test_email_empty_and_null_are_valid() {
        let validator = email();
        assert!(validator.validate(&Control::new(json!(""))).is_ok());
        assert!(validator.validate(&Control::new(Value::Null)).is_ok());
    }

    #[test]
    fn test_email_invalid() {
        let validator = email();
        let err = validator.validate(&Control::new(json!("not-an-email"))).unwrap_err();
        assert_eq!(err.code, "invalidEmailAddress");
    }

    #[test]
    fn test_email_rejects_non_string() {
        let validator = email();
        assert!(validator.validate(&Control::new(json!(42))).is_err());
        assert!(validator.validate(&Control::new(json!(["a@b.com"]))).is_err());
    }

    #[test]
    fn test_email_unanchored_substring_passes() {
        // The pattern is unanchored: surrounding text does not fail it.
        let validator = email();
        assert!(validator.validate(&Control::new(json!("reach me at a@b.com please"))).is_ok());
    }

    #[test]
    fn test_email_upper_case_fails() {
        // Lower-case-only classes: an upper-cased address is rejected.
        let validator = email();
        assert!(validator.validate(&Control::new(json!("A@B.COM"))).is_err());
    }

    #[test]
    fn test_recipients_single_and_multiple() {
        let validator = email_recipients();
        assert!(validator.validate(&Control::new(json!("a@b.com"))).is_ok());
        assert!(validator.validate(&Control::new(json!("a@b.com, c@d.org"))).is_ok());
    }

    #[test]
    fn test_recipients_invalid() {
        let validator = email_recipients();
        let err = validator.validate(&Control::new(json!("not emails"))).unwrap_err();
        assert_eq!(err.code, "invalidEmailRecipients");
        assert!(validator.validate(&Control::new(json!(""))).is_err());
        assert!(validator.validate(&Control::new(Value::Null)).is_err());
    }

    #[test]
    fn test_url_valid() {
        let validator = url();
        assert!(validator.validate(&Control::new(json!("http://example.com"))).is_ok());
        assert!(validator.validate(&Control::new(json!("https://example.com/path?q=1"))).is_ok());
        assert!(validator.validate(&Control::new(json!("ftp://files.example.com"))).is_ok());
    }

    #[test]
    fn test_url_empty_and_null_are_valid() {
        let validator = url();
        assert!(validator.validate(&Control::new(json!(""))).is_ok());
        assert!(validator.validate(&Control::new(Value::Null)).is_ok());
    }

    #[test]
    fn test_url_invalid() {
        let validator = url();
        let err = validator.validate(&Control::new(json!("not a url"))).unwrap_err();
        assert_eq!(err.code, "invalidUrl");
    }
}
