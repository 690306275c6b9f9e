//! Error types for validation failures
//!
//! A validation failure is a value, not an exception: a stable error code
//! drawn from a fixed set, a default English message, and the parameters
//! a display-message template needs.
//!
//! All string fields use `Cow<'static, str>` for zero-allocation in the
//! common case of static codes and messages.

use std::borrow::Cow;
use std::fmt;

// ============================================================================
// VALIDATION ERROR
// ============================================================================

/// A structured validation error.
///
/// The `code` is the contract: the consuming form layer matches on it to
/// pick a display message (see [`crate::messages::message_for`]) and to
/// key the error in its per-control error map. The `message` is a default
/// English description for logs and debugging; display copy lives in the
/// message table, not here.
///
/// # Examples
///
/// ```rust
/// use formcheck::foundation::ValidationError;
///
/// let error = ValidationError::new("minlength", "Value is too short")
///     .with_param("requiredLength", "5")
///     .with_param("actualLength", "3");
///
/// assert_eq!(error.code, "minlength");
/// assert_eq!(error.param("requiredLength"), Some("5"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Error code for programmatic handling and message lookup.
    ///
    /// Examples: "invalidCreditCard", "minlength", "notEqual"
    pub code: Cow<'static, str>,

    /// Default human-readable message in English.
    pub message: Cow<'static, str>,

    /// Parameters for the display-message template.
    ///
    /// Stored as ordered key-value pairs (typically 0-2 params).
    /// Example: `[("requiredLength", "5"), ("actualLength", "3")]`
    pub params: Vec<(Cow<'static, str>, Cow<'static, str>)>,
}

impl ValidationError {
    /// Creates a new validation error with a code and default message.
    ///
    /// ```rust
    /// use formcheck::foundation::ValidationError;
    ///
    /// // Static strings — zero allocation:
    /// let error = ValidationError::new("invalidUrl", "Value is not a URL");
    /// ```
    pub fn new(code: impl Into<Cow<'static, str>>, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            params: Vec::new(),
        }
    }

    /// Adds a parameter for message templating.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_param(
        mut self,
        key: impl Into<Cow<'static, str>>,
        value: impl Into<Cow<'static, str>>,
    ) -> Self {
        self.params.push((key.into(), value.into()));
        self
    }

    /// Looks up a parameter value by key.
    #[must_use]
    pub fn param(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k.as_ref() == key)
            .map(|(_, v)| v.as_ref())
    }

    /// Renders the error in the form layer's wire shape: a single-entry
    /// map from the code to `true`, or to a params object when the
    /// message needs parameters.
    ///
    /// ```rust
    /// use formcheck::foundation::ValidationError;
    /// use serde_json::json;
    ///
    /// let error = ValidationError::new("invalidPercentage", "Value is out of range");
    /// assert_eq!(error.to_json_value(), json!({ "invalidPercentage": true }));
    ///
    /// let error = ValidationError::new("minlength", "Value is too short")
    ///     .with_param("requiredLength", "5");
    /// assert_eq!(
    ///     error.to_json_value(),
    ///     json!({ "minlength": { "requiredLength": "5" } }),
    /// );
    /// ```
    #[must_use]
    pub fn to_json_value(&self) -> serde_json::Value {
        let entry = if self.params.is_empty() {
            serde_json::Value::Bool(true)
        } else {
            let params: serde_json::Map<String, serde_json::Value> = self
                .params
                .iter()
                .map(|(k, v)| (k.to_string(), serde_json::Value::String(v.to_string())))
                .collect();
            serde_json::Value::Object(params)
        };

        let mut map = serde_json::Map::with_capacity(1);
        map.insert(self.code.to_string(), entry);
        serde_json::Value::Object(map)
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code, self.message)?;

        if !self.params.is_empty() {
            write!(f, " (params: [")?;
            for (i, (k, v)) in self.params.iter().enumerate() {
                if i > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{k}={v}")?;
            }
            write!(f, "])")?;
        }

        Ok(())
    }
}

impl std::error::Error for ValidationError {}

// ============================================================================
// TESTS
// ============================================================================
