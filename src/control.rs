//! Form control state as seen by validators
//!
//! A [`Control`] is the per-input slice of form state a field validator
//! reads: the current value and whether the user has interacted with the
//! input. A [`ControlGroup`] is a named, insertion-ordered collection of
//! sibling controls validated together.
//!
//! The consuming form layer owns these; validators only read them.
//! Values are [`serde_json::Value`], so a control can hold text, a
//! number, a list of selections, or `Null` for an untouched empty input.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

// ============================================================================
// CONTROL
// ============================================================================

/// A single form input's runtime state: current value + interaction flag.
///
/// # Examples
///
/// ```rust
/// use formcheck::control::Control;
/// use serde_json::json;
///
/// let control = Control::new(json!("hello"));
/// assert_eq!(control.value().as_str(), Some("hello"));
/// assert!(!control.is_touched());
///
/// let control = Control::touched(json!(42));
/// assert!(control.is_touched());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Control {
    value: Value,
    #[serde(default)]
    touched: bool,
}

impl Control {
    /// Creates an untouched control holding `value`.
    pub fn new(value: impl Into<Value>) -> Self {
        Self {
            value: value.into(),
            touched: false,
        }
    }

    /// Creates a control the user has already interacted with.
    pub fn touched(value: impl Into<Value>) -> Self {
        Self {
            value: value.into(),
            touched: true,
        }
    }

    /// The control's current value.
    #[must_use]
    pub fn value(&self) -> &Value {
        &self.value
    }

    /// Whether the user has interacted with this control.
    #[must_use]
    pub fn is_touched(&self) -> bool {
        self.touched
    }

    /// Replaces the control's value (called by the form layer on change).
    pub fn set_value(&mut self, value: impl Into<Value>) {
        self.value = value.into();
    }

    /// Marks the control as interacted with (called by the form layer on blur).
    pub fn mark_touched(&mut self) {
        self.touched = true;
    }
}

impl Default for Control {
    fn default() -> Self {
        Self::new(Value::Null)
    }
}

// ============================================================================
// CONTROL GROUP
// ============================================================================

/// A named collection of sibling controls validated together.
///
/// Iteration order is insertion order. The cross-field equality check
/// designates the *first* control as its reference, so the order controls
/// are registered in is part of the contract, not an accident.
///
/// # Examples
///
/// ```rust
/// use formcheck::control::{Control, ControlGroup};
/// use serde_json::json;
///
/// let group = ControlGroup::new()
///     .with("password", Control::touched(json!("s3cret")))
///     .with("confirm_password", Control::touched(json!("s3cret")));
///
/// assert_eq!(group.len(), 2);
/// assert_eq!(group.controls().next().map(|(name, _)| name), Some("password"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ControlGroup {
    controls: IndexMap<String, Control>,
}

impl ControlGroup {
    /// Creates an empty group.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a control, builder-style.
    #[must_use = "builder methods must be chained or built"]
    pub fn with(mut self, name: impl Into<String>, control: Control) -> Self {
        self.insert(name, control);
        self
    }

    /// Adds or replaces a control. A replaced control keeps its original
    /// position in iteration order.
    pub fn insert(&mut self, name: impl Into<String>, control: Control) {
        self.controls.insert(name.into(), control);
    }

    /// Looks up a control by name.
    #[must_use]
    pub fn control(&self, name: &str) -> Option<&Control> {
        self.controls.get(name)
    }

    /// Iterates controls in insertion order.
    pub fn controls(&self) -> impl Iterator<Item = (&str, &Control)> {
        self.controls.iter().map(|(name, c)| (name.as_str(), c))
    }

    /// The group's aggregate value: name → value, in insertion order.
    pub fn values(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.controls().map(|(name, c)| (name, c.value()))
    }

    /// Number of controls in the group.
    #[must_use]
    pub fn len(&self) -> usize {
        self.controls.len()
    }

    /// Whether the group has no controls.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.controls.is_empty()
    }
}

// ============================================================================
// TESTS
// ============================================================================
