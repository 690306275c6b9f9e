//! Cross-field validators

use crate::control::ControlGroup;
use crate::foundation::ValidationError;

crate::validator! {
    /// Validates that every touched control in a group holds the same
    /// value as the group's first control.
    ///
    /// The first control (in insertion order) is the reference. A pair is
    /// only compared when *both* the reference and the other control are
    /// touched — a control the user has not reached yet never raises a
    /// mismatch. An empty or single-control group is valid.
    pub EqualValues for ControlGroup;
    rule(group) {
        let mut controls = group.controls();
        match controls.next() {
            None => true,
            Some((_, reference)) => controls.all(|(_, control)| {
                !(reference.is_touched()
                    && control.is_touched()
                    && control.value() != reference.value())
            }),
        }
    }
    error(group) {
        ValidationError::new("notEqual", "Values do not match")
    }
    fn equal_values();
}

// ============================================================================
// TESTS
// ============================================================================
