//! Core traits for the validation system

use crate::foundation::ValidationError;

// ============================================================================
// CORE VALIDATOR TRAIT
// ============================================================================

/// The trait every validator implements.
///
/// Generic over the input type: field validators take a
/// [`Control`](crate::control::Control), the cross-field check takes a
/// [`ControlGroup`](crate::control::ControlGroup). All validators return
/// `Result<(), ValidationError>` — `Ok(())` is the "no error" result the
/// form layer treats as valid.
///
/// # Examples
///
/// ```rust
/// use formcheck::control::Control;
/// use formcheck::foundation::{Validate, ValidationError};
///
/// struct NonBlank;
///
/// impl Validate for NonBlank {
///     type Input = Control;
///
///     fn validate(&self, control: &Control) -> Result<(), ValidationError> {
///         match control.value().as_str() {
///             Some(s) if !s.trim().is_empty() => Ok(()),
///             _ => Err(ValidationError::new("blank", "Value is blank")),
///         }
///     }
/// }
/// ```
pub trait Validate {
    /// The type of input being validated.
    ///
    /// `?Sized` so validators can also be written directly against `str`
    /// or slice inputs.
    type Input: ?Sized;

    /// Validates the input value.
    ///
    /// # Returns
    ///
    /// * `Ok(())` if validation succeeds
    /// * `Err(ValidationError)` if validation fails
    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError>;
}

// ============================================================================
// TESTS
// ============================================================================
