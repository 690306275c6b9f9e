//! Core validation types and traits
//!
//! The fundamental building blocks of the validation system:
//!
//! - **Traits**: [`Validate`]
//! - **Errors**: [`ValidationError`]
//!
//! Validators are generic over their input type, so a string rule cannot
//! be handed a control group by accident:
//!
//! ```rust,ignore
//! use formcheck::foundation::{Validate, ValidationError};
//!
//! struct TenDigits;
//!
//! impl Validate for TenDigits {
//!     type Input = str;  // only validates strings
//!
//!     fn validate(&self, input: &str) -> Result<(), ValidationError> {
//!         // ...
//!     }
//! }
//! ```
//!
//! Errors are structured: a stable code for programmatic handling plus
//! the parameters a display message needs:
//!
//! ```rust,ignore
//! let error = ValidationError::new("minlength", "Value is too short")
//!     .with_param("requiredLength", "5")
//!     .with_param("actualLength", "3");
//! ```

pub mod error;
pub mod traits;

pub use error::ValidationError;
pub use traits::Validate;

/// A validation result using the standard [`ValidationError`].
pub type ValidationResult = Result<(), ValidationError>;
