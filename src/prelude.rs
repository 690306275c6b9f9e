//! Prelude module for convenient imports.
//!
//! Provides a single `use formcheck::prelude::*;` import that brings in
//! the control model, the `Validate` trait, every built-in validator,
//! and the message resolver.
//!
//! # Examples
//!
//! ```rust
//! use formcheck::prelude::*;
//! use serde_json::json;
//!
//! let control = Control::new(json!("a@b.com"));
//! assert!(email().validate(&control).is_ok());
//! ```

// ============================================================================
// FOUNDATION: Core trait and error
// ============================================================================

pub use crate::foundation::{Validate, ValidationError, ValidationResult};

// ============================================================================
// CONTROL MODEL
// ============================================================================

pub use crate::control::{Control, ControlGroup};

// ============================================================================
// VALIDATORS: All built-in validators
// ============================================================================

#[allow(clippy::wildcard_imports)]
pub use crate::validators::*;

// ============================================================================
// MESSAGES
// ============================================================================

pub use crate::messages::{MessageError, format_control_name, message_for};
