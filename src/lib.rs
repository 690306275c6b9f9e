//! # formcheck
//!
//! Field and cross-field validators for web form controls, plus the
//! display-message table the consuming form layer renders from.
//!
//! ## Quick Start
//!
//! ```rust
//! use formcheck::prelude::*;
//! use serde_json::json;
//!
//! let control = Control::new(json!("4111111111111111"));
//! assert!(credit_card().validate(&control).is_ok());
//!
//! let control = Control::new(json!("1234"));
//! let error = credit_card().validate(&control).unwrap_err();
//! assert_eq!(error.code, "invalidCreditCard");
//! assert_eq!(
//!     message_for(&error, None).unwrap(),
//!     "Please enter valid credit card number",
//! );
//! ```
//!
//! ## Shape of the crate
//!
//! - [`Control`](control::Control) and [`ControlGroup`](control::ControlGroup)
//!   carry the form state a validator reads: a JSON value plus a `touched`
//!   flag per control.
//! - Every field validator implements
//!   [`Validate`](foundation::Validate)`<Input = Control>` and reports a
//!   fixed error code (`invalidCreditCard`, `invalidPercentage`, …) with
//!   any parameters a display message needs.
//! - [`EqualValues`](validators::EqualValues) is the one cross-field
//!   check, over a whole `ControlGroup`.
//! - [`message_for`](messages::message_for) turns an error code (and its
//!   params) into the display string for the UI.
//!
//! Validators are pure and synchronous; the crate holds no state beyond
//! process-wide compiled patterns.

pub mod control;
pub mod foundation;
mod macros;
pub mod messages;
pub mod prelude;
pub mod validators;
