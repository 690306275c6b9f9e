//! Built-in validators
//!
//! One validator type per form rule, each implementing
//! [`Validate`](crate::foundation::Validate) over a
//! [`Control`](crate::control::Control) (or
//! [`ControlGroup`](crate::control::ControlGroup) for the cross-field
//! check) and reporting a fixed error code.
//!
//! # Categories
//!
//! - **Content**: [`Email`], [`EmailRecipients`], [`Url`], [`CreditCard`]
//! - **Passwords**: [`Password`], [`AzureWindowsPassword`]
//! - **Names and identifiers**: [`InstanceName`], [`BucketName`],
//!   [`UserName`], [`Pan`]
//! - **Presence and length**: [`Required`], [`MinLength`], [`MaxLength`],
//!   [`MinimumLength`]
//! - **Numeric**: [`Percentage`]
//! - **Collections**: [`NonEmptyList`]
//! - **Cross-field**: [`EqualValues`]
//!
//! # Examples
//!
//! ```rust
//! use formcheck::prelude::*;
//! use serde_json::json;
//!
//! let control = Control::new(json!("1234567890"));
//! assert!(phone().validate(&control).is_ok());
//!
//! let err = percentage().validate(&Control::new(json!(150))).unwrap_err();
//! assert_eq!(err.code, "invalidPercentage");
//! ```

pub mod collection;
pub mod content;
pub mod credit_card;
pub mod group;
pub mod length;
pub mod numeric;
pub mod password;
pub mod pattern;
pub mod phone;

pub use collection::{NonEmptyList, non_empty_list};
pub use content::{Email, EmailRecipients, Url, email, email_recipients, url};
pub use credit_card::{CreditCard, credit_card};
pub use group::{EqualValues, equal_values};
pub use length::{
    MaxLength, MinLength, MinimumLength, Required, max_length, min_length, minimum_length,
    required,
};
pub use numeric::{Percentage, percentage};
pub use password::{AzureWindowsPassword, Password, azure_windows_password, password};
pub use pattern::{BucketName, InstanceName, Pan, UserName, bucket_name, instance_name, pan, user_name};
pub use phone::{Phone, phone};
