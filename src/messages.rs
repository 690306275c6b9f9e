//! Display messages for validation errors
//!
//! The fixed table mapping every validation error code to the string the
//! form layer renders next to the offending control. Messages are
//! process-wide constants; the table is an exhaustive `match`, not a
//! mutable registry.
//!
//! Two codes interpolate the control's display name
//! ([`format_control_name`]), and the two length codes read the
//! `requiredLength` parameter off the error.

use thiserror::Error;

use crate::foundation::ValidationError;

// ============================================================================
// MESSAGE ERROR
// ============================================================================

/// Why a display message could not be produced.
///
/// Both cases are recoverable: a consumer that only wants "message or
/// nothing" can call `.ok()` on the resolver result.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MessageError {
    /// The code is not in the message table.
    #[error("no display message is defined for validation code `{0}`")]
    UnknownCode(String),

    /// The message template needs a parameter the error does not carry.
    #[error("display message for `{code}` requires the `{param}` parameter")]
    MissingParam {
        /// The code whose template was being filled.
        code: &'static str,
        /// The parameter the template needs.
        param: &'static str,
    },
}

// ============================================================================
// CONTROL NAME FORMATTING
// ============================================================================

/// Turns a control's registration name into display copy: underscores
/// become spaces, and an absent name becomes the word "input".
///
/// ```rust
/// use formcheck::messages::format_control_name;
///
/// assert_eq!(format_control_name(Some("first_name")), "first name");
/// assert_eq!(format_control_name(None), "input");
/// ```
#[must_use]
pub fn format_control_name(name: Option<&str>) -> String {
    match name {
        Some(name) => name.replace('_', " "),
        None => "input".to_string(),
    }
}

// ============================================================================
// MESSAGE RESOLUTION
// ============================================================================

/// Resolves the display message for a validation error.
///
/// `control_name` is the name the control was registered under; it is
/// only read by the codes that mention the field ("required",
/// "notEqual").
///
/// ```rust
/// use formcheck::foundation::ValidationError;
/// use formcheck::messages::message_for;
///
/// let error = ValidationError::new("minlength", "Value is too short")
///     .with_param("requiredLength", "5");
/// assert_eq!(message_for(&error, None).unwrap(), "Minimum length 5");
/// ```
pub fn message_for(
    error: &ValidationError,
    control_name: Option<&str>,
) -> Result<String, MessageError> {
    let message = match error.code.as_ref() {
        "required" => format!("Please enter {}", format_control_name(control_name)),
        "invalidCreditCard" => "Please enter valid credit card number".to_string(),
        "invalidEmailAddress" => "Please enter valid email address".to_string(),
        "invalidPassword" => {
            "Please enter valid password. Password must be at least 6 characters long, and contain a number."
                .to_string()
        }
        "invalidAzureWindowsPassword" => {
            "Password must be 12 characters long and must have 3 of the following: 1 lower case, 1 upper case, 1 number, 1 special character"
                .to_string()
        }
        "notEqual" => format!("Entered {} doesn't match", format_control_name(control_name)),
        "minlength" => format!("Minimum length {}", required_length(error, "minlength")?),
        "maxlength" => format!("Maximum length {}", required_length(error, "maxlength")?),
        "invalidPercentage" => "Value should be inbetween 0-100".to_string(),
        "invalidEmailRecipients" => {
            "Please enter valid email address. Multiple emails should be seperated by comma."
                .to_string()
        }
        "invalidUrl" => "Please enter valid url.".to_string(),
        "invalidPhoneNumber" => "Mobile number must be 10 digits.".to_string(),
        "invalidNonEmptyList" => "Please select atleast one value.".to_string(),
        "invalidPanNumber" => "PAN number must contain 10 digits".to_string(),
        "invalidUserName" => "Please avoid space in username".to_string(),
        "invalidInstanceName" => {
            "Please enter valid name without space & special characters".to_string()
        }
        "invalidMinimumLength" => "Name must be at least 4 characters long".to_string(),
        "invalidBucketName" => "Bucket name must be in lowercase letters".to_string(),
        other => return Err(MessageError::UnknownCode(other.to_string())),
    };

    Ok(message)
}

fn required_length<'e>(
    error: &'e ValidationError,
    code: &'static str,
) -> Result<&'e str, MessageError> {
    error.param("requiredLength").ok_or(MessageError::MissingParam {
        code,
        param: "requiredLength",
    })
}

// ============================================================================
// TESTS
// ============================================================================
