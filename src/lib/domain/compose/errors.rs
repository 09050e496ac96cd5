//! Compose errors

use thiserror::Error;
use tracing::debug;

use super::value_objects::smtp_port::SmtpPortError;

/// A problem found with a single form field.
///
/// The messages are shown to the user as-is.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Recipient email is missing or malformed
    #[error("Recipient email is invalid.")]
    InvalidRecipient,

    /// From email is present but malformed
    #[error("From email is invalid.")]
    InvalidFromEmail,

    /// SMTP port is an integer outside `1..=65535`
    #[error("SMTP port must be 1–65535.")]
    SmtpPortOutOfRange,

    /// SMTP port is not an integer
    #[error("SMTP port must be a number.")]
    SmtpPortNotANumber,

    /// HTML body is blank
    #[error("HTML body is empty.")]
    EmptyHtmlBody,
}

impl From<SmtpPortError> for ValidationError {
    fn from(err: SmtpPortError) -> Self {
        debug!("SmtpPortError -> ValidationError");

        match err {
            SmtpPortError::OutOfRange => ValidationError::SmtpPortOutOfRange,
            SmtpPortError::NotANumber => ValidationError::SmtpPortNotANumber,
        }
    }
}

/// Errors that prevent an `.eml` document from being built
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EmlRequestError {
    /// Recipient email is missing or malformed
    #[error("Invalid recipient email")]
    InvalidRecipient,

    /// From email is present but malformed
    #[error("Invalid from email")]
    InvalidFromEmail,

    /// HTML body is blank
    #[error("Empty HTML body")]
    EmptyHtmlBody,
}
