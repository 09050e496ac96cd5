//! Form field validation

use tracing::debug;

use super::{
    errors::{EmlRequestError, ValidationError},
    models::request::ComposeRequest,
    value_objects::{email_address::EmailAddress, smtp_port::SmtpPort},
};

/// Returns `true` if `raw`, once trimmed, is in `local@domain.tld` shape
pub fn is_email(raw: &str) -> bool {
    EmailAddress::new(raw).is_ok()
}

/// The outcome of validating a [`ComposeRequest`]
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ValidationReport {
    errors: Vec<ValidationError>,
}

impl ValidationReport {
    /// `true` when no field failed
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// The failures, in check order: recipient, from email, port, body
    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    /// The user-facing message of each failure
    pub fn messages(&self) -> Vec<String> {
        self.errors.iter().map(ToString::to_string).collect()
    }
}

impl From<Vec<ValidationError>> for ValidationReport {
    fn from(errors: Vec<ValidationError>) -> Self {
        Self { errors }
    }
}

/// Runs every field check and collects all failures.
///
/// Optional fields (from email, port) are only checked when non-blank.
pub fn validate(request: &ComposeRequest) -> ValidationReport {
    let mut errors = Vec::new();

    if !is_email(&request.recipient_email) {
        errors.push(ValidationError::InvalidRecipient);
    }

    let from_email = request.from_email.trim();
    if !from_email.is_empty() && !is_email(from_email) {
        errors.push(ValidationError::InvalidFromEmail);
    }

    let smtp_port = request.smtp_port.trim();
    if !smtp_port.is_empty() {
        if let Err(err) = SmtpPort::parse(smtp_port) {
            errors.push(err.into());
        }
    }

    if request.html_body.trim().is_empty() {
        errors.push(ValidationError::EmptyHtmlBody);
    }

    debug!(errors = errors.len(), "validated compose request");

    errors.into()
}

/// The checks required before building a document. Stops at the first failure.
pub fn check_eml_request(request: &ComposeRequest) -> Result<(), EmlRequestError> {
    EmailAddress::new(&request.recipient_email).map_err(|_| EmlRequestError::InvalidRecipient)?;

    let from_email = request.from_email.trim();
    if !from_email.is_empty() {
        EmailAddress::new(from_email).map_err(|_| EmlRequestError::InvalidFromEmail)?;
    }

    if request.html_body.trim().is_empty() {
        return Err(EmlRequestError::EmptyHtmlBody);
    }

    Ok(())
}
