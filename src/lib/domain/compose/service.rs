//! Compose service

#[cfg(test)]
use mockall::mock;
use tracing::debug;

use super::{
    errors::EmlRequestError,
    models::{document::EmailDocument, request::ComposeRequest},
    validator::{check_eml_request, validate, ValidationReport},
};

/// Compose service
pub trait ComposeService: Clone + Send + Sync + 'static {
    /// Checks every field of `request`.
    ///
    /// # Returns
    /// A [`ValidationReport`] listing every failure, empty when the request is valid.
    fn validate(&self, request: &ComposeRequest) -> ValidationReport;

    /// Builds an `.eml` document from `request`.
    ///
    /// # Returns
    /// - [`Ok`] with the [`EmailDocument`] if the request passes the recipient,
    ///   from email and body checks.
    /// - [`Err`] with the first failing [`EmlRequestError`] otherwise.
    fn compose_eml(&self, request: &ComposeRequest) -> Result<EmailDocument, EmlRequestError>;
}

#[cfg(test)]
mock! {
    pub ComposeService {}

    impl Clone for ComposeService {
        fn clone(&self) -> Self;
    }

    impl ComposeService for ComposeService {
        fn validate(&self, request: &ComposeRequest) -> ValidationReport;
        fn compose_eml(&self, request: &ComposeRequest) -> Result<EmailDocument, EmlRequestError>;
    }
}

/// Compose service implementation
#[derive(Debug, Clone, Default)]
pub struct ComposeServiceImpl;

impl ComposeServiceImpl {
    /// Creates a new compose service.
    pub fn new() -> Self {
        Self
    }
}

impl ComposeService for ComposeServiceImpl {
    fn validate(&self, request: &ComposeRequest) -> ValidationReport {
        validate(request)
    }

    fn compose_eml(&self, request: &ComposeRequest) -> Result<EmailDocument, EmlRequestError> {
        check_eml_request(request)?;

        let document = EmailDocument::build(
            request.recipient_email.trim(),
            request.from_name.trim(),
            request.from_email.trim(),
            request.subject.trim(),
            &request.html_body,
        );

        debug!(boundary = document.boundary(), "built email document");

        Ok(document)
    }
}
