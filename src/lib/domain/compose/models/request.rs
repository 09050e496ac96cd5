//! Compose request

/// The fields submitted from the composer form.
///
/// Values are kept exactly as received; trimming happens during validation
/// and document construction.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ComposeRequest {
    /// The recipient's email address
    pub recipient_email: String,

    /// The sender's display name
    pub from_name: String,

    /// The sender's email address
    pub from_email: String,

    /// The subject line
    pub subject: String,

    /// The SMTP port the user intends to send through
    pub smtp_port: String,

    /// The HTML body
    pub html_body: String,
}

impl ComposeRequest {
    /// Creates a request addressed to `recipient_email` with `html_body` and
    /// every other field empty
    pub fn new(recipient_email: &str, html_body: &str) -> Self {
        Self {
            recipient_email: recipient_email.to_string(),
            html_body: html_body.to_string(),
            ..Default::default()
        }
    }
}
