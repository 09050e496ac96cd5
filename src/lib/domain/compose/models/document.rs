//! MIME email document

use std::fmt;

use rand::RngCore;

/// Prefix of every generated multipart boundary
pub const BOUNDARY_PREFIX: &str = "----=_Boundary_";

/// Body of the `text/plain` part
pub const PLAIN_TEXT_FALLBACK: &str =
    "This email contains HTML content. Please view it in an HTML-capable email client.";

const CRLF: &str = "\r\n";

/// A complete RFC 2822 message with a `multipart/alternative` body holding a
/// plain text fallback and the HTML content.
///
/// Header values are written verbatim: no folding and no RFC 2047 encoding,
/// so non-ASCII names or subjects end up as raw UTF-8.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EmailDocument {
    boundary: String,
    text: String,
}

impl EmailDocument {
    /// Builds a document under a freshly generated random boundary.
    ///
    /// Nothing is validated here; callers check the fields first.
    pub fn build(to: &str, from_name: &str, from_email: &str, subject: &str, html: &str) -> Self {
        Self::with_boundary(to, from_name, from_email, subject, html, make_boundary())
    }

    /// Builds a document under the given boundary
    pub fn with_boundary(
        to: &str,
        from_name: &str,
        from_email: &str,
        subject: &str,
        html: &str,
        boundary: impl Into<String>,
    ) -> Self {
        let boundary = boundary.into();

        let from = if from_name.is_empty() {
            from_email.to_string()
        } else {
            format!("{from_name} <{from_email}>")
        };

        let lines = [
            format!("To: {to}"),
            format!("From: {from}"),
            format!("Subject: {subject}"),
            "MIME-Version: 1.0".to_string(),
            format!("Content-Type: multipart/alternative; boundary=\"{boundary}\""),
            String::new(),
            format!("--{boundary}"),
            "Content-Type: text/plain; charset=\"utf-8\"".to_string(),
            "Content-Transfer-Encoding: 7bit".to_string(),
            String::new(),
            PLAIN_TEXT_FALLBACK.to_string(),
            String::new(),
            format!("--{boundary}"),
            "Content-Type: text/html; charset=\"utf-8\"".to_string(),
            "Content-Transfer-Encoding: 7bit".to_string(),
            String::new(),
            html.to_string(),
            String::new(),
            format!("--{boundary}--"),
            String::new(),
        ];

        Self {
            text: lines.join(CRLF),
            boundary,
        }
    }

    /// The multipart boundary token
    pub fn boundary(&self) -> &str {
        &self.boundary
    }

    /// The full message text
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Consumes the document, returning its UTF-8 bytes
    pub fn into_bytes(self) -> Vec<u8> {
        self.text.into_bytes()
    }
}

impl fmt::Display for EmailDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Create a random MIME boundary from 8 bytes of the thread-local CSPRNG.
fn make_boundary() -> String {
    let mut bytes = [0u8; 8];
    rand::thread_rng().fill_bytes(&mut bytes);

    let suffix: String = bytes.iter().map(|b| format!("{b:02x}")).collect();

    format!("{BOUNDARY_PREFIX}{suffix}")
}
