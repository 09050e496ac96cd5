//! Message composition: field validation and MIME document construction

pub mod errors;
pub mod models;
pub mod service;
pub mod validator;
pub mod value_objects;

pub use errors::{EmlRequestError, ValidationError};
pub use models::{document::EmailDocument, request::ComposeRequest};
pub use service::{ComposeService, ComposeServiceImpl};
pub use validator::{check_eml_request, is_email, validate, ValidationReport};
