//! EML download handler

use axum::{
    extract::State,
    http::header,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use tracing::info;
use utoipa::ToSchema;

use crate::{
    domain::compose::{ComposeRequest, ComposeService},
    infrastructure::http::{
        errors::ApiError,
        extract::{lenient_string, LenientJson},
        state::AppState,
    },
};

/// Media type of the downloaded document
pub const EML_CONTENT_TYPE: &str = "message/rfc822";

/// Content disposition of the downloaded document
pub const EML_CONTENT_DISPOSITION: &str = "attachment; filename=\"email.eml\"";

/// EML request body
#[derive(Clone, Debug, Default, Serialize, Deserialize, ToSchema)]
pub struct EmlBody {
    /// The recipient's email address
    #[schema(example = "email@example.com")]
    #[serde(default, deserialize_with = "lenient_string")]
    recipient_email: String,

    /// The sender's display name
    #[schema(example = "Alice")]
    #[serde(default, deserialize_with = "lenient_string")]
    from_name: String,

    /// The sender's email address
    #[schema(example = "alice@example.com")]
    #[serde(default, deserialize_with = "lenient_string")]
    from_email: String,

    /// The subject line
    #[schema(example = "Hello")]
    #[serde(default, deserialize_with = "lenient_string")]
    subject: String,

    /// The HTML body
    #[schema(example = "<p>Hello</p>")]
    #[serde(default, deserialize_with = "lenient_string")]
    html_body: String,
}

impl From<EmlBody> for ComposeRequest {
    fn from(body: EmlBody) -> Self {
        Self {
            recipient_email: body.recipient_email,
            from_name: body.from_name,
            from_email: body.from_email,
            subject: body.subject,
            html_body: body.html_body,
            ..Default::default()
        }
    }
}

/// Download the composed email as an `.eml` file
#[utoipa::path(
    post,
    operation_id = "eml",
    tag = "Compose",
    path = "/api/eml",
    request_body = EmlBody,
    responses(
        (status = StatusCode::OK, description = "The email document", content_type = "message/rfc822", body = String),
        (status = StatusCode::BAD_REQUEST, description = "Invalid request", body = ErrorResponse, example = json!({"error": "Invalid recipient email"})),
    )
)]
pub async fn handler<C: ComposeService>(
    State(state): State<AppState<C>>,
    LenientJson(body): LenientJson<EmlBody>,
) -> Result<Response, ApiError> {
    let document = state.composer.compose_eml(&body.into())?;

    info!(boundary = document.boundary(), "serving email document");

    Ok((
        [
            (header::CONTENT_TYPE, EML_CONTENT_TYPE),
            (header::CONTENT_DISPOSITION, EML_CONTENT_DISPOSITION),
        ],
        document.into_bytes(),
    )
        .into_response())
}
