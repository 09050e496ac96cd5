//! Validate handler

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::debug;
use utoipa::ToSchema;

use crate::{
    domain::compose::{ComposeRequest, ComposeService},
    infrastructure::http::{
        extract::{lenient_string, LenientJson},
        state::AppState,
    },
};

/// Validate request body
#[derive(Clone, Debug, Default, Serialize, Deserialize, ToSchema)]
pub struct ValidateBody {
    /// The recipient's email address
    #[schema(example = "email@example.com")]
    #[serde(default, deserialize_with = "lenient_string")]
    recipient_email: String,

    /// The sender's email address
    #[schema(example = "me@example.com")]
    #[serde(default, deserialize_with = "lenient_string")]
    from_email: String,

    /// The SMTP port, as text or a number
    #[schema(example = "587")]
    #[serde(default, deserialize_with = "lenient_string")]
    smtp_port: String,

    /// The HTML body
    #[schema(example = "<p>Hello</p>")]
    #[serde(default, deserialize_with = "lenient_string")]
    html_body: String,
}

impl From<ValidateBody> for ComposeRequest {
    fn from(body: ValidateBody) -> Self {
        Self {
            recipient_email: body.recipient_email,
            from_email: body.from_email,
            smtp_port: body.smtp_port,
            html_body: body.html_body,
            ..Default::default()
        }
    }
}

/// Validate response body
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ValidateResponse {
    /// `true` when there are no errors
    pub ok: bool,

    /// User-facing messages, in field order
    #[schema(example = json!(["Recipient email is invalid."]))]
    pub errors: Vec<String>,
}

/// Validate the composer form fields
#[utoipa::path(
    post,
    operation_id = "validate",
    tag = "Compose",
    path = "/api/validate",
    request_body = ValidateBody,
    responses(
        (status = StatusCode::OK, description = "Validation result", body = ValidateResponse),
    )
)]
pub async fn handler<C: ComposeService>(
    State(state): State<AppState<C>>,
    LenientJson(body): LenientJson<ValidateBody>,
) -> Json<ValidateResponse> {
    let report = state.composer.validate(&body.into());

    debug!(ok = report.is_valid(), "validate request");

    Json(ValidateResponse {
        ok: report.is_valid(),
        errors: report.messages(),
    })
}

#[cfg(test)]
mod tests {
    use axum_test::TestServer;
    use serde_json::json;
    use testresult::TestResult;

    use crate::{
        domain::compose::{
            service::MockComposeService, ComposeRequest, ComposeServiceImpl, ValidationError,
            ValidationReport,
        },
        infrastructure::http::{
            handlers::api::validate::ValidateResponse, router, state::test_state,
        },
    };

    async fn post(body: serde_json::Value) -> TestResult<ValidateResponse> {
        let state = test_state(ComposeServiceImpl::new());

        let response = TestServer::new(router(state))?
            .post("/api/validate")
            .json(&body)
            .await;

        response.assert_status_ok();

        Ok(response.json::<ValidateResponse>())
    }

    #[tokio::test]
    async fn test_validate_success() -> TestResult {
        let json = post(json!({
            "recipient_email": "a@b.com",
            "html_body": "<p>Hello</p>",
        }))
        .await?;

        assert!(json.ok);
        assert!(json.errors.is_empty());

        Ok(())
    }

    #[tokio::test]
    async fn test_validate_collects_errors_in_order() -> TestResult {
        let json = post(json!({
            "recipient_email": "not-an-email",
            "smtp_port": "99999",
            "html_body": "",
        }))
        .await?;

        assert!(!json.ok);
        assert_eq!(
            json.errors,
            vec![
                "Recipient email is invalid.",
                "SMTP port must be 1–65535.",
                "HTML body is empty.",
            ]
        );

        Ok(())
    }

    #[tokio::test]
    async fn test_validate_numeric_port() -> TestResult {
        let json = post(json!({
            "recipient_email": "a@b.com",
            "from_email": "me@x.org",
            "smtp_port": 587,
            "html_body": "<p/>",
        }))
        .await?;

        assert!(json.ok);

        let json = post(json!({
            "recipient_email": "a@b.com",
            "smtp_port": "abc",
            "html_body": "<p/>",
        }))
        .await?;

        assert_eq!(json.errors, vec!["SMTP port must be a number."]);

        Ok(())
    }

    #[tokio::test]
    async fn test_validate_falsy_and_boolean_fields() -> TestResult {
        let json = post(json!({
            "recipient_email": "a@b.com",
            "smtp_port": 0,
            "html_body": "<p/>",
        }))
        .await?;

        assert!(json.ok);

        let json = post(json!({
            "recipient_email": "a@b.com",
            "smtp_port": true,
            "html_body": "<p/>",
        }))
        .await?;

        assert_eq!(json.errors, vec!["SMTP port must be a number."]);

        let json = post(json!({
            "recipient_email": "a@b.com",
            "html_body": 0,
        }))
        .await?;

        assert_eq!(json.errors, vec!["HTML body is empty."]);

        Ok(())
    }

    #[tokio::test]
    async fn test_validate_non_json_body() -> TestResult {
        let state = test_state(ComposeServiceImpl::new());

        let response = TestServer::new(router(state))?
            .post("/api/validate")
            .text("recipient_email=a@b.com")
            .await;

        response.assert_status_ok();
        response.assert_json(&json!({
            "ok": false,
            "errors": ["Recipient email is invalid.", "HTML body is empty."],
        }));

        Ok(())
    }

    #[tokio::test]
    async fn test_validate_empty_body() -> TestResult {
        let state = test_state(ComposeServiceImpl::new());

        let response = TestServer::new(router(state))?
            .post("/api/validate")
            .await;

        response.assert_status_ok();

        let json = response.json::<ValidateResponse>();
        assert!(!json.ok);
        assert_eq!(json.errors.len(), 2);

        Ok(())
    }

    #[tokio::test]
    async fn test_validate_passes_fields_to_service() -> TestResult {
        let mut composer = MockComposeService::new();

        composer
            .expect_validate()
            .withf(|request: &ComposeRequest| {
                request.recipient_email == "a@b.com"
                    && request.from_email == "me@x.org"
                    && request.smtp_port == "25"
                    && request.html_body == "<p/>"
                    && request.from_name.is_empty()
                    && request.subject.is_empty()
            })
            .times(1)
            .returning(|_| ValidationReport::from(vec![ValidationError::InvalidFromEmail]));

        let state = test_state(composer);

        let response = TestServer::new(router(state))?
            .post("/api/validate")
            .json(&json!({
                "recipient_email": "a@b.com",
                "from_name": "ignored",
                "from_email": "me@x.org",
                "subject": "ignored",
                "smtp_port": 25,
                "html_body": "<p/>",
            }))
            .await;

        response.assert_json(&json!({
            "ok": false,
            "errors": ["From email is invalid."],
        }));

        Ok(())
    }
}
