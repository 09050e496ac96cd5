//! OpenAPI module

use axum::Json;
use utoipa::OpenApi;

use crate::infrastructure::http::{
    errors::ErrorResponse,
    handlers::{api::*, health},
};

/// OpenAPI document for the JSON endpoints
#[derive(Debug, OpenApi)]
#[openapi(
    info(title = "EML Composer"),
    paths(health::handler, validate::handler, eml::handler),
    components(schemas(
        health::HealthResponse,
        validate::ValidateBody,
        validate::ValidateResponse,
        eml::EmlBody,
        ErrorResponse,
    ))
)]
pub struct ApiDocs;

/// Serve the OpenAPI document
pub async fn handler() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDocs::openapi())
}
