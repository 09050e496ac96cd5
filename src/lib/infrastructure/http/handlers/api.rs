//! JSON API handlers

use axum::{
    routing::{get, post},
    Router,
};

use crate::{
    domain::compose::ComposeService,
    infrastructure::http::{open_api, state::AppState},
};

pub mod eml;
pub mod validate;

/// Create the router for `/api`
pub fn router<C: ComposeService>() -> Router<AppState<C>> {
    Router::new()
        .route("/openapi.json", get(open_api::handler))
        .route("/validate", post(validate::handler::<C>))
        .route("/eml", post(eml::handler::<C>))
}
