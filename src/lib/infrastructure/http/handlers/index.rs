//! Composer page handler

use axum::{body::Bytes, extract::State, response::Html};

use crate::{domain::compose::ComposeService, infrastructure::http::state::AppState};

/// Serve the composer page
pub async fn handler<C: ComposeService>(State(state): State<AppState<C>>) -> Html<Bytes> {
    Html(state.page.markup())
}

#[cfg(test)]
mod tests {
    use axum_test::TestServer;
    use testresult::TestResult;

    use crate::{
        domain::compose::ComposeServiceImpl,
        infrastructure::http::{
            router,
            state::{test_state, TEST_PAGE},
        },
    };

    #[tokio::test]
    async fn test_index_handler() -> TestResult {
        let state = test_state(ComposeServiceImpl::new());

        let response = TestServer::new(router(state))?.get("/").await;

        response.assert_status_ok();
        assert_eq!(response.text(), TEST_PAGE);
        assert_eq!(
            response.header("content-type"),
            "text/html; charset=utf-8"
        );

        Ok(())
    }
}
