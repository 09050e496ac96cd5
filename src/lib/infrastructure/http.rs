//! HTTP Server

use std::{
    net::{Ipv4Addr, SocketAddr, TcpListener},
    path::PathBuf,
    time::Duration,
};

use anyhow::{Context, Result};
use async_trait::async_trait;
use axum::{extract::Request, routing::get, Router};
use axum_server::Handle;
use clap::Parser;
use tokio::signal;
use tower_http::{catch_panic::CatchPanicLayer, compression::CompressionLayer, trace::TraceLayer};
use tracing::{debug, error, info, info_span};

use crate::domain::compose::ComposeService;

use handlers::{api, health, index, panic_handler};
use state::AppState;

pub mod errors;
pub mod extract;
pub mod handlers;
pub mod open_api;
pub mod page;
pub mod state;

/// Configuration for the HTTP server.
#[derive(Debug, Clone, PartialEq, Eq, Parser)]
pub struct HttpServerConfig {
    /// The port to listen on
    #[arg(short, long, env = "PORT", default_value = "5000")]
    pub port: u16,

    /// Path of the composer page served at `/`
    #[arg(long, env = "COMPOSER_PAGE", default_value = "static/composer.html")]
    pub composer_page: PathBuf,
}

/// A runnable server
#[async_trait]
pub trait Server {
    /// Serves requests until a shutdown signal arrives
    async fn run(self) -> Result<()>;
}

/// The application's HTTP server
#[derive(Debug)]
pub struct HttpServer {
    router: Router,
    listener: TcpListener,
}

impl HttpServer {
    /// Returns a new HTTP server bound to `port` on every interface.
    pub fn new(port: u16, state: AppState<impl ComposeService>) -> Result<Self> {
        let router = router(state);

        let address = SocketAddr::from((Ipv4Addr::UNSPECIFIED, port));
        let listener =
            TcpListener::bind(address).with_context(|| format!("failed to listen on {port}"))?;
        listener
            .set_nonblocking(true)
            .context("failed to make listener non-blocking")?;

        Ok(Self { router, listener })
    }
}

#[async_trait]
impl Server for HttpServer {
    #[mutants::skip]
    async fn run(self) -> Result<()> {
        info!(
            "HTTP Server listening on {}",
            self.listener
                .local_addr()
                .context("failed to get local address")?
        );

        let handle = Handle::new();

        let server = axum_server::from_tcp(self.listener)
            .handle(handle.clone())
            .serve(self.router.into_make_service());

        tokio::select! {
            result = server => result.context("server error")?,
            _ = shutdown_signal(Some(handle)) => {
                info!("Shutting down HTTP server");
            }
        }

        Ok(())
    }
}

/// Create the application's router
pub fn router<C: ComposeService>(state: AppState<C>) -> Router {
    let trace_layer = TraceLayer::new_for_http().make_span_with(|request: &Request<_>| {
        let uri = request.uri().to_string();
        info_span!("http_request", method = ?request.method(), uri)
    });

    Router::new()
        .route("/", get(index::handler::<C>))
        .route("/health", get(health::handler))
        .nest("/api", api::router())
        .layer(CompressionLayer::new())
        .layer(CatchPanicLayer::custom(panic_handler))
        .layer(trace_layer)
        .with_state(state)
}

#[mutants::skip]
async fn shutdown_signal(handle: Option<Handle>) {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            error!("failed to install Ctrl+C handler: {err}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(err) => {
                error!("failed to install signal handler: {err}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    if let Some(handle) = handle {
        debug!("shutting down gracefully");
        handle.graceful_shutdown(Some(Duration::from_secs(10)));
    }
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use axum_test::TestServer;
    use clap::CommandFactory;
    use testresult::TestResult;

    use super::*;
    use crate::{
        domain::compose::ComposeServiceImpl,
        infrastructure::http::state::test_state,
    };

    fn default_value(id: &str) -> Option<String> {
        HttpServerConfig::command()
            .get_arguments()
            .find(|arg| arg.get_id() == id)
            .and_then(|arg| arg.get_default_values().first())
            .map(|value| value.to_string_lossy().into_owned())
    }

    #[test]
    fn test_config_defaults() {
        assert_eq!(default_value("port").as_deref(), Some("5000"));
        assert_eq!(
            default_value("composer_page").as_deref(),
            Some("static/composer.html")
        );
    }

    #[test]
    fn test_config_from_arguments() -> TestResult {
        let config = HttpServerConfig::try_parse_from([
            "server",
            "--port",
            "8080",
            "--composer-page",
            "page.html",
        ])?;

        assert_eq!(config.port, 8080);
        assert_eq!(config.composer_page, PathBuf::from("page.html"));

        Ok(())
    }

    #[test]
    fn test_config_rejects_invalid_port() {
        assert!(HttpServerConfig::try_parse_from(["server", "--port", "70000"]).is_err());
    }

    #[tokio::test]
    async fn test_unknown_route_is_not_found() -> TestResult {
        let state = test_state(ComposeServiceImpl::new());

        let response = TestServer::new(router(state))?
            .get("/nope")
            .expect_failure()
            .await;

        assert_eq!(response.status_code(), StatusCode::NOT_FOUND);

        Ok(())
    }
}
