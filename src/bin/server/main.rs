#![warn(
    missing_debug_implementations,
    rust_2018_idioms,
    missing_docs,
    rustdoc::broken_intra_doc_links,
    rustdoc::missing_crate_level_docs
)]

//! Email composer web server

use anyhow::Result;
use clap::Parser;
use eml_composer::{
    domain::compose::ComposeServiceImpl,
    infrastructure::http::{
        page::ComposerPage, state::AppState, HttpServer, HttpServerConfig, Server,
    },
};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

/// Command-line arguments / environment variables
#[derive(Debug, Parser)]
pub struct Args {
    /// The HTTP server configuration
    #[clap(flatten)]
    pub server: HttpServerConfig,
}

#[mutants::skip]
#[tokio::main]
async fn main() -> Result<()> {
    let dotenv = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    if let Err(e) = dotenv {
        debug!("no environment file loaded: {}", e);
    }

    let args = Args::parse();

    let page = ComposerPage::load(&args.server.composer_page).await?;
    info!("loaded composer page from {}", args.server.composer_page.display());

    let state = AppState::new(page, ComposeServiceImpl::new());

    HttpServer::new(args.server.port, state)?.run().await
}
