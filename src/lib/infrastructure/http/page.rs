//! Composer page

use std::path::Path;

use anyhow::{Context, Result};
use axum::body::Bytes;
use tracing::debug;

/// The composer page markup, read once at startup and shared read-only
#[derive(Clone, Debug)]
pub struct ComposerPage(Bytes);

impl ComposerPage {
    /// Create a page from markup already in memory
    pub fn new(markup: impl Into<String>) -> Self {
        Self(Bytes::from(markup.into()))
    }

    /// Read the page from `path`. The file must exist and be valid UTF-8.
    pub async fn load(path: &Path) -> Result<Self> {
        let markup = tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("failed to read composer page {}", path.display()))?;

        debug!(path = %path.display(), bytes = markup.len(), "loaded composer page");

        Ok(Self::new(markup))
    }

    /// The page markup
    pub fn markup(&self) -> Bytes {
        self.0.clone()
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use testresult::TestResult;

    use super::*;

    #[tokio::test]
    async fn test_load_bundled_page() -> TestResult {
        let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("static/composer.html");

        let page = ComposerPage::load(&path).await?;

        assert!(String::from_utf8(page.markup().to_vec())?.contains("/api/eml"));

        Ok(())
    }

    #[tokio::test]
    async fn test_load_missing_page_fails() {
        let result = ComposerPage::load(Path::new("does/not/exist.html")).await;

        let err = result.expect_err("missing page should fail");
        assert!(err.to_string().contains("does/not/exist.html"));
    }

    #[test]
    fn test_new_page() {
        let page = ComposerPage::new("<h1>Composer</h1>");

        assert_eq!(page.markup(), Bytes::from_static(b"<h1>Composer</h1>"));
    }
}
