//! Application state module

use std::{fmt, sync::Arc};

use crate::domain::compose::ComposeService;

use super::page::ComposerPage;

/// Global application state
#[derive(Clone)]
pub struct AppState<C: ComposeService> {
    /// The composer page served at `/`
    pub page: ComposerPage,

    /// Compose service
    pub composer: Arc<C>,
}

/// Implementation of the application state
impl<C> AppState<C>
where
    C: ComposeService,
{
    /// Create a new application state
    pub fn new(page: ComposerPage, composer: C) -> Self {
        Self {
            page,
            composer: Arc::new(composer),
        }
    }
}

impl<C> fmt::Debug for AppState<C>
where
    C: ComposeService,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppState")
            .field("page", &self.page)
            .field("composer", &"ComposeService")
            .finish()
    }
}

/// Markup served by [`test_state`]
#[cfg(test)]
pub const TEST_PAGE: &str = "<html><title>Email Composer</title></html>";

/// State wrapping `composer` and a small fixed page
#[cfg(test)]
pub fn test_state<C: ComposeService>(composer: C) -> AppState<C> {
    AppState::new(ComposerPage::new(TEST_PAGE), composer)
}
