//! Application state management

use crate::storage::BrowserStorage;
use blogdash_client::{ApiClient, SessionStore, ShellState};
use blogdash_core::Config;
use leptos::prelude::*;
use tracing::error;

/// State shared by every page through context
#[derive(Clone, Copy)]
pub struct AppState {
    /// Dashboard configuration
    pub config: StoredValue<Config>,
    /// Session, loaded from local storage at startup
    pub session: RwSignal<SessionStore<BrowserStorage>>,
    /// Sidebar and mobile-menu toggles
    pub shell: RwSignal<ShellState>,
}

impl AppState {
    /// Create the state, reading the persisted session
    pub fn new(config: Config) -> Self {
        Self {
            config: StoredValue::new(config),
            session: RwSignal::new(SessionStore::load(BrowserStorage)),
            shell: RwSignal::new(ShellState::default()),
        }
    }

    /// The state provided by [`crate::app::App`]
    pub fn from_context() -> Self {
        expect_context::<Self>()
    }

    /// API client carrying the current session token
    pub fn api(&self) -> ApiClient {
        let client = ApiClient::new(self.config.with_value(|c| c.api_base_url().to_string()));
        match self.session.with_untracked(|s| s.token().map(str::to_string)) {
            Some(token) => client.with_token(token),
            None => client,
        }
    }

    /// Posts per page
    pub fn page_size(&self) -> u32 {
        self.config.with_value(|c| c.posts.page_size)
    }

    /// Whether the session gate should show the shell
    pub fn is_authenticated(&self) -> bool {
        self.session.with(SessionStore::is_authenticated)
    }

    /// Role shown in the sidebar footer
    pub fn role_label(&self) -> &'static str {
        self.session.with(SessionStore::role_label)
    }

    /// Clear the session; the gate falls back to the login form
    pub fn logout(&self) {
        self.session.update(|session| {
            if let Err(e) = session.logout() {
                error!(error = %e, "failed to clear session");
            }
        });
    }
}
