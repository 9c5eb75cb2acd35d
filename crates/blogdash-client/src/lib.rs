//! API client, session store and view controllers for the BlogDash dashboard
//!
//! Everything here is independent of the rendering layer: the controllers hold
//! one view's state each and move it through its states in response to API
//! results, so they run the same natively under test and in the browser.

#![cfg_attr(
    test,
    allow(clippy::unwrap_used, clippy::expect_used, clippy::indexing_slicing, clippy::panic)
)]

pub mod api;
pub mod api_client;
pub mod dashboard;
pub mod login;
pub mod mock;
pub mod posts;
pub mod preview;
pub mod routes;
pub mod session;
pub mod shell;
pub mod view_state;

// Re-export commonly used types
pub use api::BlogApi;
pub use api_client::ApiClient;
pub use dashboard::{DashboardData, DashboardView, RecentPost, StatCard};
pub use login::{LoginError, LoginForm, LoginStatus};
pub use mock::MockBlogApi;
pub use posts::{
    ConfirmPrompt, DELETE_CONFIRMATION, DeleteOutcome, PostListView, PostRow, StatusFilter,
};
pub use preview::{CommentView, PostDetails, PostPreviewView};
pub use routes::{NAV_ITEMS, NavItem, preview_path};
pub use session::{MemoryStorage, SessionStorage, SessionStore};
#[cfg(not(target_arch = "wasm32"))]
pub use session::FileStorage;
pub use shell::ShellState;
pub use view_state::ViewState;
