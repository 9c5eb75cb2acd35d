//! Subcommands, independent of argument parsing and stdio
//!
//! Each command returns the text to print; failures come back as errors
//! carrying the same messages the browser app shows.

use crate::output;
use blogdash_client::preview::{FETCH_FAILED, NOT_FOUND};
use blogdash_client::{
    BlogApi, ConfirmPrompt, DashboardView, DeleteOutcome, LoginForm, PostListView,
    PostPreviewView, SessionStorage, SessionStore, StatusFilter, ViewState,
};
use blogdash_core::{Config, Error, Result};
use tracing::debug;

/// Shown when a command needs a session and none is stored
pub const NOT_SIGNED_IN: &str = "Not signed in. Run `blogdash login` or `blogdash guest` first";

/// Fail unless a session is stored
///
/// # Errors
///
/// Returns [`NOT_SIGNED_IN`] when the session holds no token.
pub fn require_session<S: SessionStorage>(session: &SessionStore<S>) -> Result<()> {
    if session.is_authenticated() {
        Ok(())
    } else {
        Err(Error::Other(NOT_SIGNED_IN.to_string()))
    }
}

/// Sign in with email and password
///
/// # Errors
///
/// Returns the login form's message when validation or the request fails.
pub async fn login<A, S>(
    api: &A,
    session: &mut SessionStore<S>,
    email: &str,
    password: &str,
) -> Result<String>
where
    A: BlogApi + ?Sized,
    S: SessionStorage,
{
    let mut form = LoginForm::new();
    form.email = email.to_string();
    form.password = password.to_string();

    if form.submit(api, session).await {
        Ok(format!("Signed in as {}", form.email.trim()))
    } else {
        Err(form_error(&form))
    }
}

/// Start a guest session without contacting the API
///
/// # Errors
///
/// Returns an error when the session cannot be saved.
pub fn guest<S: SessionStorage>(session: &mut SessionStore<S>) -> Result<String> {
    let mut form = LoginForm::new();
    if form.guest(session) {
        Ok("Continuing as guest".to_string())
    } else {
        Err(form_error(&form))
    }
}

fn form_error(form: &LoginForm) -> Error {
    Error::Other(
        form.error_message()
            .unwrap_or_else(|| "Login failed".to_string()),
    )
}

/// Clear the stored session
///
/// # Errors
///
/// Returns an error when the session file cannot be updated.
pub fn logout<S: SessionStorage>(session: &mut SessionStore<S>) -> Result<String> {
    session.logout()?;
    Ok("Signed out".to_string())
}

/// Describe the stored session
pub fn whoami<S: SessionStorage>(session: &SessionStore<S>) -> String {
    if session.is_authenticated() {
        format!("Signed in ({})", session.role_label())
    } else {
        "Not signed in".to_string()
    }
}

/// Fetch and render the dashboard summary; failures render zeros
pub async fn summary<A: BlogApi + ?Sized>(api: &A) -> String {
    let mut view = DashboardView::new();
    view.load(api).await;
    output::dashboard(&view.state().ready().cloned().unwrap_or_default())
}

/// What to list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListOptions {
    /// Page to show
    pub page: u32,
    /// Posts per page
    pub page_size: u32,
    /// Search text applied to the fetched page
    pub search: Option<String>,
    /// Status filter value (`all`, `generated`, ...)
    pub status: Option<String>,
}

impl ListOptions {
    /// First page at the configured size
    pub fn from_config(config: &Config) -> Self {
        Self {
            page: 1,
            page_size: config.posts.page_size,
            search: None,
            status: None,
        }
    }
}

/// Fetch and render one page of posts
///
/// Page 1 is fetched first so the requested page can be clamped to the
/// server's page count.
///
/// # Errors
///
/// Returns "Failed to load posts" when a page cannot be fetched.
pub async fn list<A: BlogApi + ?Sized>(api: &A, options: &ListOptions) -> Result<String> {
    let mut view = PostListView::new(options.page_size);
    view.refresh(api).await;
    if view.state().ready().is_some() && options.page > 1 {
        debug!(page = options.page, "jumping to requested page");
        view.change_page(api, options.page).await;
    }

    view.search = options.search.clone().unwrap_or_default();
    view.filter = options
        .status
        .as_deref()
        .map(StatusFilter::from_value)
        .unwrap_or_default();

    match view.state() {
        ViewState::Failed(message) => Err(Error::Other(message.clone())),
        _ => Ok(output::post_list(&view)),
    }
}

/// Fetch and render a single post
///
/// # Errors
///
/// Returns "Post not found" or "Failed to fetch post. Please try again.".
pub async fn show<A: BlogApi + ?Sized>(api: &A, id: &str) -> Result<String> {
    let mut view = PostPreviewView::new();
    view.load(api, id).await;

    match view.state() {
        ViewState::Ready(details) => Ok(output::post_details(details)),
        ViewState::NotFound => Err(Error::Other(NOT_FOUND.to_string())),
        ViewState::Failed(message) => Err(Error::Other(message.clone())),
        ViewState::Loading => Err(Error::Other(FETCH_FAILED.to_string())),
    }
}

/// Delete a post after confirmation and report the new total
///
/// # Errors
///
/// Returns the API's failure message when the delete is refused.
pub async fn delete<A, P>(api: &A, prompt: &P, page_size: u32, id: &str) -> Result<String>
where
    A: BlogApi + ?Sized,
    P: ConfirmPrompt + ?Sized,
{
    let mut view = PostListView::new(page_size);
    match view.delete(api, prompt, id).await {
        DeleteOutcome::Deleted if view.state().ready().is_some() => {
            Ok(format!("Deleted post {id}\n{}", view.total_label()))
        }
        DeleteOutcome::Deleted => Ok(format!("Deleted post {id}")),
        DeleteOutcome::Cancelled => Ok("Delete cancelled".to_string()),
        DeleteOutcome::Failed(message) => Err(Error::Other(message)),
    }
}

/// Resolved configuration as pretty JSON
///
/// # Errors
///
/// Returns an error if the configuration cannot be serialized.
pub fn show_config(config: &Config) -> Result<String> {
    Ok(serde_json::to_string_pretty(config)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use blogdash_client::mock::{ApiCall, Endpoint, MockFailure};
    use blogdash_client::{MemoryStorage, MockBlogApi};
    use blogdash_core::{PageRequest, Post, PostStatus, UserType};
    use pretty_assertions::assert_eq;

    fn posts(count: usize) -> Vec<Post> {
        (1..=count)
            .map(|n| Post {
                id: format!("p{n}"),
                title: Some(format!("Post {n}")),
                status: Some(if n % 2 == 0 {
                    PostStatus::Draft
                } else {
                    PostStatus::Published
                }),
                ..Post::default()
            })
            .collect()
    }

    fn options(page: u32) -> ListOptions {
        ListOptions {
            page,
            page_size: 10,
            search: None,
            status: None,
        }
    }

    #[test]
    fn test_commands_need_a_session() {
        let mut session = SessionStore::load(MemoryStorage::new());
        let err = require_session(&session).unwrap_err();
        assert_eq!(err.to_string(), NOT_SIGNED_IN);
        assert_eq!(whoami(&session), "Not signed in");

        assert_eq!(guest(&mut session).unwrap(), "Continuing as guest");
        assert!(require_session(&session).is_ok());
        assert_eq!(whoami(&session), "Signed in (Guest)");

        assert_eq!(logout(&mut session).unwrap(), "Signed out");
        assert!(require_session(&session).is_err());
    }

    #[tokio::test]
    async fn test_login_stores_token() {
        let api = MockBlogApi::new().with_token(Some("jwt-1"));
        let mut session = SessionStore::load(MemoryStorage::new());

        let message = login(&api, &mut session, " admin@example.com ", "secret")
            .await
            .unwrap();

        assert_eq!(message, "Signed in as admin@example.com");
        assert_eq!(session.token(), Some("jwt-1"));
        assert_eq!(session.user_type(), Some(UserType::User));
    }

    #[tokio::test]
    async fn test_login_failures_use_form_messages() {
        let api = MockBlogApi::new().with_failure(Endpoint::Login, MockFailure::Status(401, None));
        let mut session = SessionStore::load(MemoryStorage::new());

        let err = login(&api, &mut session, "", "secret").await.unwrap_err();
        assert_eq!(err.to_string(), "Please enter both email and password");
        assert_eq!(api.count(Endpoint::Login), 0);

        let err = login(&api, &mut session, "a@b.c", "wrong").await.unwrap_err();
        assert_eq!(err.to_string(), "Invalid email or password");
        assert!(!session.is_authenticated());
    }

    #[tokio::test]
    async fn test_list_jumps_to_clamped_page() {
        let api = MockBlogApi::new().with_posts(posts(25));

        let text = list(&api, &options(9)).await.unwrap();

        assert_eq!(
            api.calls(),
            vec![
                ApiCall::ListPosts(PageRequest { page: 1, limit: 10 }),
                ApiCall::ListPosts(PageRequest { page: 3, limit: 10 }),
            ]
        );
        assert!(text.starts_with("Total Posts: 25"));
        assert!(text.contains("p21 "));
        assert!(text.ends_with("Page 3 of 3"));
    }

    #[tokio::test]
    async fn test_list_applies_search_and_status() {
        let api = MockBlogApi::new().with_posts(posts(10));
        let mut opts = options(1);
        opts.status = Some("draft".to_string());
        opts.search = Some("post 1".to_string());

        let text = list(&api, &opts).await.unwrap();

        assert!(text.contains("p10 "));
        assert!(!text.contains("p1 "));
        assert!(!text.contains("p2 "));
    }

    #[tokio::test]
    async fn test_list_failure_is_an_error() {
        let api = MockBlogApi::new().with_failure(Endpoint::ListPosts, MockFailure::Network);

        let err = list(&api, &options(2)).await.unwrap_err();

        assert_eq!(err.to_string(), "Failed to load posts");
        assert_eq!(api.count(Endpoint::ListPosts), 1);
    }

    #[tokio::test]
    async fn test_summary_renders_zeros_on_failure() {
        let api = MockBlogApi::new().with_failure(Endpoint::DashboardSummary, MockFailure::Network);

        let text = summary(&api).await;

        assert!(text.starts_with("Total Posts   0"));
        assert_eq!(api.count(Endpoint::DashboardSummary), 1);
    }

    #[tokio::test]
    async fn test_show_found_and_missing() {
        let api = MockBlogApi::new().with_posts(posts(2));

        let text = show(&api, "p2").await.unwrap();
        assert!(text.starts_with("Post 2\nDraft | "));

        let err = show(&api, "nope").await.unwrap_err();
        assert_eq!(err.to_string(), NOT_FOUND);
    }

    #[tokio::test]
    async fn test_delete_confirms_then_refetches_once() {
        let api = MockBlogApi::new().with_posts(posts(3));

        let text = delete(&api, &|_: &str| true, 10, "p2").await.unwrap();

        assert_eq!(text, "Deleted post p2\nTotal Posts: 2");
        assert_eq!(
            api.calls(),
            vec![
                ApiCall::DeletePost("p2".to_string()),
                ApiCall::ListPosts(PageRequest { page: 1, limit: 10 }),
            ]
        );
    }

    #[tokio::test]
    async fn test_declined_delete_sends_nothing() {
        let api = MockBlogApi::new().with_posts(posts(3));

        let text = delete(&api, &|_: &str| false, 10, "p2").await.unwrap();

        assert_eq!(text, "Delete cancelled");
        assert!(api.calls().is_empty());
    }

    #[test]
    fn test_show_config_is_json() {
        let text = show_config(&Config::default()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["posts"]["page_size"], 10);
    }
}
