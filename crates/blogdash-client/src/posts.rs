//! Post list controller: paging, in-page search and filter, delete

use crate::api::BlogApi;
use crate::view_state::ViewState;
use blogdash_core::utils::{contains_ignore_case, format_short_date};
use blogdash_core::{PageControls, PageEnvelope, PageRequest, Post, PostStatus, Result};
use tracing::{debug, info, warn};

/// Question asked before a post is deleted
pub const DELETE_CONFIRMATION: &str = "Are you sure you want to delete this post?";

/// Shown when a page cannot be loaded
pub const LOAD_FAILED: &str = "Failed to load posts";

/// Heading shown when no row passes the search and filter
pub const EMPTY_TITLE: &str = "No posts found";

/// Hint under [`EMPTY_TITLE`]
pub const EMPTY_HINT: &str = "Try changing your search or filter criteria";

/// Yes/no prompt shown before destructive actions
pub trait ConfirmPrompt {
    /// Ask the question; `true` means go ahead
    fn confirm(&self, message: &str) -> bool;
}

impl<F> ConfirmPrompt for F
where
    F: Fn(&str) -> bool,
{
    fn confirm(&self, message: &str) -> bool {
        self(message)
    }
}

/// Result of a delete request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// The prompt was declined; nothing was sent
    Cancelled,
    /// The post was deleted
    Deleted,
    /// The API refused or never answered
    Failed(String),
}

/// Status filter of the post list
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum StatusFilter {
    /// Every post on the page
    #[default]
    All,
    /// Only posts whose status is exactly this one
    Only(PostStatus),
}

impl StatusFilter {
    /// Options in display order
    pub fn options() -> Vec<Self> {
        std::iter::once(Self::All)
            .chain(PostStatus::FILTERABLE.into_iter().map(Self::Only))
            .collect()
    }

    /// `<option>` value
    pub fn value(&self) -> &str {
        match self {
            Self::All => "all",
            Self::Only(status) => status.as_str(),
        }
    }

    /// `<option>` text
    pub const fn label(&self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Only(status) => status.label(),
        }
    }

    /// Parse an `<option>` value; anything unrecognised means all
    pub fn from_value(value: &str) -> Self {
        match PostStatus::from(value) {
            PostStatus::Unknown(_) => Self::All,
            status => Self::Only(status),
        }
    }

    /// Whether a post passes the filter
    ///
    /// Compares the status the API sent; a missing or unrecognised status
    /// only passes [`StatusFilter::All`].
    pub fn matches(&self, post: &Post) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => post.status.as_ref() == Some(wanted),
        }
    }
}

/// One table row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostRow {
    /// Identifier for preview and delete
    pub id: String,
    /// Title with fallbacks applied
    pub title: String,
    /// URL slug, if any
    pub slug: Option<String>,
    /// Thumbnail URL, if any
    pub thumbnail: Option<String>,
    /// Topic, shown when it differs from the title
    pub topic: Option<String>,
    /// AI provider name
    pub provider: String,
    /// Model the provider used, if reported
    pub model: Option<String>,
    /// Short creation date
    pub created: String,
    /// Short update date, when it differs from the creation time
    pub updated: Option<String>,
    /// Badge text
    pub status_label: &'static str,
    /// Badge CSS class
    pub status_class: &'static str,
    /// Public URL, once published
    pub external_url: Option<String>,
}

impl From<&Post> for PostRow {
    fn from(post: &Post) -> Self {
        let status = post.status_or_default();
        let title = post.display_title().to_string();
        Self {
            id: post.key().to_string(),
            topic: post
                .topic
                .clone()
                .filter(|topic| !topic.is_empty() && *topic != title),
            title,
            slug: post.slug.clone().filter(|s| !s.is_empty()),
            thumbnail: post.thumbnail().map(str::to_string),
            provider: post.provider_label().to_string(),
            model: post.model_used.clone().filter(|m| !m.is_empty()),
            created: format_short_date(post.created_at.as_deref()),
            updated: post
                .distinct_update()
                .map(|updated| format_short_date(Some(updated))),
            status_label: status.label(),
            status_class: status.badge_class(),
            external_url: post.external_url().map(str::to_string),
        }
    }
}

/// Post list view state
#[derive(Debug, Clone)]
pub struct PostListView {
    page_size: u32,
    current_page: u32,
    state: ViewState<Vec<Post>>,
    total_posts: u64,
    total_pages: u32,
    /// Search box contents
    pub search: String,
    /// Selected status filter
    pub filter: StatusFilter,
}

impl PostListView {
    /// View on page 1, waiting for its first fetch
    pub fn new(page_size: u32) -> Self {
        Self {
            page_size: page_size.max(1),
            current_page: 1,
            state: ViewState::Loading,
            total_posts: 0,
            total_pages: 1,
            search: String::new(),
            filter: StatusFilter::All,
        }
    }

    /// Page currently shown
    pub const fn current_page(&self) -> u32 {
        self.current_page
    }

    /// Page count reported by the last response
    pub const fn total_pages(&self) -> u32 {
        self.total_pages
    }

    /// Post count reported by the last response
    pub const fn total_posts(&self) -> u64 {
        self.total_posts
    }

    /// Header text
    pub fn total_label(&self) -> String {
        format!("Total Posts: {}", self.total_posts)
    }

    /// Current state
    pub const fn state(&self) -> &ViewState<Vec<Post>> {
        &self.state
    }

    /// Request for the current page
    pub fn request(&self) -> PageRequest {
        PageRequest::new(self.current_page, self.page_size)
    }

    /// Enter the loading state and return the request to send
    pub fn begin_refresh(&mut self) -> PageRequest {
        self.state = ViewState::Loading;
        self.request()
    }

    /// Move to `page`, clamped to the known range
    ///
    /// Returns the request to send, or `None` when already on that page.
    pub fn go_to(&mut self, page: u32) -> Option<PageRequest> {
        let page = page.clamp(1, self.total_pages.max(1));
        if page == self.current_page {
            return None;
        }
        debug!(from = self.current_page, to = page, "changing page");
        self.current_page = page;
        Some(self.begin_refresh())
    }

    /// Settle a page request
    ///
    /// Responses for a page other than the current one are discarded; returns
    /// whether the response was applied.
    pub fn apply(&mut self, request: PageRequest, result: Result<PageEnvelope<Post>>) -> bool {
        if request.page != self.current_page {
            debug!(
                page = request.page,
                current = self.current_page,
                "discarding stale page response"
            );
            return false;
        }

        match result {
            Ok(envelope) => {
                self.total_posts = envelope.total();
                self.total_pages = envelope.total_pages();
                debug!(
                    page = request.page,
                    count = envelope.data.len(),
                    total = self.total_posts,
                    "posts loaded"
                );
                self.state = ViewState::Ready(envelope.data);
            }
            Err(err) => {
                warn!(page = request.page, error = %err, "failed to load posts");
                self.state = ViewState::Failed(LOAD_FAILED.to_string());
            }
        }
        true
    }

    /// Posts on the loaded page that pass the search and the filter
    pub fn visible_posts(&self) -> Vec<&Post> {
        let Some(posts) = self.state.ready() else {
            return Vec::new();
        };
        let needle = self.search.trim().to_lowercase();

        posts
            .iter()
            .filter(|post| needle.is_empty() || Self::matches_search(post, &needle))
            .filter(|post| self.filter.matches(post))
            .collect()
    }

    fn matches_search(post: &Post, needle: &str) -> bool {
        [&post.title, &post.content, &post.topic]
            .into_iter()
            .flatten()
            .any(|field| contains_ignore_case(field, needle))
    }

    /// Rows for the visible posts
    pub fn rows(&self) -> Vec<PostRow> {
        self.visible_posts().into_iter().map(PostRow::from).collect()
    }

    /// Whether the loaded page left nothing to show after search and filter
    pub fn is_empty(&self) -> bool {
        self.state.ready().is_some() && self.visible_posts().is_empty()
    }

    /// Pagination controls for the current position
    pub fn controls(&self) -> PageControls {
        PageControls::new(self.current_page, self.total_pages)
    }

    /// Whether the pagination bar is shown
    pub const fn shows_pagination(&self) -> bool {
        self.total_posts > 0
    }

    /// React to a delete; only a completed delete re-fetches the current page
    pub fn after_delete(&mut self, outcome: &DeleteOutcome) -> Option<PageRequest> {
        (*outcome == DeleteOutcome::Deleted).then(|| self.begin_refresh())
    }

    /// Fetch the current page
    pub async fn refresh<A: BlogApi + ?Sized>(&mut self, api: &A) {
        let request = self.begin_refresh();
        self.fetch(api, request).await;
    }

    /// Move to `page` and fetch it; returns whether a fetch was issued
    pub async fn change_page<A: BlogApi + ?Sized>(&mut self, api: &A, page: u32) -> bool {
        let Some(request) = self.go_to(page) else {
            return false;
        };
        self.fetch(api, request).await;
        true
    }

    /// Delete a post after confirmation, then re-fetch the current page
    pub async fn delete<A, P>(&mut self, api: &A, prompt: &P, id: &str) -> DeleteOutcome
    where
        A: BlogApi + ?Sized,
        P: ConfirmPrompt + ?Sized,
    {
        let outcome = delete_post(api, prompt, id).await;
        if let Some(request) = self.after_delete(&outcome) {
            self.fetch(api, request).await;
        }
        outcome
    }

    async fn fetch<A: BlogApi + ?Sized>(&mut self, api: &A, request: PageRequest) {
        let result = api.list_posts(request).await;
        self.apply(request, result);
    }
}

/// Confirm and delete a single post without touching any view state
pub async fn delete_post<A, P>(api: &A, prompt: &P, id: &str) -> DeleteOutcome
where
    A: BlogApi + ?Sized,
    P: ConfirmPrompt + ?Sized,
{
    if !prompt.confirm(DELETE_CONFIRMATION) {
        debug!(post_id = id, "delete cancelled");
        return DeleteOutcome::Cancelled;
    }

    match api.delete_post(id).await {
        Ok(()) => {
            info!(post_id = id, "post deleted");
            DeleteOutcome::Deleted
        }
        Err(err) => {
            warn!(post_id = id, error = %err, "failed to delete post");
            DeleteOutcome::Failed(err.to_string())
        }
    }
}

#[cfg(test)]
#[allow(clippy::missing_panics_doc)]
mod tests {
    use super::*;
    use blogdash_core::Error;
    use blogdash_core::types::PaginationInfo;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn post(id: &str, title: &str, status: Option<&str>) -> Post {
        Post {
            id: id.to_string(),
            title: Some(title.to_string()),
            status: status.map(PostStatus::from),
            ..Post::default()
        }
    }

    fn envelope(posts: Vec<Post>, total: u64, total_pages: u32) -> PageEnvelope<Post> {
        PageEnvelope {
            data: posts,
            pagination: Some(PaginationInfo {
                total: Some(total),
                total_pages: Some(total_pages),
                ..PaginationInfo::default()
            }),
        }
    }

    fn loaded(posts: Vec<Post>) -> PostListView {
        let mut view = PostListView::new(10);
        let request = view.begin_refresh();
        let total = posts.len() as u64;
        view.apply(request, Ok(envelope(posts, total, 1)));
        view
    }

    #[test]
    fn test_starts_on_first_page() {
        let view = PostListView::new(10);
        assert_eq!(view.request(), PageRequest { page: 1, limit: 10 });
        assert!(view.state().is_loading());
    }

    #[test]
    fn test_apply_reads_envelope_totals() {
        let mut view = PostListView::new(10);
        let request = view.begin_refresh();

        assert!(view.apply(request, Ok(envelope(vec![post("1", "A", None)], 42, 5))));
        assert_eq!(view.total_posts(), 42);
        assert_eq!(view.total_pages(), 5);
        assert_eq!(view.total_label(), "Total Posts: 42");
    }

    #[test]
    fn test_stale_response_is_discarded() {
        let mut view = PostListView::new(10);
        let first = view.begin_refresh();
        view.apply(first, Ok(envelope(vec![], 30, 3)));

        let second = view.go_to(2).unwrap();
        assert!(!view.apply(first, Ok(envelope(vec![post("x", "stale", None)], 30, 3))));
        assert!(view.state().is_loading());

        assert!(view.apply(second, Ok(envelope(vec![post("y", "fresh", None)], 30, 3))));
        assert_eq!(view.visible_posts()[0].key(), "y");
    }

    #[test]
    fn test_go_to_clamps_and_skips_current_page() {
        let mut view = PostListView::new(10);
        let request = view.begin_refresh();
        view.apply(request, Ok(envelope(vec![], 30, 3)));

        assert_eq!(view.go_to(1), None);
        assert_eq!(view.go_to(0), None);
        assert_eq!(view.go_to(99).map(|r| r.page), Some(3));
        assert_eq!(view.go_to(view.controls().next_page()), None);
        assert_eq!(view.go_to(view.controls().previous_page()).map(|r| r.page), Some(2));
    }

    #[rstest]
    #[case(DeleteOutcome::Deleted, Some(2))]
    #[case(DeleteOutcome::Cancelled, None)]
    #[case(DeleteOutcome::Failed("Server error".to_string()), None)]
    fn test_after_delete_refetches_only_deleted(
        #[case] outcome: DeleteOutcome,
        #[case] expected: Option<u32>,
    ) {
        let mut view = PostListView::new(10);
        let request = view.begin_refresh();
        view.apply(request, Ok(envelope(vec![post("1", "a", None)], 30, 3)));
        let request = view.go_to(2).unwrap();
        view.apply(request, Ok(envelope(vec![post("11", "k", None)], 30, 3)));

        assert_eq!(view.after_delete(&outcome).map(|r| r.page), expected);
        assert_eq!(view.state().is_loading(), expected.is_some());
    }

    #[test]
    fn test_empty_result_and_pagination_visibility() {
        let view = PostListView::new(10);
        assert!(!view.is_empty());
        assert!(!view.shows_pagination());

        let mut view = loaded(vec![]);
        assert!(view.is_empty());
        assert!(!view.shows_pagination());

        view = loaded(vec![post("1", "Rust tips", None)]);
        assert!(!view.is_empty());
        assert!(view.shows_pagination());
        view.search = "gardening".to_string();
        assert!(view.is_empty());
        assert!(view.shows_pagination());
    }

    #[test]
    fn test_load_failure_becomes_failed_state() {
        let mut view = PostListView::new(10);
        let request = view.begin_refresh();
        view.apply(request, Err(Error::Network("offline".to_string())));

        assert_eq!(view.state().error(), Some(LOAD_FAILED));
        assert!(view.visible_posts().is_empty());
    }

    #[rstest]
    #[case("", 3)]
    #[case("rust", 2)]
    #[case("RUST", 2)]
    #[case("tokio", 1)]
    #[case("nothing", 0)]
    fn test_search_over_title_content_topic(#[case] search: &str, #[case] expected: usize) {
        let mut with_content = post("2", "Async", None);
        with_content.content = Some("<p>Using Tokio with Rust</p>".to_string());
        let with_topic = Post {
            id: "3".to_string(),
            topic: Some("Gardening".to_string()),
            ..Post::default()
        };

        let mut view = loaded(vec![post("1", "Rust tips", None), with_content, with_topic]);
        view.search = search.to_string();

        assert_eq!(view.visible_posts().len(), expected);
    }

    #[rstest]
    #[case("all", &["1", "2", "3", "4", "5"])]
    #[case("draft", &["1"])]
    #[case("published", &["2"])]
    #[case("generated", &["3"])]
    #[case("scheduled", &[])]
    fn test_status_filter(#[case] value: &str, #[case] expected: &[&str]) {
        let mut view = loaded(vec![
            post("1", "a", Some("draft")),
            post("2", "b", Some("published")),
            post("3", "c", Some("generated")),
            post("4", "d", Some("archived")),
            post("5", "e", None),
        ]);
        view.filter = StatusFilter::from_value(value);

        let ids: Vec<&str> = view.visible_posts().iter().map(|post| post.key()).collect();
        assert_eq!(ids, expected);
    }

    #[test]
    fn test_filter_options_in_display_order() {
        let labels: Vec<&str> = StatusFilter::options().iter().map(StatusFilter::label).collect();
        assert_eq!(
            labels,
            vec!["All", "Generated", "Published", "Draft", "Scheduled"]
        );
    }

    #[test]
    fn test_row_for_unknown_status_renders_as_draft() {
        let mut p = post("1", "", Some("archived"));
        p.topic = Some("Fallback topic".to_string());
        p.created_at = Some("2024-01-15T10:30:00Z".to_string());
        p.updated_at = Some("2024-02-01T08:00:00Z".to_string());

        let row = PostRow::from(&p);
        assert_eq!(row.title, "Fallback topic");
        assert_eq!(row.status_label, "Draft");
        assert_eq!(row.status_class, "draft");
        assert_eq!(row.provider, "Unknown");
        assert_eq!(row.created, "Jan 15, 2024");
        assert_eq!(row.updated.as_deref(), Some("Feb 1, 2024"));
    }

    #[test]
    fn test_row_topic_and_model() {
        let mut p = post("1", "Rust tips", Some("generated"));
        p.topic = Some("Rust tips".to_string());
        p.model_used = Some("gpt-4o".to_string());
        let row = PostRow::from(&p);
        assert_eq!(row.topic, None);
        assert_eq!(row.model.as_deref(), Some("gpt-4o"));

        p.topic = Some("Writing faster Rust".to_string());
        p.model_used = Some(String::new());
        let row = PostRow::from(&p);
        assert_eq!(row.topic.as_deref(), Some("Writing faster Rust"));
        assert_eq!(row.model, None);
    }

    #[test]
    fn test_closures_are_confirm_prompts() {
        let yes = |_: &str| true;
        let no = |_: &str| false;
        assert!(yes.confirm(DELETE_CONFIRMATION));
        assert!(!no.confirm(DELETE_CONFIRMATION));
    }
}
