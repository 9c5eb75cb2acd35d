//! Single-post preview controller

use crate::api::BlogApi;
use crate::posts::{ConfirmPrompt, DeleteOutcome, delete_post};
use crate::view_state::ViewState;
use blogdash_core::utils::{format_count, format_long_date, format_short_date, reading_time_minutes};
use blogdash_core::{Comment, Post, Result};
use tracing::{debug, warn};

/// Shown when a post cannot be fetched for any reason but absence
pub const FETCH_FAILED: &str = "Failed to fetch post. Please try again.";

/// Shown when the post does not exist
pub const NOT_FOUND: &str = "Post not found";

/// A comment ready for display
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentView {
    /// Author, or "Anonymous"
    pub author: String,
    /// Short date
    pub date: String,
    /// Body text
    pub content: String,
}

impl From<&Comment> for CommentView {
    fn from(comment: &Comment) -> Self {
        Self {
            author: comment
                .author
                .clone()
                .filter(|a| !a.is_empty())
                .unwrap_or_else(|| "Anonymous".to_string()),
            date: format_short_date(comment.created_at.as_deref()),
            content: comment.content.clone().unwrap_or_default(),
        }
    }
}

/// A post ready for the preview page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostDetails {
    /// Identifier
    pub id: String,
    /// Title with fallbacks applied
    pub title: String,
    /// Badge text
    pub status_label: &'static str,
    /// Badge CSS class
    pub status_class: &'static str,
    /// Long creation date
    pub date: String,
    /// Estimated reading time in minutes
    pub reading_minutes: usize,
    /// Author name
    pub author: String,
    /// Tags
    pub tags: Vec<String>,
    /// Cover image
    pub image: Option<String>,
    /// HTML body
    pub content: String,
    /// Formatted view count
    pub views: String,
    /// Formatted like count
    pub likes: String,
    /// Comments in server order
    pub comments: Vec<CommentView>,
    /// Public URL, once published
    pub external_url: Option<String>,
}

impl PostDetails {
    /// "N min read"
    pub fn reading_label(&self) -> String {
        format!("{} min read", self.reading_minutes)
    }
}

impl From<&Post> for PostDetails {
    fn from(post: &Post) -> Self {
        let status = post.status_or_default();
        Self {
            id: post.key().to_string(),
            title: post.display_title().to_string(),
            status_label: status.label(),
            status_class: status.badge_class(),
            date: format_long_date(post.created_at.as_deref()),
            reading_minutes: reading_time_minutes(post.content.as_deref()),
            author: post.author_label().to_string(),
            tags: post.tags.clone(),
            image: post.thumbnail().map(str::to_string),
            content: post.content.clone().unwrap_or_default(),
            views: format_count(post.view_count()),
            likes: format_count(post.like_count()),
            comments: post.comments.iter().map(CommentView::from).collect(),
            external_url: post.external_url().map(str::to_string),
        }
    }
}

/// Preview view state
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostPreviewView {
    state: ViewState<PostDetails>,
}

impl PostPreviewView {
    /// View waiting for its fetch
    pub fn new() -> Self {
        Self::default()
    }

    /// Current state
    pub const fn state(&self) -> &ViewState<PostDetails> {
        &self.state
    }

    /// Enter the loading state
    pub fn begin_load(&mut self) {
        self.state = ViewState::Loading;
    }

    /// Settle the fetch
    pub fn apply(&mut self, id: &str, result: Result<Post>) {
        self.state = match result {
            Ok(post) => {
                debug!(post_id = id, "post loaded");
                ViewState::Ready(PostDetails::from(&post))
            }
            Err(err) if err.is_not_found() => {
                debug!(post_id = id, "post not found");
                ViewState::NotFound
            }
            Err(err) => {
                warn!(post_id = id, error = %err, "failed to fetch post");
                ViewState::Failed(FETCH_FAILED.to_string())
            }
        };
    }

    /// Fetch the post; an empty identifier is not found without a request
    pub async fn load<A: BlogApi + ?Sized>(&mut self, api: &A, id: &str) {
        if id.trim().is_empty() {
            self.state = ViewState::NotFound;
            return;
        }
        self.begin_load();
        let result = api.get_post(id).await;
        self.apply(id, result);
    }

    /// Delete the shown post after confirmation
    ///
    /// The caller navigates back to the list on [`DeleteOutcome::Deleted`].
    pub async fn delete<A, P>(&self, api: &A, prompt: &P) -> DeleteOutcome
    where
        A: BlogApi + ?Sized,
        P: ConfirmPrompt + ?Sized,
    {
        match self.state.ready() {
            Some(details) => delete_post(api, prompt, &details.id).await,
            None => DeleteOutcome::Failed(NOT_FOUND.to_string()),
        }
    }
}

#[cfg(test)]
#[allow(clippy::missing_panics_doc)]
mod tests {
    use super::*;
    use blogdash_core::Error;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_details_defaults() {
        let post = Post {
            id: "p1".to_string(),
            title: Some("Hello".to_string()),
            ..Post::default()
        };

        let details = PostDetails::from(&post);
        assert_eq!(details.author, "Admin");
        assert_eq!(details.views, "0");
        assert_eq!(details.likes, "0");
        assert_eq!(details.reading_minutes, 0);
        assert_eq!(details.status_label, "Draft");
        assert!(details.comments.is_empty());
    }

    #[test]
    fn test_details_formats_metadata() {
        let words = vec!["word"; 401].join(" ");
        let post = Post {
            id: "p1".to_string(),
            content: Some(words),
            created_at: Some("2024-01-15T10:30:00Z".to_string()),
            likes: Some(12_450),
            comments: vec![Comment {
                author: None,
                content: Some("Nice".to_string()),
                created_at: Some("2024-01-16T00:00:00Z".to_string()),
            }],
            ..Post::default()
        };

        let details = PostDetails::from(&post);
        assert_eq!(details.reading_minutes, 3);
        assert_eq!(details.reading_label(), "3 min read");
        assert_eq!(details.date, "January 15, 2024 at 10:30 AM");
        assert_eq!(details.likes, "12,450");
        assert_eq!(
            details.comments,
            vec![CommentView {
                author: "Anonymous".to_string(),
                date: "Jan 16, 2024".to_string(),
                content: "Nice".to_string(),
            }]
        );
    }

    #[test]
    fn test_not_found_and_failure_states() {
        let mut view = PostPreviewView::new();

        view.apply(
            "p1",
            Err(Error::Http {
                status: 404,
                message: None,
            }),
        );
        assert_eq!(view.state(), &ViewState::NotFound);

        view.apply("p1", Err(Error::Network("offline".to_string())));
        assert_eq!(view.state().error(), Some(FETCH_FAILED));
    }
}
