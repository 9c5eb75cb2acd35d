//! Dashboard controller: four metric cards and the recent-posts list

use crate::api::BlogApi;
use crate::view_state::ViewState;
use blogdash_core::utils::{format_count, format_short_date};
use blogdash_core::{DashboardSummary, Post, PostStatus, Result};
use tracing::{debug, warn};

/// Shown in place of the recent-posts list when it is empty
pub const EMPTY_RECENT_POSTS: &str = "No posts found. Create your first post!";

/// Colour accent of a metric card
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardTone {
    /// Posts
    Primary,
    /// Views
    Success,
    /// Likes
    Warning,
    /// Active users
    Info,
}

impl CardTone {
    /// CSS modifier class
    pub const fn class(self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Success => "success",
            Self::Warning => "warning",
            Self::Info => "info",
        }
    }
}

/// One metric card
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatCard {
    /// Card heading
    pub title: &'static str,
    /// Formatted value
    pub value: String,
    /// Colour accent
    pub tone: CardTone,
}

/// One row of the recent-posts list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecentPost {
    /// Post identifier, for linking to the preview
    pub id: String,
    /// Title with fallbacks applied
    pub title: String,
    /// Short creation date
    pub date: String,
    /// Formatted view count
    pub views: String,
    /// Formatted like count
    pub likes: String,
    /// Badge text
    pub status_label: &'static str,
    /// Badge CSS class
    pub status_class: &'static str,
}

impl From<&Post> for RecentPost {
    fn from(post: &Post) -> Self {
        // The dashboard shows recent posts without a status as published
        let status = post.status.clone().unwrap_or(PostStatus::Published);
        Self {
            id: post.key().to_string(),
            title: post.display_title().to_string(),
            date: format_short_date(post.created_at.as_deref()),
            views: format_count(post.view_count()),
            likes: format_count(post.like_count()),
            status_label: status.label(),
            status_class: status.badge_class(),
        }
    }
}

/// Everything the dashboard renders once the summary has settled
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardData {
    /// Metric cards, in display order
    pub cards: Vec<StatCard>,
    /// Recent posts, in server order
    pub recent_posts: Vec<RecentPost>,
}

impl From<&DashboardSummary> for DashboardData {
    fn from(summary: &DashboardSummary) -> Self {
        let metrics = summary.metrics();
        Self {
            cards: vec![
                StatCard {
                    title: "Total Posts",
                    value: metrics.total_posts.to_string(),
                    tone: CardTone::Primary,
                },
                StatCard {
                    title: "Total Views",
                    value: format_count(metrics.total_views),
                    tone: CardTone::Success,
                },
                StatCard {
                    title: "Total Likes",
                    value: format_count(metrics.total_likes),
                    tone: CardTone::Warning,
                },
                StatCard {
                    title: "Active Users",
                    value: metrics.active_users.to_string(),
                    tone: CardTone::Info,
                },
            ],
            recent_posts: summary.recent_posts.iter().map(RecentPost::from).collect(),
        }
    }
}

impl Default for DashboardData {
    fn default() -> Self {
        Self::from(&DashboardSummary::default())
    }
}

/// Dashboard view state
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DashboardView {
    state: ViewState<DashboardData>,
}

impl DashboardView {
    /// View waiting for its first fetch
    pub fn new() -> Self {
        Self::default()
    }

    /// Current state
    pub const fn state(&self) -> &ViewState<DashboardData> {
        &self.state
    }

    /// Settle the summary request
    ///
    /// Failures are logged and leave the zeroed default data on screen.
    pub fn apply(&mut self, result: Result<DashboardSummary>) {
        let data = match result {
            Ok(summary) => {
                debug!(
                    recent_posts = summary.recent_posts.len(),
                    "dashboard summary loaded"
                );
                DashboardData::from(&summary)
            }
            Err(err) => {
                warn!(error = %err, "failed to load dashboard summary");
                DashboardData::default()
            }
        };
        self.state = ViewState::Ready(data);
    }

    /// Fetch the summary once
    pub async fn load<A: BlogApi + ?Sized>(&mut self, api: &A) {
        self.state = ViewState::Loading;
        let result = api.dashboard_summary().await;
        self.apply(result);
    }
}

#[cfg(test)]
#[allow(clippy::missing_panics_doc)]
mod tests {
    use super::*;
    use blogdash_core::Error;
    use pretty_assertions::assert_eq;

    fn values(data: &DashboardData) -> Vec<(&str, &str)> {
        data.cards
            .iter()
            .map(|c| (c.title, c.value.as_str()))
            .collect()
    }

    #[test]
    fn test_nested_summary_becomes_cards() {
        let summary: DashboardSummary = serde_json::from_value(serde_json::json!({
            "posts": {"total": 42},
            "analytics": {"totalViews": 1_234_567, "totalLikes": 8901, "activeUsers": 12},
            "recentPosts": []
        }))
        .unwrap();

        let data = DashboardData::from(&summary);
        assert_eq!(
            values(&data),
            vec![
                ("Total Posts", "42"),
                ("Total Views", "1,234,567"),
                ("Total Likes", "8,901"),
                ("Active Users", "12"),
            ]
        );
    }

    #[test]
    fn test_failure_leaves_zeroed_cards() {
        let mut view = DashboardView::new();
        assert!(view.state().is_loading());

        view.apply(Err(Error::Network("offline".to_string())));

        let data = view.state().ready().unwrap();
        assert!(data.cards.iter().all(|c| c.value == "0"));
        assert!(data.recent_posts.is_empty());
    }

    #[test]
    fn test_recent_post_placeholders() {
        let post = Post {
            id: "p1".to_string(),
            ..Post::default()
        };

        let row = RecentPost::from(&post);
        assert_eq!(row.title, "Untitled");
        assert_eq!(row.views, "0");
        assert_eq!(row.likes, "0");
        assert_eq!(row.status_label, "Published");
        assert_eq!(row.status_class, "published");
    }

    #[test]
    fn test_recent_post_formats_date_and_unknown_status() {
        let post = Post {
            title: Some("Hello".to_string()),
            created_at: Some("2024-01-15T10:30:00Z".to_string()),
            status: Some(PostStatus::from("archived")),
            views: Some(1500),
            ..Post::default()
        };

        let row = RecentPost::from(&post);
        assert_eq!(row.date, "Jan 15, 2024");
        assert_eq!(row.views, "1,500");
        assert_eq!(row.status_label, "Draft");
        assert_eq!(row.status_class, "draft");
    }
}
