//! Core data types for the BlogDash dashboard
//!
//! Every wire type is lenient: the remote API owns these records and may omit
//! or null any field, so decoding never fails on a missing value and the
//! accessors supply the display defaults.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

/// Token stored for a guest session
pub const GUEST_TOKEN: &str = "guest-token";

/// Treat an explicit `null` the same as a missing field
fn nullable<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Post identifiers arrive as strings (`_id`) or numbers (`id`)
fn post_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Text(String),
        Number(i64),
    }

    Ok(match Option::<RawId>::deserialize(deserializer)? {
        Some(RawId::Text(id)) => id,
        Some(RawId::Number(id)) => id.to_string(),
        None => String::new(),
    })
}

/// Role of the signed-in user
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum UserType {
    /// Authenticated through the login endpoint
    User,
    /// Local guest session, never authenticated against the API
    Guest,
}

impl UserType {
    /// Persisted representation
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Guest => "guest",
        }
    }

    /// Role shown in the sidebar footer
    #[must_use]
    pub const fn role_label(self) -> &'static str {
        match self {
            Self::User => "Admin",
            Self::Guest => "Guest",
        }
    }
}

impl fmt::Display for UserType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UserType {
    type Err = crate::Error;

    fn from_str(s: &str) -> crate::Result<Self> {
        match s {
            "user" => Ok(Self::User),
            "guest" => Ok(Self::Guest),
            other => Err(crate::Error::Validation {
                field: "userType".to_string(),
                message: format!("unknown user type '{other}'"),
            }),
        }
    }
}

/// Publication status of a post
///
/// Any value outside the known set decodes to [`PostStatus::Unknown`] and is
/// displayed like a draft.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum PostStatus {
    /// Not yet published
    Draft,
    /// Live on the blog
    Published,
    /// Queued for a future publish date
    Scheduled,
    /// Produced by an AI provider
    Generated,
    /// Any value the dashboard does not recognise
    Unknown(String),
}

impl PostStatus {
    /// Statuses offered by the post list filter, in display order
    pub const FILTERABLE: [Self; 4] = [
        Self::Generated,
        Self::Published,
        Self::Draft,
        Self::Scheduled,
    ];

    /// Wire representation
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Draft => "draft",
            Self::Published => "published",
            Self::Scheduled => "scheduled",
            Self::Generated => "generated",
            Self::Unknown(raw) => raw,
        }
    }

    /// Badge text
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Published => "Published",
            Self::Scheduled => "Scheduled",
            Self::Generated => "Generated",
            Self::Draft | Self::Unknown(_) => "Draft",
        }
    }

    /// Badge modifier; generated posts share the published badge
    #[must_use]
    pub const fn badge_class(&self) -> &'static str {
        match self {
            Self::Published | Self::Generated => "published",
            Self::Scheduled => "scheduled",
            Self::Draft | Self::Unknown(_) => "draft",
        }
    }
}

impl From<String> for PostStatus {
    fn from(value: String) -> Self {
        match value.as_str() {
            "draft" => Self::Draft,
            "published" => Self::Published,
            "scheduled" => Self::Scheduled,
            "generated" => Self::Generated,
            _ => Self::Unknown(value),
        }
    }
}

impl From<&str> for PostStatus {
    fn from(value: &str) -> Self {
        Self::from(value.to_string())
    }
}

impl From<PostStatus> for String {
    fn from(value: PostStatus) -> Self {
        match value {
            PostStatus::Unknown(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for PostStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Image attached to a post
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostImage {
    /// Image URL
    #[serde(default)]
    pub url: Option<String>,
    /// Alternative text
    #[serde(default)]
    pub alt: Option<String>,
}

/// Blogger publication details
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BloggerLink {
    /// Public URL of the published post
    #[serde(default)]
    pub post_url: Option<String>,
}

/// Reader comment on a post
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    /// Comment author
    #[serde(default)]
    pub author: Option<String>,
    /// Comment body
    #[serde(default)]
    pub content: Option<String>,
    /// Creation timestamp (RFC 3339)
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Blog post as served by the API
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    /// Database object id (`_id`)
    #[serde(
        rename = "_id",
        default,
        deserialize_with = "post_id",
        skip_serializing_if = "String::is_empty"
    )]
    pub object_id: String,
    /// Identifier as served under `id`
    #[serde(
        default,
        deserialize_with = "post_id",
        skip_serializing_if = "String::is_empty"
    )]
    pub id: String,
    /// Title
    #[serde(default)]
    pub title: Option<String>,
    /// Topic the post was generated from
    #[serde(default)]
    pub topic: Option<String>,
    /// URL slug
    #[serde(default)]
    pub slug: Option<String>,
    /// HTML body
    #[serde(default)]
    pub content: Option<String>,
    /// Author name
    #[serde(default)]
    pub author: Option<String>,
    /// Creation timestamp (RFC 3339)
    #[serde(default)]
    pub created_at: Option<String>,
    /// Last update timestamp (RFC 3339)
    #[serde(default)]
    pub updated_at: Option<String>,
    /// Publication status
    #[serde(default)]
    pub status: Option<PostStatus>,
    /// View count
    #[serde(default)]
    pub views: Option<u64>,
    /// Like count
    #[serde(default)]
    pub likes: Option<u64>,
    /// Tags
    #[serde(default, deserialize_with = "nullable")]
    pub tags: Vec<String>,
    /// Cover image URL
    #[serde(default)]
    pub image: Option<String>,
    /// Attached images
    #[serde(default, deserialize_with = "nullable")]
    pub images: Vec<PostImage>,
    /// AI provider that generated the post
    #[serde(default)]
    pub ai_provider: Option<String>,
    /// Model used by the provider
    #[serde(default)]
    pub model_used: Option<String>,
    /// Reader comments
    #[serde(default, deserialize_with = "nullable")]
    pub comments: Vec<Comment>,
    /// Blogger publication details
    #[serde(default)]
    pub blogger: Option<BloggerLink>,
}

impl Post {
    /// Identifier used in routes and API calls, preferring `_id`
    #[must_use]
    pub fn key(&self) -> &str {
        if self.object_id.is_empty() {
            &self.id
        } else {
            &self.object_id
        }
    }

    /// Title, falling back to the topic, then a placeholder
    #[must_use]
    pub fn display_title(&self) -> &str {
        self.title
            .as_deref()
            .filter(|t| !t.is_empty())
            .or_else(|| self.topic.as_deref().filter(|t| !t.is_empty()))
            .unwrap_or("Untitled")
    }

    /// Status, with absent values displayed as drafts
    #[must_use]
    pub fn status_or_default(&self) -> PostStatus {
        self.status.clone().unwrap_or(PostStatus::Draft)
    }

    /// Cover image, falling back to the first attached image
    #[must_use]
    pub fn thumbnail(&self) -> Option<&str> {
        self.image.as_deref().filter(|u| !u.is_empty()).or_else(|| {
            self.images
                .first()
                .and_then(|img| img.url.as_deref())
                .filter(|u| !u.is_empty())
        })
    }

    /// Author name, defaulting to the site admin
    #[must_use]
    pub fn author_label(&self) -> &str {
        self.author
            .as_deref()
            .filter(|a| !a.is_empty())
            .unwrap_or("Admin")
    }

    /// AI provider name for display
    #[must_use]
    pub fn provider_label(&self) -> &str {
        self.ai_provider
            .as_deref()
            .filter(|p| !p.is_empty())
            .unwrap_or("Unknown")
    }

    /// View count, zero when absent
    #[must_use]
    pub fn view_count(&self) -> u64 {
        self.views.unwrap_or(0)
    }

    /// Like count, zero when absent
    #[must_use]
    pub fn like_count(&self) -> u64 {
        self.likes.unwrap_or(0)
    }

    /// Public URL once published to Blogger
    #[must_use]
    pub fn external_url(&self) -> Option<&str> {
        self.blogger
            .as_ref()
            .and_then(|b| b.post_url.as_deref())
            .filter(|u| !u.is_empty())
    }

    /// Update timestamp, only when it differs from the creation time
    #[must_use]
    pub fn distinct_update(&self) -> Option<&str> {
        self.updated_at
            .as_deref()
            .filter(|updated| Some(*updated) != self.created_at.as_deref())
    }
}

/// Post counters in the dashboard summary
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostTotals {
    /// Total number of posts
    #[serde(default)]
    pub total: Option<u64>,
}

/// Analytics block in the dashboard summary
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Analytics {
    /// Views across all posts
    #[serde(default)]
    pub total_views: Option<u64>,
    /// Likes across all posts
    #[serde(default)]
    pub total_likes: Option<u64>,
    /// Currently active users
    #[serde(default)]
    pub active_users: Option<u64>,
}

/// `GET /dashboard/summary` response
///
/// Servers report either nested blocks (`posts.total`,
/// `analytics.totalViews`) or flat counters (`totalPosts`); nested values win.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    /// Post counters
    #[serde(default)]
    pub posts: Option<PostTotals>,
    /// Analytics counters
    #[serde(default)]
    pub analytics: Option<Analytics>,
    /// Most recent posts
    #[serde(default, deserialize_with = "nullable")]
    pub recent_posts: Vec<Post>,
    /// Flat post total
    #[serde(default)]
    pub total_posts: Option<u64>,
    /// Flat view total
    #[serde(default)]
    pub total_views: Option<u64>,
    /// Flat like total
    #[serde(default)]
    pub total_likes: Option<u64>,
    /// Flat active user count
    #[serde(default)]
    pub active_users: Option<u64>,
}

/// The four dashboard metrics, zero where the server sent nothing
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DashboardMetrics {
    /// Total posts
    pub total_posts: u64,
    /// Total views
    pub total_views: u64,
    /// Total likes
    pub total_likes: u64,
    /// Active users
    pub active_users: u64,
}

impl DashboardSummary {
    /// Resolve the display metrics
    #[must_use]
    pub fn metrics(&self) -> DashboardMetrics {
        let analytics = self.analytics.as_ref();
        DashboardMetrics {
            total_posts: self
                .posts
                .as_ref()
                .and_then(|p| p.total)
                .or(self.total_posts)
                .unwrap_or(0),
            total_views: analytics
                .and_then(|a| a.total_views)
                .or(self.total_views)
                .unwrap_or(0),
            total_likes: analytics
                .and_then(|a| a.total_likes)
                .or(self.total_likes)
                .unwrap_or(0),
            active_users: analytics
                .and_then(|a| a.active_users)
                .or(self.active_users)
                .unwrap_or(0),
        }
    }
}

/// Pagination block of a page envelope
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationInfo {
    /// Total number of items across all pages
    #[serde(default)]
    pub total: Option<u64>,
    /// Total number of pages
    #[serde(default)]
    pub total_pages: Option<u32>,
    /// Page this envelope holds
    #[serde(default)]
    pub page: Option<u32>,
    /// Page size used by the server
    #[serde(default)]
    pub limit: Option<u32>,
}

/// Paginated list response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct PageEnvelope<T> {
    /// Items on this page
    #[serde(default = "Vec::new", deserialize_with = "nullable")]
    pub data: Vec<T>,
    /// Pagination metadata
    #[serde(default)]
    pub pagination: Option<PaginationInfo>,
}

impl<T> Default for PageEnvelope<T> {
    fn default() -> Self {
        Self {
            data: Vec::new(),
            pagination: None,
        }
    }
}

impl<T> PageEnvelope<T> {
    /// Total item count, zero when absent
    #[must_use]
    pub fn total(&self) -> u64 {
        self.pagination.as_ref().and_then(|p| p.total).unwrap_or(0)
    }

    /// Total page count, at least one
    #[must_use]
    pub fn total_pages(&self) -> u32 {
        self.pagination
            .as_ref()
            .and_then(|p| p.total_pages)
            .filter(|&pages| pages > 0)
            .unwrap_or(1)
    }
}

/// Persisted session record
///
/// Mirrors the two storage keys: `token` and `userType`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    /// Bearer token; its presence alone means "authenticated"
    #[serde(default)]
    pub token: Option<String>,
    /// Role of the session holder
    #[serde(default)]
    pub user_type: Option<UserType>,
}

impl Session {
    /// Session for a user who signed in with credentials
    #[must_use]
    pub fn user(token: impl Into<String>, user_type: UserType) -> Self {
        Self {
            token: Some(token.into()),
            user_type: Some(user_type),
        }
    }

    /// Local guest session
    #[must_use]
    pub fn guest() -> Self {
        Self::user(GUEST_TOKEN, UserType::Guest)
    }

    /// Whether a token is present
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.token.as_deref().is_some_and(|t| !t.is_empty())
    }

    /// Whether this is a guest session
    #[must_use]
    pub fn is_guest(&self) -> bool {
        self.user_type == Some(UserType::Guest)
    }
}

/// Email/password pair sent to `POST /auth/login`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    /// Account email
    pub email: String,
    /// Account password
    pub password: String,
}

/// `POST /auth/login` response
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginResponse {
    /// Issued token; a success response without one is invalid
    #[serde(default)]
    pub token: Option<String>,
}
