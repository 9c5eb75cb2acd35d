//! In-memory blog API for testing
//!
//! Serves posts from a vector, paginates them the way the real API does and
//! records every call so tests can assert exactly which requests were made.

use crate::api::BlogApi;
use async_trait::async_trait;
use blogdash_core::types::PaginationInfo;
use blogdash_core::{
    Credentials, DashboardSummary, Error, LoginResponse, PageEnvelope, PageRequest, Post, Result,
};
use parking_lot::Mutex;
use std::collections::HashMap;

/// Endpoint of the blog API
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    /// `POST /auth/login`
    Login,
    /// `GET /dashboard/summary`
    DashboardSummary,
    /// `GET /posts`
    ListPosts,
    /// `GET /posts/:id`
    GetPost,
    /// `DELETE /posts/:id`
    DeletePost,
}

/// A recorded request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiCall {
    /// Login with these credentials
    Login(Credentials),
    /// Summary fetch
    DashboardSummary,
    /// Page fetch
    ListPosts(PageRequest),
    /// Single post fetch
    GetPost(String),
    /// Delete
    DeletePost(String),
}

impl ApiCall {
    /// Endpoint the call went to
    pub const fn endpoint(&self) -> Endpoint {
        match self {
            Self::Login(_) => Endpoint::Login,
            Self::DashboardSummary => Endpoint::DashboardSummary,
            Self::ListPosts(_) => Endpoint::ListPosts,
            Self::GetPost(_) => Endpoint::GetPost,
            Self::DeletePost(_) => Endpoint::DeletePost,
        }
    }
}

/// How a failing endpoint fails
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MockFailure {
    /// Answer with this status and optional `message`
    Status(u16, Option<String>),
    /// Never answer
    Network,
}

impl MockFailure {
    fn to_error(&self) -> Error {
        match self {
            Self::Status(status, message) => Error::Http {
                status: *status,
                message: message.clone(),
            },
            Self::Network => Error::Network("connection refused".to_string()),
        }
    }
}

/// Mock blog API
#[derive(Debug, Default)]
pub struct MockBlogApi {
    posts: Mutex<Vec<Post>>,
    summary: DashboardSummary,
    token: Option<String>,
    failures: Mutex<HashMap<Endpoint, MockFailure>>,
    calls: Mutex<Vec<ApiCall>>,
}

impl MockBlogApi {
    /// API with no posts that issues `mock-token` on login
    pub fn new() -> Self {
        Self {
            token: Some("mock-token".to_string()),
            ..Self::default()
        }
    }

    /// Serve these posts
    #[must_use]
    pub fn with_posts(self, posts: Vec<Post>) -> Self {
        *self.posts.lock() = posts;
        self
    }

    /// Serve this dashboard summary
    #[must_use]
    pub fn with_summary(mut self, summary: DashboardSummary) -> Self {
        self.summary = summary;
        self
    }

    /// Token issued on login; `None` answers 2xx without one
    #[must_use]
    pub fn with_token(mut self, token: Option<&str>) -> Self {
        self.token = token.map(str::to_string);
        self
    }

    /// Make an endpoint fail
    #[must_use]
    pub fn with_failure(self, endpoint: Endpoint, failure: MockFailure) -> Self {
        self.fail(endpoint, failure);
        self
    }

    /// Make an endpoint fail from now on
    pub fn fail(&self, endpoint: Endpoint, failure: MockFailure) {
        self.failures.lock().insert(endpoint, failure);
    }

    /// Let a failing endpoint succeed again
    pub fn recover(&self, endpoint: Endpoint) {
        self.failures.lock().remove(&endpoint);
    }

    /// Every call so far, in order
    pub fn calls(&self) -> Vec<ApiCall> {
        self.calls.lock().clone()
    }

    /// Number of calls made to an endpoint
    pub fn count(&self, endpoint: Endpoint) -> usize {
        self.calls
            .lock()
            .iter()
            .filter(|call| call.endpoint() == endpoint)
            .count()
    }

    /// Forget recorded calls
    pub fn reset_calls(&self) {
        self.calls.lock().clear();
    }

    /// Identifiers of the posts still stored
    pub fn post_ids(&self) -> Vec<String> {
        self.posts.lock().iter().map(|p| p.key().to_string()).collect()
    }

    fn record(&self, call: ApiCall) -> Result<()> {
        let endpoint = call.endpoint();
        self.calls.lock().push(call);
        let failure = self.failures.lock().get(&endpoint).cloned();
        failure.map_or(Ok(()), |f| Err(f.to_error()))
    }
}

#[async_trait(?Send)]
impl BlogApi for MockBlogApi {
    async fn login(&self, credentials: &Credentials) -> Result<LoginResponse> {
        self.record(ApiCall::Login(credentials.clone()))?;
        Ok(LoginResponse {
            token: self.token.clone(),
        })
    }

    async fn dashboard_summary(&self) -> Result<DashboardSummary> {
        self.record(ApiCall::DashboardSummary)?;
        Ok(self.summary.clone())
    }

    async fn list_posts(&self, request: PageRequest) -> Result<PageEnvelope<Post>> {
        self.record(ApiCall::ListPosts(request))?;

        let posts = self.posts.lock();
        let total = posts.len();
        let limit = (request.limit as usize).max(1);
        let total_pages = total.div_ceil(limit).max(1);
        let data = posts
            .iter()
            .skip((request.page as usize).saturating_sub(1) * limit)
            .take(limit)
            .cloned()
            .collect();

        Ok(PageEnvelope {
            data,
            pagination: Some(PaginationInfo {
                total: Some(total as u64),
                total_pages: u32::try_from(total_pages).ok(),
                page: Some(request.page),
                limit: Some(request.limit),
            }),
        })
    }

    async fn get_post(&self, id: &str) -> Result<Post> {
        self.record(ApiCall::GetPost(id.to_string()))?;
        self.posts
            .lock()
            .iter()
            .find(|p| p.key() == id)
            .cloned()
            .ok_or_else(|| Error::NotFound {
                resource: format!("post {id}"),
            })
    }

    async fn delete_post(&self, id: &str) -> Result<()> {
        self.record(ApiCall::DeletePost(id.to_string()))?;
        let mut posts = self.posts.lock();
        let before = posts.len();
        posts.retain(|p| p.key() != id);
        if posts.len() == before {
            return Err(Error::NotFound {
                resource: format!("post {id}"),
            });
        }
        Ok(())
    }
}
