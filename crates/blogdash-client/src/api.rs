//! The remote blog API as seen by the dashboard

use async_trait::async_trait;
use blogdash_core::{
    Credentials, DashboardSummary, LoginResponse, PageEnvelope, PageRequest, Post, Result,
};

/// Endpoints the dashboard consumes
///
/// Futures are not required to be `Send`: in the browser every request runs
/// on the single UI thread.
#[async_trait(?Send)]
pub trait BlogApi {
    /// `POST /auth/login`
    async fn login(&self, credentials: &Credentials) -> Result<LoginResponse>;

    /// `GET /dashboard/summary`
    async fn dashboard_summary(&self) -> Result<DashboardSummary>;

    /// `GET /posts?page=&limit=`
    async fn list_posts(&self, request: PageRequest) -> Result<PageEnvelope<Post>>;

    /// `GET /posts/:id`
    async fn get_post(&self, id: &str) -> Result<Post>;

    /// `DELETE /posts/:id`
    async fn delete_post(&self, id: &str) -> Result<()>;
}
