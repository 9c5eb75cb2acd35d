//! HTTP client for communicating with the blog API

use crate::api::BlogApi;
use async_trait::async_trait;
use blogdash_core::{
    Config, Credentials, DashboardSummary, Error, LoginResponse, PageEnvelope, PageRequest, Post,
    Result,
};
use reqwest::{Client, RequestBuilder, Response};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

/// Error body the API sends alongside non-success statuses
#[derive(Debug, Default, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
}

/// API client for making HTTP requests to the blog API server
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
    token: Option<String>,
}

impl ApiClient {
    /// Create a new API client
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            token: None,
        }
    }

    /// Create a client from the dashboard configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be built.
    pub fn from_config(config: &Config) -> Result<Self> {
        #[cfg(not(target_arch = "wasm32"))]
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.api.timeout_secs))
            .build()
            .map_err(|e| Error::Configuration {
                message: format!("failed to build HTTP client: {e}"),
            })?;
        #[cfg(target_arch = "wasm32")]
        let client = Client::new();

        Ok(Self {
            client,
            base_url: config.api_base_url().to_string(),
            token: None,
        })
    }

    /// Set the bearer token sent with every request
    #[must_use]
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Base URL requests are sent to
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    fn post_url(&self, id: &str) -> String {
        self.url(&format!("/posts/{}", urlencoding::encode(id)))
    }

    fn authorized(&self, request: RequestBuilder) -> RequestBuilder {
        match self.token {
            Some(ref token) => request.bearer_auth(token),
            None => request,
        }
    }

    /// Send a request and turn transport failures and error statuses into [`Error`]
    async fn send(&self, request: RequestBuilder, action: &str) -> Result<Response> {
        let response = self.authorized(request).send().await.map_err(|e| {
            if e.is_builder() {
                Error::Other(format!("Failed to build request to {action}: {e}"))
            } else {
                Error::Network(format!("Failed to {action}: {e}"))
            }
        })?;

        let status = response.status();
        if status.is_success() {
            debug!(status = status.as_u16(), action, "API request succeeded");
            return Ok(response);
        }

        let body = response.json::<ErrorBody>().await.unwrap_or_default();
        warn!(status = status.as_u16(), action, "API returned error");
        Err(Error::Http {
            status: status.as_u16(),
            message: body.message,
        })
    }

    async fn decode<T: DeserializeOwned>(response: Response, action: &str) -> Result<T> {
        response
            .json::<T>()
            .await
            .map_err(|e| Error::InvalidResponse(format!("Failed to parse {action} response: {e}")))
    }
}

#[async_trait(?Send)]
impl BlogApi for ApiClient {
    async fn login(&self, credentials: &Credentials) -> Result<LoginResponse> {
        let request = self.client.post(self.url("/auth/login")).json(credentials);
        let response = self.send(request, "log in").await?;
        Self::decode(response, "login").await
    }

    async fn dashboard_summary(&self) -> Result<DashboardSummary> {
        let request = self.client.get(self.url("/dashboard/summary"));
        let response = self.send(request, "fetch dashboard summary").await?;
        Self::decode(response, "dashboard summary").await
    }

    async fn list_posts(&self, request: PageRequest) -> Result<PageEnvelope<Post>> {
        let http = self
            .client
            .get(self.url("/posts"))
            .query(&request.query());
        let response = self.send(http, "fetch posts").await?;
        Self::decode(response, "post list").await
    }

    async fn get_post(&self, id: &str) -> Result<Post> {
        let request = self.client.get(self.post_url(id));
        let response = self.send(request, "fetch post").await?;
        Self::decode(response, "post").await
    }

    async fn delete_post(&self, id: &str) -> Result<()> {
        let request = self.client.delete(self.post_url(id));
        self.send(request, "delete post").await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_base_url_is_normalised() {
        let client = ApiClient::new("http://localhost:5000/api/");
        assert_eq!(client.base_url(), "http://localhost:5000/api");
        assert_eq!(client.url("/posts"), "http://localhost:5000/api/posts");
    }

    #[test]
    fn test_post_url_encodes_identifier() {
        let client = ApiClient::new("http://localhost:5000/api");
        assert_eq!(
            client.post_url("a b/c"),
            "http://localhost:5000/api/posts/a%20b%2Fc"
        );
    }

    #[test]
    fn test_from_config_uses_configured_base_url() {
        let mut config = Config::default();
        config.api.base_url = "https://blog.example.com/api/".to_string();

        let client = ApiClient::from_config(&config).unwrap();
        assert_eq!(client.base_url(), "https://blog.example.com/api");
    }
}
