//! Shared fixtures for the client integration tests

#![allow(dead_code)]

use blogdash_client::ApiClient;
use blogdash_core::{Post, PostStatus};
use serde_json::{Value, json};
use wiremock::MockServer;

/// Start a mock API server and a client pointed at its `/api` prefix
pub async fn api_server() -> (MockServer, ApiClient) {
    let server = MockServer::start().await;
    let client = ApiClient::new(format!("{}/api", server.uri()));
    (server, client)
}

/// Client pointed at a port nothing listens on
pub fn unreachable_client() -> ApiClient {
    ApiClient::new("http://127.0.0.1:9/api")
}

/// A post as the API serves it, keyed by `_id`
pub fn post_json(id: &str, title: &str, status: &str) -> Value {
    json!({
        "_id": id,
        "title": title,
        "slug": title.to_lowercase().replace(' ', "-"),
        "content": format!("<p>{title} body</p>"),
        "status": status,
        "createdAt": "2024-01-15T10:30:00Z",
        "updatedAt": "2024-01-15T10:30:00Z",
        "views": 10,
        "likes": 2,
        "tags": ["rust"],
        "aiProvider": "openai",
        "comments": []
    })
}

/// A page envelope around `posts`
pub fn envelope_json(posts: Vec<Value>, total: u64, total_pages: u32) -> Value {
    json!({
        "data": posts,
        "pagination": {"total": total, "totalPages": total_pages}
    })
}

/// A decoded post
pub fn post(id: &str, title: &str, status: PostStatus) -> Post {
    Post {
        id: id.to_string(),
        title: Some(title.to_string()),
        status: Some(status),
        ..Post::default()
    }
}

/// `count` published posts with ids `p1..=pN`
pub fn posts(count: usize) -> Vec<Post> {
    (1..=count)
        .map(|i| post(&format!("p{i}"), &format!("Post {i}"), PostStatus::Published))
        .collect()
}

/// Install a test subscriber once; later calls are no-ops
pub fn init_test_logging() {
    let _ = blogdash_core::init_logging(&blogdash_core::LoggingConfig {
        level: "debug".to_string(),
        format: "text".to_string(),
    });
}
