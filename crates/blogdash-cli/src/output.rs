//! Plain-text rendering of the dashboard views

use blogdash_client::dashboard::EMPTY_RECENT_POSTS;
use blogdash_client::posts::{EMPTY_HINT, EMPTY_TITLE};
use blogdash_client::{DashboardData, PostDetails, PostListView, PostRow};

/// Metric cards followed by the recent posts
pub fn dashboard(data: &DashboardData) -> String {
    let mut lines: Vec<String> = data
        .cards
        .iter()
        .map(|card| format!("{:<14}{}", card.title, card.value))
        .collect();

    lines.push(String::new());
    lines.push("Recent Posts".to_string());
    if data.recent_posts.is_empty() {
        lines.push(format!("  {EMPTY_RECENT_POSTS}"));
    }
    lines.extend(data.recent_posts.iter().map(|post| {
        format!(
            "  {} [{}] {}  {} views  {} likes",
            post.title, post.status_label, post.date, post.views, post.likes
        )
    }));

    lines.join("\n")
}

/// Post list with its header, rows and page position
pub fn post_list(view: &PostListView) -> String {
    let mut lines = vec![view.total_label()];

    if view.is_empty() {
        lines.push(String::new());
        lines.push(EMPTY_TITLE.to_string());
        lines.push(EMPTY_HINT.to_string());
    } else {
        lines.push(format!(
            "{:<26} {:<10} {:<13} {:<16} {}",
            "ID", "STATUS", "CREATED", "PROVIDER", "TITLE"
        ));
        for row in view.rows() {
            lines.extend(post_row(&row));
        }
    }

    if view.shows_pagination() {
        lines.push(String::new());
        lines.push(format!(
            "Page {} of {}",
            view.current_page(),
            view.total_pages()
        ));
    }

    lines.join("\n")
}

fn post_row(row: &PostRow) -> Vec<String> {
    let provider = match &row.model {
        Some(model) => format!("{}/{model}", row.provider),
        None => row.provider.clone(),
    };
    let mut lines = vec![format!(
        "{:<26} {:<10} {:<13} {:<16} {}",
        row.id, row.status_label, row.created, provider, row.title
    )];
    if let Some(topic) = &row.topic {
        lines.push(format!("{:<26} Topic: {topic}", ""));
    }
    if let Some(updated) = &row.updated {
        lines.push(format!("{:<26} Updated: {updated}", ""));
    }
    lines
}

/// Full post with metadata and comments
pub fn post_details(details: &PostDetails) -> String {
    let mut lines = vec![
        details.title.clone(),
        format!(
            "{} | {} | {} | By {}",
            details.status_label,
            details.date,
            details.reading_label(),
            details.author
        ),
    ];
    if !details.tags.is_empty() {
        lines.push(format!("Tags: {}", details.tags.join(", ")));
    }
    if let Some(image) = &details.image {
        lines.push(format!("Image: {image}"));
    }
    lines.push(format!(
        "{} views  {} likes",
        details.views, details.likes
    ));
    if let Some(url) = &details.external_url {
        lines.push(format!("View on Blogger: {url}"));
    }

    lines.push(String::new());
    lines.push(details.content.clone());
    lines.push(String::new());

    lines.push(format!("Comments ({})", details.comments.len()));
    lines.extend(details.comments.iter().map(|comment| {
        format!("  {} ({}): {}", comment.author, comment.date, comment.content)
    }));

    lines.join("\n")
}
