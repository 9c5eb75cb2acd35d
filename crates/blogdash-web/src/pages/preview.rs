//! Single post preview page

use crate::components::loading::Loading;
use crate::components::status_badge::StatusBadge;
use crate::state::AppState;
use crate::storage::BrowserConfirm;
use blogdash_client::preview::NOT_FOUND;
use blogdash_client::{CommentView, DeleteOutcome, PostDetails, PostPreviewView, ViewState};
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use leptos_router::hooks::{use_navigate, use_params_map};

/// Post preview page component
#[component]
pub fn Preview() -> impl IntoView {
    let state = AppState::from_context();
    let params = use_params_map();
    let preview = RwSignal::new(PostPreviewView::new());

    Effect::new(move |_| {
        let id = params.with(|p| p.get("id").unwrap_or_default());
        let api = state.api();
        preview.update(PostPreviewView::begin_load);
        spawn_local(async move {
            let mut view = PostPreviewView::new();
            view.load(&api, &id).await;
            preview.try_set(view);
        });
    });

    let navigate = use_navigate();
    let on_delete = move |_: leptos::ev::MouseEvent| {
        let api = state.api();
        let current = preview.get_untracked();
        let navigate = navigate.clone();
        spawn_local(async move {
            if current.delete(&api, &BrowserConfirm).await == DeleteOutcome::Deleted {
                navigate("/posts", Default::default());
            }
        });
    };

    view! {
        <div class="preview-page">
            <A href="/posts">"← Back to Posts"</A>
            {move || match preview.with(|p| p.state().clone()) {
                ViewState::Loading => view! { <Loading /> }.into_any(),
                ViewState::Ready(details) => {
                    view! {
                        <PostArticle details />
                        <div class="preview-actions">
                            <button class="btn btn-danger" on:click=on_delete.clone()>
                                "Delete Post"
                            </button>
                        </div>
                    }
                    .into_any()
                }
                ViewState::Failed(message) => {
                    view! { <div class="error-message">{message}</div> }.into_any()
                }
                ViewState::NotFound => view! { <div class="empty-state">{NOT_FOUND}</div> }.into_any(),
            }}
        </div>
    }
}

#[component]
fn PostArticle(details: PostDetails) -> impl IntoView {
    let reading = details.reading_label();
    let comment_count = details.comments.len();

    view! {
        <article class="post-preview">
            <header class="post-preview-header">
                <StatusBadge label=details.status_label class=details.status_class />
                <h1>{details.title}</h1>
                <div class="post-meta">
                    <span>{details.date}</span>
                    <span>{reading}</span>
                    <span>"By " {details.author}</span>
                </div>
                <div class="post-tags">
                    {details
                        .tags
                        .into_iter()
                        .map(|tag| view! { <span class="tag">{tag}</span> })
                        .collect_view()}
                </div>
            </header>
            {details.image.map(|src| view! { <img class="post-image" src=src alt="" /> })}
            <div class="post-content" inner_html=details.content></div>
            <footer class="post-stats">
                <span>{details.views} " views"</span>
                <span>{details.likes} " likes"</span>
                {details
                    .external_url
                    .map(|url| {
                        view! {
                            <a href=url target="_blank" rel="noopener noreferrer">
                                "View on Blogger"
                            </a>
                        }
                    })}
            </footer>
            <section class="comments">
                <h3>"Comments (" {comment_count} ")"</h3>
                {details
                    .comments
                    .into_iter()
                    .map(|comment| view! { <CommentItem comment /> })
                    .collect_view()}
            </section>
        </article>
    }
}

#[component]
fn CommentItem(comment: CommentView) -> impl IntoView {
    view! {
        <div class="comment">
            <div class="comment-header">
                <strong>{comment.author}</strong>
                <span class="comment-date">{comment.date}</span>
            </div>
            <p>{comment.content}</p>
        </div>
    }
}
