//! Dashboard page: metric cards and recent posts

use crate::components::loading::Loading;
use crate::components::stat_card::StatCard;
use crate::components::status_badge::StatusBadge;
use crate::state::AppState;
use blogdash_client::dashboard::EMPTY_RECENT_POSTS;
use blogdash_client::routes::preview_path;
use blogdash_client::{DashboardData, DashboardView, RecentPost, ViewState};
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;

/// Main dashboard page component
#[component]
pub fn Dashboard() -> impl IntoView {
    let state = AppState::from_context();
    let dashboard = RwSignal::new(DashboardView::new());

    let api = state.api();
    spawn_local(async move {
        let mut view = DashboardView::new();
        view.load(&api).await;
        dashboard.try_set(view);
    });

    view! {
        <div class="dashboard">
            <h2>"Dashboard"</h2>
            {move || match dashboard.with(|d| d.state().clone()) {
                ViewState::Ready(data) => view! { <DashboardContent data /> }.into_any(),
                _ => view! { <Loading /> }.into_any(),
            }}
        </div>
    }
}

#[component]
fn DashboardContent(data: DashboardData) -> impl IntoView {
    let recent = if data.recent_posts.is_empty() {
        view! { <p class="empty-state">{EMPTY_RECENT_POSTS}</p> }.into_any()
    } else {
        view! {
            <ul class="recent-posts">
                {data
                    .recent_posts
                    .into_iter()
                    .map(|post| view! { <RecentPostItem post /> })
                    .collect_view()}
            </ul>
        }
        .into_any()
    };

    view! {
        <div class="stats-grid">
            {data.cards.into_iter().map(|card| view! { <StatCard card /> }).collect_view()}
        </div>
        <section class="dashboard-card">
            <h3>"Recent Posts"</h3>
            {recent}
        </section>
    }
}

#[component]
fn RecentPostItem(post: RecentPost) -> impl IntoView {
    view! {
        <li class="recent-post">
            <div class="recent-post-main">
                <A href=preview_path(&post.id)>{post.title}</A>
                <span class="recent-post-date">{post.date}</span>
            </div>
            <div class="recent-post-meta">
                <span>{post.views} " views"</span>
                <span>{post.likes} " likes"</span>
                <StatusBadge label=post.status_label class=post.status_class />
            </div>
        </li>
    }
}
