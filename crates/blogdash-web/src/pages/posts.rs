//! Post list page with search, status filter, pagination and delete

use crate::components::loading::Loading;
use crate::components::pagination::Pagination;
use crate::components::post_table::PostTable;
use crate::state::AppState;
use crate::storage::BrowserConfirm;
use blogdash_client::posts::{EMPTY_HINT, EMPTY_TITLE, delete_post};
use blogdash_client::{BlogApi, PostListView, StatusFilter, ViewState};
use blogdash_core::PageRequest;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Fetch a page and hand the result to the list
fn fetch_page(state: AppState, list: RwSignal<PostListView>, request: PageRequest) {
    let api = state.api();
    spawn_local(async move {
        let result = api.list_posts(request).await;
        list.try_update(|l| l.apply(request, result));
    });
}

/// Post list page component
#[component]
pub fn Posts() -> impl IntoView {
    let state = AppState::from_context();
    let list = RwSignal::new(PostListView::new(state.page_size()));

    if let Some(request) = list.try_update(PostListView::begin_refresh) {
        fetch_page(state, list, request);
    }

    let on_page_change = Callback::new(move |page: u32| {
        if let Some(request) = list.try_update(|l| l.go_to(page)).flatten() {
            fetch_page(state, list, request);
        }
    });

    let on_delete = Callback::new(move |id: String| {
        let api = state.api();
        spawn_local(async move {
            let outcome = delete_post(&api, &BrowserConfirm, &id).await;
            if let Some(request) = list.try_update(|l| l.after_delete(&outcome)).flatten() {
                fetch_page(state, list, request);
            }
        });
    });

    let content = move || {
        list.with(|l| match l.state() {
            ViewState::Loading => view! { <Loading /> }.into_any(),
            ViewState::Failed(message) => {
                view! { <div class="error-message">{message.clone()}</div> }.into_any()
            }
            _ if l.is_empty() => view! {
                <div class="empty-state">
                    <h3>{EMPTY_TITLE}</h3>
                    <p>{EMPTY_HINT}</p>
                </div>
                {l.shows_pagination()
                    .then(|| view! { <Pagination controls=l.controls() on_page_change /> })}
            }
            .into_any(),
            _ => view! {
                <PostTable rows=l.rows() on_delete />
                {l.shows_pagination()
                    .then(|| view! { <Pagination controls=l.controls() on_page_change /> })}
            }
            .into_any(),
        })
    };

    view! {
        <div class="posts-page">
            <div class="posts-header">
                <h2>"Posts"</h2>
                <span class="posts-total">{move || list.with(PostListView::total_label)}</span>
            </div>
            <div class="posts-toolbar">
                <input
                    type="text"
                    class="search-input"
                    placeholder="Search posts..."
                    prop:value=move || list.with(|l| l.search.clone())
                    on:input=move |ev| list.update(|l| l.search = event_target_value(&ev))
                />
                <select
                    class="filter-select"
                    on:change=move |ev| {
                        let filter = StatusFilter::from_value(&event_target_value(&ev));
                        list.update(|l| l.filter = filter);
                    }
                >
                    {StatusFilter::options()
                        .into_iter()
                        .map(|option| {
                            let value = option.value().to_string();
                            let selected = option.clone();
                            view! {
                                <option
                                    value=value
                                    selected=move || list.with(|l| l.filter == selected)
                                >
                                    {option.label()}
                                </option>
                            }
                        })
                        .collect_view()}
                </select>
            </div>
            {content}
        </div>
    }
}
