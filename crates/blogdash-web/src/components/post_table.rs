//! Post table component for the post list

use crate::components::status_badge::StatusBadge;
use blogdash_client::PostRow;
use blogdash_client::routes::preview_path;
use leptos::prelude::*;
use leptos_router::components::A;

/// Post table component
#[component]
pub fn PostTable(
    /// Rows to display
    rows: Vec<PostRow>,
    /// Callback when a delete button is clicked
    on_delete: Callback<String>,
) -> impl IntoView {
    view! {
        <table class="post-table">
            <thead>
                <tr>
                    <th>"Post"</th>
                    <th>"Provider"</th>
                    <th>"Date"</th>
                    <th>"Status"</th>
                    <th>"Actions"</th>
                </tr>
            </thead>
            <tbody>
                {rows
                    .into_iter()
                    .map(|row| view! { <PostTableRow row on_delete /> })
                    .collect_view()}
            </tbody>
        </table>
    }
}

/// Individual post row component
#[component]
fn PostTableRow(row: PostRow, on_delete: Callback<String>) -> impl IntoView {
    let id = row.id.clone();

    view! {
        <tr class="post-row">
            <td class="post-cell">
                {row
                    .thumbnail
                    .map(|src| view! { <img class="post-thumbnail" src=src alt="" /> })}
                <div class="post-heading">
                    <span class="post-title">{row.title}</span>
                    {row.slug.map(|slug| view! { <span class="post-slug">{slug}</span> })}
                    {row
                        .topic
                        .map(|topic| view! { <span class="post-topic">"Topic: " {topic}</span> })}
                </div>
            </td>
            <td>
                <div>{row.provider}</div>
                {row.model.map(|model| view! { <div class="post-model">{model}</div> })}
            </td>
            <td>
                <div>{row.created}</div>
                {row
                    .updated
                    .map(|updated| view! { <div class="post-updated">"Updated: " {updated}</div> })}
            </td>
            <td>
                <StatusBadge label=row.status_label class=row.status_class />
            </td>
            <td class="post-actions">
                <A href=preview_path(&row.id)>"Preview"</A>
                {row
                    .external_url
                    .map(|url| {
                        view! {
                            <a href=url target="_blank" rel="noopener noreferrer">
                                "View"
                            </a>
                        }
                    })}
                <button class="btn btn-danger" on:click=move |_| on_delete.run(id.clone())>
                    "Delete"
                </button>
            </td>
        </tr>
    }
}
