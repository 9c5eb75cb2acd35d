//! Pagination component for navigating through data

use blogdash_core::PageControls;
use leptos::prelude::*;

/// Pagination component
#[component]
pub fn Pagination(
    /// Position in the listing
    controls: PageControls,
    /// Callback when page changes
    on_page_change: Callback<u32>,
) -> impl IntoView {
    let previous = controls.previous_page();
    let next = controls.next_page();

    view! {
        <div class="pagination">
            <button
                class="pagination-btn"
                disabled=controls.at_first()
                on:click=move |_| on_page_change.run(previous)
            >
                "Previous"
            </button>

            {controls
                .pages
                .iter()
                .map(|&page| {
                    let class = if controls.is_current(page) {
                        "pagination-btn active"
                    } else {
                        "pagination-btn"
                    };
                    view! {
                        <button class=class on:click=move |_| on_page_change.run(page)>
                            {page}
                        </button>
                    }
                })
                .collect_view()}

            <button
                class="pagination-btn"
                disabled=controls.at_last()
                on:click=move |_| on_page_change.run(next)
            >
                "Next"
            </button>
        </div>
    }
}
