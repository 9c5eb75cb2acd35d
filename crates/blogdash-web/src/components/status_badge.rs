//! Status badge shared by the tables and the preview

use leptos::prelude::*;

/// Post status badge
#[component]
pub fn StatusBadge(
    /// Badge text
    label: &'static str,
    /// Badge modifier class
    class: &'static str,
) -> impl IntoView {
    view! { <span class=format!("status-badge status-{class}")>{label}</span> }
}
