//! Metric card on the dashboard

use blogdash_client::StatCard as Card;
use leptos::prelude::*;

/// One metric card
#[component]
pub fn StatCard(card: Card) -> impl IntoView {
    view! {
        <div class=format!("stat-card stat-card-{}", card.tone.class())>
            <h3 class="stat-title">{card.title}</h3>
            <p class="stat-value">{card.value}</p>
        </div>
    }
}
