//! Main Leptos application component with routing

use crate::components::layout::Layout;
use crate::components::login_modal::LoginModal;
use crate::pages::{dashboard::Dashboard, not_found::NotFound, posts::Posts, preview::Preview};
use crate::state::AppState;
use blogdash_core::Config;
use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

/// Main application component
///
/// Shows the login form until a session exists, then the dashboard shell.
#[component]
pub fn App() -> impl IntoView {
    let state = AppState::new(Config::default());
    provide_context(state);

    view! {
        <Router>
            <Show
                when=move || state.is_authenticated()
                fallback=|| view! { <LoginModal /> }
            >
                <Layout>
                    <Routes fallback=|| view! { <NotFound /> }>
                        <Route path=path!("/") view=Dashboard />
                        <Route path=path!("/posts") view=Posts />
                        <Route path=path!("/posts/:id") view=Preview />
                    </Routes>
                </Layout>
            </Show>
        </Router>
    }
}
