//! Dashboard shell: sidebar, header and content area

use crate::state::AppState;
use crate::storage::viewport_width;
use blogdash_client::shell::BRAND;
use blogdash_client::{NAV_ITEMS, ShellState};
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_location;

/// Shell wrapping every authenticated page
#[component]
pub fn Layout(children: Children) -> impl IntoView {
    let state = AppState::from_context();
    let shell = state.shell;

    let container_class = move || {
        shell.with(|s| {
            let mut class = String::from("layout");
            if !s.sidebar_open {
                class.push_str(" sidebar-collapsed");
            }
            if s.mobile_menu_open {
                class.push_str(" mobile-menu-open");
            }
            class
        })
    };

    view! {
        <div class=container_class>
            <Sidebar />
            <div class="main">
                <header class="header">
                    <button
                        class="menu-toggle"
                        aria-label="Toggle sidebar"
                        on:click=move |_| shell.update(|s| s.toggle_sidebar(viewport_width()))
                    >
                        "☰"
                    </button>
                    <button
                        class="mobile-menu-toggle"
                        aria-label="Toggle menu"
                        on:click=move |_| shell.update(ShellState::toggle_mobile_menu)
                    >
                        "☰"
                    </button>
                    <h1 class="header-title">{BRAND}</h1>
                </header>
                <main class="content">{children()}</main>
            </div>
        </div>
    }
}

/// Sidebar with navigation and the session footer
#[component]
fn Sidebar() -> impl IntoView {
    let state = AppState::from_context();
    let location = use_location();

    view! {
        <aside class="sidebar">
            <div class="sidebar-brand">{BRAND}</div>
            <nav class="sidebar-nav">
                <ul>
                    {NAV_ITEMS
                        .iter()
                        .map(|item| {
                            let item = *item;
                            let class = move || {
                                if location.pathname.with(|path| item.is_active(path)) {
                                    "nav-item active"
                                } else {
                                    "nav-item"
                                }
                            };
                            view! {
                                <li
                                    class=class
                                    on:click=move |_| state.shell.update(ShellState::nav_clicked)
                                >
                                    <A href=item.path>
                                        <span class="nav-icon material-icons">{item.icon}</span>
                                        <span class="nav-label">{item.label}</span>
                                    </A>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
            </nav>
            <div class="sidebar-footer">
                <span class="user-role">{move || state.role_label()}</span>
                <button class="btn btn-logout" on:click=move |_| state.logout()>
                    "Logout"
                </button>
            </div>
        </aside>
    }
}
