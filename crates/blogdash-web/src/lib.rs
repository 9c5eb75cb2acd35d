//! BlogDash Web Interface
//!
//! Client-side rendered Leptos frontend for the BlogDash admin dashboard.

#![cfg_attr(
    test,
    allow(clippy::unwrap_used, clippy::expect_used, clippy::indexing_slicing, clippy::panic)
)]

pub mod app;
pub mod components;
pub mod pages;
pub mod state;
pub mod storage;

// Re-export the main component
pub use app::App;
pub use state::AppState;
