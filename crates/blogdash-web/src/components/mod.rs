//! Reusable UI components

pub mod layout;
pub mod loading;
pub mod login_modal;
pub mod pagination;
pub mod post_table;
pub mod stat_card;
pub mod status_badge;
