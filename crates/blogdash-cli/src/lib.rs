//! Command line client for the BlogDash admin dashboard
//!
//! Drives the same view controllers as the browser app, persisting the
//! session to a JSON file instead of local storage.

#![cfg_attr(
    test,
    allow(clippy::unwrap_used, clippy::expect_used, clippy::indexing_slicing, clippy::panic)
)]

pub mod commands;
pub mod output;
pub mod prompt;

pub use commands::ListOptions;
pub use prompt::LinePrompt;
