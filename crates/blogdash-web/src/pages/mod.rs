//! Page components for the web interface

pub mod dashboard;
pub mod not_found;
pub mod posts;
pub mod preview;
