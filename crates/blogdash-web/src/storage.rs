//! Browser-backed session persistence and prompts

use blogdash_client::{ConfirmPrompt, SessionStorage};
use blogdash_core::{Error, Result};
use leptos::prelude::window;
use web_sys::Storage;

/// `window.localStorage`
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStorage;

impl BrowserStorage {
    fn local_storage() -> Result<Storage> {
        window()
            .local_storage()
            .map_err(|e| Error::Storage(format!("{e:?}")))?
            .ok_or_else(|| Error::Storage("local storage is unavailable".to_string()))
    }
}

impl SessionStorage for BrowserStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Self::local_storage()?
            .get_item(key)
            .map_err(|e| Error::Storage(format!("failed to read {key}: {e:?}")))
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        Self::local_storage()?
            .set_item(key, value)
            .map_err(|e| Error::Storage(format!("failed to write {key}: {e:?}")))
    }

    fn remove(&self, key: &str) -> Result<()> {
        Self::local_storage()?
            .remove_item(key)
            .map_err(|e| Error::Storage(format!("failed to remove {key}: {e:?}")))
    }
}

/// `window.confirm`
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserConfirm;

impl ConfirmPrompt for BrowserConfirm {
    fn confirm(&self, message: &str) -> bool {
        window().confirm_with_message(message).unwrap_or(false)
    }
}

/// Current viewport width in CSS pixels
pub fn viewport_width() -> f64 {
    window()
        .inner_width()
        .ok()
        .and_then(|width| width.as_f64())
        .unwrap_or(f64::MAX)
}
