use shared_types::{AppError, SessionStore};

use super::js_error;

/// Session kept in the browser's `sessionStorage` under a single key.
///
/// It survives reloads and ends with the tab. Removing an absent key
/// succeeds.
#[derive(Debug, Clone)]
pub struct WebStore {
    key: String,
}

impl WebStore {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    fn storage(&self) -> Result<web_sys::Storage, AppError> {
        let window = web_sys::window().ok_or_else(|| AppError::storage("no browser window"))?;
        window
            .session_storage()
            .map_err(|e| js_error("open sessionStorage", e))?
            .ok_or_else(|| AppError::storage("sessionStorage unavailable"))
    }
}

impl SessionStore for WebStore {
    fn load(&self) -> Result<Option<String>, AppError> {
        self.storage()?
            .get_item(&self.key)
            .map_err(|e| js_error("read session", e))
    }

    fn save(&self, raw: &str) -> Result<(), AppError> {
        self.storage()?
            .set_item(&self.key, raw)
            .map_err(|e| js_error("write session", e))
    }

    fn remove(&self) -> Result<(), AppError> {
        self.storage()?
            .remove_item(&self.key)
            .map_err(|e| js_error("remove session", e))
    }
}
