//! Browser LocalStorage (WASM only)

use wasm_bindgen::{JsCast, JsValue};

use super::KeyValueStore;
use crate::error::StorageError;

/// Handle onto the origin's `window.localStorage`
pub struct LocalStore {
    storage: web_sys::Storage,
}

impl LocalStore {
    /// Fails if there is no window or the browser denies LocalStorage
    pub fn open() -> Result<Self, StorageError> {
        let window = web_sys::window().ok_or_else(|| StorageError::unavailable("no window"))?;
        let storage = window
            .local_storage()
            .map_err(js_error)?
            .ok_or_else(|| StorageError::unavailable("LocalStorage disabled"))?;
        Ok(Self { storage })
    }
}

impl KeyValueStore for LocalStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.storage.get_item(key).map_err(js_error)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.storage.set_item(key, value).map_err(js_error)
    }

    fn clear_all(&mut self) -> Result<(), StorageError> {
        self.storage.clear().map_err(js_error)
    }
}

/// SecurityError / QuotaExceededError both land here
fn js_error(value: JsValue) -> StorageError {
    let reason = value
        .dyn_ref::<js_sys::Error>()
        .map(|e| String::from(e.message()))
        .or_else(|| value.as_string())
        .unwrap_or_else(|| format!("{:?}", value));
    StorageError::Unavailable(reason)
}
