//! Client-local persistent key-value storage
//!
//! The gate only ever talks to [`KeyValueStore`]. Backends:
//! - [`MemoryStore`]: in-process map, used for tests and embedding
//! - [`FileStore`]: JSON object on disk (native)
//! - `LocalStore`: browser `window.localStorage` (WASM only)

pub mod file;
#[cfg(target_arch = "wasm32")]
pub mod local;
pub mod memory;

pub use file::FileStore;
#[cfg(target_arch = "wasm32")]
pub use local::LocalStore;
pub use memory::MemoryStore;

use crate::error::StorageError;

/// Synchronous string key-value store shared with the rest of the host
pub trait KeyValueStore {
    /// Read a value, `None` if the key is absent
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Write a value, replacing any previous one
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Remove every key in the store's namespace
    fn clear_all(&mut self) -> Result<(), StorageError>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for &mut S {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set(key, value)
    }

    fn clear_all(&mut self) -> Result<(), StorageError> {
        (**self).clear_all()
    }
}
