//! # Key/value storage seam
//!
//! Everything the client persists goes through [`KeyValueStore`]: string keys,
//! string values, synchronous access. That is the shape of the browser's
//! `localStorage`, which [`crate::LocalStore`] wraps on the web platform;
//! [`crate::MemoryStore`] implements it for tests and native builds.
//!
//! The JSON helpers fail soft on read: a value that does not parse is treated
//! as absent, so a corrupted entry degrades to "nothing stored" instead of
//! breaking the page.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::StoreError;

/// Synchronous string key/value store.
pub trait KeyValueStore: Clone {
    fn get(&self, key: &str) -> Option<String>;

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;

    fn remove(&self, key: &str);

    /// Remove every key in the store.
    fn clear(&self);

    /// Read and parse a JSON value. Missing or unparsable entries are `None`.
    fn get_json<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let raw = self.get(key)?;
        serde_json::from_str(&raw).ok()
    }

    /// Serialise a value as JSON and store it.
    fn set_json<T: Serialize>(&self, key: &str, value: &T) -> Result<(), StoreError> {
        let raw = serde_json::to_string(value).map_err(|source| StoreError::Encode {
            key: key.to_string(),
            source,
        })?;
        self.set(key, &raw)
    }
}
