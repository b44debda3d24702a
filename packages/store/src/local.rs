//! # Browser local storage — web persistence
//!
//! [`LocalStore`] is the [`KeyValueStore`] used on the **web platform**. It
//! reads and writes `window.localStorage` through [`gloo_storage`], using the
//! raw string API so values keep the exact format other pages of the site
//! expect (`authToken` is stored unquoted, JSON records as JSON text).
//!
//! ## Error handling
//!
//! Reads swallow errors and return `None`: storage that is disabled or
//! unavailable looks like an empty store. Writes report the browser's refusal
//! (usually a quota error) as [`StoreError::Write`] so the caller can tell the
//! user their change was not kept.

use gloo_storage::{LocalStorage, Storage};
use wasm_bindgen::JsValue;

use crate::error::StoreError;
use crate::kv::KeyValueStore;

/// `window.localStorage`-backed store. Zero-size; every call goes to the browser.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStore;

impl LocalStore {
    pub fn new() -> Self {
        Self
    }
}

fn describe(err: JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{err:?}"))
}

impl KeyValueStore for LocalStore {
    fn get(&self, key: &str) -> Option<String> {
        LocalStorage::raw().get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        LocalStorage::raw()
            .set_item(key, value)
            .map_err(|e| StoreError::Write {
                key: key.to_string(),
                reason: describe(e),
            })
    }

    fn remove(&self, key: &str) {
        LocalStorage::delete(key);
    }

    fn clear(&self) {
        LocalStorage::clear();
    }
}
