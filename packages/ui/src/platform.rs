//! Shared store and client constructors for all platforms.
//!
//! - **Web** (WASM + `web` feature): browser `localStorage` via [`store::LocalStore`]
//! - **Native**: one process-wide [`store::MemoryStore`], so every handle sees
//!   the same entries the way every tab sees the same `localStorage`

use api::ApiClient;
use store::{SessionStore, SettingsStore};

use crate::config::app_config;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub type AppStore = store::LocalStore;
#[cfg(not(all(target_arch = "wasm32", feature = "web")))]
pub type AppStore = store::MemoryStore;

/// Create the platform-appropriate key/value store.
pub fn make_store() -> AppStore {
    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    {
        store::LocalStore
    }
    #[cfg(not(all(target_arch = "wasm32", feature = "web")))]
    {
        use std::sync::OnceLock;
        static SHARED: OnceLock<store::MemoryStore> = OnceLock::new();
        SHARED.get_or_init(store::MemoryStore::new).clone()
    }
}

/// API client reading its token from the platform store.
pub fn make_client() -> ApiClient<AppStore> {
    ApiClient::new(&app_config().api, make_store())
}

pub fn make_sessions() -> SessionStore<AppStore> {
    SessionStore::new(make_store())
}

pub fn make_settings() -> SettingsStore<AppStore> {
    SettingsStore::new(make_store())
}
