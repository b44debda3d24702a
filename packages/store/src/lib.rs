//! Local state for the EasyPG client: domain models, the key/value storage
//! seam, the session and settings stores, and client configuration.

pub mod config;
pub mod error;
pub mod kv;
pub mod models;
pub mod session;
pub mod settings;

mod memory;
pub use memory::MemoryStore;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
mod local;
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use local::LocalStore;

pub use config::EasyPgConfig;
pub use error::StoreError;
pub use kv::KeyValueStore;
pub use models::{
    DashboardStats, FilterSet, Pagination, Property, PropertyImage, PropertyPage, RecentItem,
    UserRecord, UserType,
};
pub use session::{Session, SessionStore};
pub use settings::{Language, ResolvedTheme, SettingUpdate, Settings, SettingsStore, Theme};
