//! Shared UI for the EasyPG web client.
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`views`] | One page component per route. |
//! | [`auth`] [`dashboard`] [`search`] [`settings`] [`landing`] | Page controllers. |
//! | [`notify`] | Per-page notification stack. |
//! | [`browser`] | Navigation, query string, timers and other `window` access. |
//! | [`platform`] | Storage, session and API client construction for the current target. |
//! | [`config`] | The embedded `easypg.toml`. |
//! | [`format`] | Rupee formatting. |
//! | [`icons`] | Font Awesome icons used across pages. |

pub mod auth;
pub mod browser;
pub mod config;
pub mod dashboard;
pub mod format;
pub mod icons;
pub mod landing;
pub mod notify;
pub mod platform;
pub mod search;
pub mod settings;
pub mod views;

pub use config::app_config;
pub use icons::{AppIcon, IconKind};
pub use notify::{use_notifier, NotificationHost, Notifier, Severity};
pub use platform::{make_client, make_sessions, make_settings, make_store, AppStore};
pub use settings::{apply_saved_theme, apply_theme};
pub use views::{AuthView, DashboardView, HomeView, SearchView, SettingsView};
