//! # Client configuration — `easypg.toml`
//!
//! Defines the TOML file that sits at the root of the workspace (filename:
//! [`EasyPgConfig::filename`] = `"easypg.toml"`). The web bundle embeds it at
//! compile time, so changing the API host or a delay is a rebuild, not a code
//! change.
//!
//! ## Structure
//!
//! ```toml
//! [api]
//! base_url = "http://localhost:5000/api"
//! page_size = 12
//!
//! [notifications]
//! dismiss_after_ms = 3000
//! settings_dismiss_after_ms = 4000
//!
//! [delays]
//! login_redirect_ms = 1500
//! ```
//!
//! ## Types
//!
//! | Struct | Purpose |
//! |--------|---------|
//! | [`EasyPgConfig`] | Top-level config with TOML (de)serialisation and the canonical filename. |
//! | [`ApiConfig`] | Base URL of the marketplace API and the search page size. |
//! | [`NotificationConfig`] | How long a notification stays on screen. |
//! | [`DelayConfig`] | Pauses before redirects so the user can read the outcome. |
//!
//! Every field has a serde default, so a missing or empty file is equivalent to
//! the default configuration.

use serde::{Deserialize, Serialize};

/// Top-level configuration stored in `easypg.toml`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct EasyPgConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub notifications: NotificationConfig,
    #[serde(default)]
    pub delays: DelayConfig,
}

/// Remote API settings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Prefix for every request path, without a trailing slash.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// `per_page` sent with every listings search.
    #[serde(default = "default_page_size")]
    pub page_size: u32,
}

fn default_base_url() -> String {
    "http://localhost:5000/api".to_string()
}

fn default_page_size() -> u32 {
    12
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            page_size: default_page_size(),
        }
    }
}

/// Notification lifetimes in milliseconds.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NotificationConfig {
    #[serde(default = "default_dismiss_after")]
    pub dismiss_after_ms: u32,
    /// The settings page keeps its confirmations up a little longer.
    #[serde(default = "default_settings_dismiss_after")]
    pub settings_dismiss_after_ms: u32,
}

fn default_dismiss_after() -> u32 {
    3000
}

fn default_settings_dismiss_after() -> u32 {
    4000
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self {
            dismiss_after_ms: default_dismiss_after(),
            settings_dismiss_after_ms: default_settings_dismiss_after(),
        }
    }
}

/// Delays before navigation or mode changes, in milliseconds.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DelayConfig {
    #[serde(default = "default_login_redirect")]
    pub login_redirect_ms: u32,
    #[serde(default = "default_signup_switch")]
    pub signup_switch_ms: u32,
    #[serde(default = "default_auth_failure_redirect")]
    pub auth_failure_redirect_ms: u32,
    #[serde(default = "default_sign_out_redirect")]
    pub sign_out_redirect_ms: u32,
    #[serde(default = "default_landing_search")]
    pub landing_search_ms: u32,
    #[serde(default = "default_account_deleted_redirect")]
    pub account_deleted_redirect_ms: u32,
}

fn default_login_redirect() -> u32 {
    1500
}

fn default_signup_switch() -> u32 {
    2000
}

fn default_auth_failure_redirect() -> u32 {
    1000
}

fn default_sign_out_redirect() -> u32 {
    2000
}

fn default_landing_search() -> u32 {
    1000
}

fn default_account_deleted_redirect() -> u32 {
    3000
}

impl Default for DelayConfig {
    fn default() -> Self {
        Self {
            login_redirect_ms: default_login_redirect(),
            signup_switch_ms: default_signup_switch(),
            auth_failure_redirect_ms: default_auth_failure_redirect(),
            sign_out_redirect_ms: default_sign_out_redirect(),
            landing_search_ms: default_landing_search(),
            account_deleted_redirect_ms: default_account_deleted_redirect(),
        }
    }
}

impl EasyPgConfig {
    /// Builder method to point the client at another API host.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.api.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "easypg.toml"
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Serialize to TOML string.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_is_default() {
        let config = EasyPgConfig::from_toml("").unwrap();
        assert_eq!(config, EasyPgConfig::default());
        assert_eq!(config.api.base_url, "http://localhost:5000/api");
        assert_eq!(config.api.page_size, 12);
        assert_eq!(config.notifications.dismiss_after_ms, 3000);
        assert_eq!(config.delays.login_redirect_ms, 1500);
    }

    #[test]
    fn test_partial_section_keeps_other_defaults() {
        let config = EasyPgConfig::from_toml(
            r#"
            [api]
            page_size = 24

            [delays]
            signup_switch_ms = 500
            "#,
        )
        .unwrap();
        assert_eq!(config.api.page_size, 24);
        assert_eq!(config.api.base_url, "http://localhost:5000/api");
        assert_eq!(config.delays.signup_switch_ms, 500);
        assert_eq!(config.delays.sign_out_redirect_ms, 2000);
        assert_eq!(config.notifications.settings_dismiss_after_ms, 4000);
    }

    #[test]
    fn test_with_base_url_strips_trailing_slash() {
        let config = EasyPgConfig::default().with_base_url("https://easypg.example/api/");
        assert_eq!(config.api.base_url, "https://easypg.example/api");
    }

    #[test]
    fn test_toml_roundtrip() {
        let config = EasyPgConfig::default().with_base_url("https://api.easypg.in");
        let text = config.to_toml().unwrap();
        assert_eq!(EasyPgConfig::from_toml(&text).unwrap(), config);
    }

    #[test]
    fn test_workspace_file_parses() {
        let text = include_str!("../../../easypg.toml");
        let config = EasyPgConfig::from_toml(text).unwrap();
        assert_eq!(config, EasyPgConfig::default());
    }
}
