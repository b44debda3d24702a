//! Settings page actions and the theme switch.

use store::{
    KeyValueStore, ResolvedTheme, SettingUpdate, Settings, SettingsStore, StoreError, Theme,
};

use crate::browser::{prefers_dark, set_body_class};

pub const MSG_SETTING_UPDATED: &str = "Setting updated successfully";
pub const MSG_HISTORY_CLEARED: &str = "Search history cleared successfully";
pub const MSG_DOWNLOAD_STARTED: &str = "Data download started";
pub const MSG_DELETE_STARTED: &str = "Account deletion initiated. You will be redirected shortly.";
pub const MSG_DELETE_MISMATCH: &str = "Account deletion cancelled - incorrect confirmation";
pub const EXPORT_FILENAME: &str = "easypg-user-data.json";

/// Literal the user must type before their data is wiped.
pub const DELETE_CONFIRMATION: &str = "DELETE";

/// Put the theme's class on `<body>`. `auto` reads the system preference now.
pub fn apply_theme(theme: Theme) -> ResolvedTheme {
    let resolved = theme.resolve(theme == Theme::Auto && prefers_dark());
    set_body_class(&ResolvedTheme::ALL_CLASSES, resolved.class());
    resolved
}

/// Apply the persisted theme (default light). Called once at startup.
pub fn apply_saved_theme<S: KeyValueStore>(settings: &SettingsStore<S>) -> ResolvedTheme {
    apply_theme(settings.theme())
}

/// Apply the visible effect of a stored change.
pub fn apply_setting(update: &SettingUpdate) {
    match update {
        SettingUpdate::Theme(theme) => {
            apply_theme(*theme);
        }
        other => tracing::info!(key = other.key(), "Setting changed"),
    }
}

/// Parse, persist and apply one setting from form input.
pub fn update_setting<S: KeyValueStore>(
    settings: &SettingsStore<S>,
    key: &str,
    value: &str,
) -> Result<Settings, StoreError> {
    let update = SettingUpdate::parse(key, value)?;
    let saved = settings.update(&update)?;
    apply_setting(&update);
    Ok(saved)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DeleteDecision {
    Confirmed,
    /// The prompt was dismissed.
    Cancelled,
    /// Something other than the confirmation literal was typed.
    Mismatch,
}

pub fn delete_decision(input: Option<&str>) -> DeleteDecision {
    match input {
        None => DeleteDecision::Cancelled,
        Some(DELETE_CONFIRMATION) => DeleteDecision::Confirmed,
        Some(_) => DeleteDecision::Mismatch,
    }
}
