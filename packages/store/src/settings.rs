//! # User settings — `userSettings`
//!
//! Preferences are stored as one JSON object under [`SETTINGS_KEY`]. The
//! schema is closed: [`Settings`] names every key the client understands and
//! each value has a validated domain. Keys are written only once they have been
//! set, so a fresh profile patched with `theme = dark` stores exactly
//! `{"theme":"dark"}`.
//!
//! Updates go through [`SettingUpdate`], which is either built directly or
//! parsed from the `(key, value)` strings a form control produces.
//! [`SettingUpdate::parse`] rejects unknown keys and out-of-domain values
//! before anything touches storage.
//!
//! Reading is per key: a stored value outside its domain reads as unset and
//! leaves the other keys intact. [`SettingsStore::update`] patches the raw
//! JSON object, so entries it does not understand survive a write.
//!
//! [`SettingsStore`] also owns the other local-only profile data: the search
//! history, the data export and the full wipe used by account deletion.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::StoreError;
use crate::kv::KeyValueStore;

pub const SETTINGS_KEY: &str = "userSettings";
pub const SEARCH_HISTORY_KEY: &str = "searchHistory";
pub const SAVED_PROPERTIES_KEY: &str = "savedProperties";
pub const PROFILE_KEY: &str = "userProfile";

/// Requested colour scheme.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
    /// Follow the operating system, sampled when the theme is applied.
    Auto,
}

/// A theme with `auto` already decided.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResolvedTheme {
    Light,
    Dark,
}

impl Theme {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            "auto" => Some(Theme::Auto),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
            Theme::Auto => "auto",
        }
    }

    /// Decide the concrete scheme. `prefers_dark` is only consulted for `Auto`.
    pub fn resolve(self, prefers_dark: bool) -> ResolvedTheme {
        match self {
            Theme::Light => ResolvedTheme::Light,
            Theme::Dark => ResolvedTheme::Dark,
            Theme::Auto if prefers_dark => ResolvedTheme::Dark,
            Theme::Auto => ResolvedTheme::Light,
        }
    }
}

impl ResolvedTheme {
    /// Body class carrying the scheme.
    pub fn class(&self) -> &'static str {
        match self {
            ResolvedTheme::Light => "theme-light",
            ResolvedTheme::Dark => "theme-dark",
        }
    }

    /// Every class [`ResolvedTheme::class`] can return.
    pub const ALL_CLASSES: [&'static str; 2] = ["theme-light", "theme-dark"];
}

/// Interface language as a short tag: `en`, `hi`, `pt-BR`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Language(String);

impl Language {
    pub fn parse(s: &str) -> Option<Self> {
        let (lang, region) = match s.split_once('-') {
            Some((lang, region)) => (lang, Some(region)),
            None => (s, None),
        };
        let lang_ok = lang.len() == 2 && lang.bytes().all(|b| b.is_ascii_lowercase());
        let region_ok =
            region.map_or(true, |r| r.len() == 2 && r.bytes().all(|b| b.is_ascii_uppercase()));
        (lang_ok && region_ok).then(|| Language(s.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for Language {
    fn default() -> Self {
        Language("en".to_string())
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for Language {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Language::parse(&value).ok_or_else(|| format!("invalid language tag `{value}`"))
    }
}

impl From<Language> for String {
    fn from(value: Language) -> Self {
        value.0
    }
}

/// The settings blob. Unset keys are omitted when stored.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub theme: Option<Theme>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub language: Option<Language>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub email_notifications: Option<bool>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub sms_notifications: Option<bool>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub push_notifications: Option<bool>,
}

/// A value outside its domain reads as unset instead of failing the blob.
fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: serde::Deserializer<'de>,
    T: serde::de::DeserializeOwned,
{
    let raw = serde_json::Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(raw).ok())
}

impl Settings {
    pub fn theme(&self) -> Theme {
        self.theme.unwrap_or_default()
    }

    pub fn language(&self) -> Language {
        self.language.clone().unwrap_or_default()
    }

    /// Notification channels default to on.
    pub fn email_notifications(&self) -> bool {
        self.email_notifications.unwrap_or(true)
    }

    pub fn sms_notifications(&self) -> bool {
        self.sms_notifications.unwrap_or(true)
    }

    pub fn push_notifications(&self) -> bool {
        self.push_notifications.unwrap_or(true)
    }

    /// Patch one key in place.
    pub fn apply(&mut self, update: &SettingUpdate) {
        match update {
            SettingUpdate::Theme(t) => self.theme = Some(*t),
            SettingUpdate::Language(l) => self.language = Some(l.clone()),
            SettingUpdate::EmailNotifications(v) => self.email_notifications = Some(*v),
            SettingUpdate::SmsNotifications(v) => self.sms_notifications = Some(*v),
            SettingUpdate::PushNotifications(v) => self.push_notifications = Some(*v),
        }
    }
}

/// A single validated change to [`Settings`].
#[derive(Clone, Debug, PartialEq)]
pub enum SettingUpdate {
    Theme(Theme),
    Language(Language),
    EmailNotifications(bool),
    SmsNotifications(bool),
    PushNotifications(bool),
}

impl SettingUpdate {
    /// Build an update from a form control's key and string value.
    pub fn parse(key: &str, value: &str) -> Result<Self, StoreError> {
        let invalid = || StoreError::InvalidSetting {
            key: key.to_string(),
            value: value.to_string(),
        };
        let flag = || match value {
            "true" => Ok(true),
            "false" => Ok(false),
            _ => Err(invalid()),
        };
        match key {
            "theme" => Theme::parse(value).map(SettingUpdate::Theme).ok_or_else(invalid),
            "language" => Language::parse(value)
                .map(SettingUpdate::Language)
                .ok_or_else(invalid),
            "emailNotifications" => flag().map(SettingUpdate::EmailNotifications),
            "smsNotifications" => flag().map(SettingUpdate::SmsNotifications),
            "pushNotifications" => flag().map(SettingUpdate::PushNotifications),
            other => Err(StoreError::UnknownSetting(other.to_string())),
        }
    }

    /// The stored form of the new value.
    pub fn value(&self) -> serde_json::Value {
        match self {
            SettingUpdate::Theme(t) => serde_json::Value::from(t.as_str()),
            SettingUpdate::Language(l) => serde_json::Value::from(l.as_str()),
            SettingUpdate::EmailNotifications(v)
            | SettingUpdate::SmsNotifications(v)
            | SettingUpdate::PushNotifications(v) => serde_json::Value::Bool(*v),
        }
    }

    /// The stored key this update patches.
    pub fn key(&self) -> &'static str {
        match self {
            SettingUpdate::Theme(_) => "theme",
            SettingUpdate::Language(_) => "language",
            SettingUpdate::EmailNotifications(_) => "emailNotifications",
            SettingUpdate::SmsNotifications(_) => "smsNotifications",
            SettingUpdate::PushNotifications(_) => "pushNotifications",
        }
    }
}

/// Read/patch/write access to the settings blob and related local data.
#[derive(Clone, Debug)]
pub struct SettingsStore<S: KeyValueStore> {
    store: S,
}

impl<S: KeyValueStore> SettingsStore<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Current settings. A missing or unparsable blob reads as the defaults.
    pub fn load(&self) -> Settings {
        self.store.get_json(SETTINGS_KEY).unwrap_or_default()
    }

    /// Patch one key of the stored blob. Every other entry, valid or not,
    /// is written back untouched.
    pub fn update(&self, update: &SettingUpdate) -> Result<Settings, StoreError> {
        let mut raw = self
            .store
            .get_json::<serde_json::Map<String, serde_json::Value>>(SETTINGS_KEY)
            .unwrap_or_default();
        let mut settings: Settings =
            serde_json::from_value(serde_json::Value::Object(raw.clone())).unwrap_or_default();

        raw.insert(update.key().to_string(), update.value());
        self.store.set_json(SETTINGS_KEY, &raw)?;
        settings.apply(update);
        Ok(settings)
    }

    pub fn theme(&self) -> Theme {
        self.load().theme()
    }

    pub fn clear_search_history(&self) {
        self.store.remove(SEARCH_HISTORY_KEY);
    }

    /// Everything the client keeps about the user, as pretty-printed JSON.
    pub fn export_user_data(&self) -> Result<String, StoreError> {
        let raw = |key: &str, fallback: serde_json::Value| {
            self.store
                .get_json::<serde_json::Value>(key)
                .unwrap_or(fallback)
        };
        let export = serde_json::json!({
            "settings": raw(SETTINGS_KEY, serde_json::json!({})),
            "searchHistory": raw(SEARCH_HISTORY_KEY, serde_json::json!([])),
            "savedProperties": raw(SAVED_PROPERTIES_KEY, serde_json::json!([])),
            "profile": raw(PROFILE_KEY, serde_json::json!({})),
        });
        serde_json::to_string_pretty(&export).map_err(|source| StoreError::Encode {
            key: "export".to_string(),
            source,
        })
    }

    /// Remove every local entry, session included.
    pub fn wipe_all(&self) {
        self.store.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::MemoryStore;

    #[test]
    fn test_update_theme_on_empty_blob() {
        let store = MemoryStore::new();
        store.set(SETTINGS_KEY, "{}").unwrap();
        let settings = SettingsStore::new(store.clone());

        settings.update(&SettingUpdate::Theme(Theme::Dark)).unwrap();

        let stored: serde_json::Value = store.get_json(SETTINGS_KEY).unwrap();
        assert_eq!(stored, serde_json::json!({"theme": "dark"}));
    }

    #[test]
    fn test_update_keeps_other_keys() {
        let store = MemoryStore::new();
        store
            .set(SETTINGS_KEY, r#"{"language":"hi","smsNotifications":false}"#)
            .unwrap();
        let settings = SettingsStore::new(store.clone());

        let updated = settings
            .update(&SettingUpdate::parse("emailNotifications", "false").unwrap())
            .unwrap();
        assert_eq!(updated.language().as_str(), "hi");
        assert!(!updated.sms_notifications());
        assert!(!updated.email_notifications());
        assert!(updated.push_notifications());

        let stored: serde_json::Value = store.get_json(SETTINGS_KEY).unwrap();
        assert_eq!(
            stored,
            serde_json::json!({
                "language": "hi",
                "emailNotifications": false,
                "smsNotifications": false
            })
        );
    }

    #[test]
    fn test_missing_or_corrupt_blob_defaults_to_light() {
        let store = MemoryStore::new();
        let settings = SettingsStore::new(store.clone());
        assert_eq!(settings.theme(), Theme::Light);

        store.set(SETTINGS_KEY, "not json").unwrap();
        assert_eq!(settings.theme(), Theme::Light);

        store.set(SETTINGS_KEY, r#"{"theme":"sepia"}"#).unwrap();
        assert_eq!(settings.load(), Settings::default());
    }

    #[test]
    fn test_invalid_value_only_unsets_its_own_key() {
        let store = MemoryStore::new();
        store
            .set(SETTINGS_KEY, r#"{"language":"hi","smsNotifications":false,"theme":"sepia"}"#)
            .unwrap();
        let settings = SettingsStore::new(store.clone());

        let loaded = settings.load();
        assert_eq!(loaded.theme, None);
        assert_eq!(loaded.language().as_str(), "hi");
        assert!(!loaded.sms_notifications());

        let updated = settings
            .update(&SettingUpdate::EmailNotifications(false))
            .unwrap();
        assert_eq!(updated.language().as_str(), "hi");
        assert!(!updated.sms_notifications());
        assert!(!updated.email_notifications());

        let stored: serde_json::Value = store.get_json(SETTINGS_KEY).unwrap();
        assert_eq!(
            stored,
            serde_json::json!({
                "language": "hi",
                "smsNotifications": false,
                "theme": "sepia",
                "emailNotifications": false
            })
        );
    }

    #[test]
    fn test_update_replaces_an_invalid_value() {
        let store = MemoryStore::new();
        store.set(SETTINGS_KEY, r#"{"theme":"sepia","pushNotifications":"yes"}"#).unwrap();
        let settings = SettingsStore::new(store.clone());

        let updated = settings.update(&SettingUpdate::Theme(Theme::Dark)).unwrap();
        assert_eq!(updated.theme(), Theme::Dark);
        assert!(updated.push_notifications());
        assert_eq!(store.get_json::<serde_json::Value>(SETTINGS_KEY).unwrap()["theme"], "dark");
    }

    #[test]
    fn test_parse_rejects_unknown_key_and_bad_values() {
        assert!(matches!(
            SettingUpdate::parse("fontSize", "14"),
            Err(StoreError::UnknownSetting(k)) if k == "fontSize"
        ));
        assert!(matches!(
            SettingUpdate::parse("theme", "sepia"),
            Err(StoreError::InvalidSetting { .. })
        ));
        assert!(matches!(
            SettingUpdate::parse("pushNotifications", "yes"),
            Err(StoreError::InvalidSetting { .. })
        ));
        assert!(SettingUpdate::parse("language", "english").is_err());
        assert_eq!(
            SettingUpdate::parse("language", "pt-BR").unwrap().key(),
            "language"
        );
    }

    #[test]
    fn test_theme_resolution() {
        assert_eq!(Theme::Light.resolve(true), ResolvedTheme::Light);
        assert_eq!(Theme::Dark.resolve(false), ResolvedTheme::Dark);
        assert_eq!(Theme::Auto.resolve(true), ResolvedTheme::Dark);
        assert_eq!(Theme::Auto.resolve(false), ResolvedTheme::Light);
        assert_eq!(ResolvedTheme::Dark.class(), "theme-dark");
    }

    #[test]
    fn test_export_and_clear_history() {
        let store = MemoryStore::new();
        store.set(SEARCH_HISTORY_KEY, r#"["Rajkot"]"#).unwrap();
        store.set(SETTINGS_KEY, r#"{"theme":"auto"}"#).unwrap();
        let settings = SettingsStore::new(store.clone());

        let export: serde_json::Value =
            serde_json::from_str(&settings.export_user_data().unwrap()).unwrap();
        assert_eq!(export["settings"]["theme"], "auto");
        assert_eq!(export["searchHistory"][0], "Rajkot");
        assert_eq!(export["savedProperties"], serde_json::json!([]));
        assert_eq!(export["profile"], serde_json::json!({}));

        settings.clear_search_history();
        assert!(store.get(SEARCH_HISTORY_KEY).is_none());
        assert!(store.get(SETTINGS_KEY).is_some());

        settings.wipe_all();
        assert!(store.is_empty());
    }
}
