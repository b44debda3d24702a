use dioxus::prelude::*;
use store::{Settings, Theme};

use crate::browser::{confirm, download, navigate, prompt, sleep_ms};
use crate::config::app_config;
use crate::icons::{AppIcon, IconKind};
use crate::notify::{use_notifier, NotificationHost};
use crate::platform::make_settings;
use crate::settings::{
    delete_decision, update_setting, DeleteDecision, DELETE_CONFIRMATION, EXPORT_FILENAME,
    MSG_DELETE_MISMATCH, MSG_DELETE_STARTED, MSG_DOWNLOAD_STARTED, MSG_HISTORY_CLEARED,
    MSG_SETTING_UPDATED,
};

const VIEWS_CSS: Asset = asset!("/src/views/views.css");

const LANGUAGES: [(&str, &str); 3] = [("en", "English"), ("hi", "हिन्दी"), ("gu", "ગુજરાતી")];

const CONFIRM_CLEAR_HISTORY: &str =
    "Are you sure you want to clear your search history? This action cannot be undone.";
const CONFIRM_DELETE_ACCOUNT: &str =
    "This will permanently delete your account and all data. Are you absolutely sure?";

/// Local preferences and account data controls.
#[component]
pub fn SettingsView() -> Element {
    let dismiss = app_config().notifications.settings_dismiss_after_ms;
    rsx! {
        NotificationHost { dismiss_after_ms: dismiss, SettingsPage {} }
    }
}

#[component]
fn SettingsPage() -> Element {
    let mut settings = use_signal(|| make_settings().load());
    let notifier = use_notifier();

    // Every control funnels through here: persist, apply, report.
    let mut change = move |key: &'static str, value: String| {
        match update_setting(&make_settings(), key, &value) {
            Ok(saved) => {
                settings.set(saved);
                notifier.success(MSG_SETTING_UPDATED);
            }
            Err(e) => {
                tracing::error!(error = %e, key, %value, "Setting update failed");
                notifier.error(e.to_string());
            }
        }
    };

    let clear_history = move |_| {
        if confirm(CONFIRM_CLEAR_HISTORY) {
            make_settings().clear_search_history();
            notifier.success(MSG_HISTORY_CLEARED);
        }
    };

    let download_data = move |_| match make_settings().export_user_data() {
        Ok(json) => {
            if download(EXPORT_FILENAME, "application/json", &json) {
                notifier.success(MSG_DOWNLOAD_STARTED);
            }
        }
        Err(e) => {
            tracing::error!(error = %e, "User data export failed");
            notifier.error(e.to_string());
        }
    };

    let delete_account = move |_| {
        let question = format!("Type \"{DELETE_CONFIRMATION}\" to confirm account deletion:");
        let answer = prompt(&question);
        match delete_decision(answer.as_deref()) {
            DeleteDecision::Cancelled => {}
            DeleteDecision::Mismatch => notifier.error(MSG_DELETE_MISMATCH),
            DeleteDecision::Confirmed => {
                if !confirm(CONFIRM_DELETE_ACCOUNT) {
                    return;
                }
                make_settings().wipe_all();
                tracing::warn!("Local account data wiped");
                notifier.warning(MSG_DELETE_STARTED);
                spawn(async move {
                    sleep_ms(app_config().delays.account_deleted_redirect_ms).await;
                    navigate("/");
                });
            }
        }
    };

    let current: Settings = settings();
    let language = current.language().to_string();

    rsx! {
        document::Link { rel: "stylesheet", href: VIEWS_CSS }
        div {
            class: "settings-page",

            header {
                class: "settings-header",
                a { class: "back-link", href: "/dashboard",
                    AppIcon { kind: IconKind::House }
                    span { "Dashboard" }
                }
                h1 { "Settings" }
            }

            section {
                class: "settings-section",
                h2 { "Appearance" }
                ThemeSelector {
                    current: current.theme(),
                    on_select: move |theme: Theme| change("theme", theme.as_str().to_string()),
                }
                div {
                    class: "setting-row",
                    label { r#for: "language", "Language" }
                    select {
                        id: "language",
                        value: "{language}",
                        onchange: move |e: FormEvent| change("language", e.value()),
                        for (tag, name) in LANGUAGES {
                            option { key: "{tag}", value: tag, "{name}" }
                        }
                    }
                }
            }

            section {
                class: "settings-section",
                h2 { "Notifications" }
                ToggleRow {
                    id: "emailNotifications",
                    label: "Email notifications",
                    checked: current.email_notifications(),
                    on_change: move |on: bool| change("emailNotifications", on.to_string()),
                }
                ToggleRow {
                    id: "smsNotifications",
                    label: "SMS notifications",
                    checked: current.sms_notifications(),
                    on_change: move |on: bool| change("smsNotifications", on.to_string()),
                }
                ToggleRow {
                    id: "pushNotifications",
                    label: "Push notifications",
                    checked: current.push_notifications(),
                    on_change: move |on: bool| change("pushNotifications", on.to_string()),
                }
            }

            section {
                class: "settings-section",
                h2 { "Privacy & Data" }
                div {
                    class: "setting-row",
                    div {
                        h3 { "Search history" }
                        p {
                            class: "muted",
                            "Remove the locations you searched for on this device."
                        }
                    }
                    button { class: "btn btn-outline", onclick: clear_history, "Clear History" }
                }
                div {
                    class: "setting-row",
                    div {
                        h3 { "Your data" }
                        p {
                            class: "muted",
                            "Download your settings, history and saved properties as JSON."
                        }
                    }
                    button { class: "btn btn-outline", onclick: download_data,
                        AppIcon { kind: IconKind::FileLines }
                        span { "Download Data" }
                    }
                }
            }

            section {
                class: "settings-section danger-zone",
                h2 { "Danger Zone" }
                div {
                    class: "setting-row",
                    div {
                        h3 { "Delete account" }
                        p { class: "muted", "Permanently remove your account and all local data." }
                    }
                    button { class: "btn btn-danger", onclick: delete_account,
                        AppIcon { kind: IconKind::TriangleExclamation }
                        span { "Delete Account" }
                    }
                }
            }
        }
    }
}

#[component]
fn ThemeSelector(current: Theme, on_select: EventHandler<Theme>) -> Element {
    let card_class = |theme: Theme| {
        if theme == current {
            "theme-card theme-card-active"
        } else {
            "theme-card"
        }
    };

    rsx! {
        div {
            class: "theme-options",
            label {
                class: card_class(Theme::Light),
                onclick: move |_| on_select.call(Theme::Light),
                AppIcon { kind: IconKind::Sun, size: 14 }
                span { "Light" }
            }
            label {
                class: card_class(Theme::Dark),
                onclick: move |_| on_select.call(Theme::Dark),
                AppIcon { kind: IconKind::Moon, size: 14 }
                span { "Dark" }
            }
            label {
                class: card_class(Theme::Auto),
                onclick: move |_| on_select.call(Theme::Auto),
                AppIcon { kind: IconKind::CircleHalfStroke, size: 14 }
                span { "Auto" }
            }
        }
        p {
            class: "muted",
            "Auto follows your system preference when the page loads."
        }
    }
}

#[component]
fn ToggleRow(
    id: &'static str,
    label: &'static str,
    checked: bool,
    on_change: EventHandler<bool>,
) -> Element {
    rsx! {
        div {
            class: "setting-row",
            label { r#for: id, "{label}" }
            input {
                id: id,
                class: "toggle",
                r#type: "checkbox",
                checked: checked,
                onchange: move |e: FormEvent| on_change.call(e.checked()),
            }
        }
    }
}
