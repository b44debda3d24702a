//! Transient notifications.
//!
//! Each page mounts a [`NotificationHost`], which owns the page's list and
//! hands out a [`Notifier`] through context. Every `notify` call appends one
//! entry and schedules the removal of that entry alone, so notifications stack
//! and expire independently.

use dioxus::prelude::*;

use crate::browser::sleep_ms;
use crate::config::app_config;
use crate::icons::{AppIcon, IconKind};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Severity {
    #[default]
    Info,
    Success,
    Warning,
    Error,
}

impl Severity {
    pub fn class(&self) -> &'static str {
        match self {
            Severity::Info => "info",
            Severity::Success => "success",
            Severity::Warning => "warning",
            Severity::Error => "error",
        }
    }

    fn icon(&self) -> IconKind {
        match self {
            Severity::Info => IconKind::CircleInfo,
            Severity::Success => IconKind::CircleCheck,
            Severity::Warning => IconKind::TriangleExclamation,
            Severity::Error => IconKind::CircleExclamation,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Notification {
    pub id: u64,
    pub message: String,
    pub severity: Severity,
}

/// The notifications currently on screen, oldest first.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Notifications {
    next_id: u64,
    entries: Vec<Notification>,
}

impl Notifications {
    /// Append an entry and return its id. Ids are never reused.
    pub fn push(&mut self, message: impl Into<String>, severity: Severity) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.entries.push(Notification {
            id,
            message: message.into(),
            severity,
        });
        id
    }

    /// Remove the entry with `id`. `false` when it is already gone.
    pub fn dismiss(&mut self, id: u64) -> bool {
        let before = self.entries.len();
        self.entries.retain(|n| n.id != id);
        self.entries.len() != before
    }

    pub fn entries(&self) -> &[Notification] {
        &self.entries
    }
}

/// Handle for raising notifications on the current page.
#[derive(Clone, Copy)]
pub struct Notifier {
    list: Signal<Notifications>,
    dismiss_after_ms: u32,
}

impl Notifier {
    pub fn notify(&self, message: impl Into<String>, severity: Severity) {
        let mut list = self.list;
        let message = message.into();
        tracing::debug!(severity = severity.class(), %message, "notify");
        let id = list.write().push(message, severity);
        let delay = self.dismiss_after_ms;
        spawn(async move {
            sleep_ms(delay).await;
            list.write().dismiss(id);
        });
    }

    pub fn info(&self, message: impl Into<String>) {
        self.notify(message, Severity::Info);
    }

    pub fn success(&self, message: impl Into<String>) {
        self.notify(message, Severity::Success);
    }

    pub fn warning(&self, message: impl Into<String>) {
        self.notify(message, Severity::Warning);
    }

    pub fn error(&self, message: impl Into<String>) {
        self.notify(message, Severity::Error);
    }
}

/// The [`Notifier`] of the enclosing [`NotificationHost`].
pub fn use_notifier() -> Notifier {
    use_context::<Notifier>()
}

/// Owns a page's notification list and renders it above the page.
#[component]
pub fn NotificationHost(
    /// Lifetime of each entry; the configured default when unset.
    #[props(default)]
    dismiss_after_ms: Option<u32>,
    children: Element,
) -> Element {
    let list = use_signal(Notifications::default);
    let delay = dismiss_after_ms.unwrap_or(app_config().notifications.dismiss_after_ms);
    use_context_provider(|| Notifier {
        list,
        dismiss_after_ms: delay,
    });

    let entries = list.read().entries().to_vec();

    rsx! {
        {children}
        div {
            class: "notification-stack",
            for entry in entries {
                div {
                    key: "{entry.id}",
                    class: "notification {entry.severity.class()}",
                    AppIcon { kind: entry.severity.icon() }
                    span { "{entry.message}" }
                }
            }
        }
    }
}
