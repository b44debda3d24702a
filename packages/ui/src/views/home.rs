use dioxus::prelude::*;
use store::UserType;

use crate::auth::portal;
use crate::browser::{navigate, path_with_query, sleep_ms};
use crate::config::app_config;
use crate::icons::{AppIcon, IconKind};
use crate::landing::{landing_target, MSG_SEARCHING};
use crate::notify::{use_notifier, NotificationHost};
use crate::platform::make_sessions;

const VIEWS_CSS: Asset = asset!("/src/views/views.css");

/// Public landing page.
#[component]
pub fn HomeView() -> Element {
    rsx! {
        NotificationHost { HomePage {} }
    }
}

#[component]
fn HomePage() -> Element {
    let mut query = use_signal(String::new);
    let mut menu_open = use_signal(|| false);
    let signed_in = use_hook(|| make_sessions().is_authenticated());
    let notifier = use_notifier();

    let onsubmit = move |e: FormEvent| {
        e.prevent_default();
        match landing_target(&query.peek()) {
            Err(message) => notifier.warning(message),
            Ok(target) => {
                notifier.info(MSG_SEARCHING);
                spawn(async move {
                    sleep_ms(app_config().delays.landing_search_ms).await;
                    navigate(&target);
                });
            }
        }
    };

    let input_class = if query.read().trim().is_empty() {
        "hero-input"
    } else {
        "hero-input has-value"
    };
    let menu_class = if menu_open() { "nav-menu open" } else { "nav-menu" };

    rsx! {
        document::Link { rel: "stylesheet", href: VIEWS_CSS }
        nav {
            class: "navbar",
            a { class: "brand", href: "/", "EasyPG" }
            button {
                class: "nav-toggle",
                onclick: move |_| menu_open.toggle(),
                "☰"
            }
            div {
                class: menu_class,
                a {
                    class: "nav-link",
                    href: "#features",
                    onclick: move |_| menu_open.set(false),
                    "Features"
                }
                a {
                    class: "nav-link",
                    href: "/search",
                    onclick: move |_| menu_open.set(false),
                    "Find a PG"
                }
                if signed_in {
                    a { class: "btn btn-primary", href: "/dashboard", "Dashboard" }
                } else {
                    a { class: "btn btn-outline", href: "/login", "Sign In" }
                }
            }
        }

        section {
            class: "hero",
            h1 { "Find your perfect PG" }
            p { "Verified paying-guest accommodation for students and working professionals." }
            form {
                class: "hero-search",
                onsubmit: onsubmit,
                AppIcon { kind: IconKind::LocationDot }
                input {
                    class: input_class,
                    r#type: "text",
                    placeholder: "Search by city or locality",
                    value: "{query}",
                    oninput: move |e| query.set(e.value()),
                }
                button {
                    r#type: "submit",
                    class: "btn btn-primary",
                    AppIcon { kind: IconKind::MagnifyingGlass }
                    span { "Search" }
                }
            }
        }

        section {
            id: "features",
            class: "portals",
            for user_type in [UserType::Student, UserType::Owner] {
                PortalCard { key: "{user_type}", user_type: user_type }
            }
        }
    }
}

#[component]
fn PortalCard(user_type: UserType) -> Element {
    let info = portal(user_type);
    let href = path_with_query("/login", "type", user_type.as_str());

    rsx! {
        a {
            class: "portal-card",
            href: "{href}",
            div {
                class: "portal-icon",
                style: "background: {info.gradient}",
                AppIcon { kind: info.icon, size: 28 }
            }
            h3 { "{info.title}" }
            p { "{info.description}" }
        }
    }
}
