use dioxus::prelude::*;
use store::{RecentItem, UserRecord, UserType};

use crate::browser::{navigate, query_param, sleep_ms};
use crate::config::app_config;
use crate::dashboard::{
    first_name, load_recent, load_stats, profile_name, quick_actions, recent_card, resolve_role,
    role_copy, sign_out, user_initials, verify_session, StatCard, MSG_LOAD_FAILED, MSG_NO_RECENT,
    MSG_SIGNED_OUT,
};
use crate::icons::{AppIcon, IconKind};
use crate::notify::{use_notifier, NotificationHost};
use crate::platform::make_client;

const VIEWS_CSS: Asset = asset!("/src/views/views.css");

/// Role-aware dashboard for students and PG owners.
#[component]
pub fn DashboardView() -> Element {
    rsx! {
        NotificationHost { DashboardPage {} }
    }
}

#[component]
fn DashboardPage() -> Element {
    let mut identity = use_signal(|| Option::<(UserRecord, UserType)>::None);
    let mut stats = use_signal(|| Option::<Vec<StatCard>>::None);
    let mut recent = use_signal(|| Option::<Vec<RecentItem>>::None);
    let mut overlay = use_signal(|| true);
    let notifier = use_notifier();

    // Verify, resolve the role, then load the role's data.
    let _loader = use_resource(move || async move {
        let client = make_client();
        let user = match verify_session(&client).await {
            Ok(user) => user,
            Err(e) => {
                tracing::error!(error = %e, "Dashboard initialization failed");
                overlay.set(false);
                notifier.error(MSG_LOAD_FAILED);
                sleep_ms(app_config().delays.auth_failure_redirect_ms).await;
                navigate("/login");
                return;
            }
        };

        let role = resolve_role(query_param("type").as_deref(), Some(user.user_type));
        tracing::debug!(%role, "Dashboard role resolved");
        identity.set(Some((user, role)));

        stats.set(Some(load_stats(&client, role).await));
        recent.set(Some(load_recent(&client, role).await));
        overlay.set(false);
    });

    let on_sign_out = move |_| {
        spawn(async move {
            sign_out(&make_client()).await;
            notifier.success(MSG_SIGNED_OUT);
            sleep_ms(app_config().delays.sign_out_redirect_ms).await;
            navigate("/");
        });
    };

    let Some((user, role)) = identity() else {
        return rsx! {
            document::Link { rel: "stylesheet", href: VIEWS_CSS }
            if overlay() {
                LoadingOverlay {}
            }
        };
    };

    let copy = role_copy(role);
    let initials = user_initials(&user);
    let name = profile_name(&user).to_string();
    let greeting = first_name(&user).to_string();
    let actions = quick_actions(role);

    rsx! {
        document::Link { rel: "stylesheet", href: VIEWS_CSS }
        if overlay() {
            LoadingOverlay {}
        }
        div {
            class: "dashboard",

            aside {
                class: "dashboard-sidebar",
                div {
                    class: "sidebar-profile",
                    div { class: "avatar", "{initials}" }
                    div {
                        p { class: "profile-name", "{name}" }
                        p { class: "profile-role", "{copy.badge}" }
                    }
                }
                nav {
                    class: "sidebar-nav",
                    a { class: "nav-item active", href: "/dashboard?type={role}",
                        AppIcon { kind: IconKind::House }
                        span { "Dashboard" }
                    }
                    a { class: "nav-item", href: "/search",
                        AppIcon { kind: IconKind::MagnifyingGlass }
                        span { "{copy.search_nav}" }
                    }
                    a { class: "nav-item", href: "#",
                        AppIcon { kind: IconKind::Heart }
                        span { "{copy.saved_nav}" }
                    }
                    a { class: "nav-item", href: "/settings",
                        AppIcon { kind: IconKind::Gear }
                        span { "Settings" }
                    }
                    button {
                        class: "nav-item sign-out",
                        onclick: on_sign_out,
                        AppIcon { kind: IconKind::SignOut }
                        span { "Sign Out" }
                    }
                }
            }

            main {
                class: "dashboard-main",
                header {
                    class: "dashboard-header",
                    span { class: "user-badge {copy.badge_class}", "{copy.badge}" }
                    div { class: "avatar avatar-small", "{initials}" }
                }

                section {
                    class: "welcome",
                    div {
                        h1 { "Welcome back, {greeting}!" }
                        p { "{copy.welcome_description}" }
                    }
                    if copy.show_add_property {
                        a { class: "btn btn-primary", href: "list-property.html",
                            AppIcon { kind: IconKind::Plus }
                            span { "Add Property" }
                        }
                    }
                }

                section {
                    class: "stats-grid",
                    for stat in stats().unwrap_or_default() {
                        div {
                            key: "{stat.label}",
                            class: "stat-card",
                            div {
                                class: "stat-info",
                                h3 { "{stat.label}" }
                                p { "{stat.value}" }
                            }
                            div {
                                class: "stat-icon",
                                style: "background-color: {stat.color}20; color: {stat.color}",
                                AppIcon { kind: stat.icon }
                            }
                        }
                    }
                }

                section {
                    class: "recent",
                    h2 { "{copy.recent_title}" }
                    RecentList { items: recent() }
                }

                section {
                    class: "quick-actions",
                    h2 { "Quick Actions" }
                    div {
                        class: "actions-grid",
                        for action in actions {
                            a {
                                key: "{action.label}",
                                class: "action-btn",
                                href: action.href,
                                div {
                                    class: "action-icon",
                                    style: "background-color: {action.color}",
                                    AppIcon { kind: action.icon }
                                }
                                span { class: "action-text", "{action.label}" }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn RecentList(items: Option<Vec<RecentItem>>) -> Element {
    let Some(items) = items else {
        return rsx! {};
    };
    if items.is_empty() {
        return rsx! {
            p { class: "no-data", "{MSG_NO_RECENT}" }
        };
    }

    rsx! {
        div {
            class: "recent-grid",
            for (i, card) in items.iter().map(recent_card).enumerate() {
                div {
                    key: "{i}",
                    class: "pg-card",
                    img { class: "pg-image", src: "{card.image}", alt: "{card.name}" }
                    div {
                        class: "pg-content",
                        div {
                            class: "pg-header",
                            h3 { class: "pg-name", "{card.name}" }
                            span { class: "pg-status {card.status_class}", "{card.status}" }
                        }
                        div {
                            class: "pg-location",
                            AppIcon { kind: IconKind::LocationDot }
                            span { "{card.location}" }
                        }
                        div {
                            class: "pg-rating",
                            AppIcon { kind: IconKind::Star }
                            span { "{card.rating}" }
                            span { class: "rating-count", "({card.reviews} reviews)" }
                        }
                        div {
                            class: "pg-footer",
                            span { class: "pg-price", "{card.price}" }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn LoadingOverlay() -> Element {
    rsx! {
        div {
            class: "loading-overlay",
            AppIcon { kind: IconKind::Spinner, size: 32, class: "spin" }
        }
    }
}
