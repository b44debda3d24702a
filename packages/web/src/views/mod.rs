//! Route targets. Each wraps the shared page from `ui`.

use dioxus::prelude::*;

#[component]
pub fn Home() -> Element {
    rsx! { ui::HomeView {} }
}

#[component]
pub fn Login() -> Element {
    rsx! { ui::AuthView {} }
}

#[component]
pub fn Dashboard() -> Element {
    rsx! { ui::DashboardView {} }
}

#[component]
pub fn Search() -> Element {
    rsx! { ui::SearchView {} }
}

#[component]
pub fn Settings() -> Element {
    rsx! { ui::SettingsView {} }
}
