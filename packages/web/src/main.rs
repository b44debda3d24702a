use dioxus::prelude::*;

use views::{Dashboard, Home, Login, Search, Settings};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Home {},
    #[route("/login")]
    Login {},
    #[route("/dashboard")]
    Dashboard {},
    #[route("/search")]
    Search {},
    #[route("/settings")]
    Settings {},
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    // The saved theme goes on <body> before the first page renders.
    use_hook(|| {
        let theme = ui::apply_saved_theme(&ui::make_settings());
        tracing::debug!(class = theme.class(), "Theme applied");
    });

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        Router::<Route> {}
    }
}
