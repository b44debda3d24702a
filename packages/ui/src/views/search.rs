use dioxus::prelude::*;
use api::SearchQuery;
use store::FilterSet;

use crate::browser::{navigate, query_param};
use crate::config::app_config;
use crate::icons::{AppIcon, IconKind};
use crate::notify::{use_notifier, NotificationHost, Notifier};
use crate::platform::{make_client, make_sessions};
use crate::search::{
    found_message, load_unfiltered, pagination_view, property_card, FilterForm, PaginationView,
    PropertyCard, SearchState, SortBy, AMENITIES, GENDER_PREFERENCES, MSG_SAVED, MSG_SEARCH_FAILED,
    MSG_UNSAVED, PROPERTY_TYPES,
};

const VIEWS_CSS: Asset = asset!("/src/views/views.css");

/// Listing search with filters, sorting and pagination.
#[component]
pub fn SearchView() -> Element {
    rsx! {
        NotificationHost { SearchPage {} }
    }
}

/// Run one search. Dropped when another load is still in flight.
async fn run_search(
    mut state: Signal<SearchState>,
    location: String,
    filters: FilterSet,
    page: u32,
    notifier: Notifier,
) {
    if !state.write().begin() {
        tracing::debug!(page, "Search already running, request dropped");
        return;
    }
    let query = SearchQuery {
        location: location.trim().to_string(),
        filters,
        page,
        per_page: app_config().api.page_size,
    };

    match make_client().search_properties(&query).await {
        Ok(result) => {
            let count = result.properties.len();
            {
                let mut s = state.write();
                s.query = query.location.clone();
                s.current_page = page;
                s.finish(result);
            }
            if !query.location.is_empty() {
                notifier.success(found_message(count));
            }
        }
        Err(e) => {
            tracing::error!(error = %e, page, "Search failed");
            state.write().fail();
            notifier.error(MSG_SEARCH_FAILED);
        }
    }
}

/// First page with no filters. Failures leave the empty state without a toast.
async fn reload_unfiltered(mut state: Signal<SearchState>) {
    if !state.write().begin() {
        return;
    }
    let page = load_unfiltered(&make_client()).await;
    state.write().finish_unfiltered(page);
}

#[component]
fn SearchPage() -> Element {
    let state = use_signal(SearchState::default);
    let mut location = use_signal(String::new);
    let mut form = use_signal(FilterForm::default);
    let mut show_filters = use_signal(|| false);
    let notifier = use_notifier();

    use_effect(move || {
        if make_sessions().token().is_none() {
            navigate("/login");
            return;
        }
        match query_param("q") {
            Some(q) => {
                location.set(q.clone());
                let filters = form.peek().to_filters();
                spawn(run_search(state, q, filters, 1, notifier));
            }
            None => {
                spawn(reload_unfiltered(state));
            }
        }
    });

    let search_first_page = move || {
        let text = location.peek().clone();
        let filters = form.peek().to_filters();
        spawn(run_search(state, text, filters, 1, notifier));
    };

    let onsubmit = move |e: FormEvent| {
        e.prevent_default();
        search_first_page();
    };

    let go_to_page = move |n: u32| {
        if !state.peek().can_go_to(n) {
            return;
        }
        let text = state.peek().query.clone();
        let filters = form.peek().to_filters();
        spawn(run_search(state, text, filters, n, notifier));
    };

    let on_toggle_save = move |id: String| {
        let mut state = state;
        let saved = state.write().toggle_save(&id);
        notifier.success(if saved { MSG_SAVED } else { MSG_UNSAVED });
    };

    let snapshot = state.read().clone();
    let cards: Vec<(PropertyCard, bool)> = snapshot
        .visible()
        .iter()
        .map(|p| (property_card(p), snapshot.saved.contains(&p.id)))
        .collect();
    let pager = pagination_view(snapshot.pagination);
    let title = snapshot.title();
    let current_sort = snapshot.sort;
    let filters_class = if show_filters() { "filters-panel open" } else { "filters-panel" };

    rsx! {
        document::Link { rel: "stylesheet", href: VIEWS_CSS }
        div {
            class: "search-page",

            header {
                class: "search-header",
                a { class: "brand", href: "/", "EasyPG" }
                form {
                    class: "search-bar",
                    onsubmit: onsubmit,
                    AppIcon { kind: IconKind::LocationDot }
                    input {
                        r#type: "text",
                        placeholder: "Enter city or locality",
                        value: "{location}",
                        oninput: move |e| location.set(e.value()),
                    }
                    button {
                        r#type: "submit",
                        class: "btn btn-primary",
                        disabled: snapshot.busy,
                        AppIcon { kind: IconKind::MagnifyingGlass }
                        span { "Search" }
                    }
                }
                button {
                    class: "btn btn-outline",
                    onclick: move |_| show_filters.toggle(),
                    "Filters"
                }
            }

            aside {
                class: filters_class,
                div {
                    class: "filter-group",
                    label { "Property Type" }
                    select {
                        value: "{form.read().property_type}",
                        onchange: move |e| form.write().property_type = e.value(),
                        option { value: "", "Any" }
                        for (value, label) in PROPERTY_TYPES {
                            option { key: "{value}", value: value, "{label}" }
                        }
                    }
                }
                div {
                    class: "filter-group",
                    label { "Gender Preference" }
                    select {
                        value: "{form.read().gender_preference}",
                        onchange: move |e| form.write().gender_preference = e.value(),
                        option { value: "", "Any" }
                        for (value, label) in GENDER_PREFERENCES {
                            option { key: "{value}", value: value, "{label}" }
                        }
                    }
                }
                div {
                    class: "filter-group",
                    label { "Rent per month" }
                    div {
                        class: "rent-range",
                        input {
                            r#type: "number",
                            placeholder: "Min",
                            value: "{form.read().min_rent}",
                            oninput: move |e| form.write().min_rent = e.value(),
                        }
                        input {
                            r#type: "number",
                            placeholder: "Max",
                            value: "{form.read().max_rent}",
                            oninput: move |e| form.write().max_rent = e.value(),
                        }
                    }
                }
                div {
                    class: "filter-group",
                    label { "Amenities" }
                    for (value, label) in AMENITIES {
                        label {
                            key: "{value}",
                            class: "checkbox",
                            input {
                                r#type: "checkbox",
                                checked: form.read().amenities.contains(value),
                                onchange: move |_| form.write().toggle_amenity(value),
                            }
                            span { "{label}" }
                        }
                    }
                }
                div {
                    class: "filter-actions",
                    button {
                        class: "btn btn-primary",
                        onclick: move |_| {
                            show_filters.set(false);
                            search_first_page();
                        },
                        "Apply Filters"
                    }
                    button {
                        class: "btn btn-outline",
                        onclick: move |_| {
                            form.set(FilterForm::default());
                            spawn(reload_unfiltered(state));
                        },
                        "Clear All"
                    }
                }
            }

            main {
                class: "results",
                div {
                    class: "results-header",
                    h2 { "{title}" }
                    select {
                        class: "sort-select",
                        value: current_sort.as_str(),
                        onchange: move |e| {
                            let mut state = state;
                            state.write().sort = SortBy::parse(&e.value());
                        },
                        for sort in SortBy::ALL {
                            option {
                                key: "{sort.as_str()}",
                                value: sort.as_str(),
                                "{sort.label()}"
                            }
                        }
                    }
                }

                if snapshot.is_empty() {
                    div {
                        class: "no-results",
                        AppIcon { kind: IconKind::MagnifyingGlass, size: 48 }
                        h3 { "No properties found" }
                        p { "Try adjusting your search or filters." }
                    }
                } else {
                    div {
                        class: "properties-grid",
                        for (card, saved) in cards {
                            ListingCard {
                                key: "{card.id}",
                                card: card,
                                saved: saved,
                                on_toggle_save: on_toggle_save,
                            }
                        }
                    }
                }

                if let Some(view) = pager {
                    Pager { view: view, current: snapshot.current_page, on_go: go_to_page }
                }
            }
        }
    }
}

#[component]
fn ListingCard(card: PropertyCard, saved: bool, on_toggle_save: EventHandler<String>) -> Element {
    let heart = if saved { IconKind::Heart } else { IconKind::HeartOutline };
    let save_class = if saved { "save-btn saved" } else { "save-btn" };
    let id = card.id.clone();

    rsx! {
        div {
            class: "property-card",
            div {
                class: "property-image",
                img { src: "{card.image}", alt: "{card.name}" }
                span { class: "property-type", "{card.type_label}" }
                button {
                    class: save_class,
                    onclick: move |_| on_toggle_save.call(id.clone()),
                    AppIcon { kind: heart }
                }
            }
            div {
                class: "property-content",
                h3 { "{card.name}" }
                p {
                    class: "property-location",
                    AppIcon { kind: IconKind::LocationDot }
                    span { "{card.location}" }
                }
                p { class: "property-gender", "{card.gender_label}" }
                div {
                    class: "property-amenities",
                    for (kind, name) in card.amenities.clone() {
                        span {
                            key: "{name}",
                            class: "amenity-tag",
                            AppIcon { kind: kind }
                            "{name}"
                        }
                    }
                    if let Some(more) = card.more_amenities.clone() {
                        span { class: "amenity-tag more", "{more}" }
                    }
                }
                div {
                    class: "property-footer",
                    div {
                        span { class: "property-price", "{card.price}" }
                        span { class: "per-month", "/month" }
                        p { class: "availability", "{card.availability}" }
                    }
                    div {
                        class: "property-actions",
                        a { class: "btn btn-outline", href: "{card.details_href}", "View Details" }
                        a { class: "btn btn-primary", href: "{card.contact_href}", "Contact" }
                    }
                }
            }
        }
    }
}

#[component]
fn Pager(view: PaginationView, current: u32, on_go: EventHandler<u32>) -> Element {
    rsx! {
        nav {
            class: "pagination",
            button {
                class: "page-btn",
                disabled: !view.prev_enabled,
                onclick: move |_| on_go.call(current.saturating_sub(1)),
                "Previous"
            }
            for button in view.buttons.clone() {
                button {
                    key: "{button.number}",
                    class: if button.active { "page-btn active" } else { "page-btn" },
                    onclick: move |_| on_go.call(button.number),
                    "{button.number}"
                }
            }
            button {
                class: "page-btn",
                disabled: !view.next_enabled,
                onclick: move |_| on_go.call(current + 1),
                "Next"
            }
        }
    }
}
