//! Search page controller: page state, filter form parsing, client-side
//! sorting, the pagination view and the listing card labels.

use std::collections::BTreeSet;

use api::ApiClient;
use store::{FilterSet, KeyValueStore, Pagination, Property, PropertyPage};

use crate::format::format_inr;
use crate::icons::IconKind;

pub const MSG_SEARCH_FAILED: &str = "Search failed. Please try again.";
pub const MSG_SAVED: &str = "Property saved!";
pub const MSG_UNSAVED: &str = "Property removed from saved";

/// Most page buttons ever drawn.
pub const MAX_PAGE_BUTTONS: u32 = 5;

/// Amenity checkboxes: wire value and label.
pub const AMENITIES: [(&str, &str); 8] = [
    ("wifi", "WiFi"),
    ("parking", "Parking"),
    ("meals", "Meals"),
    ("gym", "Gym"),
    ("security", "Security"),
    ("power_backup", "Power Backup"),
    ("laundry", "Laundry"),
    ("ac", "AC"),
];

pub const PROPERTY_TYPES: [(&str, &str); 5] = [
    ("boys_pg", "Boys PG"),
    ("girls_pg", "Girls PG"),
    ("co_living", "Co-living"),
    ("hostel", "Hostel"),
    ("shared_apartment", "Shared Apartment"),
];

pub const GENDER_PREFERENCES: [(&str, &str); 3] = [
    ("boys_only", "Boys Only"),
    ("girls_only", "Girls Only"),
    ("co_living", "Co-living"),
];

pub fn found_message(count: usize) -> String {
    format!("Found {count} properties")
}

pub fn results_title(count: usize, query: &str) -> String {
    if query.is_empty() {
        format!("{count} properties found")
    } else {
        format!("{count} properties found for \"{query}\"")
    }
}

/// Client-side orderings of the loaded page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortBy {
    #[default]
    Relevance,
    PriceLow,
    PriceHigh,
    Rating,
    Distance,
}

impl SortBy {
    pub const ALL: [SortBy; 5] = [
        SortBy::Relevance,
        SortBy::PriceLow,
        SortBy::PriceHigh,
        SortBy::Rating,
        SortBy::Distance,
    ];

    /// Unknown values sort by relevance.
    pub fn parse(s: &str) -> Self {
        match s {
            "price_low" => SortBy::PriceLow,
            "price_high" => SortBy::PriceHigh,
            "rating" => SortBy::Rating,
            "distance" => SortBy::Distance,
            _ => SortBy::Relevance,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SortBy::Relevance => "relevance",
            SortBy::PriceLow => "price_low",
            SortBy::PriceHigh => "price_high",
            SortBy::Rating => "rating",
            SortBy::Distance => "distance",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SortBy::Relevance => "Relevance",
            SortBy::PriceLow => "Price: Low to High",
            SortBy::PriceHigh => "Price: High to Low",
            SortBy::Rating => "Rating",
            SortBy::Distance => "Distance",
        }
    }
}

/// A reordered copy of `properties`. Both price orders are stable. Listings
/// carry no rating or distance, so those criteria keep the server order.
pub fn sort_properties(properties: &[Property], by: SortBy) -> Vec<Property> {
    let mut sorted = properties.to_vec();
    match by {
        SortBy::PriceLow => sorted.sort_by(|a, b| a.rent_per_month.total_cmp(&b.rent_per_month)),
        SortBy::PriceHigh => sorted.sort_by(|a, b| b.rent_per_month.total_cmp(&a.rent_per_month)),
        SortBy::Rating | SortBy::Distance | SortBy::Relevance => {}
    }
    sorted
}

/// Filter inputs as the form holds them.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FilterForm {
    pub property_type: String,
    pub gender_preference: String,
    pub min_rent: String,
    pub max_rent: String,
    pub amenities: BTreeSet<String>,
}

impl FilterForm {
    /// Blank inputs are unset; rents that are not whole numbers are ignored.
    pub fn to_filters(&self) -> FilterSet {
        let text = |s: &str| Some(s.trim().to_string()).filter(|s| !s.is_empty());
        let rent = |s: &str| s.trim().parse::<u32>().ok();
        FilterSet {
            property_type: text(&self.property_type),
            gender_preference: text(&self.gender_preference),
            min_rent: rent(&self.min_rent),
            max_rent: rent(&self.max_rent),
            amenities: self.amenities.clone(),
        }
    }

    pub fn toggle_amenity(&mut self, amenity: &str) {
        if !self.amenities.remove(amenity) {
            self.amenities.insert(amenity.to_string());
        }
    }
}

/// Everything the search page tracks between renders.
#[derive(Clone, Debug, PartialEq)]
pub struct SearchState {
    pub current_page: u32,
    pub total_pages: u32,
    pub properties: Vec<Property>,
    pub pagination: Option<Pagination>,
    pub sort: SortBy,
    pub busy: bool,
    /// Location text of the last search; empty for unfiltered loads.
    pub query: String,
    /// The last load failed; show the empty state.
    pub failed: bool,
    /// Ids toggled to "saved" on this page. Never persisted.
    pub saved: BTreeSet<String>,
}

impl Default for SearchState {
    fn default() -> Self {
        Self {
            current_page: 1,
            total_pages: 1,
            properties: Vec::new(),
            pagination: None,
            sort: SortBy::default(),
            busy: false,
            query: String::new(),
            failed: false,
            saved: BTreeSet::new(),
        }
    }
}

impl SearchState {
    /// Claim the busy flag. `false` means a load is already running and the
    /// caller must drop this one.
    pub fn begin(&mut self) -> bool {
        if self.busy {
            return false;
        }
        self.busy = true;
        true
    }

    /// Install a loaded page and release the busy flag. A response without a
    /// pagination block is a single page.
    pub fn finish(&mut self, page: PropertyPage) {
        self.properties = page.properties;
        self.sort = SortBy::Relevance;
        self.failed = false;
        match page.pagination {
            Some(pagination) => self.apply_pagination(pagination),
            None => {
                self.pagination = None;
                self.current_page = 1;
                self.total_pages = 1;
            }
        }
        self.busy = false;
    }

    /// Record a failed load and release the busy flag.
    pub fn fail(&mut self) {
        self.properties.clear();
        self.pagination = None;
        self.failed = true;
        self.busy = false;
    }

    /// Install the result of an unfiltered load. A failure shows the empty
    /// state and nothing else.
    pub fn finish_unfiltered(&mut self, page: Option<PropertyPage>) {
        match page {
            Some(page) => {
                self.query.clear();
                self.finish(page);
            }
            None => self.fail(),
        }
    }

    pub fn apply_pagination(&mut self, pagination: Pagination) {
        self.current_page = pagination.page.max(1);
        self.total_pages = pagination.pages;
        self.pagination = Some(pagination);
    }

    /// Whether moving to page `n` should trigger a search.
    pub fn can_go_to(&self, n: u32) -> bool {
        n != self.current_page && n >= 1 && n <= self.total_pages
    }

    /// Flip the saved mark on a card. Returns the new state.
    pub fn toggle_save(&mut self, id: &str) -> bool {
        if self.saved.remove(id) {
            false
        } else {
            self.saved.insert(id.to_string());
            true
        }
    }

    /// The loaded page in the selected order.
    pub fn visible(&self) -> Vec<Property> {
        sort_properties(&self.properties, self.sort)
    }

    pub fn is_empty(&self) -> bool {
        self.failed || self.properties.is_empty()
    }

    pub fn title(&self) -> String {
        if self.failed {
            return results_title(0, "");
        }
        results_title(self.properties.len(), &self.query)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageButton {
    pub number: u32,
    pub active: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PaginationView {
    pub buttons: Vec<PageButton>,
    pub prev_enabled: bool,
    pub next_enabled: bool,
}

/// `None` (hidden) for a missing block or a single page.
pub fn pagination_view(pagination: Option<Pagination>) -> Option<PaginationView> {
    let p = pagination.filter(|p| p.pages > 1)?;
    let buttons = (1..=p.pages.min(MAX_PAGE_BUTTONS))
        .map(|number| PageButton {
            number,
            active: number == p.page,
        })
        .collect();
    Some(PaginationView {
        buttons,
        prev_enabled: p.has_prev,
        next_enabled: p.has_next,
    })
}

pub fn property_type_label(value: &str) -> String {
    PROPERTY_TYPES
        .iter()
        .find(|(v, _)| *v == value)
        .map_or_else(|| value.to_string(), |(_, label)| label.to_string())
}

pub fn gender_label(value: &str) -> String {
    GENDER_PREFERENCES
        .iter()
        .find(|(v, _)| *v == value)
        .map_or_else(|| value.to_string(), |(_, label)| label.to_string())
}

/// Icon for an amenity name, matched case-insensitively with spaces read as
/// underscores. Unknown amenities get a check mark.
pub fn amenity_icon(amenity: &str) -> IconKind {
    match amenity.to_lowercase().replace(' ', "_").as_str() {
        "wifi" => IconKind::Wifi,
        "parking" => IconKind::Car,
        "meals" => IconKind::Utensils,
        "gym" => IconKind::Dumbbell,
        "security" => IconKind::ShieldHalved,
        "power_backup" => IconKind::Bolt,
        "laundry" => IconKind::Shirt,
        "ac" => IconKind::Snowflake,
        _ => IconKind::Check,
    }
}

/// Display values for one listing card.
#[derive(Clone, Debug, PartialEq)]
pub struct PropertyCard {
    pub id: String,
    pub name: String,
    pub image: String,
    pub type_label: String,
    pub location: String,
    pub gender_label: String,
    /// The first three amenities with their icons.
    pub amenities: Vec<(IconKind, String)>,
    /// `+N more` when there are more than three amenities.
    pub more_amenities: Option<String>,
    pub price: String,
    pub availability: String,
    pub details_href: String,
    pub contact_href: String,
}

pub fn property_card(p: &Property) -> PropertyCard {
    let image = match p.main_image() {
        Some(url) => url.to_string(),
        None => {
            let text: String =
                url::form_urlencoded::byte_serialize(p.property_name.as_bytes()).collect();
            format!("/placeholder.svg?height=220&width=350&text={text}")
        }
    };
    let amenities = p
        .amenities
        .iter()
        .take(3)
        .map(|a| (amenity_icon(a), a.clone()))
        .collect();
    let more_amenities =
        (p.amenities.len() > 3).then(|| format!("+{} more", p.amenities.len() - 3));

    PropertyCard {
        id: p.id.clone(),
        name: p.property_name.clone(),
        image,
        type_label: property_type_label(&p.property_type),
        location: [p.city.as_str(), p.state.as_str()]
            .into_iter()
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(", "),
        gender_label: gender_label(&p.gender_preference),
        amenities,
        more_amenities,
        price: format_inr(p.rent_per_month),
        availability: format!("{} rooms available", p.available_rooms),
        details_href: format!("property.html?id={}", p.id),
        contact_href: format!("messages.html?property={}", p.id),
    }
}

/// The listing with no filters or paging, as shown on first visit and after
/// "Clear All". `None` when the request fails.
pub async fn load_unfiltered<S: KeyValueStore>(client: &ApiClient<S>) -> Option<PropertyPage> {
    match client.list_properties().await {
        Ok(page) => Some(page),
        Err(e) => {
            tracing::error!(error = %e, "Loading properties failed");
            None
        }
    }
}
