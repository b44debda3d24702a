//! Dashboard controller: session verification, role resolution, the
//! role-specific copy and tables, and the data loads with their fallbacks.

use api::{ApiClient, ApiError};
use store::{DashboardStats, KeyValueStore, RecentItem, UserRecord, UserType};
use thiserror::Error;

use crate::format::format_inr;
use crate::icons::IconKind;

pub const MSG_LOAD_FAILED: &str = "Failed to load dashboard";
pub const MSG_SIGNED_OUT: &str = "Signed out successfully";
pub const MSG_NO_RECENT: &str = "No recent items found";

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("Not authenticated")]
    NotAuthenticated,
    #[error("Authentication failed: {0}")]
    Rejected(#[from] ApiError),
}

/// Check the stored session with the server.
///
/// Fails without a request when either half of the session is missing. A
/// rejected token clears the session; an accepted one refreshes the cached
/// user when the server sends one back.
pub async fn verify_session<S: KeyValueStore>(
    client: &ApiClient<S>,
) -> Result<UserRecord, SessionError> {
    let cached = client
        .session()
        .session()
        .ok_or(SessionError::NotAuthenticated)?;

    match client.verify().await {
        Ok(response) => match response.user {
            Some(user) => {
                if let Err(e) = client.session().set_user(&user) {
                    tracing::warn!(error = %e, "Could not refresh cached user");
                }
                Ok(user)
            }
            None => Ok(cached.user),
        },
        Err(e) => {
            client.session().clear();
            Err(SessionError::Rejected(e))
        }
    }
}

/// The dashboard only has student and owner layouts. The `type` query
/// parameter wins, then the cached role, then student.
pub fn resolve_role(query: Option<&str>, cached: Option<UserType>) -> UserType {
    let dashboard_role = |r: UserType| matches!(r, UserType::Student | UserType::Owner);
    query
        .and_then(UserType::parse)
        .filter(|r| dashboard_role(*r))
        .or(cached.filter(|r| dashboard_role(*r)))
        .unwrap_or(UserType::Student)
}

/// Role-dependent text and visibility.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RoleCopy {
    pub badge: &'static str,
    pub badge_class: &'static str,
    pub welcome_description: &'static str,
    pub search_nav: &'static str,
    pub saved_nav: &'static str,
    pub recent_title: &'static str,
    pub show_add_property: bool,
}

pub fn role_copy(role: UserType) -> RoleCopy {
    match role {
        UserType::Owner | UserType::Admin => RoleCopy {
            badge: "PG Owner",
            badge_class: "badge-green",
            welcome_description: "Here's your property management overview",
            search_nav: "My Properties",
            saved_nav: "Bookings",
            recent_title: "Recent Property Activity",
            show_add_property: true,
        },
        UserType::Student => RoleCopy {
            badge: "Student",
            badge_class: "badge-blue",
            welcome_description: "Here's what's happening with your PG search",
            search_nav: "Search PGs",
            saved_nav: "Saved PGs",
            recent_title: "Recently Viewed PGs",
            show_add_property: false,
        },
    }
}

/// Up to two uppercase initials, `U` for an empty name.
pub fn initials(name: &str) -> String {
    let letters: String = name
        .split(' ')
        .filter_map(|word| word.chars().next())
        .collect::<String>()
        .to_uppercase();
    if letters.is_empty() {
        return "U".to_string();
    }
    letters.chars().take(2).collect()
}

/// Name shown in the profile block.
pub fn profile_name(user: &UserRecord) -> &str {
    match user.full_name.as_deref() {
        Some(name) if !name.is_empty() => name,
        _ => "User",
    }
}

pub fn first_name(user: &UserRecord) -> &str {
    profile_name(user).split(' ').next().unwrap_or("User")
}

pub fn user_initials(user: &UserRecord) -> String {
    match user.full_name.as_deref() {
        Some(name) if !name.is_empty() => initials(name),
        _ => initials(&user.email),
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct StatCard {
    pub label: &'static str,
    pub value: String,
    pub icon: IconKind,
    pub color: &'static str,
}

fn card(label: &'static str, value: String, icon: IconKind, color: &'static str) -> StatCard {
    StatCard {
        label,
        value,
        icon,
        color,
    }
}

/// Stat cards filled from the server's counters.
pub fn stat_cards(role: UserType, stats: &DashboardStats) -> Vec<StatCard> {
    let n = |key: &str| stats.count(key).to_string();
    match role {
        UserType::Student => vec![
            card("Saved PGs", n("saved_pgs"), IconKind::Heart, "#ef4444"),
            card("Applications", n("applications"), IconKind::FileLines, "#3b82f6"),
            card("Visits Scheduled", n("visits"), IconKind::Calendar, "#10b981"),
            card("Messages", n("messages"), IconKind::Comments, "#8b5cf6"),
        ],
        UserType::Owner | UserType::Admin => vec![
            card("Total Properties", n("total_properties"), IconKind::Building, "#3b82f6"),
            card("Occupied Rooms", n("occupied_rooms"), IconKind::Users, "#10b981"),
            card(
                "Monthly Revenue",
                format_inr(stats.amount("monthly_revenue")),
                IconKind::ChartLine,
                "#8b5cf6",
            ),
            card("New Inquiries", n("inquiries"), IconKind::Comments, "#f59e0b"),
        ],
    }
}

/// Fixed cards shown when the stats request fails.
pub fn placeholder_stats(role: UserType) -> Vec<StatCard> {
    let s = |v: &str| v.to_string();
    match role {
        UserType::Student => vec![
            card("Saved PGs", s("12"), IconKind::Heart, "#ef4444"),
            card("Applications", s("5"), IconKind::FileLines, "#3b82f6"),
            card("Visits Scheduled", s("3"), IconKind::Calendar, "#10b981"),
            card("Messages", s("8"), IconKind::Comments, "#8b5cf6"),
        ],
        UserType::Owner | UserType::Admin => vec![
            card("Total Properties", s("4"), IconKind::Building, "#3b82f6"),
            card("Occupied Rooms", s("28"), IconKind::Users, "#10b981"),
            card("Monthly Revenue", s("₹1.2L"), IconKind::ChartLine, "#8b5cf6"),
            card("New Inquiries", s("15"), IconKind::Comments, "#f59e0b"),
        ],
    }
}

/// Fixed recent list shown when the recent-items request fails.
pub fn placeholder_recent() -> Vec<RecentItem> {
    let item = |name: &str, location: &str, price, rating, reviews, status: &str, text: &str| {
        RecentItem {
            id: None,
            name: name.to_string(),
            location: location.to_string(),
            price: Some(price),
            rating: Some(rating),
            reviews: Some(reviews),
            status: status.to_string(),
            image: Some(format!("/placeholder.svg?height=200&width=300&text={text}")),
        }
    };
    vec![
        item(
            "Vedaditya Boys Hostel",
            "Kankot Rd, Near Government Engineering Collage, Rajkot",
            6500.0,
            4.5,
            124,
            "Available",
            "Green+Valley+PG",
        ),
        item(
            "Param Boys Hostel",
            "Kankot Rd, Near Labhubhai Trivedi Engineering Collage, Rajkot",
            8200.0,
            4.3,
            89,
            "Applied",
            "Sunrise+Residency",
        ),
        item(
            "J. K. Boys Hostel",
            "Kankot Rd, Near Government Engineering Collage, Rajkot",
            7800.0,
            4.1,
            156,
            "Saved",
            "Metro+Heights+PG",
        ),
    ]
}

/// Display values for one recent-item card, with the listing defaults filled in.
#[derive(Clone, Debug, PartialEq)]
pub struct RecentCard {
    pub image: String,
    pub name: String,
    pub status: String,
    pub status_class: String,
    pub location: String,
    pub rating: String,
    pub reviews: String,
    pub price: String,
}

pub fn recent_card(item: &RecentItem) -> RecentCard {
    RecentCard {
        image: item
            .image
            .clone()
            .unwrap_or_else(|| "/placeholder.svg?height=200&width=300&text=PG+Image".to_string()),
        name: item.name.clone(),
        status: item.status.clone(),
        status_class: format!("status-{}", item.status.to_lowercase().replace(' ', "-")),
        location: item.location.clone(),
        rating: item.rating.unwrap_or(4.5).to_string(),
        reviews: item.reviews.unwrap_or(124).to_string(),
        price: format!("{}/month", format_inr(item.price.unwrap_or(8500.0))),
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct QuickAction {
    pub icon: IconKind,
    pub label: &'static str,
    pub color: &'static str,
    pub href: &'static str,
}

pub fn quick_actions(role: UserType) -> [QuickAction; 4] {
    let a = |icon, label, color, href| QuickAction {
        icon,
        label,
        color,
        href,
    };
    match role {
        UserType::Student => [
            a(IconKind::MagnifyingGlass, "Search New PGs", "#3b82f6", "/search"),
            a(IconKind::Calendar, "Schedule Visit", "#10b981", "visits.html"),
            a(IconKind::Comments, "Contact Owner", "#8b5cf6", "messages.html"),
            a(IconKind::CreditCard, "Make Payment", "#f59e0b", "payments.html"),
        ],
        UserType::Owner | UserType::Admin => [
            a(IconKind::Plus, "Add Property", "#3b82f6", "list-property.html"),
            a(IconKind::Users, "Manage Tenants", "#10b981", "tenants.html"),
            a(IconKind::Comments, "View Inquiries", "#8b5cf6", "messages.html"),
            a(IconKind::ChartLine, "View Analytics", "#f59e0b", "analytics.html"),
        ],
    }
}

/// Stat cards for `role`, or the placeholders when the request fails.
pub async fn load_stats<S: KeyValueStore>(client: &ApiClient<S>, role: UserType) -> Vec<StatCard> {
    match client.dashboard_stats(role).await {
        Ok(stats) => stat_cards(role, &stats),
        Err(e) => {
            tracing::warn!(error = %e, %role, "Failed to load stats, showing placeholders");
            placeholder_stats(role)
        }
    }
}

/// Recent items for `role`, or the placeholders when the request fails. An
/// empty server list stays empty.
pub async fn load_recent<S: KeyValueStore>(
    client: &ApiClient<S>,
    role: UserType,
) -> Vec<RecentItem> {
    match client.recent_items(role).await {
        Ok(items) => items,
        Err(e) => {
            tracing::warn!(error = %e, %role, "Failed to load recent items, showing placeholders");
            placeholder_recent()
        }
    }
}

/// Tell the server, then forget the session whatever it answered.
pub async fn sign_out<S: KeyValueStore>(client: &ApiClient<S>) {
    if let Err(e) = client.logout().await {
        tracing::warn!(error = %e, "Logout request failed");
    }
    client.session().clear();
}
