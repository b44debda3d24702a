//! # Domain models for the marketplace client
//!
//! Plain records exchanged with the EasyPG API and kept in page-local state.
//! Every type is `Serialize + Deserialize` so the same definitions describe
//! the wire format and the local-storage format.
//!
//! ## Types
//!
//! | Type | Represents |
//! |------|-----------|
//! | [`UserType`] | The three portals: `student`, `owner`, `admin`. |
//! | [`UserRecord`] | The signed-in user from login and verify. Cached locally. |
//! | [`Property`] / [`PropertyImage`] | One PG listing from `/properties`. |
//! | [`Pagination`] / [`PropertyPage`] | Server page metadata and its page of listings. |
//! | [`FilterSet`] | Search filters rebuilt from the form on every search. |
//! | [`DashboardStats`] | Role-dependent counters from `/dashboard/stats`. |
//! | [`RecentItem`] | One card in the dashboard's recent list. |

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use serde::{Deserialize, Serialize};

/// Which portal a user belongs to.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserType {
    #[default]
    Student,
    Owner,
    Admin,
}

impl UserType {
    /// Parse the lowercase wire name. Anything else is `None`.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "student" => Some(UserType::Student),
            "owner" => Some(UserType::Owner),
            "admin" => Some(UserType::Admin),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            UserType::Student => "student",
            UserType::Owner => "owner",
            UserType::Admin => "admin",
        }
    }
}

impl fmt::Display for UserType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The authenticated user, as the API returns it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UserRecord {
    pub id: String,
    pub email: String,
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    pub user_type: UserType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_verified: Option<bool>,
}

/// An image attached to a listing.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PropertyImage {
    pub image_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_order: Option<u32>,
}

/// A PG listing. Held only in page memory.
///
/// Columns come straight from the listings table, so any of them may be
/// `null`; those read as empty. Rent is a number of rupees and may carry a
/// fractional part.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Property {
    pub id: String,
    pub property_name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub property_type: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub gender_preference: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub city: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub state: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub rent_per_month: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub available_rooms: u32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub amenities: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub images: Vec<PropertyImage>,
}

/// `null` reads as the type's default, the same as a missing key.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: serde::Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl Property {
    /// URL of the first image, if the listing has any.
    pub fn main_image(&self) -> Option<&str> {
        self.images.first().map(|img| img.image_url.as_str())
    }
}

/// Page metadata supplied by the server. Trusted as-is.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    pub page: u32,
    pub pages: u32,
    #[serde(default)]
    pub has_prev: bool,
    #[serde(default)]
    pub has_next: bool,
}

/// One page of search results.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PropertyPage {
    #[serde(default)]
    pub properties: Vec<Property>,
    #[serde(default)]
    pub pagination: Option<Pagination>,
}

/// Search filters. All optional; rebuilt from the form on every search.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterSet {
    pub property_type: Option<String>,
    pub gender_preference: Option<String>,
    pub min_rent: Option<u32>,
    pub max_rent: Option<u32>,
    pub amenities: BTreeSet<String>,
}

impl FilterSet {
    pub fn is_empty(&self) -> bool {
        self.property_type.is_none()
            && self.gender_preference.is_none()
            && self.min_rent.is_none()
            && self.max_rent.is_none()
            && self.amenities.is_empty()
    }
}

/// Counters returned by `/dashboard/stats`. Keys depend on the role.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DashboardStats {
    #[serde(flatten)]
    pub values: BTreeMap<String, serde_json::Value>,
}

impl DashboardStats {
    /// Integer counter, `0` when missing or not a number.
    pub fn count(&self, key: &str) -> u64 {
        self.values
            .get(key)
            .and_then(|v| v.as_u64().or_else(|| v.as_f64().map(|f| f.max(0.0) as u64)))
            .unwrap_or(0)
    }

    /// Monetary amount, `0.0` when missing or not a number.
    pub fn amount(&self, key: &str) -> f64 {
        self.values.get(key).and_then(|v| v.as_f64()).unwrap_or(0.0)
    }
}

/// A card in the dashboard's "recent" list.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RecentItem {
    #[serde(default)]
    pub id: Option<String>,
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub location: String,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub rating: Option<f32>,
    #[serde(default)]
    pub reviews: Option<u32>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub status: String,
    #[serde(default)]
    pub image: Option<String>,
}
