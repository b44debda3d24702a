//! Listing search: `GET /properties`.

use store::{FilterSet, KeyValueStore, PropertyPage};

use crate::client::{ApiClient, RequestOptions};
use crate::error::ApiError;

/// Everything that goes into one search request.
#[derive(Clone, Debug, PartialEq)]
pub struct SearchQuery {
    /// Free-text location, sent as `city`.
    pub location: String,
    pub filters: FilterSet,
    pub page: u32,
    pub per_page: u32,
}

impl SearchQuery {
    /// Query pairs in request order: `city`, the scalar filters, one
    /// `amenities` pair per selected amenity, then `page` and `per_page`.
    /// Empty values are skipped.
    pub fn to_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = Vec::new();
        let mut push = |name: &str, value: String| {
            if !value.is_empty() {
                pairs.push((name.to_string(), value));
            }
        };

        push("city", self.location.trim().to_string());
        let f = &self.filters;
        push("property_type", f.property_type.clone().unwrap_or_default());
        push(
            "gender_preference",
            f.gender_preference.clone().unwrap_or_default(),
        );
        push("min_rent", f.min_rent.map(|v| v.to_string()).unwrap_or_default());
        push("max_rent", f.max_rent.map(|v| v.to_string()).unwrap_or_default());
        for amenity in &f.amenities {
            push("amenities", amenity.clone());
        }
        push("page", self.page.to_string());
        push("per_page", self.per_page.to_string());
        pairs
    }
}

impl<S: KeyValueStore> ApiClient<S> {
    /// Filtered, paginated search.
    pub async fn search_properties(&self, query: &SearchQuery) -> Result<PropertyPage, ApiError> {
        let options = RequestOptions::get().with_query(query.to_pairs());
        self.request("/properties", options).await
    }

    /// Unfiltered listing with the server's default paging.
    pub async fn list_properties(&self) -> Result<PropertyPage, ApiError> {
        self.get("/properties").await
    }
}
