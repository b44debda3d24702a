//! Dashboard endpoints: role-dependent statistics and the recent-items list.

use serde::Deserialize;
use store::{DashboardStats, KeyValueStore, RecentItem, UserType};

use crate::client::{ApiClient, RequestOptions};
use crate::error::ApiError;

#[derive(Deserialize)]
struct StatsEnvelope {
    #[serde(default)]
    stats: DashboardStats,
}

#[derive(Deserialize)]
struct ItemsEnvelope {
    #[serde(default)]
    items: Vec<RecentItem>,
}

/// Students see recently viewed PGs, everyone else their own properties.
pub fn recent_items_path(role: UserType) -> &'static str {
    match role {
        UserType::Student => "/dashboard/recent-pgs",
        UserType::Owner | UserType::Admin => "/dashboard/recent-properties",
    }
}

impl<S: KeyValueStore> ApiClient<S> {
    /// `GET /dashboard/stats?type=<role>`.
    pub async fn dashboard_stats(&self, role: UserType) -> Result<DashboardStats, ApiError> {
        let options =
            RequestOptions::get().with_query([("type".to_string(), role.as_str().to_string())]);
        let envelope: StatsEnvelope = self.request("/dashboard/stats", options).await?;
        Ok(envelope.stats)
    }

    pub async fn recent_items(&self, role: UserType) -> Result<Vec<RecentItem>, ApiError> {
        let envelope: ItemsEnvelope = self.get(recent_items_path(role)).await?;
        Ok(envelope.items)
    }
}
