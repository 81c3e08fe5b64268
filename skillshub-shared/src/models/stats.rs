use serde::{Deserialize, Serialize};

use super::order::Order;

/// A single entry in the dashboard activity feed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ActivityItem {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub timestamp: Option<chrono::DateTime<chrono::Utc>>,
}

/// Per-user dashboard statistics.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct UserDashboardStats {
    #[serde(default)]
    pub total_orders: u64,
    #[serde(default)]
    pub total_skills: u64,
    #[serde(default)]
    pub total_downloads: u64,
    #[serde(default)]
    pub learning_progress: f64,
    #[serde(default)]
    pub recent_activity: Vec<ActivityItem>,
}

/// Platform-wide public statistics.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlatformStats {
    #[serde(default)]
    pub total_users: u64,
    #[serde(default)]
    pub total_skills: u64,
    #[serde(default)]
    pub total_downloads: u64,
    #[serde(default)]
    pub active_users: u64,
    #[serde(default)]
    pub categories: u64,
}

/// Aggregates shown on the admin overview screen.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct AdminOverview {
    #[serde(default)]
    pub total_revenue: f64,
    #[serde(default)]
    pub total_orders: u64,
    #[serde(default)]
    pub total_users: u64,
    #[serde(default)]
    pub total_skills: u64,
    #[serde(default)]
    pub active_users: u64,
    #[serde(default)]
    pub hot_skills: u64,
    #[serde(default)]
    pub pending_orders: u64,
    #[serde(default)]
    pub today_orders: u64,
    #[serde(default)]
    pub recent_orders: Vec<Order>,
}
