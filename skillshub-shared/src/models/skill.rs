use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Pricing model of a skill listing.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PriceType {
    #[default]
    Free,
    Paid,
}

/// A skill listing in the marketplace.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Skill {
    pub id: uuid::Uuid,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub github_url: String,
    #[serde(default)]
    pub category_id: Option<uuid::Uuid>,
    #[serde(default)]
    pub price_type: PriceType,
    #[serde(default)]
    pub price: f64,
    #[serde(default)]
    pub downloads_count: u64,
    #[serde(default)]
    pub purchases_count: u64,
    #[serde(default)]
    pub rating: f64,
    #[serde(default)]
    pub stars_count: u64,
    #[serde(default)]
    pub forks_count: u64,
    #[serde(default = "default_active")]
    pub is_active: bool,
    #[serde(default)]
    pub last_sync_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub category: Option<CategoryRef>,
    #[serde(default)]
    pub tags: Vec<TagRef>,
}

fn default_active() -> bool {
    true
}

impl Skill {
    #[must_use]
    pub fn is_free(&self) -> bool {
        self.price_type == PriceType::Free
    }
}

/// Embedded category reference carried on a skill record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CategoryRef {
    pub id: uuid::Uuid,
    pub name: String,
}

/// Embedded tag reference carried on a skill record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TagRef {
    pub id: uuid::Uuid,
    pub name: String,
}

/// A skill category, optionally nested.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Category {
    pub id: uuid::Uuid,
    pub name: String,
    #[serde(default)]
    pub parent_id: Option<uuid::Uuid>,
    #[serde(default)]
    pub sort_order: i32,
    #[serde(default)]
    pub children: Vec<Category>,
}

/// Response for a skill download request.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DownloadResponse {
    #[serde(default)]
    pub download_url: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimal_skill_deserializes() {
        let skill: Skill = serde_json::from_str(
            r#"{"id":"3fa85f64-5717-4562-b3fc-2c963f66afa6","name":"pdf-extractor"}"#,
        )
        .expect("minimal skill should deserialize");
        assert!(skill.is_free());
        assert!(skill.is_active);
        assert!(skill.tags.is_empty());
        assert_eq!(skill.price, 0.0);
    }

    #[test]
    fn test_paid_price_type() {
        let skill: Skill = serde_json::from_str(
            r#"{"id":"3fa85f64-5717-4562-b3fc-2c963f66afa6","name":"x","price_type":"paid","price":9.9}"#,
        )
        .expect("paid skill should deserialize");
        assert!(!skill.is_free());
        assert_eq!(skill.price, 9.9);
    }
}
