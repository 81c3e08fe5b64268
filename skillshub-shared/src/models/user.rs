use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Role attached to a user account. The API sends it as a lowercase string.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Admin,
    #[default]
    #[serde(other)]
    User,
}

/// Represents a user account in the system.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    /// Unique identifier for the user.
    pub id: uuid::Uuid,

    /// The user's email address.
    pub email: String,

    /// Optional display name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Optional login handle.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,

    /// Role used for admin gating.
    #[serde(default)]
    pub role: UserRole,

    /// Whether the account is active.
    #[serde(default = "default_active")]
    pub is_active: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

fn default_active() -> bool {
    true
}

impl User {
    /// Whether this account may enter the admin back-office.
    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.role == UserRole::Admin
    }

    /// Best label available for greeting the user.
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.name
            .as_deref()
            .or(self.username.as_deref())
            .unwrap_or(&self.email)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn sample(role: UserRole) -> User {
        User {
            id: Uuid::new_v4(),
            email: "test@example.com".to_string(),
            name: None,
            username: None,
            role,
            is_active: true,
            created_at: None,
            updated_at: None,
        }
    }

    #[test]
    fn test_admin_gating() {
        assert!(sample(UserRole::Admin).is_admin());
        assert!(!sample(UserRole::User).is_admin());
    }

    #[test]
    fn test_display_name_falls_back_to_email() {
        let mut user = sample(UserRole::User);
        assert_eq!(user.display_name(), "test@example.com");
        user.username = Some("tester".to_string());
        assert_eq!(user.display_name(), "tester");
        user.name = Some("Test User".to_string());
        assert_eq!(user.display_name(), "Test User");
    }

    #[test]
    fn test_wire_defaults() {
        // The API omits optional fields for freshly registered accounts.
        let user: User = serde_json::from_str(
            r#"{"id":"3fa85f64-5717-4562-b3fc-2c963f66afa6","email":"a@b.com"}"#,
        )
        .expect("minimal user should deserialize");
        assert_eq!(user.role, UserRole::User);
        assert!(user.is_active);
        assert!(user.name.is_none());
    }

    #[test]
    fn test_unknown_role_defaults_to_user() {
        let user: User = serde_json::from_str(
            r#"{"id":"3fa85f64-5717-4562-b3fc-2c963f66afa6","email":"a@b.com","role":"moderator"}"#,
        )
        .expect("unknown role should deserialize");
        assert_eq!(user.role, UserRole::User);
    }
}
