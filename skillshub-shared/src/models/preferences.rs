use serde::{Deserialize, Serialize};

/// User preferences as stored by the auth API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Preferences {
    #[serde(default = "default_language")]
    pub language: String,
    #[serde(default = "default_theme")]
    pub theme: String,
    #[serde(default)]
    pub notifications: NotificationPrefs,
    #[serde(default)]
    pub privacy: PrivacyPrefs,
    #[serde(default)]
    pub display: DisplayPrefs,
    #[serde(default)]
    pub search: SearchPrefs,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            language: default_language(),
            theme: default_theme(),
            notifications: NotificationPrefs::default(),
            privacy: PrivacyPrefs::default(),
            display: DisplayPrefs::default(),
            search: SearchPrefs::default(),
        }
    }
}

fn default_language() -> String {
    "zh".to_string()
}

fn default_theme() -> String {
    "system".to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NotificationPrefs {
    #[serde(default)]
    pub email: bool,
    #[serde(default)]
    pub in_app: bool,
    #[serde(default)]
    pub marketing: bool,
}

impl Default for NotificationPrefs {
    fn default() -> Self {
        Self {
            email: true,
            in_app: true,
            marketing: false,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct PrivacyPrefs {
    #[serde(default)]
    pub profile_public: bool,
    #[serde(default)]
    pub analytics_opt_in: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DisplayPrefs {
    #[serde(default = "default_view_mode")]
    pub view_mode: String,
    #[serde(default = "default_items_per_page")]
    pub items_per_page: u32,
}

impl Default for DisplayPrefs {
    fn default() -> Self {
        Self {
            view_mode: default_view_mode(),
            items_per_page: default_items_per_page(),
        }
    }
}

fn default_view_mode() -> String {
    "grid".to_string()
}

fn default_items_per_page() -> u32 {
    12
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SearchPrefs {
    #[serde(default)]
    pub save_history: bool,
    #[serde(default)]
    pub personalized: bool,
}

impl Default for SearchPrefs {
    fn default() -> Self {
        Self {
            save_history: true,
            personalized: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_body_yields_defaults() {
        let prefs: Preferences =
            serde_json::from_str("{}").expect("empty preferences should deserialize");
        assert_eq!(prefs.language, "zh");
        assert_eq!(prefs.display.items_per_page, 12);
        assert!(prefs.notifications.email);
    }
}
