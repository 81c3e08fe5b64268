//! Locale handling and locale-aware path rewriting.
//!
//! English paths are canonical and unprefixed; Chinese paths carry a leading
//! `/zh` segment. Toggling the language rewrites the visible path accordingly,
//! and toggling twice always restores the original path.

use std::str::FromStr;

/// The active display language. Chinese is the product default.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Locale {
    En,
    #[default]
    Zh,
}

/// Path segment that marks a Chinese-localized route.
pub const ZH_PREFIX: &str = "/zh";

impl Locale {
    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Zh => "zh",
        }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::En => Self::Zh,
            Self::Zh => Self::En,
        }
    }

    /// Locale implied by a navigation path.
    #[must_use]
    pub fn of_path(path: &str) -> Self {
        if has_zh_prefix(path) {
            Self::Zh
        } else {
            Self::En
        }
    }
}

impl FromStr for Locale {
    type Err = ();

    fn from_str(code: &str) -> Result<Self, Self::Err> {
        match code {
            "en" => Ok(Self::En),
            "zh" => Ok(Self::Zh),
            _ => Err(()),
        }
    }
}

/// Whether `path` starts with a real `/zh` segment (`/zhskills` does not).
fn has_zh_prefix(path: &str) -> bool {
    match path.strip_prefix(ZH_PREFIX) {
        Some(rest) => rest.is_empty() || rest.starts_with('/'),
        None => false,
    }
}

/// Rewrites `path` so it belongs to `locale`.
///
/// The root stays a single segment in both directions: `/` becomes `/zh`, not
/// `/zh/`, and a bare `/zh` strips back to `/`.
#[must_use]
pub fn localized_path(path: &str, locale: Locale) -> String {
    match locale {
        Locale::Zh => {
            if has_zh_prefix(path) {
                path.to_string()
            } else if path == "/" {
                ZH_PREFIX.to_string()
            } else {
                format!("{ZH_PREFIX}{path}")
            }
        }
        Locale::En => match path.strip_prefix(ZH_PREFIX) {
            Some(rest) if rest.is_empty() => "/".to_string(),
            Some(rest) if rest.starts_with('/') => rest.to_string(),
            _ => path.to_string(),
        },
    }
}

/// Flips the locale implied by `path` and returns the rewritten pair.
#[must_use]
pub fn toggled_path(path: &str) -> (Locale, String) {
    let next = Locale::of_path(path).toggled();
    (next, localized_path(path, next))
}
