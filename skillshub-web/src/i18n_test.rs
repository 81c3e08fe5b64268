//! Tests for locale resolution and localized path rewriting
//!
//! Also checks that the bundled translation tables stay structurally
//! symmetric across languages.

use std::collections::BTreeSet;

use serde_json::Value;

use crate::i18n::{Locale, localized_path, toggled_path};

#[test]
fn default_locale_is_chinese() {
    assert_eq!(Locale::default(), Locale::Zh);
    assert_eq!(Locale::default().code(), "zh");
}

#[test]
fn locale_of_path_requires_a_real_segment() {
    assert_eq!(Locale::of_path("/zh"), Locale::Zh);
    assert_eq!(Locale::of_path("/zh/skills"), Locale::Zh);
    assert_eq!(Locale::of_path("/"), Locale::En);
    assert_eq!(Locale::of_path("/skills"), Locale::En);
    // A path that merely begins with the letters "zh" is not localized.
    assert_eq!(Locale::of_path("/zhskills"), Locale::En);
}

#[test]
fn root_stays_a_single_segment() {
    assert_eq!(localized_path("/", Locale::Zh), "/zh");
    assert_eq!(localized_path("/zh", Locale::En), "/");
}

#[test]
fn localizing_is_idempotent() {
    assert_eq!(localized_path("/zh/skills", Locale::Zh), "/zh/skills");
    assert_eq!(localized_path("/skills", Locale::En), "/skills");
}

#[test]
fn toggling_twice_restores_the_path() {
    for path in ["/", "/skills", "/zh", "/zh/skills", "/skills/abc123"] {
        let (_, once) = toggled_path(path);
        let (_, twice) = toggled_path(&once);
        assert_eq!(twice, path, "round trip through {once}");
    }
}

#[test]
fn toggle_reports_the_new_locale() {
    assert_eq!(toggled_path("/skills"), (Locale::Zh, "/zh/skills".to_string()));
    assert_eq!(toggled_path("/zh/skills"), (Locale::En, "/skills".to_string()));
}

fn key_paths(value: &Value, prefix: &str, out: &mut BTreeSet<String>) {
    match value {
        Value::Object(map) => {
            for (key, child) in map {
                let path = if prefix.is_empty() {
                    key.clone()
                } else {
                    format!("{prefix}.{key}")
                };
                key_paths(child, &path, out);
            }
        }
        _ => {
            out.insert(prefix.to_string());
        }
    }
}

/// Both translation tables expose exactly the same key structure, so no
/// `i18n.t` lookup can succeed in one language and fail in the other.
#[test]
fn translation_tables_are_structurally_symmetric() {
    let en: Value = serde_json::from_str(include_str!("../translations/en.json")).unwrap();
    let zh: Value = serde_json::from_str(include_str!("../translations/zh.json")).unwrap();

    let mut en_keys = BTreeSet::new();
    let mut zh_keys = BTreeSet::new();
    key_paths(&en, "", &mut en_keys);
    key_paths(&zh, "", &mut zh_keys);

    let only_en: Vec<_> = en_keys.difference(&zh_keys).collect();
    let only_zh: Vec<_> = zh_keys.difference(&en_keys).collect();
    assert!(only_en.is_empty() && only_zh.is_empty(), "en-only {only_en:?}, zh-only {only_zh:?}");
}

#[test]
fn translation_values_are_non_empty_strings() {
    for raw in [
        include_str!("../translations/en.json"),
        include_str!("../translations/zh.json"),
    ] {
        let table: Value = serde_json::from_str(raw).unwrap();
        let mut keys = BTreeSet::new();
        key_paths(&table, "", &mut keys);
        for key in keys {
            let mut node = &table;
            for part in key.split('.') {
                node = &node[part];
            }
            assert!(
                node.as_str().is_some_and(|text| !text.is_empty()),
                "{key} must hold a non-empty string"
            );
        }
    }
}
