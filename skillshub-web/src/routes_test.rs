//! Tests for the routing system
//!
//! Validates route paths, recognition of localized and canonical URLs, and
//! the locale-aware route constructors.

use strum::IntoEnumIterator;
use yew_router::Routable;

use crate::i18n::Locale;
use crate::routes::Route;

#[test]
fn every_route_has_an_absolute_path() {
    for route in Route::iter() {
        assert!(route.to_path().starts_with('/'), "{route:?}");
    }
}

#[test]
fn public_routes_have_zh_twins() {
    assert_eq!(Route::Home.to_path(), "/");
    assert_eq!(Route::ZhHome.to_path(), "/zh");
    assert_eq!(Route::Skills.to_path(), "/skills");
    assert_eq!(Route::ZhSkills.to_path(), "/zh/skills");
    assert_eq!(Route::Categories.to_path(), "/categories");
    assert_eq!(Route::ZhCategories.to_path(), "/zh/categories");
}

#[test]
fn detail_routes_carry_the_id() {
    let id = "abc-123".to_string();
    assert_eq!(
        Route::SkillDetail { id: id.clone() }.to_path(),
        "/skills/abc-123"
    );
    assert_eq!(
        Route::ZhSkillDetail { id }.to_path(),
        "/zh/skills/abc-123"
    );
}

#[test]
fn recognize_round_trips_localized_paths() {
    for route in [
        Route::Home,
        Route::ZhHome,
        Route::Skills,
        Route::ZhSkills,
        Route::Login,
        Route::Dashboard,
        Route::AdminOrders,
    ] {
        assert_eq!(Route::recognize(&route.to_path()), Some(route));
    }
}

#[test]
fn unknown_path_falls_back_to_not_found() {
    assert_eq!(Route::recognize("/no/such/screen"), Some(Route::NotFound));
}

#[test]
fn locale_constructors_pick_the_right_twin() {
    assert_eq!(Route::home(Locale::En), Route::Home);
    assert_eq!(Route::home(Locale::Zh), Route::ZhHome);
    assert_eq!(Route::skills(Locale::En), Route::Skills);
    assert_eq!(Route::skills(Locale::Zh), Route::ZhSkills);
    assert_eq!(
        Route::skill_detail(Locale::Zh, "s1".to_string()),
        Route::ZhSkillDetail {
            id: "s1".to_string()
        }
    );
}

#[test]
fn dashboard_and_admin_are_canonical_only() {
    assert_eq!(Route::recognize("/zh/dashboard"), Some(Route::NotFound));
    assert_eq!(Route::recognize("/zh/admin"), Some(Route::NotFound));
}
