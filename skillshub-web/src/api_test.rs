//! Tests for the API client functionality
//!
//! Validates query-pair assembly and the URL reqwest builds from them;
//! actual HTTP traffic is exercised in the browser.

use crate::api::{SkillListQuery, SkillsHubClient};

fn built_url(query: &SkillListQuery) -> String {
    let request = reqwest::Client::new()
        .get("http://localhost:8080/api/v1/skills")
        .query(&query.params())
        .build()
        .unwrap();
    request.url().to_string()
}

#[test]
fn client_creation_trims_trailing_slash() {
    let _client = SkillsHubClient::new("http://localhost:8080/api/v1/");
    let _bare = SkillsHubClient::new("http://localhost:8080/api/v1");
}

#[test]
fn query_without_filters_only_pages() {
    let query = SkillListQuery {
        page: 1,
        page_size: 12,
        ..SkillListQuery::default()
    };
    assert_eq!(
        query.params(),
        vec![("page", "1".to_string()), ("page_size", "12".to_string())]
    );
}

#[test]
fn query_with_category_adds_the_pair() {
    let query = SkillListQuery {
        page: 2,
        page_size: 12,
        category_id: Some("cat-7".to_string()),
        search: None,
    };
    assert!(query.params().contains(&("category_id", "cat-7".to_string())));
    assert!(built_url(&query).contains("category_id=cat-7"));
}

#[test]
fn query_skips_empty_filters() {
    let query = SkillListQuery {
        page: 1,
        page_size: 12,
        category_id: Some(String::new()),
        search: Some(String::new()),
    };
    assert_eq!(
        query.params(),
        vec![("page", "1".to_string()), ("page_size", "12".to_string())]
    );
}

#[test]
fn search_terms_are_encoded_in_the_built_url() {
    let query = SkillListQuery {
        page: 1,
        page_size: 12,
        category_id: None,
        search: Some("rust 宏".to_string()),
    };
    let url = built_url(&query);
    assert!(url.contains("page=1"));
    assert!(url.contains("page_size=12"));
    // Multibyte input is percent-encoded; no raw spaces survive.
    assert!(url.contains("%E5%AE%8F"), "{url}");
    assert!(!url.contains(' '), "{url}");
}

#[test]
fn reserved_characters_do_not_leak_into_the_query() {
    let query = SkillListQuery {
        page: 1,
        page_size: 12,
        category_id: None,
        search: Some("a&b=c".to_string()),
    };
    let url = built_url(&query);
    let query_string = url.split_once('?').map(|(_, tail)| tail).unwrap_or_default();
    // The ampersand and equals inside the term are escaped, so the query
    // still splits into exactly three pairs.
    assert_eq!(query_string.split('&').count(), 3, "{url}");
    assert!(query_string.contains("%26"), "{url}");
}
