//! Tests for the session store state machine
//!
//! Exercises persistence round-trips, refresh outcomes, and cross-tab
//! reconciliation against an in-memory storage backend.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use skillshub_shared::models::{ApiError, User, UserRole};

use crate::session::{CredentialStorage, SessionStore, TOKEN_KEY, USER_KEY};

/// Map-backed storage whose contents remain inspectable after the store
/// takes ownership of it.
#[derive(Clone, Default)]
struct MemoryStorage {
    values: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStorage {
    fn seeded(values: &[(&str, &str)]) -> Self {
        let storage = Self::default();
        for (key, value) in values {
            storage.values.borrow_mut().insert(key.to_string(), value.to_string());
        }
        storage
    }

    fn value(&self, key: &str) -> Option<String> {
        self.values.borrow().get(key).cloned()
    }
}

impl CredentialStorage for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.value(key)
    }

    fn set(&mut self, key: &str, value: &str) {
        self.values.borrow_mut().insert(key.to_string(), value.to_string());
    }

    fn remove(&mut self, key: &str) {
        self.values.borrow_mut().remove(key);
    }
}

fn sample_user(email: &str) -> User {
    User {
        id: uuid::Uuid::new_v4(),
        email: email.to_string(),
        name: Some("Sample".to_string()),
        username: None,
        role: UserRole::User,
        is_active: true,
        created_at: None,
        updated_at: None,
    }
}

#[test]
fn starts_loading_until_init() {
    let mut store = SessionStore::new(MemoryStorage::default());
    assert!(store.state().loading);
    assert!(!store.state().is_authenticated());

    store.init();
    assert!(!store.state().loading);
    assert!(!store.state().is_authenticated());
}

#[test]
fn init_restores_persisted_session() {
    let user = sample_user("a@b.com");
    let raw = serde_json::to_string(&user).unwrap();
    let storage = MemoryStorage::seeded(&[(USER_KEY, raw.as_str()), (TOKEN_KEY, "tok1")]);
    let mut store = SessionStore::new(storage);

    store.init();
    assert_eq!(store.state().user, Some(user));
    assert!(!store.state().loading);
}

#[test]
fn init_without_token_yields_no_session() {
    let user = sample_user("a@b.com");
    let raw = serde_json::to_string(&user).unwrap();
    let mut store = SessionStore::new(MemoryStorage::seeded(&[(USER_KEY, raw.as_str())]));

    store.init();
    assert!(!store.state().is_authenticated());
}

#[test]
fn init_with_malformed_user_yields_no_session() {
    let storage = MemoryStorage::seeded(&[(USER_KEY, "{not json"), (TOKEN_KEY, "tok1")]);
    let mut store = SessionStore::new(storage);

    store.init();
    assert!(!store.state().is_authenticated());
    assert!(!store.state().loading);
}

#[test]
fn login_persists_both_credentials() {
    let storage = MemoryStorage::default();
    let mut store = SessionStore::new(storage.clone());
    store.init();

    let user = sample_user("a@b.com");
    store.login(user.clone(), "tok1");

    assert!(store.state().is_authenticated());
    assert_eq!(storage.value(TOKEN_KEY).as_deref(), Some("tok1"));
    let persisted: User = serde_json::from_str(&storage.value(USER_KEY).unwrap()).unwrap();
    assert_eq!(persisted, user);
}

#[test]
fn logout_clears_both_keys_and_publishes_once() {
    let events = Rc::new(RefCell::new(Vec::new()));
    let storage = MemoryStorage::default();
    let mut store = SessionStore::new(storage.clone());
    store.init();
    store.login(sample_user("a@b.com"), "tok1");

    {
        let events = events.clone();
        store.subscribe(move |state| events.borrow_mut().push(state.is_authenticated()));
    }

    store.logout();
    store.logout();
    assert_eq!(*events.borrow(), vec![false]);
    assert!(!store.state().is_authenticated());
    assert_eq!(storage.value(TOKEN_KEY), None);
    assert_eq!(storage.value(USER_KEY), None);
}

#[test]
fn failed_refresh_degrades_to_logged_out() {
    let storage = MemoryStorage::default();
    let mut store = SessionStore::new(storage.clone());
    store.init();
    store.login(sample_user("a@b.com"), "tok1");

    store.apply_refresh(Err(ApiError::Network("connection refused".to_string())));

    // Fully logged out, never partial: memory and both durable keys.
    assert!(!store.state().is_authenticated());
    assert_eq!(storage.value(TOKEN_KEY), None);
    assert_eq!(storage.value(USER_KEY), None);
}

#[test]
fn successful_refresh_replaces_identity() {
    let storage = MemoryStorage::default();
    let mut store = SessionStore::new(storage.clone());
    store.init();
    store.login(sample_user("a@b.com"), "tok1");

    store.apply_refresh(Ok(sample_user("renamed@b.com")));
    assert_eq!(
        store.state().user.as_ref().map(|user| user.email.as_str()),
        Some("renamed@b.com")
    );
    let persisted: User = serde_json::from_str(&storage.value(USER_KEY).unwrap()).unwrap();
    assert_eq!(persisted.email, "renamed@b.com");
    // The token is untouched by a refresh.
    assert_eq!(storage.value(TOKEN_KEY).as_deref(), Some("tok1"));
}

#[test]
fn external_token_removal_clears_identity() {
    let mut store = SessionStore::new(MemoryStorage::default());
    store.init();
    store.login(sample_user("a@b.com"), "tok1");

    store.external_change(TOKEN_KEY, None);
    assert!(!store.state().is_authenticated());
}

#[test]
fn external_user_write_is_adopted() {
    let mut store = SessionStore::new(MemoryStorage::default());
    store.init();

    let other = sample_user("other@b.com");
    let raw = serde_json::to_string(&other).unwrap();
    store.external_change(USER_KEY, Some(&raw));
    assert_eq!(store.state().user, Some(other));
}

#[test]
fn external_malformed_user_clears_identity() {
    let mut store = SessionStore::new(MemoryStorage::default());
    store.init();
    store.login(sample_user("a@b.com"), "tok1");

    store.external_change(USER_KEY, Some("{not json"));
    assert!(!store.state().is_authenticated());
}

#[test]
fn unrelated_external_key_is_ignored() {
    let events = Rc::new(RefCell::new(0u32));
    let mut store = SessionStore::new(MemoryStorage::default());
    store.init();
    store.login(sample_user("a@b.com"), "tok1");

    {
        let events = events.clone();
        store.subscribe(move |_| *events.borrow_mut() += 1);
    }

    store.external_change("theme", Some("dark"));
    assert_eq!(*events.borrow(), 0);
    assert!(store.state().is_authenticated());
}

#[test]
fn subscribers_see_every_transition() {
    let events: Rc<RefCell<Vec<bool>>> = Rc::new(RefCell::new(Vec::new()));
    let mut store = SessionStore::new(MemoryStorage::default());
    {
        let events = events.clone();
        store.subscribe(move |state| events.borrow_mut().push(state.is_authenticated()));
    }

    store.init();
    store.login(sample_user("a@b.com"), "tok1");
    store.logout();
    assert_eq!(*events.borrow(), vec![false, true, false]);
}
