//! Session state core: durable persistence, observers, cross-tab reconciliation.
//!
//! This module is free of browser types so it runs under plain `cargo test`.
//! The browser wiring (localStorage backend, `storage` DOM events, the Yew
//! context) lives in [`super::provider`].

use skillshub_shared::models::{ApiError, User};

/// Durable-storage key holding the JSON-serialized identity.
pub const USER_KEY: &str = "user";
/// Durable-storage key holding the opaque bearer token.
pub const TOKEN_KEY: &str = "token";

/// Seam over the durable key-value store so tests can swap in a map.
pub trait CredentialStorage {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str);
    fn remove(&mut self, key: &str);
}

/// Snapshot of "who is logged in" handed to consumers.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionState {
    pub user: Option<User>,
    /// True only until the initial storage read-back completes. Consumers must
    /// not take redirect decisions while this is set.
    pub loading: bool,
}

impl SessionState {
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }
}

type Subscriber = Box<dyn Fn(&SessionState)>;

/// Single source of truth for the authenticated identity.
///
/// Every state change is published to subscribers; the Yew provider subscribes
/// to re-render its tree, tests subscribe to observe transitions.
pub struct SessionStore<S: CredentialStorage> {
    storage: S,
    state: SessionState,
    subscribers: Vec<Subscriber>,
}

impl<S: CredentialStorage> SessionStore<S> {
    pub fn new(storage: S) -> Self {
        Self {
            storage,
            state: SessionState {
                user: None,
                loading: true,
            },
            subscribers: Vec::new(),
        }
    }

    #[must_use]
    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn subscribe(&mut self, subscriber: impl Fn(&SessionState) + 'static) {
        self.subscribers.push(Box::new(subscriber));
    }

    fn publish(&self) {
        for subscriber in &self.subscribers {
            subscriber(&self.state);
        }
    }

    /// Synchronous read-back of the persisted session. Flips `loading` to
    /// false exactly once; a malformed identity record is logged and treated
    /// as no session.
    pub fn init(&mut self) {
        let user = match (self.storage.get(USER_KEY), self.storage.get(TOKEN_KEY)) {
            (Some(raw), Some(_token)) => match serde_json::from_str::<User>(&raw) {
                Ok(user) => Some(user),
                Err(err) => {
                    report_session_error("failed to load persisted user", &err.to_string());
                    None
                }
            },
            _ => None,
        };
        self.state.user = user;
        self.state.loading = false;
        self.publish();
    }

    /// Persists both credentials, then updates in-memory state.
    pub fn login(&mut self, user: User, token: &str) {
        self.storage.set(TOKEN_KEY, token);
        match serde_json::to_string(&user) {
            Ok(raw) => self.storage.set(USER_KEY, &raw),
            Err(err) => report_session_error("failed to persist user", &err.to_string()),
        }
        self.state.user = Some(user);
        self.publish();
    }

    /// Clears both credentials and in-memory state. Idempotent: calling it
    /// while logged out leaves the same end state and publishes nothing.
    pub fn logout(&mut self) {
        self.storage.remove(TOKEN_KEY);
        self.storage.remove(USER_KEY);
        if self.state.user.is_some() {
            self.state.user = None;
            self.publish();
        }
    }

    /// Applies the outcome of re-fetching the identity from the auth API.
    ///
    /// Success overwrites the persisted and in-memory identity. Any failure,
    /// including a plain network error, degrades to logged-out: an
    /// unverifiable session must not stay active.
    pub fn apply_refresh(&mut self, result: Result<User, ApiError>) {
        match result {
            Ok(user) => {
                match serde_json::to_string(&user) {
                    Ok(raw) => self.storage.set(USER_KEY, &raw),
                    Err(err) => report_session_error("failed to persist user", &err.to_string()),
                }
                self.state.user = Some(user);
                self.publish();
            }
            Err(err) => {
                report_session_error("session refresh failed, logging out", &err.to_string());
                self.logout();
            }
        }
    }

    /// Reconciles an external mutation of one of the durable keys made by
    /// another tab of the same origin. Last observed write wins; no storage
    /// writes happen here, the other tab already made them.
    pub fn external_change(&mut self, key: &str, new_value: Option<&str>) {
        match key {
            USER_KEY => {
                let user = new_value.and_then(|raw| match serde_json::from_str::<User>(raw) {
                    Ok(user) => Some(user),
                    Err(err) => {
                        report_session_error("ignoring malformed user from other tab", &err.to_string());
                        None
                    }
                });
                if self.state.user != user {
                    self.state.user = user;
                    self.publish();
                }
            }
            TOKEN_KEY if new_value.is_none() => {
                if self.state.user.is_some() {
                    self.state.user = None;
                    self.publish();
                }
            }
            _ => {}
        }
    }
}

fn report_session_error(context: &str, detail: &str) {
    #[cfg(target_arch = "wasm32")]
    web_sys::console::error_1(&format!("session: {context}: {detail}").into());
    #[cfg(not(target_arch = "wasm32"))]
    eprintln!("session: {context}: {detail}");
}
