//! Browser wiring for the session store: localStorage backend, the `storage`
//! event bridge for cross-tab sync, and the Yew context surface.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_storage::{LocalStorage, Storage};
use skillshub_shared::models::User;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use super::store::{CredentialStorage, SessionState, SessionStore};
use crate::api::SkillsHubClient;

/// Durable backend over the browser's localStorage.
///
/// Values are stored raw, not JSON-wrapped, so the token key holds the bare
/// bearer string.
#[derive(Debug, Default)]
pub struct LocalCredentials;

impl CredentialStorage for LocalCredentials {
    fn get(&self, key: &str) -> Option<String> {
        LocalStorage::raw().get_item(key).ok().flatten()
    }

    fn set(&mut self, key: &str, value: &str) {
        if let Err(err) = LocalStorage::raw().set_item(key, value) {
            web_sys::console::error_1(&err);
        }
    }

    fn remove(&mut self, key: &str) {
        if let Err(err) = LocalStorage::raw().remove_item(key) {
            web_sys::console::error_1(&err);
        }
    }
}

type SharedStore = Rc<RefCell<SessionStore<LocalCredentials>>>;

/// Context value exposing session state and its mutators to every screen.
#[derive(Clone)]
pub struct SessionHandle {
    state: SessionState,
    store: SharedStore,
}

impl PartialEq for SessionHandle {
    fn eq(&self, other: &Self) -> bool {
        self.state == other.state
    }
}

impl SessionHandle {
    #[must_use]
    pub fn user(&self) -> Option<&User> {
        self.state.user.as_ref()
    }

    #[must_use]
    pub fn loading(&self) -> bool {
        self.state.loading
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.state.is_authenticated()
    }

    pub fn login(&self, user: User, token: &str) {
        self.store.borrow_mut().login(user, token);
    }

    pub fn logout(&self) {
        self.store.borrow_mut().logout();
    }

    /// Re-fetches the authoritative identity. Any failure degrades to
    /// logged-out; callers react to the resulting state, not to an error.
    pub fn refresh(&self) {
        let store = self.store.clone();
        spawn_local(async move {
            let result = SkillsHubClient::shared().get_me().await;
            store.borrow_mut().apply_refresh(result);
        });
    }
}

#[derive(Properties, PartialEq)]
pub struct SessionProviderProps {
    #[prop_or_default]
    pub children: Html,
}

#[function_component(SessionProvider)]
pub fn session_provider(props: &SessionProviderProps) -> Html {
    let snapshot = use_state(|| SessionState {
        user: None,
        loading: true,
    });
    let store: SharedStore = use_mut_ref(|| SessionStore::new(LocalCredentials));

    {
        let snapshot = snapshot.clone();
        let store = store.clone();
        use_effect_with((), move |_| {
            {
                let snapshot = snapshot.clone();
                store
                    .borrow_mut()
                    .subscribe(move |state| snapshot.set(state.clone()));
            }
            store.borrow_mut().init();

            // Bridge other-tab storage mutations into the store.
            let store_for_events = store.clone();
            let listener: Closure<dyn FnMut(web_sys::StorageEvent)> =
                Closure::new(move |event: web_sys::StorageEvent| {
                    if let Some(key) = event.key() {
                        let value = event.new_value();
                        store_for_events
                            .borrow_mut()
                            .external_change(&key, value.as_deref());
                    }
                });
            let window = web_sys::window().expect("window should exist");
            if let Err(err) = window
                .add_event_listener_with_callback("storage", listener.as_ref().unchecked_ref())
            {
                web_sys::console::error_1(&err);
            }

            move || {
                let _ = window.remove_event_listener_with_callback(
                    "storage",
                    listener.as_ref().unchecked_ref(),
                );
            }
        });
    }

    let handle = SessionHandle {
        state: (*snapshot).clone(),
        store,
    };

    html! {
        <ContextProvider<SessionHandle> context={handle}>
            { props.children.clone() }
        </ContextProvider<SessionHandle>>
    }
}

/// Session accessor for screens. Panics when no [`SessionProvider`] is mounted
/// above the caller so integration mistakes surface immediately.
#[hook]
pub fn use_session() -> SessionHandle {
    use_context::<SessionHandle>().expect("use_session must be used within a SessionProvider")
}
