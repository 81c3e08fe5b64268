pub mod provider;
pub mod store;

pub use provider::{SessionHandle, SessionProvider, use_session};
pub use store::{CredentialStorage, SessionState, SessionStore, TOKEN_KEY, USER_KEY};
