//! `orderdesk-auth` — client-side session state and credential lookup.
//!
//! This crate knows nothing about HTTP. It owns:
//! - the auth slice of the application state ([`Session`]) and its actions
//! - the durable key-value store the token survives restarts in
//! - the ordered chain of places a bearer credential is read from

pub mod error;
pub mod session;
pub mod source;
pub mod storage;

pub use error::AuthError;
pub use session::{AUTH_TOKEN_KEY, AuthState, Session, SessionStore};
pub use source::{CredentialChain, CredentialSource, SessionSource, StoredSource};
pub use storage::{KeyValueStore, MemoryStore};

#[cfg(not(target_arch = "wasm32"))]
pub use storage::FileStore;

#[cfg(target_arch = "wasm32")]
pub use storage::LocalStorage;
