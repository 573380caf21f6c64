//! Where a bearer credential comes from.
//!
//! Sources are consulted in priority order and the first non-empty value wins.
//! The standard chain is shared session state first, then the durable store
//! (which survives a reload that resets shared state).

use core::fmt;
use std::sync::Arc;

use orderdesk_core::Credential;

use crate::error::AuthError;
use crate::session::{AUTH_TOKEN_KEY, SessionStore};
use crate::storage::KeyValueStore;

/// A single place a raw token can be read from.
pub trait CredentialSource: Send + Sync {
    /// Short label used in logs.
    fn name(&self) -> &'static str;

    fn read(&self) -> Result<Option<String>, AuthError>;
}

/// Reads `auth.token` from shared session state.
pub struct SessionSource {
    session: Arc<dyn SessionStore>,
}

impl SessionSource {
    pub fn new(session: Arc<dyn SessionStore>) -> Self {
        Self { session }
    }
}

impl CredentialSource for SessionSource {
    fn name(&self) -> &'static str {
        "session"
    }

    fn read(&self) -> Result<Option<String>, AuthError> {
        Ok(self.session.token())
    }
}

/// Reads one key from a durable store. Never writes.
pub struct StoredSource {
    store: Arc<dyn KeyValueStore>,
    key: String,
}

impl StoredSource {
    pub fn new(store: Arc<dyn KeyValueStore>, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    /// Source for the persisted bearer token.
    pub fn auth_token(store: Arc<dyn KeyValueStore>) -> Self {
        Self::new(store, AUTH_TOKEN_KEY)
    }
}

impl CredentialSource for StoredSource {
    fn name(&self) -> &'static str {
        "durable-store"
    }

    fn read(&self) -> Result<Option<String>, AuthError> {
        self.store.get(&self.key)
    }
}

/// Ordered list of credential sources.
#[derive(Default)]
pub struct CredentialChain {
    sources: Vec<Box<dyn CredentialSource>>,
}

impl CredentialChain {
    pub fn new() -> Self {
        Self::default()
    }

    /// Session state first, then the persisted `auth_token`.
    pub fn standard(session: Arc<dyn SessionStore>, store: Arc<dyn KeyValueStore>) -> Self {
        Self::new()
            .with_source(SessionSource::new(session))
            .with_source(StoredSource::auth_token(store))
    }

    /// Append a lower-priority source.
    pub fn with_source(mut self, source: impl CredentialSource + 'static) -> Self {
        self.sources.push(Box::new(source));
        self
    }

    pub fn len(&self) -> usize {
        self.sources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }

    /// First non-empty credential, in priority order.
    ///
    /// A source that fails stops the lookup; lower-priority sources are not
    /// consulted in its place.
    pub fn resolve(&self) -> Result<Option<Credential>, AuthError> {
        for source in &self.sources {
            if let Some(credential) = source.read()?.and_then(Credential::parse) {
                tracing::debug!(source = source.name(), "credential resolved");
                return Ok(Some(credential));
            }
        }
        Ok(None)
    }
}

impl fmt::Debug for CredentialChain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.sources.iter().map(|s| s.name()))
            .finish()
    }
}
