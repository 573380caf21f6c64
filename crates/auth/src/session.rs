//! The auth slice of the application state.

use core::fmt;
use std::sync::{Arc, PoisonError, RwLock};

use orderdesk_core::{Token, UserRead};

use crate::error::AuthError;
use crate::storage::KeyValueStore;

/// Durable-store key the bearer token is persisted under.
pub const AUTH_TOKEN_KEY: &str = "auth_token";

/// What the request client is allowed to do with the session: read the token
/// and invalidate the session.
pub trait SessionStore: Send + Sync {
    /// Current token held in shared state, if any.
    fn token(&self) -> Option<String>;

    /// Invalidate the session. Fire-and-forget.
    fn logout(&self);
}

#[derive(Clone, Default, PartialEq, Eq)]
pub struct AuthState {
    pub token: Option<String>,
    pub user: Option<UserRead>,
}

impl fmt::Debug for AuthState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthState")
            .field("token", &self.token.as_ref().map(|_| "<redacted>"))
            .field("user", &self.user)
            .finish()
    }
}

/// Process-wide session: in-memory auth state plus the durable store the token
/// is mirrored into.
pub struct Session {
    state: RwLock<AuthState>,
    storage: Arc<dyn KeyValueStore>,
}

impl Session {
    /// Empty session. A previously persisted token stays in `storage` and is
    /// still picked up by the credential fallback.
    pub fn new(storage: Arc<dyn KeyValueStore>) -> Self {
        Self {
            state: RwLock::new(AuthState::default()),
            storage,
        }
    }

    /// Session whose shared state already holds `token` (not persisted).
    pub fn with_token(storage: Arc<dyn KeyValueStore>, token: impl Into<String>) -> Self {
        Self {
            state: RwLock::new(AuthState {
                token: Some(token.into()),
                user: None,
            }),
            storage,
        }
    }

    /// Record a successful login and persist the token.
    ///
    /// The token is persisted first; if that fails the session is unchanged.
    pub fn login(&self, token: Token) -> Result<(), AuthError> {
        self.storage.set(AUTH_TOKEN_KEY, &token.access_token)?;

        let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);
        tracing::info!(username = %token.user.username, "session established");
        state.token = Some(token.access_token);
        state.user = Some(token.user);
        Ok(())
    }

    pub fn state(&self) -> AuthState {
        self.state.read().unwrap_or_else(PoisonError::into_inner).clone()
    }

    pub fn user(&self) -> Option<UserRead> {
        self.state.read().unwrap_or_else(PoisonError::into_inner).user.clone()
    }

    /// `true` while shared state holds a non-empty token.
    pub fn is_authenticated(&self) -> bool {
        self.state
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .token
            .as_deref()
            .is_some_and(|t| !t.is_empty())
    }

    pub fn storage(&self) -> Arc<dyn KeyValueStore> {
        Arc::clone(&self.storage)
    }
}

impl SessionStore for Session {
    fn token(&self) -> Option<String> {
        self.state.read().unwrap_or_else(PoisonError::into_inner).token.clone()
    }

    fn logout(&self) {
        *self.state.write().unwrap_or_else(PoisonError::into_inner) = AuthState::default();

        if let Err(err) = self.storage.remove(AUTH_TOKEN_KEY) {
            tracing::warn!("failed to clear persisted token on logout: {err}");
        }

        tracing::info!("session cleared");
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session").field("state", &self.state()).finish_non_exhaustive()
    }
}
