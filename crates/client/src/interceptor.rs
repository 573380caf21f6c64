//! Authentication hooks around every request.
//!
//! Outbound: attach `Authorization: Bearer <token>` when a credential resolves.
//! Inbound: on a 401, log the session out and send the user to the login page,
//! then hand the failure back to the caller untouched.

use std::sync::Arc;

use orderdesk_auth::{CredentialChain, KeyValueStore, SessionStore};
use reqwest::header::{AUTHORIZATION, HeaderValue};

use crate::error::ClientError;
use crate::navigation::Navigator;
use crate::request::RequestDescriptor;
use crate::routes::LOGIN_PATH;

pub struct AuthInterceptor {
    credentials: CredentialChain,
    session: Arc<dyn SessionStore>,
    navigator: Arc<dyn Navigator>,
}

impl AuthInterceptor {
    /// Interceptor reading the token from `session`, falling back to the
    /// `auth_token` entry in `storage`.
    pub fn new(
        session: Arc<dyn SessionStore>,
        storage: Arc<dyn KeyValueStore>,
        navigator: Arc<dyn Navigator>,
    ) -> Self {
        let credentials = CredentialChain::standard(Arc::clone(&session), storage);
        Self::with_chain(credentials, session, navigator)
    }

    pub fn with_chain(
        credentials: CredentialChain,
        session: Arc<dyn SessionStore>,
        navigator: Arc<dyn Navigator>,
    ) -> Self {
        Self {
            credentials,
            session,
            navigator,
        }
    }

    /// Runs before the request is sent.
    ///
    /// Without a credential the request is returned as-is, including any
    /// `Authorization` header the caller set.
    pub fn on_request(&self, mut request: RequestDescriptor) -> Result<RequestDescriptor, ClientError> {
        if let Some(credential) = self.credentials.resolve()? {
            let mut value = HeaderValue::from_str(&credential.bearer())
                .map_err(|_| ClientError::InvalidCredential)?;
            value.set_sensitive(true);
            request.headers.insert(AUTHORIZATION, value);
        }
        Ok(request)
    }

    /// Runs once after the request settles. Never changes the outcome.
    pub fn on_response<T>(&self, outcome: Result<T, ClientError>) -> Result<T, ClientError> {
        if let Err(err) = &outcome {
            if err.is_unauthorized() {
                let current_path = self.navigator.current_path();
                handle_unauthorized(&current_path, self.session.as_ref(), self.navigator.as_ref());
            }
        }
        outcome
    }
}

/// Invalidate the session after a 401 and redirect to the login page unless
/// already there. Returns whether a navigation happened.
pub fn handle_unauthorized(
    current_path: &str,
    session: &dyn SessionStore,
    navigator: &dyn Navigator,
) -> bool {
    tracing::info!("credential rejected by the API; invalidating session");
    session.logout();

    if current_path == LOGIN_PATH {
        return false;
    }

    tracing::info!(from = current_path, "redirecting to {LOGIN_PATH}");
    navigator.hard_navigate(LOGIN_PATH);
    true
}
