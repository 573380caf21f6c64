//! Bearer credential value.

use core::fmt;

/// Opaque bearer token representing an authenticated session.
///
/// A credential is never empty: an empty string read from any source means
/// "no credential", so [`Credential::parse`] refuses it.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Credential(String);

impl Credential {
    /// Wrap a raw token, returning `None` when it is empty.
    pub fn parse(raw: impl Into<String>) -> Option<Self> {
        let raw = raw.into();
        if raw.is_empty() { None } else { Some(Self(raw)) }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Value of the `Authorization` header for this credential.
    pub fn bearer(&self) -> String {
        format!("Bearer {}", self.0)
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

// Tokens end up in logs far too easily; keep them out of `Debug`.
impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Credential(<redacted>)")
    }
}
