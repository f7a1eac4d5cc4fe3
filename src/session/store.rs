//! Read-side facade over the persisted session.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use super::repository::{
    ACCESS_LEVEL_KEY, SessionError, SessionRepository, TOKEN_KEY, default_repository,
};

/// The two headers every authenticated API call carries.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthHeaders {
    pub content_type: String,
    pub authorization: String,
}

impl AuthHeaders {
    /// Header pairs in wire order, ready to attach to a request builder.
    pub fn pairs(&self) -> [(&'static str, &str); 2] {
        [
            ("Content-Type", &self.content_type),
            ("Authorization", &self.authorization),
        ]
    }
}

/// Reads the session through a [`SessionRepository`] on every call — no
/// in-memory caching, so each read reflects the latest persisted value.
#[derive(Clone, Debug)]
pub struct SessionStore<R: SessionRepository> {
    repo: R,
}

impl<R: SessionRepository> SessionStore<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// The persisted bearer token, if any. Presence implies "authenticated";
    /// the token is opaque here and never validated cryptographically.
    pub fn token(&self) -> Result<Option<String>, SessionError> {
        self.repo.get(TOKEN_KEY)
    }

    /// Coarse authorization tier. Read but not yet enforced per route.
    pub fn access_level(&self) -> Result<Option<String>, SessionError> {
        self.repo.get(ACCESS_LEVEL_KEY)
    }

    /// Build the header bundle from the current token.
    ///
    /// With no token stored the `Authorization` value degenerates to
    /// `"Bearer "` with an empty suffix; callers must not treat that form as
    /// authenticated.
    pub fn auth_headers(&self) -> Result<AuthHeaders, SessionError> {
        let token = self.token()?;
        Ok(AuthHeaders {
            content_type: "application/json".to_owned(),
            authorization: format!("Bearer {}", token.as_deref().unwrap_or_default()),
        })
    }
}

/// Store over the default repository for this build (browser `localStorage`
/// under `hydrate`, in-memory otherwise).
pub fn default_store() -> SessionStore<impl SessionRepository> {
    SessionStore::new(default_repository())
}
