//! REST API helpers for communicating with the runway server.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`. Every call to an
//! authenticated endpoint attaches the session header bundle from
//! [`SessionStore::auth_headers`].
//! Server-side (SSR): stubs returning `None`/error since these endpoints are
//! only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Option`/`Result` outputs instead of panics so fetch failures
//! degrade UI behavior without crashing hydration.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use crate::net::types::{LoginRequest, LoginResponse, Queen, Runway};
#[cfg(feature = "hydrate")]
use crate::net::types::ProfileName;
use crate::session::repository::SessionRepository;
use crate::session::store::SessionStore;

/// Default base address of the runway API server.
pub const DEFAULT_BASE: &str = "http://localhost:3004";

/// Endpoint set rooted at a single configured base address.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
    base: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::with_base(DEFAULT_BASE)
    }
}

impl ApiConfig {
    pub fn with_base(base: impl Into<String>) -> Self {
        Self { base: base.into() }
    }

    /// Login endpoint (unauthenticated).
    pub fn login_url(&self) -> String {
        format!("{}/login", self.base)
    }

    /// Queens collection endpoint.
    pub fn queens_url(&self) -> String {
        format!("{}/queens", self.base)
    }

    /// Runways collection endpoint.
    pub fn runways_url(&self) -> String {
        format!("{}/runways", self.base)
    }

    /// Profile rename endpoint.
    pub fn profile_name_url(&self) -> String {
        format!("{}/users/name", self.base)
    }

    /// Account registration and account-info endpoint.
    pub fn users_url(&self) -> String {
        format!("{}/users", self.base)
    }
}

/// Exchange credentials for a token at the login endpoint.
///
/// # Errors
///
/// Returns an error string if the request fails or the server rejects the
/// credentials. Persisting the returned token is the caller's job.
pub async fn login(config: &ApiConfig, creds: &LoginRequest) -> Result<LoginResponse, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(&config.login_url())
            .header("Content-Type", "application/json")
            .json(creds)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(format!("login failed: {}", resp.status()));
        }
        resp.json::<LoginResponse>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (config, creds);
        Err("not available on server".to_owned())
    }
}

/// Fetch the queens collection. Returns `None` on failure or on the server.
pub async fn fetch_queens(
    config: &ApiConfig,
    session: &SessionStore<impl SessionRepository>,
) -> Option<Vec<Queen>> {
    authed_get(&config.queens_url(), session).await
}

/// Fetch the runways collection. Returns `None` on failure or on the server.
pub async fn fetch_runways(
    config: &ApiConfig,
    session: &SessionStore<impl SessionRepository>,
) -> Option<Vec<Runway>> {
    authed_get(&config.runways_url(), session).await
}

/// Update the authenticated user's display name.
///
/// # Errors
///
/// Returns an error string if the request fails.
pub async fn update_profile_name(
    config: &ApiConfig,
    session: &SessionStore<impl SessionRepository>,
    name: &str,
) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let headers = session.auth_headers().map_err(|e| e.to_string())?;
        let mut req = gloo_net::http::Request::put(&config.profile_name_url());
        for (key, value) in headers.pairs() {
            req = req.header(key, value);
        }
        let payload = ProfileName { name: name.to_owned() };
        let resp = req
            .json(&payload)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(format!("rename failed: {}", resp.status()));
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (config, session, name);
        Err("not available on server".to_owned())
    }
}

/// GET a JSON collection with the session header bundle attached.
#[cfg(feature = "hydrate")]
async fn authed_get<T: serde::de::DeserializeOwned>(
    url: &str,
    session: &SessionStore<impl SessionRepository>,
) -> Option<T> {
    let headers = session.auth_headers().ok()?;
    let mut req = gloo_net::http::Request::get(url);
    for (key, value) in headers.pairs() {
        req = req.header(key, value);
    }
    let resp = req.send().await.ok()?;
    if !resp.ok() {
        return None;
    }
    resp.json::<T>().await.ok()
}

#[cfg(not(feature = "hydrate"))]
async fn authed_get<T: serde::de::DeserializeOwned>(
    url: &str,
    session: &SessionStore<impl SessionRepository>,
) -> Option<T> {
    let _ = (url, session);
    None
}
