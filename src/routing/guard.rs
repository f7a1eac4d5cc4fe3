//! Navigation authorization guard.
//!
//! Every route transition is gated here before it completes. The decision
//! depends only on the target route and token presence; the origin route
//! never influences it. A failed check manifests as a silent redirect, never
//! an error surfaced to the view layer.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use crate::routing::routes::{INDEX_PATH, LOGIN_PATH, LOGIN_ROUTE, RouteDescriptor, by_path};
use crate::session::repository::{SessionError, SessionRepository};
use crate::session::store::SessionStore;

/// Outcome of one navigation attempt: exactly one of the two, decided once.
/// A redirect target re-enters the guard as a fresh attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Resolution {
    /// Let the transition continue unmodified.
    Proceed,
    /// Abandon the transition and navigate to the given path instead.
    Redirect(&'static str),
}

/// Decide a single navigation attempt from the target route and the current
/// token.
///
/// Pure and synchronous: no store reads, no side effects. A missing token on
/// a protected route resolves to a redirect, not an error.
pub fn evaluate(to: &RouteDescriptor, token: Option<&str>) -> Resolution {
    if !to.requires_auth {
        return Resolution::Proceed;
    }
    if token.is_none() {
        return Resolution::Redirect(LOGIN_PATH);
    }
    // The login route registers as "Login"; compare case-insensitively so an
    // authenticated session is sent to the index regardless of casing.
    if to.name.eq_ignore_ascii_case(LOGIN_ROUTE.name) {
        return Resolution::Redirect(INDEX_PATH);
    }
    Resolution::Proceed
}

/// Guard bound to a session repository, for use at the navigation seam.
///
/// Store failures propagate: the guard defines no recovery for an
/// unavailable session store.
pub struct RouteGuard<R: SessionRepository> {
    session: SessionStore<R>,
}

impl<R: SessionRepository> RouteGuard<R> {
    pub fn new(session: SessionStore<R>) -> Self {
        Self { session }
    }

    /// Gate one attempt at `to` against the currently persisted session.
    pub fn check(&self, to: &RouteDescriptor) -> Result<Resolution, SessionError> {
        let token = self.session.token()?;
        Ok(evaluate(to, token.as_deref()))
    }

    /// Gate one attempt addressed by path. Paths outside the route table
    /// carry no authorization requirement and proceed without a store read.
    pub fn check_path(&self, path: &str) -> Result<Resolution, SessionError> {
        match by_path(path) {
            Some(route) => self.check(route),
            None => Ok(Resolution::Proceed),
        }
    }
}
