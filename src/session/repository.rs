//! Session persistence behind a small repository trait.
//!
//! Client-side (hydrate): `localStorage` via `web-sys`.
//! Everywhere else: an in-memory map, so tests and SSR never touch a browser.
//!
//! ERROR HANDLING
//! ==============
//! A missing value is not an error (`Ok(None)`); only an unreachable store
//! surfaces as `SessionError::StoreUnavailable`, and callers treat that as
//! fatal to the operation in progress.

#[cfg(test)]
#[path = "repository_test.rs"]
mod repository_test;

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use thiserror::Error;

/// Storage key the login flow writes the bearer token under.
pub const TOKEN_KEY: &str = "token";

/// Storage key for the coarse authorization tier.
pub const ACCESS_LEVEL_KEY: &str = "accessLevel";

/// Failure reaching the persistent session store.
#[derive(Debug, Error)]
pub enum SessionError {
    /// The underlying store could not be reached. No recovery is defined.
    #[error("session store unavailable")]
    StoreUnavailable,
}

/// String-keyed persistence for session values.
///
/// The storage medium is swappable (browser storage, in-memory) without
/// touching guard logic. Writes happen in the login/logout flows; the guard
/// and the API layer only call `get`.
pub trait SessionRepository {
    /// Read the current value for `key`, or `None` if unset.
    fn get(&self, key: &str) -> Result<Option<String>, SessionError>;

    /// Persist `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &str) -> Result<(), SessionError>;

    /// Remove every session value (logout).
    fn clear(&self) -> Result<(), SessionError>;
}

/// In-memory repository for tests and non-browser builds.
///
/// Clones share the same backing map, mirroring how every `localStorage`
/// handle in a tab sees the same data.
#[derive(Clone, Debug, Default)]
pub struct MemoryRepository {
    entries: Rc<RefCell<HashMap<String, String>>>,
}

impl SessionRepository for MemoryRepository {
    fn get(&self, key: &str) -> Result<Option<String>, SessionError> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), SessionError> {
        self.entries.borrow_mut().insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn clear(&self) -> Result<(), SessionError> {
        self.entries.borrow_mut().clear();
        Ok(())
    }
}

/// `localStorage`-backed repository. Requires a browser environment.
#[cfg(feature = "hydrate")]
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserRepository;

#[cfg(feature = "hydrate")]
impl BrowserRepository {
    fn storage() -> Result<web_sys::Storage, SessionError> {
        let Some(window) = web_sys::window() else {
            return Err(SessionError::StoreUnavailable);
        };
        match window.local_storage() {
            Ok(Some(storage)) => Ok(storage),
            _ => Err(SessionError::StoreUnavailable),
        }
    }
}

#[cfg(feature = "hydrate")]
impl SessionRepository for BrowserRepository {
    fn get(&self, key: &str) -> Result<Option<String>, SessionError> {
        match Self::storage()?.get_item(key) {
            Ok(value) => Ok(value),
            Err(_) => Err(SessionError::StoreUnavailable),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), SessionError> {
        match Self::storage()?.set_item(key, value) {
            Ok(()) => Ok(()),
            Err(_) => Err(SessionError::StoreUnavailable),
        }
    }

    fn clear(&self) -> Result<(), SessionError> {
        match Self::storage()?.clear() {
            Ok(()) => Ok(()),
            Err(_) => Err(SessionError::StoreUnavailable),
        }
    }
}

/// The repository for this build: `localStorage` in the browser, in-memory
/// elsewhere.
#[cfg(feature = "hydrate")]
pub fn default_repository() -> BrowserRepository {
    BrowserRepository
}

/// The repository for this build: `localStorage` in the browser, in-memory
/// elsewhere.
#[cfg(not(feature = "hydrate"))]
pub fn default_repository() -> MemoryRepository {
    MemoryRepository::default()
}
