//! Page components, one per route.
//!
//! DESIGN
//! ======
//! Pages are declarative. The only control flow they carry is the mount-time
//! guard check via [`use_route_guard`]: protected content renders only once
//! the guard resolves to a Proceed, so a redirect in flight — or a failed
//! store read — never leaves an authorized view observable. Authorization
//! failures never surface as errors here.


pub mod index;
pub mod login;
pub mod profile;
pub mod queen;
pub mod runway;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::routing::guard::{Resolution, RouteGuard};
use crate::session::repository::SessionError;
use crate::session::store::default_store;

/// Guard outcome as observed by a page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum GuardState {
    /// Evaluation has not run yet (initial render, server side).
    #[default]
    Pending,
    /// The attempt resolved to Proceed; the page may render.
    Allowed,
    /// A redirect is underway, or the store read failed. Nothing renders.
    Blocked,
}

/// Map a guard outcome to what the page may show. A store failure is fatal
/// to the attempt and never becomes an `Allowed`.
fn guard_state(outcome: &Result<Resolution, SessionError>) -> GuardState {
    match outcome {
        Ok(Resolution::Proceed) => GuardState::Allowed,
        Ok(Resolution::Redirect(_)) | Err(_) => GuardState::Blocked,
    }
}

/// Run the navigation guard for the route addressed by `path` when the page
/// mounts. Follows any redirect — the redirected navigation re-enters the
/// guard as a fresh attempt on the target page — and reports the outcome so
/// the page can gate its protected content on `Allowed`.
pub fn use_route_guard(path: &'static str) -> RwSignal<GuardState> {
    let state = RwSignal::new(GuardState::Pending);
    let navigate = use_navigate();
    Effect::new(move || {
        let guard = RouteGuard::new(default_store());
        let outcome = guard.check_path(path);
        state.set(guard_state(&outcome));
        match outcome {
            Ok(Resolution::Redirect(target)) => navigate(target, NavigateOptions::default()),
            Ok(Resolution::Proceed) => {}
            // An unreachable store is fatal to the attempt; the page stays
            // blocked rather than guessing at an authorization state.
            Err(_e) => {
                #[cfg(feature = "hydrate")]
                log::error!("route guard: {_e}");
            }
        }
    });
    state
}
