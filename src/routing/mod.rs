//! Navigation: the static route table and the authorization guard.
//!
//! DESIGN
//! ======
//! Routes are data, not code: an immutable table fixed at startup. The guard
//! is a pure function over a target descriptor and the current token, so the
//! whole authorization policy is unit-testable without a live router.

pub mod guard;
pub mod routes;
