//! Durable authentication state.
//!
//! DESIGN
//! ======
//! The session is a single-writer-many-readers contract: login and logout
//! flows write the token and access level; everything here only reads. Reads
//! always go to the persistent repository, so a logout elsewhere in the tab
//! is visible to the next read without any coordination.

pub mod repository;
pub mod store;
