//! Remote API surface: endpoint set and request helpers.

pub mod api;
pub mod types;
