//! Request middleware.
//!
//! Purpose: request lifecycle concerns shared by every route: per-request
//! trace identifiers and the cross-origin policy.

pub mod cors;
pub mod trace;

pub use cors::cors;
pub use trace::Trace;
