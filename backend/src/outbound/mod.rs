//! Outbound adapters implementing domain ports.
//!
//! - **memory**: process-local user store behind a mutex.
//!
//! Adapters translate between domain types and their storage representation
//! and hold no business rules.

pub mod memory;
