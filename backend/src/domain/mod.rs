//! Domain primitives, ports, and the user lifecycle service.
//!
//! Purpose: define the user record, the store contract, and the rules that
//! turn requests into store mutations, independent of HTTP.
//!
//! Public surface:
//! - Error / ErrorCode: transport-agnostic failure payload.
//! - User / UserDraft / UserId: the stored record and its inputs.
//! - UserService: implementation of the driving ports over a store.
//! - TraceId: request correlation identifier.

pub mod email;
pub mod error;
pub mod ports;
pub mod trace_id;
pub mod user;
pub mod user_service;

pub use self::error::{Error, ErrorCode, ErrorValidationError};
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};
pub use self::user::{User, UserDraft, UserId, UserIdError};
pub use self::user_service::UserService;
