//! Port abstraction for the user store and its errors.
//!
//! The store owns the authoritative id → record mapping. Each method is a
//! single atomic operation; adapters must not let two mutations of the same
//! record interleave.

use async_trait::async_trait;

use crate::domain::{User, UserDraft, UserId};

use super::define_port_error;

define_port_error! {
    /// Errors raised by user store adapters.
    pub enum UserRepositoryError {
        /// The store could not be accessed, for example after a writer panicked.
        Unavailable { message: String } => "user store unavailable: {message}",
    }
}

/// Store contract for user records.
///
/// Not-found outcomes are values (`None`/`false`), not errors; the error type
/// is reserved for the store itself failing.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Assign a fresh identifier to `draft`, store it, and return the record.
    async fn create(&self, draft: UserDraft) -> Result<User, UserRepositoryError>;

    /// Fetch a user by identifier.
    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserRepositoryError>;

    /// Return every stored user in no particular order.
    async fn list(&self) -> Result<Vec<User>, UserRepositoryError>;

    /// Overwrite the fields of an existing user, keeping its identifier.
    ///
    /// Returns `None`, without mutating anything, when `id` is absent.
    async fn replace(
        &self,
        id: &UserId,
        draft: UserDraft,
    ) -> Result<Option<User>, UserRepositoryError>;

    /// Remove a user, returning whether a record was present.
    async fn delete(&self, id: &UserId) -> Result<bool, UserRepositoryError>;
}
