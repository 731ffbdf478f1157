//! Driving port for user mutations.

use async_trait::async_trait;

use crate::domain::{Error, User, UserDraft, UserId};

/// Domain use-case port for creating, replacing, and deleting users.
///
/// Every method either applies its mutation completely or leaves the store
/// untouched.
#[async_trait]
pub trait UsersCommand: Send + Sync {
    /// Validate and store a new user.
    async fn create_user(&self, draft: UserDraft) -> Result<User, Error>;

    /// Replace an existing user's fields.
    ///
    /// A missing user is reported before the draft is validated.
    async fn update_user(&self, id: &UserId, draft: UserDraft) -> Result<User, Error>;

    /// Remove a user.
    async fn delete_user(&self, id: &UserId) -> Result<(), Error>;
}
