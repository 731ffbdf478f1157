//! Driving port for user reads.
//!
//! Inbound adapters use this port to fetch user records without importing
//! the store.

use async_trait::async_trait;

use crate::domain::{Error, User, UserId};

/// Domain use-case port for reading users.
#[async_trait]
pub trait UsersQuery: Send + Sync {
    /// Return every stored user. An empty store yields an empty list.
    async fn list_users(&self) -> Result<Vec<User>, Error>;

    /// Return one user, or a not-found error.
    async fn get_user(&self, id: &UserId) -> Result<User, Error>;
}
