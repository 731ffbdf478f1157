//! User lifecycle service.
//!
//! Implements the driving ports on top of a [`UserRepository`]: email
//! validation gates every write, and updates check existence first so a
//! request naming an unknown user reports not-found even when its email is
//! also malformed.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;

use crate::domain::email::is_valid_email;
use crate::domain::ports::{UserRepository, UserRepositoryError, UsersCommand, UsersQuery};
use crate::domain::{Error, User, UserDraft, UserId};

/// Message returned when a user id is unknown.
pub const USER_NOT_FOUND: &str = "User not found";
/// Message returned when a created user's email is malformed.
pub const CREATE_INVALID_EMAIL: &str = "Please enter a valid email";
/// Message returned when an updated user's email is malformed.
pub const UPDATE_INVALID_EMAIL: &str = "Invalid email format";

/// User service implementing [`UsersCommand`] and [`UsersQuery`].
#[derive(Clone)]
pub struct UserService<R> {
    repository: Arc<R>,
}

impl<R> UserService<R> {
    /// Create a service over the given store.
    pub const fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }
}

impl<R> UserService<R>
where
    R: UserRepository,
{
    fn map_repository_error(error: UserRepositoryError) -> Error {
        match error {
            UserRepositoryError::Unavailable { message } => {
                Error::internal(format!("user store unavailable: {message}"))
            }
        }
    }

    fn not_found() -> Error {
        Error::not_found(USER_NOT_FOUND)
    }

    async fn require_user(&self, id: &UserId) -> Result<User, Error> {
        self.repository
            .find_by_id(id)
            .await
            .map_err(Self::map_repository_error)?
            .ok_or_else(Self::not_found)
    }
}

#[async_trait]
impl<R> UsersQuery for UserService<R>
where
    R: UserRepository,
{
    async fn list_users(&self) -> Result<Vec<User>, Error> {
        self.repository
            .list()
            .await
            .map_err(Self::map_repository_error)
    }

    async fn get_user(&self, id: &UserId) -> Result<User, Error> {
        self.require_user(id).await
    }
}

#[async_trait]
impl<R> UsersCommand for UserService<R>
where
    R: UserRepository,
{
    async fn create_user(&self, draft: UserDraft) -> Result<User, Error> {
        if !is_valid_email(&draft.email) {
            return Err(Error::invalid_request(CREATE_INVALID_EMAIL));
        }
        let user = self
            .repository
            .create(draft)
            .await
            .map_err(Self::map_repository_error)?;
        info!(user_id = %user.id(), "created user");
        Ok(user)
    }

    async fn update_user(&self, id: &UserId, draft: UserDraft) -> Result<User, Error> {
        self.require_user(id).await?;
        if !is_valid_email(&draft.email) {
            return Err(Error::invalid_request(UPDATE_INVALID_EMAIL));
        }
        // The record may have been deleted since the existence check.
        let user = self
            .repository
            .replace(id, draft)
            .await
            .map_err(Self::map_repository_error)?
            .ok_or_else(Self::not_found)?;
        info!(user_id = %id, "updated user");
        Ok(user)
    }

    async fn delete_user(&self, id: &UserId) -> Result<(), Error> {
        let removed = self
            .repository
            .delete(id)
            .await
            .map_err(Self::map_repository_error)?;
        if !removed {
            return Err(Self::not_found());
        }
        info!(user_id = %id, "deleted user");
        Ok(())
    }
}
