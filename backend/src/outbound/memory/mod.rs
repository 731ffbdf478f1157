//! Process-local user store.
//!
//! Records live in a `HashMap` behind a single mutex, so each port operation
//! runs as one critical section and two writers never interleave. Nothing is
//! persisted; a restart starts from an empty store.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;
use tracing::{debug, error};

use crate::domain::ports::{UserRepository, UserRepositoryError};
use crate::domain::{User, UserDraft, UserId};

/// In-memory implementation of [`UserRepository`].
///
/// # Examples
/// ```
/// use users_api::domain::UserDraft;
/// use users_api::domain::ports::UserRepository;
/// use users_api::outbound::memory::InMemoryUserRepository;
///
/// # tokio::runtime::Runtime::new().unwrap().block_on(async {
/// let store = InMemoryUserRepository::new();
/// let user = store
///     .create(UserDraft::new("Ann", "ann@example.com", 30))
///     .await
///     .expect("create");
/// assert_eq!(store.find_by_id(user.id()).await.expect("find"), Some(user));
/// # });
/// ```
#[derive(Debug, Default)]
pub struct InMemoryUserRepository {
    users: Mutex<HashMap<UserId, User>>,
}

impl InMemoryUserRepository {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<MutexGuard<'_, HashMap<UserId, User>>, UserRepositoryError> {
        self.users.lock().map_err(|err| {
            error!(error = %err, "user store mutex poisoned");
            UserRepositoryError::unavailable("store lock poisoned")
        })
    }

    fn fresh_id(users: &HashMap<UserId, User>) -> UserId {
        loop {
            let id = UserId::random();
            if !users.contains_key(&id) {
                return id;
            }
        }
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create(&self, draft: UserDraft) -> Result<User, UserRepositoryError> {
        let mut users = self.lock()?;
        let id = Self::fresh_id(&users);
        let user = User::new(id, draft);
        users.insert(id, user.clone());
        debug!(user_id = %id, total = users.len(), "inserted user");
        Ok(user)
    }

    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserRepositoryError> {
        Ok(self.lock()?.get(id).cloned())
    }

    async fn list(&self) -> Result<Vec<User>, UserRepositoryError> {
        Ok(self.lock()?.values().cloned().collect())
    }

    async fn replace(
        &self,
        id: &UserId,
        draft: UserDraft,
    ) -> Result<Option<User>, UserRepositoryError> {
        let mut users = self.lock()?;
        let Some(existing) = users.remove(id) else {
            return Ok(None);
        };
        let updated = existing.replaced_with(draft);
        users.insert(*id, updated.clone());
        Ok(Some(updated))
    }

    async fn delete(&self, id: &UserId) -> Result<bool, UserRepositoryError> {
        let removed = self.lock()?.remove(id).is_some();
        if removed {
            debug!(user_id = %id, "removed user");
        }
        Ok(removed)
    }
}
