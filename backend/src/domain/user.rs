//! User data model.
//!
//! A [`User`] is the stored record: an identifier assigned by the store plus
//! the caller-supplied fields held in a [`UserDraft`]. Only the email format
//! is ever validated, and that happens in the user service, not here.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Validation errors returned when parsing a [`UserId`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UserIdError {
    /// The identifier was empty.
    #[error("user id must not be empty")]
    Empty,
    /// The identifier was not a UUID.
    #[error("user id must be a valid UUID")]
    Invalid,
}

/// Stable user identifier stored as a UUID.
///
/// # Examples
/// ```
/// use users_api::domain::UserId;
///
/// let id = UserId::new("3fa85f64-5717-4562-b3fc-2c963f66afa6").expect("valid id");
/// assert_eq!(id.to_string(), "3fa85f64-5717-4562-b3fc-2c963f66afa6");
/// assert!(UserId::new("nonexistent-id").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct UserId(Uuid);

impl UserId {
    /// Parse a [`UserId`] from its string form.
    ///
    /// # Errors
    /// Returns [`UserIdError`] when the input is empty or not a UUID.
    pub fn new(id: impl AsRef<str>) -> Result<Self, UserIdError> {
        let id = id.as_ref();
        if id.is_empty() {
            return Err(UserIdError::Empty);
        }
        if id.trim() != id {
            return Err(UserIdError::Invalid);
        }
        Uuid::parse_str(id)
            .map(Self)
            .map_err(|_| UserIdError::Invalid)
    }

    /// Generate a new random (v4) [`UserId`].
    #[must_use]
    pub fn random() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.hyphenated())
    }
}

impl From<UserId> for String {
    fn from(value: UserId) -> Self {
        value.to_string()
    }
}

impl TryFrom<String> for UserId {
    type Error = UserIdError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Caller-supplied user fields, before the store assigns an identifier.
///
/// `name` and `age` are accepted as given; `email` is checked by the user
/// service before a draft reaches the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserDraft {
    /// Free-text name.
    pub name: String,
    /// Email address.
    pub email: String,
    /// Age in years.
    pub age: i64,
}

impl UserDraft {
    /// Build a draft from its three fields.
    pub fn new(name: impl Into<String>, email: impl Into<String>, age: i64) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            age,
        }
    }
}

/// Stored user record.
///
/// ## Invariants
/// - `id` is assigned once by the store and never changes.
/// - Every field is populated; there are no partial records.
///
/// Serialises as `{"id","name","email","age"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "UserDto", into = "UserDto")]
pub struct User {
    id: UserId,
    name: String,
    email: String,
    age: i64,
}

impl User {
    /// Attach an identifier to a draft.
    #[must_use]
    pub fn new(id: UserId, draft: UserDraft) -> Self {
        let UserDraft { name, email, age } = draft;
        Self {
            id,
            name,
            email,
            age,
        }
    }

    /// Overwrite every field except the identifier.
    #[must_use]
    pub fn replaced_with(self, draft: UserDraft) -> Self {
        Self::new(self.id, draft)
    }

    /// Stable user identifier.
    #[must_use]
    pub const fn id(&self) -> &UserId {
        &self.id
    }

    /// Free-text name.
    #[must_use]
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Email address.
    #[must_use]
    pub fn email(&self) -> &str {
        self.email.as_str()
    }

    /// Age in years.
    #[must_use]
    pub const fn age(&self) -> i64 {
        self.age
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct UserDto {
    id: String,
    name: String,
    email: String,
    age: i64,
}

impl From<User> for UserDto {
    fn from(value: User) -> Self {
        let User {
            id,
            name,
            email,
            age,
        } = value;
        Self {
            id: id.to_string(),
            name,
            email,
            age,
        }
    }
}

impl TryFrom<UserDto> for User {
    type Error = UserIdError;

    fn try_from(value: UserDto) -> Result<Self, Self::Error> {
        let UserDto {
            id,
            name,
            email,
            age,
        } = value;
        Ok(Self::new(UserId::new(id)?, UserDraft { name, email, age }))
    }
}
