use async_trait::async_trait;

use super::errors::RepositoryResult;
use crate::domain::user::value_objects::{Email, Username};

/// User data for persistence
///
/// The password is the stored hash; it is never serialized.
#[derive(Debug, Clone)]
pub struct User {
    pub id: i64,
    pub username: Username,
    pub email: Email,
    pub password: String,
    pub confirmed: bool,
    pub facebook: Option<String>,
}

/// Repository trait for users
///
/// Read-only: accounts are created and authenticated elsewhere.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find a user by ID
    async fn find_by_id(&self, id: i64) -> RepositoryResult<Option<User>>;
}
