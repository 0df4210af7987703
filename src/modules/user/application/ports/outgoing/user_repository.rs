use async_trait::async_trait;

use crate::user::application::domain::entities::{NewUser, User, UserId};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum UserRepositoryError {
    #[error("User not found")]
    NotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

/// Persistence for user rows. Every call runs against the scope handed in,
/// so writes issued inside a transaction scope commit or roll back with it.
/// Soft-deleted rows are invisible to every method.
#[async_trait]
pub trait UserRepository<S: Sync>: Send + Sync {
    async fn create(&self, scope: &S, user: NewUser) -> Result<UserId, UserRepositoryError>;

    /// Writes `name`, `age` and a fresh `updated_at` for the row matching
    /// `user.id`.
    async fn update(&self, scope: &S, user: &User) -> Result<(), UserRepositoryError>;

    /// Soft delete. Succeeds when no live row matches.
    async fn delete(&self, scope: &S, id: UserId) -> Result<(), UserRepositoryError>;

    async fn get_one(&self, scope: &S, id: UserId) -> Result<User, UserRepositoryError>;

    /// Page of users in id order. An empty page is `NotFound`.
    async fn get_list(
        &self,
        scope: &S,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<User>, UserRepositoryError>;
}
