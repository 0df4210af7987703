use async_trait::async_trait;

use crate::user::application::domain::entities::UserId;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DeleteUserError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

/// Soft-deletes the user row. The profile row is left untouched.
#[async_trait]
pub trait DeleteUserUseCase: Send + Sync {
    async fn execute(&self, id: UserId) -> Result<(), DeleteUserError>;
}
