use async_trait::async_trait;

use super::UserSummary;
use crate::user::application::domain::entities::UserId;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GetUserOneError {
    #[error("User not found")]
    UserNotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait GetUserOneUseCase: Send + Sync {
    async fn execute(&self, id: UserId) -> Result<UserSummary, GetUserOneError>;
}
