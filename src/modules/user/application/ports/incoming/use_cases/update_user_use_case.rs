use async_trait::async_trait;

use crate::user::application::domain::entities::UserId;

#[derive(Debug, Clone)]
pub struct UpdateUserCommand {
    id: UserId,
    name: String,
    age: i32,
    bio: String,
    avatar_url: String,
}

impl UpdateUserCommand {
    pub fn new(id: UserId, name: String, age: i32, bio: String, avatar_url: String) -> Self {
        Self {
            id,
            name,
            age,
            bio,
            avatar_url,
        }
    }

    pub fn id(&self) -> UserId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn age(&self) -> i32 {
        self.age
    }

    pub fn bio(&self) -> &str {
        &self.bio
    }

    pub fn avatar_url(&self) -> &str {
        &self.avatar_url
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum UpdateUserError {
    #[error("User not found")]
    UserNotFound,

    #[error("Profile not found")]
    ProfileNotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),

    #[error("Transaction failed: {0}")]
    TransactionFault(String),
}

#[async_trait]
pub trait UpdateUserUseCase: Send + Sync {
    async fn execute(&self, command: UpdateUserCommand) -> Result<(), UpdateUserError>;
}
