use async_trait::async_trait;

use crate::user::application::domain::entities::UserId;

//
// ──────────────────────────────────────────────────────────
// Create User Command
// ──────────────────────────────────────────────────────────
//

/// Fields are taken as given: empty names and any age are accepted.
#[derive(Debug, Clone)]
pub struct CreateUserCommand {
    name: String,
    age: i32,
    bio: String,
    avatar_url: String,
}

impl CreateUserCommand {
    pub fn new(name: String, age: i32, bio: String, avatar_url: String) -> Self {
        Self {
            name,
            age,
            bio,
            avatar_url,
        }
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

//
// ──────────────────────────────────────────────────────────
// Use Case Error
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CreateUserError {
    #[error("Repository error: {0}")]
    RepositoryError(String),

    #[error("Transaction failed: {0}")]
    TransactionFault(String),
}

//
// ──────────────────────────────────────────────────────────
// Incoming Port (Use Case)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait CreateUserUseCase: Send + Sync {
    async fn execute(&self, command: CreateUserCommand) -> Result<UserId, CreateUserError>;
}
