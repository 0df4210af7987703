use async_trait::async_trait;

use crate::shared::persistence::TransactionRunner;
use crate::user::application::{
    domain::entities::UserId,
    ports::{
        incoming::use_cases::{DeleteUserError, DeleteUserUseCase},
        outgoing::UserRepository,
    },
};

/// Single statement, so it runs on the pool scope without a transaction.
#[derive(Debug, Clone)]
pub struct DeleteUserService<T, U> {
    runner: T,
    users: U,
}

impl<T, U> DeleteUserService<T, U>
where
    T: TransactionRunner,
    U: UserRepository<T::Scope>,
{
    pub fn new(runner: T, users: U) -> Self {
        Self { runner, users }
    }
}

#[async_trait]
impl<T, U> DeleteUserUseCase for DeleteUserService<T, U>
where
    T: TransactionRunner,
    U: UserRepository<T::Scope>,
{
    async fn execute(&self, id: UserId) -> Result<(), DeleteUserError> {
        let scope = self.runner.scope();

        self.users
            .delete(&scope, id)
            .await
            .map_err(|e| DeleteUserError::RepositoryError(format!("delete user: {}", e)))
    }
}
