use async_trait::async_trait;

use crate::shared::persistence::TransactionRunner;
use crate::user::application::{
    domain::entities::UserId,
    ports::{
        incoming::use_cases::{GetUserOneError, GetUserOneUseCase, UserSummary},
        outgoing::{UserRepository, UserRepositoryError},
    },
};

#[derive(Debug, Clone)]
pub struct GetUserOneService<T, U> {
    runner: T,
    users: U,
}

impl<T, U> GetUserOneService<T, U>
where
    T: TransactionRunner,
    U: UserRepository<T::Scope>,
{
    pub fn new(runner: T, users: U) -> Self {
        Self { runner, users }
    }
}

#[async_trait]
impl<T, U> GetUserOneUseCase for GetUserOneService<T, U>
where
    T: TransactionRunner,
    U: UserRepository<T::Scope>,
{
    async fn execute(&self, id: UserId) -> Result<UserSummary, GetUserOneError> {
        let scope = self.runner.scope();

        self.users
            .get_one(&scope, id)
            .await
            .map(|user| UserSummary::from(&user))
            .map_err(|e| match e {
                UserRepositoryError::NotFound => GetUserOneError::UserNotFound,
                other => GetUserOneError::RepositoryError(format!("get user: {}", other)),
            })
    }
}
