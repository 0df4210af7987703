use async_trait::async_trait;

use crate::shared::persistence::TransactionRunner;
use crate::user::application::ports::{
    incoming::use_cases::{
        GetUserListError, GetUserListQuery, GetUserListUseCase, UserList, UserSummary,
    },
    outgoing::{UserRepository, UserRepositoryError},
};

#[derive(Debug, Clone)]
pub struct GetUserListService<T, U> {
    runner: T,
    users: U,
}

impl<T, U> GetUserListService<T, U>
where
    T: TransactionRunner,
    U: UserRepository<T::Scope>,
{
    pub fn new(runner: T, users: U) -> Self {
        Self { runner, users }
    }
}

#[async_trait]
impl<T, U> GetUserListUseCase for GetUserListService<T, U>
where
    T: TransactionRunner,
    U: UserRepository<T::Scope>,
{
    async fn execute(&self, query: GetUserListQuery) -> Result<UserList, GetUserListError> {
        let scope = self.runner.scope();

        match self
            .users
            .get_list(&scope, query.effective_limit(), query.offset())
            .await
        {
            Ok(users) => Ok(UserList {
                users: users.iter().map(UserSummary::from).collect(),
            }),
            // An empty page is a valid answer, not a failure.
            Err(UserRepositoryError::NotFound) => Ok(UserList::default()),
            Err(e) => Err(GetUserListError::QueryFailed(format!("get user list: {}", e))),
        }
    }
}
