use async_trait::async_trait;

use crate::shared::persistence::{TransactionError, TransactionRunner};
use crate::user::application::ports::{
    incoming::use_cases::{UpdateUserCommand, UpdateUserError, UpdateUserUseCase},
    outgoing::{ProfileRepository, ProfileRepositoryError, UserRepository, UserRepositoryError},
};

#[derive(Debug, Clone)]
pub struct UpdateUserService<T, U, P> {
    runner: T,
    users: U,
    profiles: P,
}

impl<T, U, P> UpdateUserService<T, U, P>
where
    T: TransactionRunner + 'static,
    U: UserRepository<T::Scope> + Clone + 'static,
    P: ProfileRepository<T::Scope> + Clone + 'static,
{
    pub fn new(runner: T, users: U, profiles: P) -> Self {
        Self {
            runner,
            users,
            profiles,
        }
    }

    async fn update_pair(
        users: &U,
        profiles: &P,
        scope: &T::Scope,
        command: UpdateUserCommand,
    ) -> Result<(), UpdateUserError> {
        let mut user = users
            .get_one(scope, command.id())
            .await
            .map_err(|e| match e {
                UserRepositoryError::NotFound => UpdateUserError::UserNotFound,
                other => UpdateUserError::RepositoryError(format!("get user: {}", other)),
            })?;

        user.name = command.name().to_string();
        user.age = command.age();

        users.update(scope, &user).await.map_err(|e| match e {
            UserRepositoryError::NotFound => UpdateUserError::UserNotFound,
            other => UpdateUserError::RepositoryError(format!("update user: {}", other)),
        })?;

        let mut profile = profiles
            .get_by_user_id(scope, user.id)
            .await
            .map_err(|e| match e {
                ProfileRepositoryError::NotFound => UpdateUserError::ProfileNotFound,
                other => UpdateUserError::RepositoryError(format!("get profile: {}", other)),
            })?;

        profile.bio = command.bio().to_string();
        profile.avatar_url = command.avatar_url().to_string();

        profiles
            .update(scope, &profile)
            .await
            .map_err(|e| match e {
                ProfileRepositoryError::NotFound => UpdateUserError::ProfileNotFound,
                other => UpdateUserError::RepositoryError(format!("update profile: {}", other)),
            })
    }
}

#[async_trait]
impl<T, U, P> UpdateUserUseCase for UpdateUserService<T, U, P>
where
    T: TransactionRunner + 'static,
    U: UserRepository<T::Scope> + Clone + 'static,
    P: ProfileRepository<T::Scope> + Clone + 'static,
{
    async fn execute(&self, command: UpdateUserCommand) -> Result<(), UpdateUserError> {
        let users = self.users.clone();
        let profiles = self.profiles.clone();

        self.runner
            .run(move |scope| {
                Box::pin(async move { Self::update_pair(&users, &profiles, scope, command).await })
            })
            .await
            .map_err(|e| match e {
                TransactionError::Work(inner) => inner,
                other => UpdateUserError::TransactionFault(other.to_string()),
            })
    }
}
