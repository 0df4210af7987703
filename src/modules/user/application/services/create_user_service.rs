use async_trait::async_trait;

use crate::shared::persistence::{TransactionError, TransactionRunner};
use crate::user::application::{
    domain::entities::{NewProfile, NewUser, UserId},
    ports::{
        incoming::use_cases::{CreateUserCommand, CreateUserError, CreateUserUseCase},
        outgoing::{ProfileRepository, UserRepository},
    },
};

#[derive(Debug, Clone)]
pub struct CreateUserService<T, U, P> {
    runner: T,
    users: U,
    profiles: P,
}

impl<T, U, P> CreateUserService<T, U, P>
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

    /// User first, then the profile pointing at it, on the same scope.
    async fn create_pair(
        users: &U,
        profiles: &P,
        scope: &T::Scope,
        command: CreateUserCommand,
    ) -> Result<UserId, CreateUserError> {
        let user_id = users
            .create(
                scope,
                NewUser {
                    name: command.name().to_string(),
                    age: command.age(),
                },
            )
            .await
            .map_err(|e| CreateUserError::RepositoryError(format!("create user: {}", e)))?;

        profiles
            .create(
                scope,
                NewProfile {
                    user_id,
                    bio: command.bio().to_string(),
                    avatar_url: command.avatar_url().to_string(),
                },
            )
            .await
            .map_err(|e| CreateUserError::RepositoryError(format!("create profile: {}", e)))?;

        Ok(user_id)
    }
}

#[async_trait]
impl<T, U, P> CreateUserUseCase for CreateUserService<T, U, P>
where
    T: TransactionRunner + 'static,
    U: UserRepository<T::Scope> + Clone + 'static,
    P: ProfileRepository<T::Scope> + Clone + 'static,
{
    async fn execute(&self, command: CreateUserCommand) -> Result<UserId, CreateUserError> {
        let users = self.users.clone();
        let profiles = self.profiles.clone();

        self.runner
            .run(move |scope| {
                Box::pin(async move { Self::create_pair(&users, &profiles, scope, command).await })
            })
            .await
            .map_err(|e| match e {
                TransactionError::Work(inner) => inner,
                other => CreateUserError::TransactionFault(other.to_string()),
            })
    }
}
