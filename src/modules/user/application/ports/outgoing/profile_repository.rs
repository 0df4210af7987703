use async_trait::async_trait;

use crate::user::application::domain::entities::{NewProfile, Profile, ProfileId, UserId};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ProfileRepositoryError {
    #[error("Profile not found")]
    NotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait ProfileRepository<S: Sync>: Send + Sync {
    async fn create(
        &self,
        scope: &S,
        profile: NewProfile,
    ) -> Result<ProfileId, ProfileRepositoryError>;

    async fn update(&self, scope: &S, profile: &Profile) -> Result<(), ProfileRepositoryError>;

    /// Hard delete by profile id.
    async fn delete(&self, scope: &S, id: ProfileId) -> Result<(), ProfileRepositoryError>;

    async fn get_one(&self, scope: &S, id: ProfileId) -> Result<Profile, ProfileRepositoryError>;

    async fn get_by_user_id(
        &self,
        scope: &S,
        user_id: UserId,
    ) -> Result<Profile, ProfileRepositoryError>;

    async fn get_list(
        &self,
        scope: &S,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Profile>, ProfileRepositoryError>;
}
