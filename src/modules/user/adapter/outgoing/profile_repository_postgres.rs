use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DbErr, EntityTrait, QueryFilter, QueryOrder, QuerySelect, Set,
};

use crate::modules::user::application::domain::entities::{
    NewProfile, Profile, ProfileId, UserId,
};
use crate::modules::user::application::ports::outgoing::{
    ProfileRepository, ProfileRepositoryError,
};
use crate::shared::persistence::DbScope;

use super::sea_orm_entity::profiles::{
    ActiveModel as ProfileActiveModel, Column as ProfileColumn, Entity as ProfileEntity,
};
use super::user_repository_postgres::page_bounds;

#[derive(Debug, Clone, Default)]
pub struct ProfileRepositoryPostgres;

impl ProfileRepositoryPostgres {
    pub fn new() -> Self {
        Self
    }
}

fn db_error(e: DbErr) -> ProfileRepositoryError {
    ProfileRepositoryError::DatabaseError(e.to_string())
}

#[async_trait]
impl ProfileRepository<DbScope> for ProfileRepositoryPostgres {
    async fn create(
        &self,
        scope: &DbScope,
        profile: NewProfile,
    ) -> Result<ProfileId, ProfileRepositoryError> {
        let active = ProfileActiveModel {
            user_id: Set(profile.user_id.value()),
            bio: Set(profile.bio),
            avatar_url: Set(profile.avatar_url),
            ..Default::default()
        };

        let inserted = active.insert(scope).await.map_err(db_error)?;

        Ok(ProfileId::from(inserted.id))
    }

    async fn update(&self, scope: &DbScope, profile: &Profile) -> Result<(), ProfileRepositoryError> {
        let active = ProfileActiveModel {
            id: Set(profile.id.value()),
            bio: Set(profile.bio.clone()),
            avatar_url: Set(profile.avatar_url.clone()),
            updated_at: Set(Some(Utc::now().into())),
            ..Default::default()
        };

        match ProfileEntity::update(active).exec(scope).await {
            Ok(_) => Ok(()),
            Err(DbErr::RecordNotUpdated) => Err(ProfileRepositoryError::NotFound),
            Err(e) => Err(db_error(e)),
        }
    }

    async fn delete(&self, scope: &DbScope, id: ProfileId) -> Result<(), ProfileRepositoryError> {
        ProfileEntity::delete_by_id(id.value())
            .exec(scope)
            .await
            .map_err(db_error)?;

        Ok(())
    }

    async fn get_one(
        &self,
        scope: &DbScope,
        id: ProfileId,
    ) -> Result<Profile, ProfileRepositoryError> {
        ProfileEntity::find_by_id(id.value())
            .one(scope)
            .await
            .map_err(db_error)?
            .map(|m| m.to_domain())
            .ok_or(ProfileRepositoryError::NotFound)
    }

    async fn get_by_user_id(
        &self,
        scope: &DbScope,
        user_id: UserId,
    ) -> Result<Profile, ProfileRepositoryError> {
        ProfileEntity::find()
            .filter(ProfileColumn::UserId.eq(user_id.value()))
            .order_by_asc(ProfileColumn::Id)
            .one(scope)
            .await
            .map_err(db_error)?
            .map(|m| m.to_domain())
            .ok_or(ProfileRepositoryError::NotFound)
    }

    async fn get_list(
        &self,
        scope: &DbScope,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Profile>, ProfileRepositoryError> {
        let (limit, offset) =
            page_bounds(limit, offset).map_err(ProfileRepositoryError::DatabaseError)?;

        let models = ProfileEntity::find()
            .order_by_asc(ProfileColumn::Id)
            .limit(limit)
            .offset(offset)
            .all(scope)
            .await
            .map_err(db_error)?;

        if models.is_empty() {
            return Err(ProfileRepositoryError::NotFound);
        }

        Ok(models.iter().map(|m| m.to_domain()).collect())
    }
}
