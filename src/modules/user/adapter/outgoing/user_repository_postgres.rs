use async_trait::async_trait;
use chrono::Utc;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DbErr, EntityTrait, QueryFilter, QueryOrder, QuerySelect, Set,
};

use crate::modules::user::application::domain::entities::{NewUser, User, UserId};
use crate::modules::user::application::ports::outgoing::{UserRepository, UserRepositoryError};
use crate::shared::persistence::DbScope;

// SeaORM entity imports
use super::sea_orm_entity::users::{
    ActiveModel as UserActiveModel, Column as UserColumn, Entity as UserEntity,
};

#[derive(Debug, Clone, Default)]
pub struct UserRepositoryPostgres;

impl UserRepositoryPostgres {
    pub fn new() -> Self {
        Self
    }
}

fn db_error(e: DbErr) -> UserRepositoryError {
    UserRepositoryError::DatabaseError(e.to_string())
}

pub(super) fn page_bounds(limit: i64, offset: i64) -> Result<(u64, u64), String> {
    let limit = u64::try_from(limit).map_err(|_| "LIMIT must not be negative".to_string())?;
    let offset = u64::try_from(offset).map_err(|_| "OFFSET must not be negative".to_string())?;
    Ok((limit, offset))
}

#[async_trait]
impl UserRepository<DbScope> for UserRepositoryPostgres {
    async fn create(&self, scope: &DbScope, user: NewUser) -> Result<UserId, UserRepositoryError> {
        let active = UserActiveModel {
            name: Set(user.name),
            age: Set(user.age),
            ..Default::default()
        };

        let inserted = active.insert(scope).await.map_err(db_error)?;

        Ok(UserId::from(inserted.id))
    }

    async fn update(&self, scope: &DbScope, user: &User) -> Result<(), UserRepositoryError> {
        // Entity::update skips ActiveModelBehavior, so updated_at is stamped here.
        let active = UserActiveModel {
            id: Set(user.id.value()),
            name: Set(user.name.clone()),
            age: Set(user.age),
            updated_at: Set(Some(Utc::now().into())),
            ..Default::default()
        };

        match UserEntity::update(active)
            .filter(UserColumn::DeletedAt.is_null())
            .exec(scope)
            .await
        {
            Ok(_) => Ok(()),
            Err(DbErr::RecordNotUpdated) => Err(UserRepositoryError::NotFound),
            Err(e) => Err(db_error(e)),
        }
    }

    async fn delete(&self, scope: &DbScope, id: UserId) -> Result<(), UserRepositoryError> {
        let now: sea_orm::prelude::DateTimeWithTimeZone = Utc::now().into();

        UserEntity::update_many()
            .col_expr(UserColumn::DeletedAt, Expr::value(now))
            .filter(UserColumn::Id.eq(id.value()))
            .filter(UserColumn::DeletedAt.is_null())
            .exec(scope)
            .await
            .map_err(db_error)?;

        Ok(())
    }

    async fn get_one(&self, scope: &DbScope, id: UserId) -> Result<User, UserRepositoryError> {
        let model = UserEntity::find_by_id(id.value())
            .filter(UserColumn::DeletedAt.is_null())
            .one(scope)
            .await
            .map_err(db_error)?
            .ok_or(UserRepositoryError::NotFound)?;

        Ok(model.to_domain())
    }

    async fn get_list(
        &self,
        scope: &DbScope,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<User>, UserRepositoryError> {
        let (limit, offset) = page_bounds(limit, offset).map_err(UserRepositoryError::DatabaseError)?;

        let models = UserEntity::find()
            .filter(UserColumn::DeletedAt.is_null())
            .order_by_asc(UserColumn::Id)
            .limit(limit)
            .offset(offset)
            .all(scope)
            .await
            .map_err(db_error)?;

        if models.is_empty() {
            return Err(UserRepositoryError::NotFound);
        }

        Ok(models.iter().map(|m| m.to_domain()).collect())
    }
}
