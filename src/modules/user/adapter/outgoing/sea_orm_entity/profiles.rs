use crate::modules::user::application::domain::entities::{Profile, ProfileId, UserId};
use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "profiles")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    pub user_id: i32,

    #[sea_orm(column_type = "Text")]
    pub bio: String,

    pub avatar_url: String,

    pub created_at: Option<DateTimeWithTimeZone>,

    pub updated_at: Option<DateTimeWithTimeZone>,
}

impl Model {
    pub fn to_domain(&self) -> Profile {
        Profile {
            id: ProfileId::from(self.id),
            user_id: UserId::from(self.user_id),
            bio: self.bio.clone(),
            avatar_url: self.avatar_url.clone(),
            created_at: self.created_at.map(Into::into),
            updated_at: self.updated_at.map(Into::into),
        }
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::UserId",
        to = "super::users::Column::Id"
    )]
    User,
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

#[async_trait::async_trait]
impl ActiveModelBehavior for ActiveModel {
    async fn before_save<C>(mut self, _db: &C, insert: bool) -> Result<Self, DbErr>
    where
        C: ConnectionTrait,
    {
        use chrono::Utc;
        use sea_orm::ActiveValue::{NotSet, Set};

        let now: DateTimeWithTimeZone = Utc::now().into();

        if insert && matches!(self.created_at, NotSet) {
            self.created_at = Set(Some(now));
        }
        self.updated_at = Set(Some(now));

        Ok(self)
    }
}
