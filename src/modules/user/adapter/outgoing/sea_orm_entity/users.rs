use crate::modules::user::application::domain::entities::{User, UserId};
use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    pub name: String,

    pub age: i32,

    pub created_at: Option<DateTimeWithTimeZone>,

    pub updated_at: Option<DateTimeWithTimeZone>,

    pub deleted_at: Option<DateTimeWithTimeZone>,
}

impl Model {
    pub fn to_domain(&self) -> User {
        User {
            id: UserId::from(self.id),
            name: self.name.clone(),
            age: self.age,
            created_at: self.created_at.map(Into::into),
            updated_at: self.updated_at.map(Into::into),
            deleted_at: self.deleted_at.map(Into::into),
        }
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_one = "super::profiles::Entity")]
    Profile,
}

impl Related<super::profiles::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Profile.def()
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
