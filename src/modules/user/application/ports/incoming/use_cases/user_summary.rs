use crate::user::application::domain::entities::{User, UserId};

/// Read model returned by the list and get-one use cases.
#[derive(Debug, Clone, PartialEq)]
pub struct UserSummary {
    pub id: UserId,
    pub name: String,
    pub age: i32,
}

impl From<&User> for UserSummary {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            name: user.name.clone(),
            age: user.age,
        }
    }
}
