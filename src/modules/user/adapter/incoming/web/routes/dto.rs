use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::user::application::ports::incoming::use_cases::{UserList, UserSummary};

//
// ──────────────────────────────────────────────────────────
// Request DTOs
// ──────────────────────────────────────────────────────────
//

/// Body of `POST /users` and `PUT /users/{id}`. Missing fields bind as
/// their zero value.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(default)]
pub struct UserRequest {
    #[schema(example = "taro")]
    pub name: String,

    #[schema(example = 24)]
    pub age: i32,

    #[schema(example = "Rustacean from Osaka")]
    pub bio: String,

    #[schema(example = "https://img.example/taro.png")]
    pub avatar_url: String,
}

#[derive(Debug, Clone, Copy, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct GetUsersQuery {
    /// Page size; `0` or absent means 100.
    #[serde(default)]
    pub limit: i64,

    #[serde(default)]
    pub offset: i64,
}

//
// ──────────────────────────────────────────────────────────
// Response DTOs
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct UserResponse {
    #[schema(example = 1)]
    pub id: i32,

    #[schema(example = "taro")]
    pub name: String,

    #[schema(example = 24)]
    pub age: i32,
}

impl From<UserSummary> for UserResponse {
    fn from(user: UserSummary) -> Self {
        Self {
            id: user.id.value(),
            name: user.name,
            age: user.age,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct UserListResponse {
    pub users: Vec<UserResponse>,
}

impl From<UserList> for UserListResponse {
    fn from(list: UserList) -> Self {
        Self {
            users: list.users.into_iter().map(UserResponse::from).collect(),
        }
    }
}
