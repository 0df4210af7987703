use actix_web::{get, web, Responder};
use tracing::error;

use super::dto::{GetUsersQuery, UserListResponse};
use crate::{
    shared::api::ApiResponse,
    user::application::ports::incoming::use_cases::{GetUserListError, GetUserListQuery},
    AppState,
};

#[utoipa::path(
    get,
    path = "/users",
    tag = "users",
    params(GetUsersQuery),
    responses(
        (status = 200, description = "One page of users in id order; empty when past the end",
            body = UserListResponse,
            example = json!({ "users": [{ "id": 1, "name": "taro", "age": 24 }] })),
        (status = 400, description = "Query string did not parse", body = ApiResponse,
            example = json!({ "message": "Bad Request" })),
        (status = 500, description = "Store failure", body = ApiResponse,
            example = json!({ "message": "Internal Server Error" })),
    )
)]
#[get("/users")]
pub async fn get_users_handler(
    data: web::Data<AppState>,
    query: web::Query<GetUsersQuery>,
) -> impl Responder {
    let query = GetUserListQuery::new(query.limit, query.offset);

    match data.user.get_list.execute(query).await {
        Ok(list) => ApiResponse::data(UserListResponse::from(list)),

        Err(GetUserListError::QueryFailed(msg)) => {
            error!("Failed to list users: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
