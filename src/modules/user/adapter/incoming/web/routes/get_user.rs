use actix_web::{get, web, Responder};
use tracing::error;

use super::dto::UserResponse;
use crate::{
    shared::api::ApiResponse, user::application::domain::entities::UserId, AppState,
};

#[utoipa::path(
    get,
    path = "/users/{id}",
    tag = "users",
    params(("id" = i32, Path, description = "User id")),
    responses(
        (status = 200, description = "User found", body = UserResponse,
            example = json!({ "id": 1, "name": "taro", "age": 24 })),
        (status = 400, description = "Invalid id, user missing, or store failure",
            body = ApiResponse, example = json!({ "message": "failed to get user" })),
    )
)]
#[get("/users/{id}")]
pub async fn get_user_handler(data: web::Data<AppState>, path: web::Path<i32>) -> impl Responder {
    let id = UserId::from(path.into_inner());

    match data.user.get_one.execute(id).await {
        Ok(user) => ApiResponse::data(UserResponse::from(user)),
        Err(err) => {
            error!("Failed to get user {}: {}", id, err);
            ApiResponse::bad_request("failed to get user")
        }
    }
}
