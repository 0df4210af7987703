use actix_web::{delete, web, Responder};
use tracing::error;

use crate::{
    shared::api::ApiResponse, user::application::domain::entities::UserId, AppState,
};

#[utoipa::path(
    delete,
    path = "/users/{id}",
    tag = "users",
    params(("id" = i32, Path, description = "User id")),
    responses(
        (status = 200, description = "User soft deleted (also when already absent)",
            body = ApiResponse, example = json!({ "message": "success" })),
        (status = 400, description = "Invalid id or delete failure", body = ApiResponse,
            example = json!({ "message": "failed to delete user" })),
    )
)]
#[delete("/users/{id}")]
pub async fn delete_user_handler(data: web::Data<AppState>, path: web::Path<i32>) -> impl Responder {
    let id = UserId::from(path.into_inner());

    match data.user.delete.execute(id).await {
        Ok(()) => ApiResponse::success(),
        Err(err) => {
            error!("Failed to delete user {}: {}", id, err);
            ApiResponse::bad_request("failed to delete user")
        }
    }
}
