use actix_web::{put, web, Responder};
use tracing::error;

use super::dto::UserRequest;
use crate::{
    shared::api::ApiResponse,
    user::application::{
        domain::entities::UserId, ports::incoming::use_cases::UpdateUserCommand,
    },
    AppState,
};

#[utoipa::path(
    put,
    path = "/users/{id}",
    tag = "users",
    params(("id" = i32, Path, description = "User id")),
    request_body = UserRequest,
    responses(
        (status = 200, description = "User and profile updated", body = ApiResponse,
            example = json!({ "message": "success" })),
        (status = 400, description = "Invalid id, body, or update failure", body = ApiResponse,
            example = json!({ "message": "failed to update user" })),
    )
)]
#[put("/users/{id}")]
pub async fn update_user_handler(
    data: web::Data<AppState>,
    path: web::Path<i32>,
    payload: web::Json<UserRequest>,
) -> impl Responder {
    let id = UserId::from(path.into_inner());
    let req = payload.into_inner();
    let command = UpdateUserCommand::new(id, req.name, req.age, req.bio, req.avatar_url);

    match data.user.update.execute(command).await {
        Ok(()) => ApiResponse::success(),
        Err(err) => {
            error!("Failed to update user {}: {}", id, err);
            ApiResponse::bad_request("failed to update user")
        }
    }
}
