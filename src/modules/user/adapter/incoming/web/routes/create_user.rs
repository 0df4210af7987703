use actix_web::{post, web, Responder};
use tracing::error;

use super::dto::UserRequest;
use crate::{
    shared::api::ApiResponse,
    user::application::ports::incoming::use_cases::CreateUserCommand, AppState,
};

#[utoipa::path(
    post,
    path = "/users",
    tag = "users",
    request_body = UserRequest,
    responses(
        (status = 200, description = "User and profile created", body = ApiResponse,
            example = json!({ "message": "success" })),
        (status = 400, description = "Body did not bind or creation failed", body = ApiResponse,
            example = json!({ "message": "failed to create user" })),
    )
)]
#[post("/users")]
pub async fn create_user_handler(
    data: web::Data<AppState>,
    payload: web::Json<UserRequest>,
) -> impl Responder {
    let req = payload.into_inner();
    let command = CreateUserCommand::new(req.name, req.age, req.bio, req.avatar_url);

    match data.user.create.execute(command).await {
        Ok(_) => ApiResponse::success(),
        Err(err) => {
            error!("Failed to create user: {}", err);
            ApiResponse::bad_request("failed to create user")
        }
    }
}
