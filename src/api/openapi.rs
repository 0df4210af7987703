use utoipa::OpenApi;

use crate::shared::api::ApiResponse;
use crate::user::adapter::incoming::web::routes::{UserListResponse, UserRequest, UserResponse};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Users API",
        version = "0.1.0",
        description = "CRUD over users and their profiles"
    ),
    paths(
        crate::user::adapter::incoming::web::routes::create_user_handler,
        crate::user::adapter::incoming::web::routes::get_users_handler,
        crate::user::adapter::incoming::web::routes::get_user_handler,
        crate::user::adapter::incoming::web::routes::update_user_handler,
        crate::user::adapter::incoming::web::routes::delete_user_handler,
    ),
    components(
        schemas(
            ApiResponse,
            UserRequest,
            UserResponse,
            UserListResponse
        )
    ),
    tags(
        (name = "users", description = "User and profile management endpoints"),
    )
)]
pub struct ApiDoc;
