mod create_user;
mod delete_user;
mod dto;
mod get_user;
mod get_users;
mod update_user;

pub use create_user::create_user_handler;
pub use delete_user::delete_user_handler;
pub use dto::{GetUsersQuery, UserListResponse, UserRequest, UserResponse};
pub use get_user::get_user_handler;
pub use get_users::get_users_handler;
pub use update_user::update_user_handler;

// utoipa path structs, referenced by the OpenAPI document
pub use create_user::__path_create_user_handler;
pub use delete_user::__path_delete_user_handler;
pub use get_user::__path_get_user_handler;
pub use get_users::__path_get_users_handler;
pub use update_user::__path_update_user_handler;
