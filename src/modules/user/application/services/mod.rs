mod create_user_service;
mod delete_user_service;
mod get_user_list_service;
mod get_user_one_service;
mod update_user_service;

pub use create_user_service::CreateUserService;
pub use delete_user_service::DeleteUserService;
pub use get_user_list_service::GetUserListService;
pub use get_user_one_service::GetUserOneService;
pub use update_user_service::UpdateUserService;
