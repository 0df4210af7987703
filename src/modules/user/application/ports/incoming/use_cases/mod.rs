mod create_user_use_case;
mod delete_user_use_case;
mod get_user_list_use_case;
mod get_user_one_use_case;
mod update_user_use_case;
mod user_summary;

pub use create_user_use_case::{CreateUserCommand, CreateUserError, CreateUserUseCase};
pub use delete_user_use_case::{DeleteUserError, DeleteUserUseCase};
pub use get_user_list_use_case::{
    GetUserListError, GetUserListQuery, GetUserListUseCase, UserList, DEFAULT_LIST_LIMIT,
};
pub use get_user_one_use_case::{GetUserOneError, GetUserOneUseCase};
pub use update_user_use_case::{UpdateUserCommand, UpdateUserError, UpdateUserUseCase};
pub use user_summary::UserSummary;
