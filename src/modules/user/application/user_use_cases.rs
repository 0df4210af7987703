use std::sync::Arc;

use crate::user::application::ports::incoming::use_cases::{
    CreateUserUseCase, DeleteUserUseCase, GetUserListUseCase, GetUserOneUseCase,
    UpdateUserUseCase,
};

#[derive(Clone)]
pub struct UserUseCases {
    pub create: Arc<dyn CreateUserUseCase + Send + Sync>,
    pub update: Arc<dyn UpdateUserUseCase + Send + Sync>,
    pub delete: Arc<dyn DeleteUserUseCase + Send + Sync>,
    pub get_list: Arc<dyn GetUserListUseCase + Send + Sync>,
    pub get_one: Arc<dyn GetUserOneUseCase + Send + Sync>,
}
