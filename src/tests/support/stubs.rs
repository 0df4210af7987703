use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::user::application::domain::entities::UserId;
use crate::user::application::ports::incoming::use_cases::{
    CreateUserCommand, CreateUserError, CreateUserUseCase, DeleteUserError, DeleteUserUseCase,
    GetUserListError, GetUserListQuery, GetUserListUseCase, GetUserOneError, GetUserOneUseCase,
    UpdateUserCommand, UpdateUserError, UpdateUserUseCase, UserList, UserSummary,
};

pub fn summary(id: i32, name: &str, age: i32) -> UserSummary {
    UserSummary {
        id: UserId::from(id),
        name: name.to_string(),
        age,
    }
}

// ============================================================
// CreateUser
// ============================================================

#[derive(Clone)]
pub struct StubCreateUserUseCase {
    result: Result<UserId, CreateUserError>,
    seen: Arc<Mutex<Option<CreateUserCommand>>>,
}

impl StubCreateUserUseCase {
    pub fn success(id: i32) -> Self {
        Self {
            result: Ok(UserId::from(id)),
            seen: Arc::default(),
        }
    }

    pub fn failure(err: CreateUserError) -> Self {
        Self {
            result: Err(err),
            seen: Arc::default(),
        }
    }

    pub fn last_command(&self) -> Option<CreateUserCommand> {
        self.seen.lock().unwrap().clone()
    }
}

#[async_trait]
impl CreateUserUseCase for StubCreateUserUseCase {
    async fn execute(&self, command: CreateUserCommand) -> Result<UserId, CreateUserError> {
        *self.seen.lock().unwrap() = Some(command);
        self.result.clone()
    }
}

// ============================================================
// UpdateUser
// ============================================================

#[derive(Clone)]
pub struct StubUpdateUserUseCase {
    result: Result<(), UpdateUserError>,
    seen: Arc<Mutex<Option<UpdateUserCommand>>>,
}

impl StubUpdateUserUseCase {
    pub fn with_result(result: Result<(), UpdateUserError>) -> Self {
        Self {
            result,
            seen: Arc::default(),
        }
    }

    pub fn last_command(&self) -> Option<UpdateUserCommand> {
        self.seen.lock().unwrap().clone()
    }
}

#[async_trait]
impl UpdateUserUseCase for StubUpdateUserUseCase {
    async fn execute(&self, command: UpdateUserCommand) -> Result<(), UpdateUserError> {
        *self.seen.lock().unwrap() = Some(command);
        self.result.clone()
    }
}

// ============================================================
// DeleteUser
// ============================================================

#[derive(Clone)]
pub struct StubDeleteUserUseCase {
    result: Result<(), DeleteUserError>,
}

impl StubDeleteUserUseCase {
    pub fn with_result(result: Result<(), DeleteUserError>) -> Self {
        Self { result }
    }
}

#[async_trait]
impl DeleteUserUseCase for StubDeleteUserUseCase {
    async fn execute(&self, _id: UserId) -> Result<(), DeleteUserError> {
        self.result.clone()
    }
}

// ============================================================
// GetUserList
// ============================================================

#[derive(Clone)]
pub struct StubGetUserListUseCase {
    result: Result<UserList, GetUserListError>,
    seen: Arc<Mutex<Option<GetUserListQuery>>>,
}

impl StubGetUserListUseCase {
    pub fn with_result(result: Result<UserList, GetUserListError>) -> Self {
        Self {
            result,
            seen: Arc::default(),
        }
    }

    pub fn last_query(&self) -> Option<GetUserListQuery> {
        *self.seen.lock().unwrap()
    }
}

#[async_trait]
impl GetUserListUseCase for StubGetUserListUseCase {
    async fn execute(&self, query: GetUserListQuery) -> Result<UserList, GetUserListError> {
        *self.seen.lock().unwrap() = Some(query);
        self.result.clone()
    }
}

// ============================================================
// GetUserOne
// ============================================================

#[derive(Clone)]
pub struct StubGetUserOneUseCase {
    result: Result<UserSummary, GetUserOneError>,
}

impl StubGetUserOneUseCase {
    pub fn with_result(result: Result<UserSummary, GetUserOneError>) -> Self {
        Self { result }
    }
}

#[async_trait]
impl GetUserOneUseCase for StubGetUserOneUseCase {
    async fn execute(&self, _id: UserId) -> Result<UserSummary, GetUserOneError> {
        self.result.clone()
    }
}
