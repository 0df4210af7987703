use async_trait::async_trait;

use super::UserSummary;

/// Page size used when the caller sends `limit = 0`.
pub const DEFAULT_LIST_LIMIT: i64 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GetUserListQuery {
    limit: i64,
    offset: i64,
}

impl GetUserListQuery {
    pub fn new(limit: i64, offset: i64) -> Self {
        Self { limit, offset }
    }

    /// Requested page size, with `0` replaced by `DEFAULT_LIST_LIMIT`.
    /// Negative values are kept as-is and rejected by the store.
    pub fn effective_limit(&self) -> i64 {
        if self.limit == 0 {
            DEFAULT_LIST_LIMIT
        } else {
            self.limit
        }
    }

    pub fn offset(&self) -> i64 {
        self.offset
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct UserList {
    pub users: Vec<UserSummary>,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GetUserListError {
    #[error("Failed to fetch users: {0}")]
    QueryFailed(String),
}

#[async_trait]
pub trait GetUserListUseCase: Send + Sync {
    async fn execute(&self, query: GetUserListQuery) -> Result<UserList, GetUserListError>;
}
