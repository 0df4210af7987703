use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use sea_orm::{
    ConnectionTrait, DatabaseBackend, DatabaseConnection, DatabaseTransaction, DbErr, ExecResult,
    QueryResult, Statement,
};

/// Handle a repository call runs against: either the bare pool or an open
/// transaction. Every statement issued through a `DbScope::Transaction`
/// commits or rolls back with that transaction.
pub enum DbScope {
    Connection(Arc<DatabaseConnection>),
    Transaction(DatabaseTransaction),
}

impl DbScope {
    pub fn is_transaction(&self) -> bool {
        matches!(self, Self::Transaction(_))
    }
}

impl From<Arc<DatabaseConnection>> for DbScope {
    fn from(db: Arc<DatabaseConnection>) -> Self {
        Self::Connection(db)
    }
}

impl fmt::Debug for DbScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Connection(_) => f.write_str("DbScope::Connection"),
            Self::Transaction(_) => f.write_str("DbScope::Transaction"),
        }
    }
}

#[async_trait]
impl ConnectionTrait for DbScope {
    fn get_database_backend(&self) -> DatabaseBackend {
        match self {
            Self::Connection(db) => db.get_database_backend(),
            Self::Transaction(txn) => txn.get_database_backend(),
        }
    }

    async fn execute(&self, stmt: Statement) -> Result<ExecResult, DbErr> {
        match self {
            Self::Connection(db) => db.execute(stmt).await,
            Self::Transaction(txn) => txn.execute(stmt).await,
        }
    }

    async fn execute_unprepared(&self, sql: &str) -> Result<ExecResult, DbErr> {
        match self {
            Self::Connection(db) => db.execute_unprepared(sql).await,
            Self::Transaction(txn) => txn.execute_unprepared(sql).await,
        }
    }

    async fn query_one(&self, stmt: Statement) -> Result<Option<QueryResult>, DbErr> {
        match self {
            Self::Connection(db) => db.query_one(stmt).await,
            Self::Transaction(txn) => txn.query_one(stmt).await,
        }
    }

    async fn query_all(&self, stmt: Statement) -> Result<Vec<QueryResult>, DbErr> {
        match self {
            Self::Connection(db) => db.query_all(stmt).await,
            Self::Transaction(txn) => txn.query_all(stmt).await,
        }
    }

    fn is_mock_connection(&self) -> bool {
        match self {
            Self::Connection(db) => db.is_mock_connection(),
            Self::Transaction(txn) => txn.is_mock_connection(),
        }
    }
}
