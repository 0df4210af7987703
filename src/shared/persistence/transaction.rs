use std::any::Any;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;

use async_trait::async_trait;
use futures::future::BoxFuture;
use futures::FutureExt;
use sea_orm::{DatabaseConnection, TransactionTrait};

use super::scope::DbScope;

/// Future produced by a unit of work, borrowing the scope it runs against.
pub type UnitOfWork<'s, T, E> = BoxFuture<'s, Result<T, E>>;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TransactionError<E> {
    #[error("Failed to begin transaction: {0}")]
    Begin(String),

    #[error("{0}")]
    Work(E),

    #[error("Failed to commit transaction: {0}")]
    Commit(String),

    #[error("Unit of work panicked: {0}")]
    Panicked(String),
}

//
// ──────────────────────────────────────────────────────────
// Outgoing Port
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait TransactionRunner: Send + Sync {
    type Scope: Send + Sync + 'static;

    /// Scope bound to the pool, outside any transaction.
    fn scope(&self) -> Self::Scope;

    /// Runs `work` inside a transaction. When `outer` already is a
    /// transaction the work joins it and the owner of `outer` decides
    /// commit or rollback.
    async fn run_within<T, E, F>(
        &self,
        outer: &Self::Scope,
        work: F,
    ) -> Result<T, TransactionError<E>>
    where
        T: Send,
        E: Send,
        F: for<'s> FnOnce(&'s Self::Scope) -> UnitOfWork<'s, T, E> + Send;

    async fn run<T, E, F>(&self, work: F) -> Result<T, TransactionError<E>>
    where
        T: Send,
        E: Send,
        F: for<'s> FnOnce(&'s Self::Scope) -> UnitOfWork<'s, T, E> + Send,
    {
        let root = self.scope();
        self.run_within(&root, work).await
    }
}

/// Polls `work` against `scope`, turning a panic into
/// `TransactionError::Panicked` so the caller can still roll back.
pub async fn execute_guarded<S, T, E, F>(scope: &S, work: F) -> Result<T, TransactionError<E>>
where
    S: Sync,
    F: for<'s> FnOnce(&'s S) -> UnitOfWork<'s, T, E>,
{
    match AssertUnwindSafe(async move { work(scope).await })
        .catch_unwind()
        .await
    {
        Ok(Ok(value)) => Ok(value),
        Ok(Err(err)) => Err(TransactionError::Work(err)),
        Err(payload) => Err(TransactionError::Panicked(panic_message(payload.as_ref()))),
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        message.to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "non-string panic payload".to_string()
    }
}

//
// ──────────────────────────────────────────────────────────
// SeaORM Adapter
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone)]
pub struct SeaOrmTransactionRunner {
    db: Arc<DatabaseConnection>,
}

impl SeaOrmTransactionRunner {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl TransactionRunner for SeaOrmTransactionRunner {
    type Scope = DbScope;

    fn scope(&self) -> Self::Scope {
        DbScope::Connection(Arc::clone(&self.db))
    }

    async fn run_within<T, E, F>(
        &self,
        outer: &Self::Scope,
        work: F,
    ) -> Result<T, TransactionError<E>>
    where
        T: Send,
        E: Send,
        F: for<'s> FnOnce(&'s Self::Scope) -> UnitOfWork<'s, T, E> + Send,
    {
        let db = match outer {
            DbScope::Transaction(_) => return execute_guarded(outer, work).await,
            DbScope::Connection(db) => db,
        };

        let txn = db
            .begin()
            .await
            .map_err(|e| TransactionError::Begin(e.to_string()))?;

        let scope = DbScope::Transaction(txn);
        let outcome = execute_guarded(&scope, work).await;

        let DbScope::Transaction(txn) = scope else {
            return outcome;
        };

        match outcome {
            Ok(value) => {
                txn.commit()
                    .await
                    .map_err(|e| TransactionError::Commit(e.to_string()))?;
                Ok(value)
            }
            Err(err) => {
                let _ = txn.rollback().await;
                Err(err)
            }
        }
    }
}
