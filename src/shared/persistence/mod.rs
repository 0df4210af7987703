mod connection;
mod scope;
mod transaction;

pub use connection::{connect, ConnectError};
pub use scope::DbScope;
pub use transaction::{
    execute_guarded, SeaOrmTransactionRunner, TransactionError, TransactionRunner, UnitOfWork,
};
