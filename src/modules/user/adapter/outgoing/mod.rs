pub mod sea_orm_entity;
mod profile_repository_postgres;
mod user_repository_postgres;

pub use profile_repository_postgres::ProfileRepositoryPostgres;
pub use user_repository_postgres::UserRepositoryPostgres;
