mod profile_repository;
mod user_repository;

pub use profile_repository::{ProfileRepository, ProfileRepositoryError};
pub use user_repository::{UserRepository, UserRepositoryError};
