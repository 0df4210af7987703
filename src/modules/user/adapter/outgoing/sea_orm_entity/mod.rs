pub mod profiles;
pub mod users;
