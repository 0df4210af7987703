pub mod domain;
pub mod ports;
pub mod services;
pub mod user_use_cases;
