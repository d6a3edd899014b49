pub mod context;
pub mod jwt;
pub mod password;
