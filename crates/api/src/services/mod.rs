pub mod auth;
pub mod students;
