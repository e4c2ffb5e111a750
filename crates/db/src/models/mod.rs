pub mod session;
pub mod student;
pub mod teacher;
