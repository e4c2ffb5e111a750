pub mod session_repo;
pub mod student_repo;
pub mod teacher_repo;

pub use session_repo::SessionRepo;
pub use student_repo::StudentRepo;
pub use teacher_repo::TeacherRepo;
