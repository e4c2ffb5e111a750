//! Student entity model and DTOs.

use classtrack_core::grading::{grade_color, letter_grade};
use classtrack_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A student row: one (student, subject) grade entry owned by a teacher.
#[derive(Debug, Clone, FromRow)]
pub struct Student {
    pub id: DbId,
    pub name: String,
    pub subject_name: String,
    pub marks: i64,
    pub teacher_id: DbId,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Student representation for API responses.
///
/// The owning `teacher_id` is implied by the session and omitted; the
/// derived grade fields are included for dashboard rendering.
#[derive(Debug, Clone, Serialize)]
pub struct StudentResponse {
    pub id: DbId,
    pub name: String,
    pub subject_name: String,
    pub marks: i64,
    pub grade: &'static str,
    pub grade_color: &'static str,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl From<Student> for StudentResponse {
    fn from(s: Student) -> Self {
        Self {
            id: s.id,
            name: s.name,
            subject_name: s.subject_name,
            grade: letter_grade(s.marks),
            grade_color: grade_color(s.marks),
            marks: s.marks,
            created_at: s.created_at,
            updated_at: s.updated_at,
        }
    }
}

/// DTO for inserting a new student row. Marks are already validated.
#[derive(Debug)]
pub struct CreateStudent {
    pub name: String,
    pub subject_name: String,
    pub marks: i64,
    pub teacher_id: DbId,
}
