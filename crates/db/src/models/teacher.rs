//! Teacher entity model and DTOs.

use classtrack_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// Full teacher row from the `teachers` table.
///
/// Contains the password hash -- NEVER serialize this to API responses.
/// Use [`TeacherResponse`] for external-facing output.
#[derive(Debug, Clone, FromRow)]
pub struct Teacher {
    pub id: DbId,
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub full_name: String,
    pub created_at: Timestamp,
}

/// Public teacher representation for API responses and session display.
#[derive(Debug, Clone, Serialize)]
pub struct TeacherResponse {
    pub id: DbId,
    pub username: String,
    pub email: String,
    pub full_name: String,
    pub created_at: Timestamp,
}

impl From<Teacher> for TeacherResponse {
    fn from(t: Teacher) -> Self {
        Self {
            id: t.id,
            username: t.username,
            email: t.email,
            full_name: t.full_name,
            created_at: t.created_at,
        }
    }
}

/// DTO for inserting a new teacher. The password is already hashed.
#[derive(Debug)]
pub struct CreateTeacher {
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub full_name: String,
}
