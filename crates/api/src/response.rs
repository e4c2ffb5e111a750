//! Shared response envelope types for API handlers.
//!
//! All API responses use a `{ "success": ..., "message": ... }` envelope.
//! Use these typed structs instead of ad-hoc `serde_json::json!` blocks to
//! get compile-time safety and consistent serialization.

use classtrack_core::types::DbId;
use classtrack_db::models::student::StudentResponse;
use serde::Serialize;

/// Plain `{ success, message }` envelope.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub success: bool,
    pub message: String,
}

impl MessageResponse {
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }

    pub fn fail(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
        }
    }
}

/// Successful login response.
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub success: bool,
    pub message: String,
    pub redirect_url: String,
}

/// `GET /api/students` envelope.
#[derive(Debug, Serialize)]
pub struct StudentListResponse {
    pub success: bool,
    pub students: Vec<StudentResponse>,
}

/// `GET /api/students/{id}` success envelope.
#[derive(Debug, Serialize)]
pub struct StudentDetailResponse {
    pub success: bool,
    pub student: StudentResponse,
}

/// `POST /api/students` envelope: which action the add-or-update path took.
#[derive(Debug, Serialize)]
pub struct SaveStudentResponse {
    pub success: bool,
    pub message: String,
    /// `"created"` or `"updated"`.
    pub action: &'static str,
    pub student_id: DbId,
    /// Accumulated total; present only when `action` is `"updated"`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub new_marks: Option<i64>,
}
