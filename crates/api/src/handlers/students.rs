//! Handlers for the `/api/students` resource.

use axum::extract::State;
use axum::response::{IntoResponse, Response};
use classtrack_core::types::DbId;
use serde::Deserialize;
use serde_json::Value;

use crate::error::{AppError, AppResult};
use crate::extract::{Json, Path};
use crate::middleware::auth::CurrentTeacher;
use crate::response::{
    MessageResponse, SaveStudentResponse, StudentDetailResponse, StudentListResponse,
};
use crate::services::students::{self, SaveOutcome};
use crate::state::AppState;

/// Request body for `POST` and `PUT` student endpoints.
///
/// Marks arrive as raw JSON so both `85` and `"85"` are accepted; the
/// validator does the parsing. Fields are optional so missing keys hit the
/// presence check rather than a deserialization error.
#[derive(Debug, Deserialize)]
pub struct StudentPayload {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub subject_name: Option<String>,
    #[serde(default)]
    pub marks: Option<Value>,
}

impl StudentPayload {
    /// Presence check: trimmed strings must be non-empty and marks must be
    /// present. A JSON number (including 0) counts as present; only a
    /// missing key, null, or blank string fails here.
    fn require_fields(self) -> Result<(String, String, Value), AppError> {
        let name = self.name.unwrap_or_default().trim().to_string();
        let subject_name = self.subject_name.unwrap_or_default().trim().to_string();
        let marks = self.marks.unwrap_or(Value::Null);

        let marks_missing = match &marks {
            Value::Null => true,
            Value::String(s) => s.trim().is_empty(),
            _ => false,
        };

        if name.is_empty() || subject_name.is_empty() || marks_missing {
            return Err(AppError::BadRequest("All fields are required".into()));
        }
        Ok((name, subject_name, marks))
    }
}

/// GET /api/students
pub async fn list(
    State(state): State<AppState>,
    teacher: CurrentTeacher,
) -> AppResult<Json<StudentListResponse>> {
    let students = students::list_for_teacher(&state.pool, teacher.teacher_id).await?;
    Ok(Json(StudentListResponse {
        success: true,
        students,
    }))
}

/// POST /api/students
///
/// Adds a new student, or accumulates marks when the (name, subject) pair
/// already exists for this teacher.
pub async fn add_or_update(
    State(state): State<AppState>,
    teacher: CurrentTeacher,
    Json(payload): Json<StudentPayload>,
) -> AppResult<Json<SaveStudentResponse>> {
    let (name, subject_name, marks) = payload.require_fields()?;

    let outcome =
        students::add_or_update(&state.pool, &name, &subject_name, &marks, teacher.teacher_id)
            .await?;

    let response = match outcome {
        SaveOutcome::Created { student_id } => SaveStudentResponse {
            success: true,
            message: format!("Added new student: {name} in {subject_name}"),
            action: "created",
            student_id,
            new_marks: None,
        },
        SaveOutcome::Updated {
            student_id,
            new_marks,
        } => SaveStudentResponse {
            success: true,
            message: format!("Updated {name}'s marks in {subject_name}. New total: {new_marks}"),
            action: "updated",
            student_id,
            new_marks: Some(new_marks),
        },
    };

    Ok(Json(response))
}

/// PUT /api/students/{id}
///
/// Full replacement of an owned student's fields.
pub async fn update(
    State(state): State<AppState>,
    teacher: CurrentTeacher,
    Path(student_id): Path<DbId>,
    Json(payload): Json<StudentPayload>,
) -> AppResult<Json<MessageResponse>> {
    let (name, subject_name, marks) = payload.require_fields()?;

    students::update(
        &state.pool,
        student_id,
        &name,
        &subject_name,
        &marks,
        teacher.teacher_id,
    )
    .await?;

    Ok(Json(MessageResponse::ok("Student updated successfully")))
}

/// DELETE /api/students/{id}
pub async fn delete(
    State(state): State<AppState>,
    teacher: CurrentTeacher,
    Path(student_id): Path<DbId>,
) -> AppResult<Json<MessageResponse>> {
    let message = students::delete(&state.pool, student_id, teacher.teacher_id).await?;
    Ok(Json(MessageResponse::ok(message)))
}

/// GET /api/students/{id}
///
/// A missing student is a 200 with `success:false` here, not an error
/// status. The detail lookup predates the mutation routes' 400 convention
/// and clients rely on it.
pub async fn get_by_id(
    State(state): State<AppState>,
    teacher: CurrentTeacher,
    Path(student_id): Path<DbId>,
) -> AppResult<Response> {
    match students::get_by_id(&state.pool, student_id, teacher.teacher_id).await {
        Ok(student) => Ok(Json(StudentDetailResponse {
            success: true,
            student,
        })
        .into_response()),
        Err(AppError::Core(classtrack_core::error::CoreError::NotFound { .. })) => {
            Ok(Json(MessageResponse::fail("Student not found")).into_response())
        }
        Err(e) => Err(e),
    }
}
