//! Student service: owner-scoped CRUD with the add-or-update marks
//! accumulation rule.

use classtrack_core::error::CoreError;
use classtrack_core::types::DbId;
use classtrack_core::validation::validate_student_data;
use classtrack_db::models::student::{CreateStudent, StudentResponse};
use classtrack_db::repositories::StudentRepo;
use classtrack_db::DbPool;

use crate::error::AppResult;

/// What the add-or-update path did.
#[derive(Debug, PartialEq, Eq)]
pub enum SaveOutcome {
    /// No row held the (name, subject) pair; a new one was inserted.
    Created { student_id: DbId },
    /// An existing row was found; marks were added to its stored total.
    Updated { student_id: DbId, new_marks: i64 },
}

/// List a teacher's students ordered by name, then subject.
pub async fn list_for_teacher(
    pool: &DbPool,
    teacher_id: DbId,
) -> AppResult<Vec<StudentResponse>> {
    let students = StudentRepo::list_for_teacher(pool, teacher_id).await?;
    Ok(students.into_iter().map(StudentResponse::from).collect())
}

/// Add a student, or accumulate marks onto an existing (name, subject) row.
///
/// The submitted marks are validated against [0, 1000] but the accumulated
/// total is intentionally uncapped; only per-submission input is bounded.
pub async fn add_or_update(
    pool: &DbPool,
    name: &str,
    subject_name: &str,
    marks_raw: &serde_json::Value,
    teacher_id: DbId,
) -> AppResult<SaveOutcome> {
    let marks = validate_student_data(name, subject_name, marks_raw)
        .map_err(CoreError::Validation)?;
    let name = name.trim();
    let subject_name = subject_name.trim();

    if let Some(existing) =
        StudentRepo::find_by_name_and_subject(pool, name, subject_name, teacher_id).await?
    {
        let new_marks = existing.marks + marks;
        StudentRepo::set_marks(pool, existing.id, new_marks).await?;
        return Ok(SaveOutcome::Updated {
            student_id: existing.id,
            new_marks,
        });
    }

    let created = StudentRepo::create(
        pool,
        &CreateStudent {
            name: name.to_string(),
            subject_name: subject_name.to_string(),
            marks,
            teacher_id,
        },
    )
    .await?;

    Ok(SaveOutcome::Created {
        student_id: created.id,
    })
}

/// Overwrite an owned student's name, subject, and marks.
///
/// Unlike [`add_or_update`], marks are replaced rather than accumulated.
pub async fn update(
    pool: &DbPool,
    id: DbId,
    name: &str,
    subject_name: &str,
    marks_raw: &serde_json::Value,
    teacher_id: DbId,
) -> AppResult<()> {
    let marks = validate_student_data(name, subject_name, marks_raw)
        .map_err(CoreError::Validation)?;
    let name = name.trim();
    let subject_name = subject_name.trim();

    let existing = StudentRepo::find_by_id_for_teacher(pool, id, teacher_id)
        .await?
        .ok_or(CoreError::NotFound { entity: "Student" })?;

    if StudentRepo::duplicate_exists(pool, name, subject_name, teacher_id, existing.id).await? {
        return Err(CoreError::Conflict(
            "A student with this name and subject combination already exists".into(),
        )
        .into());
    }

    StudentRepo::replace(pool, existing.id, teacher_id, name, subject_name, marks).await?;
    Ok(())
}

/// Delete an owned student, returning the confirmation message.
pub async fn delete(pool: &DbPool, id: DbId, teacher_id: DbId) -> AppResult<String> {
    let existing = StudentRepo::find_by_id_for_teacher(pool, id, teacher_id)
        .await?
        .ok_or(CoreError::NotFound { entity: "Student" })?;

    StudentRepo::delete_for_teacher(pool, id, teacher_id).await?;
    Ok(format!(
        "Deleted {} from {}",
        existing.name, existing.subject_name
    ))
}

/// Fetch an owned student by id.
pub async fn get_by_id(
    pool: &DbPool,
    id: DbId,
    teacher_id: DbId,
) -> AppResult<StudentResponse> {
    let student = StudentRepo::find_by_id_for_teacher(pool, id, teacher_id)
        .await?
        .ok_or(CoreError::NotFound { entity: "Student" })?;
    Ok(StudentResponse::from(student))
}
