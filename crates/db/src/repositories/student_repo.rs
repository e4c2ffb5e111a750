//! Repository for the `students` table.
//!
//! Every query is scoped by the owning `teacher_id`; a student belonging to
//! one teacher is invisible and unmodifiable through another teacher's id.

use classtrack_core::types::DbId;

use crate::models::student::{CreateStudent, Student};
use crate::DbPool;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, subject_name, marks, teacher_id, created_at, updated_at";

/// Provides owner-scoped CRUD operations for students.
pub struct StudentRepo;

impl StudentRepo {
    /// Insert a new student row, returning the created row.
    pub async fn create(pool: &DbPool, input: &CreateStudent) -> Result<Student, sqlx::Error> {
        let query = format!(
            "INSERT INTO students (name, subject_name, marks, teacher_id)
             VALUES (?, ?, ?, ?)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Student>(&query)
            .bind(&input.name)
            .bind(&input.subject_name)
            .bind(input.marks)
            .bind(input.teacher_id)
            .fetch_one(pool)
            .await
    }

    /// List a teacher's students ordered by name, then subject.
    pub async fn list_for_teacher(
        pool: &DbPool,
        teacher_id: DbId,
    ) -> Result<Vec<Student>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM students
             WHERE teacher_id = ?
             ORDER BY name, subject_name"
        );
        sqlx::query_as::<_, Student>(&query)
            .bind(teacher_id)
            .fetch_all(pool)
            .await
    }

    /// Find an owned student by id.
    pub async fn find_by_id_for_teacher(
        pool: &DbPool,
        id: DbId,
        teacher_id: DbId,
    ) -> Result<Option<Student>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM students WHERE id = ? AND teacher_id = ?");
        sqlx::query_as::<_, Student>(&query)
            .bind(id)
            .bind(teacher_id)
            .fetch_optional(pool)
            .await
    }

    /// Find an owned student by the (name, subject) pair.
    ///
    /// This is the lookup behind the add-or-update accumulation path.
    pub async fn find_by_name_and_subject(
        pool: &DbPool,
        name: &str,
        subject_name: &str,
        teacher_id: DbId,
    ) -> Result<Option<Student>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM students
             WHERE name = ? AND subject_name = ? AND teacher_id = ?"
        );
        sqlx::query_as::<_, Student>(&query)
            .bind(name)
            .bind(subject_name)
            .bind(teacher_id)
            .fetch_optional(pool)
            .await
    }

    /// Check whether another row (different id) already holds the
    /// (name, subject) pair under the same teacher.
    pub async fn duplicate_exists(
        pool: &DbPool,
        name: &str,
        subject_name: &str,
        teacher_id: DbId,
        excluding_id: DbId,
    ) -> Result<bool, sqlx::Error> {
        let row: Option<(DbId,)> = sqlx::query_as(
            "SELECT id FROM students
             WHERE name = ? AND subject_name = ? AND teacher_id = ? AND id != ?",
        )
        .bind(name)
        .bind(subject_name)
        .bind(teacher_id)
        .bind(excluding_id)
        .fetch_optional(pool)
        .await?;
        Ok(row.is_some())
    }

    /// Set a student's marks to a new total, bumping `updated_at`.
    ///
    /// Returns `true` if the row was updated. The caller computes the
    /// accumulated total; this is a plain overwrite at the SQL level.
    pub async fn set_marks(pool: &DbPool, id: DbId, marks: i64) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE students SET marks = ?, updated_at = CURRENT_TIMESTAMP WHERE id = ?",
        )
        .bind(marks)
        .bind(id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Overwrite name, subject, and marks of an owned row (full replace).
    ///
    /// Returns `true` if the row was updated.
    pub async fn replace(
        pool: &DbPool,
        id: DbId,
        teacher_id: DbId,
        name: &str,
        subject_name: &str,
        marks: i64,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE students
             SET name = ?, subject_name = ?, marks = ?, updated_at = CURRENT_TIMESTAMP
             WHERE id = ? AND teacher_id = ?",
        )
        .bind(name)
        .bind(subject_name)
        .bind(marks)
        .bind(id)
        .bind(teacher_id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Delete an owned row. Returns `true` if a row was removed.
    pub async fn delete_for_teacher(
        pool: &DbPool,
        id: DbId,
        teacher_id: DbId,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM students WHERE id = ? AND teacher_id = ?")
            .bind(id)
            .bind(teacher_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
