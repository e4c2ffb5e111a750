//! Repository for the `teachers` table.

use classtrack_core::types::DbId;

use crate::models::teacher::{CreateTeacher, Teacher};
use crate::DbPool;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, username, email, password_hash, full_name, created_at";

/// Provides lookup and insert operations for teachers.
pub struct TeacherRepo;

impl TeacherRepo {
    /// Insert a new teacher, returning the created row.
    pub async fn create(pool: &DbPool, input: &CreateTeacher) -> Result<Teacher, sqlx::Error> {
        let query = format!(
            "INSERT INTO teachers (username, email, password_hash, full_name)
             VALUES (?, ?, ?, ?)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Teacher>(&query)
            .bind(&input.username)
            .bind(&input.email)
            .bind(&input.password_hash)
            .bind(&input.full_name)
            .fetch_one(pool)
            .await
    }

    /// Find a teacher by internal ID.
    pub async fn find_by_id(pool: &DbPool, id: DbId) -> Result<Option<Teacher>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM teachers WHERE id = ?");
        sqlx::query_as::<_, Teacher>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a teacher whose username OR email equals `identifier`.
    ///
    /// Login accepts either, so both columns are checked in one query.
    pub async fn find_by_identifier(
        pool: &DbPool,
        identifier: &str,
    ) -> Result<Option<Teacher>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM teachers WHERE username = ? OR email = ?");
        sqlx::query_as::<_, Teacher>(&query)
            .bind(identifier)
            .bind(identifier)
            .fetch_optional(pool)
            .await
    }

    /// Check whether a username or email is already taken.
    ///
    /// Used as a registration pre-check so the caller can return a
    /// deterministic message instead of relying on the unique constraint.
    pub async fn exists_by_username_or_email(
        pool: &DbPool,
        username: &str,
        email: &str,
    ) -> Result<bool, sqlx::Error> {
        let row: Option<(DbId,)> =
            sqlx::query_as("SELECT id FROM teachers WHERE username = ? OR email = ?")
                .bind(username)
                .bind(email)
                .fetch_optional(pool)
                .await?;
        Ok(row.is_some())
    }
}
