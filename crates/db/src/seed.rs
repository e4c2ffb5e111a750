//! First-run demo data: one teacher and eight students.
//!
//! Every insert is `INSERT OR IGNORE`, so seeding is idempotent and safe to
//! run unconditionally at startup.

use classtrack_core::types::DbId;

use crate::DbPool;

/// Username of the seeded demo teacher.
pub const DEMO_USERNAME: &str = "teacher1";
/// Email of the seeded demo teacher.
pub const DEMO_EMAIL: &str = "teacher@example.com";
/// Display name of the seeded demo teacher.
pub const DEMO_FULL_NAME: &str = "John Smith";
/// Plaintext password of the seeded demo teacher (the caller hashes it).
pub const DEMO_PASSWORD: &str = "teacher123";

/// The eight demo student rows owned by the demo teacher.
const DEMO_STUDENTS: [(&str, &str, i64); 8] = [
    ("Alice Johnson", "Mathematics", 85),
    ("Bob Smith", "Physics", 78),
    ("Carol Davis", "Chemistry", 92),
    ("David Wilson", "Mathematics", 76),
    ("Eve Brown", "Physics", 88),
    ("Frank Miller", "Chemistry", 94),
    ("Grace Lee", "Mathematics", 89),
    ("Henry Garcia", "Physics", 82),
];

/// Seed the demo teacher and students if they are not already present.
///
/// `demo_password_hash` is the argon2 hash of [`DEMO_PASSWORD`]; hashing
/// lives with the rest of the password machinery in the api crate, so the
/// caller passes the result in.
pub async fn seed_demo_data(pool: &DbPool, demo_password_hash: &str) -> Result<(), sqlx::Error> {
    sqlx::query(
        "INSERT OR IGNORE INTO teachers (username, email, password_hash, full_name)
         VALUES (?, ?, ?, ?)",
    )
    .bind(DEMO_USERNAME)
    .bind(DEMO_EMAIL)
    .bind(demo_password_hash)
    .bind(DEMO_FULL_NAME)
    .execute(pool)
    .await?;

    // INSERT OR IGNORE reports zero rows when the teacher already exists,
    // so the id is always re-read by username.
    let (teacher_id,): (DbId,) = sqlx::query_as("SELECT id FROM teachers WHERE username = ?")
        .bind(DEMO_USERNAME)
        .fetch_one(pool)
        .await?;

    for (name, subject, marks) in DEMO_STUDENTS {
        sqlx::query(
            "INSERT OR IGNORE INTO students (name, subject_name, marks, teacher_id)
             VALUES (?, ?, ?, ?)",
        )
        .bind(name)
        .bind(subject)
        .bind(marks)
        .bind(teacher_id)
        .execute(pool)
        .await?;
    }

    tracing::info!(teacher_id, "Demo data seeded");
    Ok(())
}
