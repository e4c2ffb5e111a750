//! Integration tests for the repository layer against a real SQLite file:
//! ownership scoping, the composite unique constraint, and update/delete
//! semantics.

use classtrack_db::models::student::CreateStudent;
use classtrack_db::models::teacher::CreateTeacher;
use classtrack_db::repositories::{StudentRepo, TeacherRepo};
use classtrack_db::DbPool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

async fn create_teacher(pool: &DbPool, username: &str) -> i64 {
    let input = CreateTeacher {
        username: username.to_string(),
        email: format!("{username}@test.com"),
        password_hash: "$argon2id$unused".to_string(),
        full_name: format!("Teacher {username}"),
    };
    TeacherRepo::create(pool, &input)
        .await
        .expect("teacher creation should succeed")
        .id
}

fn new_student(teacher_id: i64, name: &str, subject: &str, marks: i64) -> CreateStudent {
    CreateStudent {
        name: name.to_string(),
        subject_name: subject.to_string(),
        marks,
        teacher_id,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[sqlx::test]
async fn list_is_sorted_by_name_then_subject(pool: DbPool) {
    let teacher_id = create_teacher(&pool, "sorter").await;

    for (name, subject) in [
        ("Bob", "Physics"),
        ("Alice", "Physics"),
        ("Alice", "Chemistry"),
    ] {
        StudentRepo::create(&pool, &new_student(teacher_id, name, subject, 50))
            .await
            .expect("insert should succeed");
    }

    let students = StudentRepo::list_for_teacher(&pool, teacher_id)
        .await
        .expect("list should succeed");

    let order: Vec<(String, String)> = students
        .into_iter()
        .map(|s| (s.name, s.subject_name))
        .collect();
    assert_eq!(
        order,
        vec![
            ("Alice".to_string(), "Chemistry".to_string()),
            ("Alice".to_string(), "Physics".to_string()),
            ("Bob".to_string(), "Physics".to_string()),
        ]
    );
}

#[sqlx::test]
async fn students_are_scoped_to_their_owner(pool: DbPool) {
    let teacher_a = create_teacher(&pool, "owner_a").await;
    let teacher_b = create_teacher(&pool, "owner_b").await;

    let row = StudentRepo::create(&pool, &new_student(teacher_a, "Alice", "Maths", 80))
        .await
        .expect("insert should succeed");

    // Teacher B sees an empty list and cannot read, replace, or delete A's row.
    assert!(StudentRepo::list_for_teacher(&pool, teacher_b)
        .await
        .unwrap()
        .is_empty());
    assert!(StudentRepo::find_by_id_for_teacher(&pool, row.id, teacher_b)
        .await
        .unwrap()
        .is_none());
    assert!(!StudentRepo::replace(&pool, row.id, teacher_b, "Mallory", "Maths", 0)
        .await
        .unwrap());
    assert!(!StudentRepo::delete_for_teacher(&pool, row.id, teacher_b)
        .await
        .unwrap());

    // The row is untouched for its owner.
    let kept = StudentRepo::find_by_id_for_teacher(&pool, row.id, teacher_a)
        .await
        .unwrap()
        .expect("owner still sees the row");
    assert_eq!(kept.name, "Alice");
    assert_eq!(kept.marks, 80);
}

#[sqlx::test]
async fn same_pair_under_different_teachers_is_allowed(pool: DbPool) {
    let teacher_a = create_teacher(&pool, "pair_a").await;
    let teacher_b = create_teacher(&pool, "pair_b").await;

    StudentRepo::create(&pool, &new_student(teacher_a, "Alice", "Maths", 70))
        .await
        .expect("first insert should succeed");
    StudentRepo::create(&pool, &new_student(teacher_b, "Alice", "Maths", 90))
        .await
        .expect("same pair under another teacher should succeed");
}

#[sqlx::test]
async fn unique_triple_rejects_second_insert(pool: DbPool) {
    let teacher_id = create_teacher(&pool, "unique").await;

    StudentRepo::create(&pool, &new_student(teacher_id, "Alice", "Maths", 70))
        .await
        .expect("first insert should succeed");

    let err = StudentRepo::create(&pool, &new_student(teacher_id, "Alice", "Maths", 80))
        .await
        .expect_err("duplicate triple must violate the unique constraint");
    assert!(matches!(err, sqlx::Error::Database(_)));
}

#[sqlx::test]
async fn set_marks_bumps_updated_at(pool: DbPool) {
    let teacher_id = create_teacher(&pool, "marks").await;
    let row = StudentRepo::create(&pool, &new_student(teacher_id, "Alice", "Maths", 70))
        .await
        .unwrap();

    assert!(StudentRepo::set_marks(&pool, row.id, 95).await.unwrap());

    let updated = StudentRepo::find_by_id_for_teacher(&pool, row.id, teacher_id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(updated.marks, 95);
    assert!(updated.updated_at >= row.updated_at);
}

#[sqlx::test]
async fn duplicate_exists_excludes_the_row_itself(pool: DbPool) {
    let teacher_id = create_teacher(&pool, "dup").await;
    let alice = StudentRepo::create(&pool, &new_student(teacher_id, "Alice", "Maths", 70))
        .await
        .unwrap();
    let bob = StudentRepo::create(&pool, &new_student(teacher_id, "Bob", "Maths", 60))
        .await
        .unwrap();

    // Alice's own row is not a duplicate of itself.
    assert!(
        !StudentRepo::duplicate_exists(&pool, "Alice", "Maths", teacher_id, alice.id)
            .await
            .unwrap()
    );
    // But renaming Bob to Alice/Maths would collide.
    assert!(
        StudentRepo::duplicate_exists(&pool, "Alice", "Maths", teacher_id, bob.id)
            .await
            .unwrap()
    );
}

#[sqlx::test]
async fn delete_then_find_returns_none(pool: DbPool) {
    let teacher_id = create_teacher(&pool, "deleter").await;
    let row = StudentRepo::create(&pool, &new_student(teacher_id, "Alice", "Maths", 70))
        .await
        .unwrap();

    assert!(StudentRepo::delete_for_teacher(&pool, row.id, teacher_id)
        .await
        .unwrap());
    assert!(StudentRepo::find_by_id_for_teacher(&pool, row.id, teacher_id)
        .await
        .unwrap()
        .is_none());
}
