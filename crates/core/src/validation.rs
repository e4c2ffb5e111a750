//! Input validators for registration and student submissions.
//!
//! `validate_student_data` collects every violation into one "; "-joined
//! message instead of failing on the first, so a form submission surfaces
//! all of its problems in a single round trip.

use std::sync::OnceLock;

use regex::Regex;

static EMAIL_RE: OnceLock<Regex> = OnceLock::new();

/// Check that an email is of the form `local@domain.tld` with a 2+ letter TLD.
pub fn validate_email(email: &str) -> bool {
    let re = EMAIL_RE.get_or_init(|| {
        Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$")
            .expect("email regex is valid")
    });
    !email.is_empty() && re.is_match(email)
}

/// Minimum password length: 6 characters.
pub fn validate_password(password: &str) -> bool {
    password.len() >= 6
}

/// Parse a marks field that may arrive as a JSON integer or a numeric string.
///
/// Returns `None` for anything that is not a whole number.
pub fn parse_marks(raw: &serde_json::Value) -> Option<i64> {
    match raw {
        serde_json::Value::Number(n) => n.as_i64(),
        serde_json::Value::String(s) => s.trim().parse::<i64>().ok(),
        _ => None,
    }
}

/// Validate a student submission, collecting all violations.
///
/// `name` and `subject_name` are checked after trimming. On success the
/// parsed marks value is returned; on failure the combined human-readable
/// message. This function never panics on malformed input.
pub fn validate_student_data(
    name: &str,
    subject_name: &str,
    marks: &serde_json::Value,
) -> Result<i64, String> {
    let mut errors: Vec<&'static str> = Vec::new();

    // Length bounds count characters, not bytes, so multi-byte names are
    // measured the way a person would count them.
    let name = name.trim();
    let name_chars = name.chars().count();
    if name.is_empty() {
        errors.push("Student name is required");
    } else if name_chars < 2 {
        errors.push("Student name must be at least 2 characters long");
    } else if name_chars > 100 {
        errors.push("Student name must be less than 100 characters");
    }

    let subject_name = subject_name.trim();
    let subject_chars = subject_name.chars().count();
    if subject_name.is_empty() {
        errors.push("Subject name is required");
    } else if subject_chars < 2 {
        errors.push("Subject name must be at least 2 characters long");
    } else if subject_chars > 100 {
        errors.push("Subject name must be less than 100 characters");
    }

    let mut parsed = None;
    match parse_marks(marks) {
        Some(m) if m < 0 => errors.push("Marks cannot be negative"),
        Some(m) if m > 1000 => errors.push("Marks cannot exceed 1000"),
        Some(m) => parsed = Some(m),
        None => errors.push("Marks must be a valid number"),
    }

    if errors.is_empty() {
        // parsed is always Some here: no marks error was recorded.
        Ok(parsed.expect("marks parsed without errors"))
    } else {
        Err(errors.join("; "))
    }
}
