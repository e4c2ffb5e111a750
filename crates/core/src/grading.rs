//! Letter-grade and display-color derivation from a marks value.
//!
//! The two bandings intentionally disagree at the boundaries: letter grades
//! use seven tiers while display colors use four coarser ones. Do not unify
//! them without confirming intent with the dashboard owners.

/// Map a marks value to its letter grade.
pub fn letter_grade(marks: i64) -> &'static str {
    match marks {
        m if m >= 90 => "A+",
        m if m >= 80 => "A",
        m if m >= 70 => "B+",
        m if m >= 60 => "B",
        m if m >= 50 => "C",
        m if m >= 40 => "D",
        _ => "F",
    }
}

/// Map a marks value to the hex color used when rendering the grade.
pub fn grade_color(marks: i64) -> &'static str {
    match marks {
        m if m >= 80 => "#28a745", // green
        m if m >= 60 => "#ffc107", // yellow
        m if m >= 40 => "#fd7e14", // orange
        _ => "#dc3545",            // red
    }
}
