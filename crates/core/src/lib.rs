//! Pure domain logic for ClassTrack: error taxonomy, shared type aliases,
//! field validation, and grade derivation. No I/O lives in this crate.

pub mod error;
pub mod grading;
pub mod types;
pub mod validation;
