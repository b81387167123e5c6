//! Error types for sensor packet processing.
//!
//! All errors implement the `std::error::Error` trait and carry structured
//! context for diagnostics.
//!
//! ## Error Categories
//!
//! - **Unknown Workout Type**: the packet code is not in the recognized set
//! - **Invalid Data Arity**: the value batch length does not match the
//!   selected workout kind's field count
//! - **Invalid Duration**: the reported duration cannot support the speed
//!   and calorie derivations (zero, negative, or non-finite)
//!
//! Every error occurs at the dispatch boundary, before any metric is
//! computed; there are no partial results to clean up.
//!
//! ## Helper Constructors
//!
//! ```rust
//! use pacer::{WorkoutError, WorkoutKind};
//!
//! let error = WorkoutError::invalid_data_arity(WorkoutKind::Running, 5);
//! assert!(error.is_input_error());
//! ```

use thiserror::Error;

use crate::types::WorkoutKind;

/// Result type alias for workout operations.
pub type Result<T, E = WorkoutError> = std::result::Result<T, E>;

/// Main error type for workout dispatch and computation.
#[derive(Error, Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum WorkoutError {
    #[error("Unknown workout type code '{code}'")]
    UnknownWorkoutType { code: String },

    #[error("Invalid data arity for {kind}: expected {expected} values, received {received}")]
    InvalidDataArity { kind: WorkoutKind, expected: usize, received: usize },

    #[error("Invalid duration for {kind}: {duration_h} h")]
    InvalidDuration { kind: WorkoutKind, duration_h: f64 },
}

impl WorkoutError {
    /// Returns whether this error was caused by malformed caller input.
    ///
    /// Currently every variant is an input error; the method exists so
    /// callers distinguishing input problems from future internal failures
    /// do not need to enumerate variants of a `#[non_exhaustive]` enum.
    pub fn is_input_error(&self) -> bool {
        match self {
            WorkoutError::UnknownWorkoutType { .. } => true,
            WorkoutError::InvalidDataArity { .. } => true,
            WorkoutError::InvalidDuration { .. } => true,
        }
    }

    /// Helper constructor for unrecognized packet codes.
    pub fn unknown_workout_type(code: impl Into<String>) -> Self {
        WorkoutError::UnknownWorkoutType { code: code.into() }
    }

    /// Helper constructor for batch-length mismatches; the expected count
    /// comes from the kind itself.
    pub fn invalid_data_arity(kind: WorkoutKind, received: usize) -> Self {
        WorkoutError::InvalidDataArity { kind, expected: kind.arity(), received }
    }

    /// Helper constructor for unusable durations.
    pub fn invalid_duration(kind: WorkoutKind, duration_h: f64) -> Self {
        WorkoutError::InvalidDuration { kind, duration_h }
    }
}
