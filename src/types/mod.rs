//! Core types for workout data representation.
//!
//! This module provides the foundational data structures for handling
//! fitness-tracker sensor data:
//! - [`WorkoutKind`] is the closed set of activity types with their wire
//!   codes, labels, and batch arities
//! - [`Workout`] holds one workout's raw readings and computes distance,
//!   mean speed, and calories per kind
//! - [`Summary`] is the derived value object rendered into the fixed
//!   summary line
//! - [`coefficients`] carries the reference formula constants per kind
//!
//! ## Architecture
//!
//! The variant set is fixed by the device firmware, so kinds are a closed
//! enum dispatched by exhaustive matching; there is no open subclassing and
//! no way to construct a workout without a complete calorie formula.
//!
//! ## Usage Example
//!
//! ```rust
//! use pacer::types::{Workout, WorkoutKind};
//!
//! let workout = Workout::Running { action: 15000.0, duration_h: 1.0, weight_kg: 75.0 };
//! assert_eq!(workout.kind(), WorkoutKind::Running);
//! assert_eq!(workout.distance_km(), 9.75);
//! let line = workout.summary().message();
//! assert!(line.starts_with("Training type: Running;"));
//! ```

pub mod coefficients;
mod kind;
mod summary;
mod workout;

// Re-export all public types
pub use kind::WorkoutKind;
pub use summary::Summary;
pub use workout::Workout;
