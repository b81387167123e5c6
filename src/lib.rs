//! Modern, type-safe Rust library for fitness-tracker workout metrics.
//!
//! Pacer turns raw tracker sensor packets into computed workout summaries:
//! distance covered, mean speed, and calories burned, rendered as a fixed
//! human-readable line.
//!
//! # Features
//!
//! - **Typed workouts**: a closed set of activity kinds with exhaustive
//!   per-kind formulas, validated at the packet boundary
//! - **Structured errors**: unknown codes, wrong batch arity, and unusable
//!   durations are rejected with full diagnostic context
//! - **Stable output**: the summary template and 3-decimal rounding are
//!   byte-for-byte reproducible
//!
//! # Quick Start
//!
//! ```rust
//! use pacer::summarize;
//!
//! fn main() -> pacer::Result<()> {
//!     let line = summarize("RUN", &[15000.0, 1.0, 75.0])?;
//!     assert_eq!(
//!         line,
//!         "Training type: Running; Duration: 1.000 h.; Distance: 9.750 km; \
//!          Mean speed: 9.750 km/h; Calories burned: 797.805."
//!     );
//!     Ok(())
//! }
//! ```
//!
//! For finer control, dispatch and formatting are separate steps:
//!
//! ```rust
//! use pacer::{create_workout, Summary};
//!
//! # fn main() -> pacer::Result<()> {
//! let workout = create_workout("SWM", &[720.0, 1.0, 80.0, 25.0, 40.0])?;
//! let summary: Summary = workout.summary();
//! assert_eq!(summary.mean_speed_kmh, 1.0);
//! println!("{summary}");
//! # Ok(())
//! # }
//! ```

// Core types and error handling
mod error;
mod packet;
pub mod types;

// Core exports
pub use error::{Result, WorkoutError};
pub use packet::{SensorPacket, create_workout};
pub use types::{Summary, Workout, WorkoutKind};

/// Dispatch a sensor packet, compute its metrics, and render the summary
/// line in one call.
///
/// Composes [`create_workout`], [`Workout::summary`], and the fixed
/// [`Summary`] template.
///
/// # Errors
///
/// Propagates the dispatch errors of [`create_workout`]; formatting and
/// computation never fail on a validated workout.
///
/// # Example
///
/// ```rust
/// let line = pacer::summarize("WLK", &[9000.0, 1.0, 75.0, 180.0])?;
/// assert!(line.starts_with("Training type: SportsWalking;"));
/// # Ok::<(), pacer::WorkoutError>(())
/// ```
pub fn summarize(code: &str, values: &[f64]) -> Result<String> {
    let workout = create_workout(code, values)?;
    Ok(workout.summary().message())
}
