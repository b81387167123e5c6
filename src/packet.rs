//! Sensor packet dispatch: code and batch validation, workout construction
//!
//! A tracker packet is a short workout-type code plus an ordered batch of
//! numeric readings. Dispatch validates the code against the static
//! code-to-kind mapping, checks the batch length against the kind's arity
//! constant, then assigns values positionally into the variant's fields.
//! The positional order is always `action, duration, weight, <extras>`.

use tracing::{trace, warn};

use crate::error::{Result, WorkoutError};
use crate::types::{Workout, WorkoutKind};

/// One raw packet as delivered by a tracker: type code plus value batch.
///
/// Owns its data so packets can be queued or replayed; for one-shot
/// dispatch, [`create_workout`] borrows the batch instead.
#[derive(Debug, Clone, PartialEq)]
pub struct SensorPacket {
    code: String,
    values: Vec<f64>,
}

impl SensorPacket {
    /// Wrap a code and value batch without validating them.
    pub fn new(code: impl Into<String>, values: Vec<f64>) -> Self {
        Self { code: code.into(), values }
    }

    /// The workout-type code this packet carries.
    pub fn code(&self) -> &str {
        &self.code
    }

    /// The raw value batch, in sensor declaration order.
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Validate this packet and construct the typed workout record.
    pub fn parse(&self) -> Result<Workout> {
        create_workout(&self.code, &self.values)
    }
}

/// Construct a [`Workout`] from a workout-type code and a positional value
/// batch.
///
/// # Errors
///
/// - [`WorkoutError::UnknownWorkoutType`] if `code` is not one of
///   `"SWM"`, `"RUN"`, `"WLK"`
/// - [`WorkoutError::InvalidDataArity`] if `values.len()` does not match
///   the selected kind's field count
/// - [`WorkoutError::InvalidDuration`] if the duration reading is zero,
///   negative, or non-finite
pub fn create_workout(code: &str, values: &[f64]) -> Result<Workout> {
    trace!(code, batch_len = values.len(), "Dispatching sensor packet");

    let kind = WorkoutKind::from_code(code).inspect_err(|_| {
        warn!(code, "Rejected packet with unknown workout type code");
    })?;

    if values.len() != kind.arity() {
        warn!(
            code,
            expected = kind.arity(),
            received = values.len(),
            "Rejected packet with wrong batch arity"
        );
        return Err(WorkoutError::invalid_data_arity(kind, values.len()));
    }

    // Speed divides by duration, so a zero or non-finite reading would
    // poison every downstream metric.
    let duration_h = values[1];
    if !(duration_h.is_finite() && duration_h > 0.0) {
        warn!(code, duration_h, "Rejected packet with unusable duration");
        return Err(WorkoutError::invalid_duration(kind, duration_h));
    }

    let workout = match kind {
        WorkoutKind::Running => Workout::Running {
            action: values[0],
            duration_h: values[1],
            weight_kg: values[2],
        },
        WorkoutKind::SportsWalking => Workout::SportsWalking {
            action: values[0],
            duration_h: values[1],
            weight_kg: values[2],
            height_cm: values[3],
        },
        WorkoutKind::Swimming => Workout::Swimming {
            action: values[0],
            duration_h: values[1],
            weight_kg: values[2],
            pool_length_m: values[3],
            pool_laps: values[4],
        },
    };

    Ok(workout)
}
