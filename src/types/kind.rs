//! Workout kind identification and sensor code mapping

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::WorkoutError;

/// The closed set of activity types understood by the tracker.
///
/// Each kind corresponds to one sensor packet code and one arity (the number
/// of positional values the sensor sends for it). The set is fixed by the
/// device firmware; adding a kind means adding a variant here and letting
/// exhaustive matching surface every site that needs a formula.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WorkoutKind {
    Running,
    SportsWalking,
    Swimming,
}

impl WorkoutKind {
    /// All kinds, in sensor-protocol declaration order.
    pub const ALL: [WorkoutKind; 3] =
        [WorkoutKind::Swimming, WorkoutKind::Running, WorkoutKind::SportsWalking];

    /// The three-letter code this kind carries on the wire.
    pub fn code(self) -> &'static str {
        match self {
            WorkoutKind::Running => "RUN",
            WorkoutKind::SportsWalking => "WLK",
            WorkoutKind::Swimming => "SWM",
        }
    }

    /// Canonical label used in the formatted summary line.
    pub fn label(self) -> &'static str {
        match self {
            WorkoutKind::Running => "Running",
            WorkoutKind::SportsWalking => "SportsWalking",
            WorkoutKind::Swimming => "Swimming",
        }
    }

    /// Number of positional values a sensor batch must carry for this kind.
    ///
    /// Running: action, duration, weight.
    /// SportsWalking: action, duration, weight, height.
    /// Swimming: action, duration, weight, pool length, pool laps.
    pub fn arity(self) -> usize {
        match self {
            WorkoutKind::Running => 3,
            WorkoutKind::SportsWalking => 4,
            WorkoutKind::Swimming => 5,
        }
    }

    /// Decode a sensor packet code into a kind.
    ///
    /// The mapping is static; unknown codes are rejected with
    /// [`WorkoutError::UnknownWorkoutType`].
    pub fn from_code(code: &str) -> Result<Self, WorkoutError> {
        match code {
            "SWM" => Ok(WorkoutKind::Swimming),
            "RUN" => Ok(WorkoutKind::Running),
            "WLK" => Ok(WorkoutKind::SportsWalking),
            other => Err(WorkoutError::unknown_workout_type(other)),
        }
    }
}

impl FromStr for WorkoutKind {
    type Err = WorkoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        WorkoutKind::from_code(s)
    }
}

impl fmt::Display for WorkoutKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
