//! Computed workout summary and its fixed display template

use std::fmt;

use serde::{Deserialize, Serialize};

use super::kind::WorkoutKind;

/// Derived metrics for one completed workout.
///
/// Produced once per computation by [`Workout::summary`](super::Workout::summary)
/// and immediately consumed by the formatter; a plain value object with no
/// behavior beyond rendering.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    pub kind: WorkoutKind,
    pub duration_h: f64,
    pub distance_km: f64,
    pub mean_speed_kmh: f64,
    pub calories: f64,
}

impl Summary {
    /// Render the fixed summary line.
    ///
    /// Field order and 3-decimal rounding are part of the output contract;
    /// downstream display widgets compare these strings byte for byte.
    pub fn message(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Training type: {}; Duration: {:.3} h.; Distance: {:.3} km; \
             Mean speed: {:.3} km/h; Calories burned: {:.3}.",
            self.kind.label(),
            self.duration_h,
            self.distance_km,
            self.mean_speed_kmh,
            self.calories,
        )
    }
}
