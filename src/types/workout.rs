//! Workout records and the per-kind metric calculator

use serde::{Deserialize, Serialize};

use super::coefficients::{running, step_length, swimming, units, walking};
use super::kind::WorkoutKind;
use super::summary::Summary;

/// One workout's raw sensor readings, tagged by activity kind.
///
/// A `Workout` is constructed from a single sensor batch (see
/// [`crate::SensorPacket`]), used to derive exactly one [`Summary`], and
/// discarded. Fields are never mutated after construction.
///
/// Common to every variant: `action` (steps or strokes recorded),
/// `duration_h` (workout length in hours), `weight_kg` (athlete weight).
/// The calorie formula is variant-specific, and Swimming additionally
/// overrides the mean-speed derivation with pool geometry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Workout {
    Running {
        action: f64,
        duration_h: f64,
        weight_kg: f64,
    },
    SportsWalking {
        action: f64,
        duration_h: f64,
        weight_kg: f64,
        height_cm: f64,
    },
    Swimming {
        action: f64,
        duration_h: f64,
        weight_kg: f64,
        pool_length_m: f64,
        pool_laps: f64,
    },
}

impl Workout {
    /// The activity kind tag for this record.
    pub fn kind(&self) -> WorkoutKind {
        match self {
            Workout::Running { .. } => WorkoutKind::Running,
            Workout::SportsWalking { .. } => WorkoutKind::SportsWalking,
            Workout::Swimming { .. } => WorkoutKind::Swimming,
        }
    }

    fn action(&self) -> f64 {
        match *self {
            Workout::Running { action, .. }
            | Workout::SportsWalking { action, .. }
            | Workout::Swimming { action, .. } => action,
        }
    }

    /// Workout length in hours, as reported by the sensor.
    pub fn duration_h(&self) -> f64 {
        match *self {
            Workout::Running { duration_h, .. }
            | Workout::SportsWalking { duration_h, .. }
            | Workout::Swimming { duration_h, .. } => duration_h,
        }
    }

    fn weight_kg(&self) -> f64 {
        match *self {
            Workout::Running { weight_kg, .. }
            | Workout::SportsWalking { weight_kg, .. }
            | Workout::Swimming { weight_kg, .. } => weight_kg,
        }
    }

    fn step_length_m(&self) -> f64 {
        match self {
            Workout::Running { .. } | Workout::SportsWalking { .. } => step_length::FOOT,
            Workout::Swimming { .. } => step_length::STROKE,
        }
    }

    /// Distance covered, in kilometres: recorded actions times the per-kind
    /// step length.
    pub fn distance_km(&self) -> f64 {
        self.action() * self.step_length_m() / units::M_IN_KM
    }

    /// Mean speed over the workout, in km/h.
    ///
    /// Swimming derives speed from pool geometry rather than stroke count:
    /// `pool_length_m * pool_laps / 1000 / duration_h`.
    pub fn mean_speed_kmh(&self) -> f64 {
        match *self {
            Workout::Swimming { duration_h, pool_length_m, pool_laps, .. } => {
                pool_length_m * pool_laps / units::M_IN_KM / duration_h
            }
            _ => self.distance_km() / self.duration_h(),
        }
    }

    /// Calories burned, per the variant's reference formula.
    pub fn calories(&self) -> f64 {
        match *self {
            Workout::Running { duration_h, weight_kg, .. } => {
                (running::MEAN_SPEED_MULTIPLIER * self.mean_speed_kmh()
                    + running::MEAN_SPEED_SHIFT)
                    * (weight_kg / units::M_IN_KM)
                    * (duration_h * units::MIN_IN_H)
            }
            Workout::SportsWalking { duration_h, weight_kg, height_cm, .. } => {
                let speed_m_s = self.mean_speed_kmh() * units::KMH_TO_MS;
                let height_m = height_cm / units::CM_IN_M;
                (walking::WEIGHT_MULTIPLIER * weight_kg
                    + (speed_m_s.powi(2) / height_m)
                        * walking::SPEED_HEIGHT_MULTIPLIER
                        * weight_kg)
                    * (duration_h * units::MIN_IN_H)
            }
            Workout::Swimming { duration_h, weight_kg, .. } => {
                (self.mean_speed_kmh() + swimming::MEAN_SPEED_OFFSET)
                    * swimming::WEIGHT_MULTIPLIER
                    * weight_kg
                    * duration_h
            }
        }
    }

    /// Compute all metrics for this workout into a [`Summary`].
    pub fn summary(&self) -> Summary {
        Summary {
            kind: self.kind(),
            duration_h: self.duration_h(),
            distance_km: self.distance_km(),
            mean_speed_kmh: self.mean_speed_kmh(),
            calories: self.calories(),
        }
    }
}
