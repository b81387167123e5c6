//! Formula constants for workout metric calculations
//!
//! This module contains the calibration coefficients used by the distance,
//! mean-speed, and calorie formulas, grouped per workout kind. The values
//! come from the reference tracker firmware and must not be altered: summary
//! output is compared against reference devices at 3-decimal precision.

// Unit conversions shared by every kind
pub mod units {
    pub const M_IN_KM: f64 = 1000.0;
    pub const MIN_IN_H: f64 = 60.0;
    pub const CM_IN_M: f64 = 100.0;

    /// km/h to m/s ratio, pre-rounded to 3 decimals by the reference
    /// firmware (round(1000/3600, 3)). Using the exact ratio shifts the
    /// walking calorie output by ~0.3 kcal on the reference packets.
    pub const KMH_TO_MS: f64 = 0.278;
}

// Distance covered per recorded action (step or stroke), in metres
pub mod step_length {
    pub const FOOT: f64 = 0.65; // running and sports walking
    pub const STROKE: f64 = 1.38; // swimming
}

pub mod running {
    pub const MEAN_SPEED_MULTIPLIER: f64 = 18.0;
    pub const MEAN_SPEED_SHIFT: f64 = 1.79;
}

pub mod walking {
    pub const WEIGHT_MULTIPLIER: f64 = 0.035;
    pub const SPEED_HEIGHT_MULTIPLIER: f64 = 0.029;
}

pub mod swimming {
    pub const MEAN_SPEED_OFFSET: f64 = 1.1;
    pub const WEIGHT_MULTIPLIER: f64 = 2.0;
}
