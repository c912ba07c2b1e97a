//! Coefficients of the calorie estimation formulas.

pub const M_IN_KM: f64 = 1000.0;
pub const MIN_IN_HOUR: f64 = 60.0;

/// Meters covered by one step.
pub const LEN_STEP: f64 = 0.65;

pub mod running {
    pub const CAL_MULT: f64 = 18.0;
    pub const CAL_SHIFT: f64 = 1.79;
}

pub mod sports_walking {
    pub const CAL_WEIGHT_MULT: f64 = 0.035;
    pub const CAL_SPEED_HEIGHT_MULT: f64 = 0.029;
    /// Converts km/h to m/s.
    pub const KMH_IN_MSEC: f64 = 0.278;
    pub const CM_IN_M: f64 = 100.0;
}

pub mod swimming {
    /// Meters covered by one stroke.
    pub const LEN_STEP: f64 = 1.38;
    pub const CAL_SHIFT: f64 = 1.1;
    pub const CAL_MULT: f64 = 2.0;
}
