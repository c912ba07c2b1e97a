use fittrack_types::{InfoMessage, WorkoutDetails, WorkoutKind, WorkoutRecord};

use crate::constants::{LEN_STEP, M_IN_KM, MIN_IN_HOUR, running, sports_walking, swimming};

/// One workout and the formulas that apply to it.
///
/// All shared readings live in [`WorkoutRecord`]; the variant payload in
/// [`WorkoutDetails`] selects the formula set:
/// - distance is `action * step length`, where swimming uses its stroke length
/// - mean speed is `distance / duration`, except swimming which measures pool
///   laps instead, so for swimming `distance()` and `mean_speed()` disagree
/// - calories use a per-variant empirical formula
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Training {
    record: WorkoutRecord,
}

impl Training {
    pub fn new(record: WorkoutRecord) -> Self {
        Self { record }
    }

    pub fn running(action: u32, duration: f64, weight: f64) -> Self {
        Self::new(WorkoutRecord {
            action,
            duration,
            weight,
            details: WorkoutDetails::Running,
        })
    }

    pub fn sports_walking(action: u32, duration: f64, weight: f64, height: f64) -> Self {
        Self::new(WorkoutRecord {
            action,
            duration,
            weight,
            details: WorkoutDetails::SportsWalking { height },
        })
    }

    pub fn swimming(
        action: u32,
        duration: f64,
        weight: f64,
        length_pool: f64,
        count_pool: u32,
    ) -> Self {
        Self::new(WorkoutRecord {
            action,
            duration,
            weight,
            details: WorkoutDetails::Swimming {
                length_pool,
                count_pool,
            },
        })
    }

    pub fn record(&self) -> &WorkoutRecord {
        &self.record
    }

    pub fn kind(&self) -> WorkoutKind {
        self.record.kind()
    }

    fn len_step(&self) -> f64 {
        match self.record.details {
            WorkoutDetails::Swimming { .. } => swimming::LEN_STEP,
            WorkoutDetails::Running | WorkoutDetails::SportsWalking { .. } => LEN_STEP,
        }
    }

    /// Kilometers
    pub fn distance(&self) -> f64 {
        f64::from(self.record.action) * self.len_step() / M_IN_KM
    }

    /// km/h
    pub fn mean_speed(&self) -> f64 {
        match self.record.details {
            WorkoutDetails::Swimming {
                length_pool,
                count_pool,
            } => length_pool * f64::from(count_pool) / M_IN_KM / self.record.duration,
            WorkoutDetails::Running | WorkoutDetails::SportsWalking { .. } => {
                self.distance() / self.record.duration
            }
        }
    }

    pub fn spent_calories(&self) -> f64 {
        let WorkoutRecord {
            duration, weight, ..
        } = self.record;
        let speed = self.mean_speed();

        match self.record.details {
            WorkoutDetails::Running => {
                (running::CAL_MULT * speed + running::CAL_SHIFT) * weight / M_IN_KM
                    * (duration * MIN_IN_HOUR)
            }
            WorkoutDetails::SportsWalking { height } => {
                (sports_walking::CAL_WEIGHT_MULT * weight
                    + (speed * sports_walking::KMH_IN_MSEC).powi(2)
                        / (height / sports_walking::CM_IN_M)
                        * sports_walking::CAL_SPEED_HEIGHT_MULT
                        * weight)
                    * (duration * MIN_IN_HOUR)
            }
            WorkoutDetails::Swimming { .. } => {
                (speed + swimming::CAL_SHIFT) * swimming::CAL_MULT * weight * duration
            }
        }
    }

    pub fn show_training_info(&self) -> InfoMessage {
        InfoMessage {
            training_type: self.kind(),
            duration: self.record.duration,
            distance: self.distance(),
            speed: self.mean_speed(),
            calories: self.spent_calories(),
        }
    }
}
