use fittrack_types::WorkoutKind;
use serde::{Deserialize, Serialize};

use crate::{Training, TrainingError};

/// Sensor bundle as it arrives: a workout code and positional readings.
///
/// | code | params                                               |
/// |------|------------------------------------------------------|
/// | RUN  | action, duration, weight                             |
/// | WLK  | action, duration, weight, height                     |
/// | SWM  | action, duration, weight, length_pool, count_pool    |
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Package {
    #[serde(alias = "workout_type")]
    pub code: String,
    #[serde(alias = "data")]
    pub params: Vec<f64>,
}

impl Package {
    pub fn new(code: impl Into<String>, params: impl Into<Vec<f64>>) -> Self {
        Self {
            code: code.into(),
            params: params.into(),
        }
    }

    pub fn read(&self) -> Result<Training, TrainingError> {
        read_package(&self.code, &self.params)
    }
}

/// Builds the workout matching `workout_type` from its positional readings.
///
/// Fails without constructing anything on an unknown code, a wrong number of
/// readings, a fractional count, or a zero divisor (`duration`, `height`).
pub fn read_package(workout_type: &str, data: &[f64]) -> Result<Training, TrainingError> {
    let kind = WorkoutKind::from_code(workout_type)
        .ok_or_else(|| TrainingError::InvalidArgument(workout_type.to_owned()))?;

    let training = match (kind, data) {
        (WorkoutKind::Running, &[action, duration, weight]) => Training::running(
            whole_number("action", action)?,
            non_zero("duration", duration)?,
            weight,
        ),
        (WorkoutKind::SportsWalking, &[action, duration, weight, height]) => {
            Training::sports_walking(
                whole_number("action", action)?,
                non_zero("duration", duration)?,
                weight,
                non_zero("height", height)?,
            )
        }
        (WorkoutKind::Swimming, &[action, duration, weight, length_pool, count_pool]) => {
            Training::swimming(
                whole_number("action", action)?,
                non_zero("duration", duration)?,
                weight,
                length_pool,
                whole_number("count_pool", count_pool)?,
            )
        }
        _ => {
            return Err(TrainingError::ParameterCount {
                kind,
                expected: kind.param_count(),
                got: data.len(),
            });
        }
    };

    Ok(training)
}

fn whole_number(field: &'static str, value: f64) -> Result<u32, TrainingError> {
    if value.is_finite() && value >= 0.0 && value.fract() == 0.0 && value <= f64::from(u32::MAX)
    {
        Ok(value as u32)
    } else {
        Err(TrainingError::NotAnInteger { field, value })
    }
}

fn non_zero(field: &'static str, value: f64) -> Result<f64, TrainingError> {
    if value == 0.0 {
        Err(TrainingError::ZeroDivisor { field })
    } else {
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fittrack_types::WorkoutDetails;

    #[test]
    fn builds_every_kind() {
        let swimming = read_package("SWM", &[720.0, 1.0, 80.0, 25.0, 40.0]).unwrap();
        assert_eq!(
            swimming.record().details,
            WorkoutDetails::Swimming {
                length_pool: 25.0,
                count_pool: 40
            }
        );
        assert_eq!(swimming.record().action, 720);

        let running = read_package("RUN", &[15000.0, 1.0, 75.0]).unwrap();
        assert_eq!(running, Training::running(15000, 1.0, 75.0));

        let walking = read_package("WLK", &[9000.0, 1.0, 75.0, 180.0]).unwrap();
        assert_eq!(walking, Training::sports_walking(9000, 1.0, 75.0, 180.0));
    }

    #[test]
    fn unknown_code_is_invalid_argument() {
        let err = read_package("XYZ", &[1.0, 1.0, 1.0]).unwrap_err();
        assert_eq!(err, TrainingError::InvalidArgument("XYZ".to_owned()));
        assert!(err.to_string().contains("`XYZ`"));
    }

    #[test]
    fn codes_are_case_sensitive() {
        assert!(matches!(
            read_package("run", &[15000.0, 1.0, 75.0]),
            Err(TrainingError::InvalidArgument(_))
        ));
    }

    #[test]
    fn wrong_parameter_count() {
        assert_eq!(
            read_package("RUN", &[15000.0, 1.0]).unwrap_err(),
            TrainingError::ParameterCount {
                kind: WorkoutKind::Running,
                expected: 3,
                got: 2
            }
        );
        assert_eq!(
            read_package("WLK", &[9000.0, 1.0, 75.0]).unwrap_err(),
            TrainingError::ParameterCount {
                kind: WorkoutKind::SportsWalking,
                expected: 4,
                got: 3
            }
        );
        assert_eq!(
            read_package("SWM", &[720.0, 1.0, 80.0, 25.0, 40.0, 1.0]).unwrap_err(),
            TrainingError::ParameterCount {
                kind: WorkoutKind::Swimming,
                expected: 5,
                got: 6
            }
        );
    }

    #[test]
    fn counts_must_be_whole() {
        assert_eq!(
            read_package("RUN", &[15000.5, 1.0, 75.0]).unwrap_err(),
            TrainingError::NotAnInteger {
                field: "action",
                value: 15000.5
            }
        );
        assert!(matches!(
            read_package("SWM", &[720.0, 1.0, 80.0, 25.0, -1.0]),
            Err(TrainingError::NotAnInteger {
                field: "count_pool",
                ..
            })
        ));
        assert!(matches!(
            read_package("RUN", &[f64::INFINITY, 1.0, 75.0]),
            Err(TrainingError::NotAnInteger { field: "action", .. })
        ));
    }

    #[test]
    fn zero_divisors_are_rejected() {
        assert_eq!(
            read_package("RUN", &[15000.0, 0.0, 75.0]).unwrap_err(),
            TrainingError::ZeroDivisor { field: "duration" }
        );
        assert_eq!(
            read_package("WLK", &[9000.0, 1.0, 75.0, 0.0]).unwrap_err(),
            TrainingError::ZeroDivisor { field: "height" }
        );
        assert_eq!(
            read_package("SWM", &[720.0, 0.0, 80.0, 25.0, 40.0]).unwrap_err(),
            TrainingError::ZeroDivisor { field: "duration" }
        );
    }

    #[test]
    fn zero_pool_is_not_a_divisor() {
        let training = read_package("SWM", &[720.0, 1.0, 80.0, 0.0, 0.0]).unwrap();
        assert_eq!(training.mean_speed(), 0.0);
    }

    #[test]
    fn package_reads_through_factory() {
        let package = Package::new("RUN", [15000.0, 1.0, 75.0]);
        assert_eq!(package.read().unwrap(), Training::running(15000, 1.0, 75.0));
        assert!(Package::new("XYZ", Vec::<f64>::new()).read().is_err());
    }

    #[test]
    fn package_json_accepts_both_field_names() {
        let short: Package =
            serde_json::from_str(r#"{"code": "WLK", "params": [9000, 1, 75, 180]}"#).unwrap();
        let long: Package =
            serde_json::from_str(r#"{"workout_type": "WLK", "data": [9000, 1, 75, 180]}"#)
                .unwrap();
        assert_eq!(short, long);
        assert_eq!(short, Package::new("WLK", [9000.0, 1.0, 75.0, 180.0]));
    }
}
