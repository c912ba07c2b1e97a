use fittrack_types::WorkoutKind;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum TrainingError {
    #[error("unsupported workout type `{0}`, expected one of RUN, WLK, SWM")]
    InvalidArgument(String),
    #[error("{kind} expects {expected} parameters, got {got}")]
    ParameterCount {
        kind: WorkoutKind,
        expected: usize,
        got: usize,
    },
    #[error("`{field}` must be a non-negative integer, got {value}")]
    NotAnInteger { field: &'static str, value: f64 },
    #[error("`{field}` is a divisor and must not be zero")]
    ZeroDivisor { field: &'static str },
}
