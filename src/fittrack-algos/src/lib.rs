pub mod constants;

pub(crate) mod training;
pub use training::Training;

pub(crate) mod package;
pub use package::{Package, read_package};

mod error;
pub use error::TrainingError;

pub use fittrack_types::{InfoMessage, WorkoutDetails, WorkoutKind, WorkoutRecord};
