#[macro_use]
extern crate serde;

pub mod workouts;
pub use workouts::{WorkoutDetails, WorkoutKind, WorkoutRecord};

mod info_message;
pub use info_message::{InfoMessage, Locale};
