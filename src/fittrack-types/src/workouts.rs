use strum::{Display, EnumIter, IntoEnumIterator as _, IntoStaticStr};

/// Closed set of supported workouts.
///
/// `Display` yields the label shown in the summary line (`Running`,
/// `SportsWalking`, `Swimming`), while [`WorkoutKind::code`] is the
/// three-letter tag sensor packages are sent with.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter, IntoStaticStr,
)]
pub enum WorkoutKind {
    Running,
    SportsWalking,
    Swimming,
}

impl WorkoutKind {
    pub const fn code(self) -> &'static str {
        match self {
            WorkoutKind::Running => "RUN",
            WorkoutKind::SportsWalking => "WLK",
            WorkoutKind::Swimming => "SWM",
        }
    }

    /// Case-sensitive lookup of a package code.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "RUN" => Some(WorkoutKind::Running),
            "WLK" => Some(WorkoutKind::SportsWalking),
            "SWM" => Some(WorkoutKind::Swimming),
            _ => None,
        }
    }

    /// Number of positional parameters a package of this kind carries.
    pub const fn param_count(self) -> usize {
        match self {
            WorkoutKind::Running => 3,
            WorkoutKind::SportsWalking => 4,
            WorkoutKind::Swimming => 5,
        }
    }

    pub fn label(self) -> &'static str {
        self.into()
    }

    pub fn supported_codes() -> Vec<&'static str> {
        Self::iter().map(Self::code).collect()
    }
}

/// Raw sensor readings for one workout.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WorkoutRecord {
    /// Steps or strokes
    pub action: u32,
    /// Hours
    pub duration: f64,
    /// Kilograms
    pub weight: f64,
    pub details: WorkoutDetails,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum WorkoutDetails {
    Running,
    SportsWalking {
        /// Centimeters
        height: f64,
    },
    Swimming {
        /// Meters
        length_pool: f64,
        count_pool: u32,
    },
}

impl WorkoutDetails {
    pub fn kind(&self) -> WorkoutKind {
        match self {
            WorkoutDetails::Running => WorkoutKind::Running,
            WorkoutDetails::SportsWalking { .. } => WorkoutKind::SportsWalking,
            WorkoutDetails::Swimming { .. } => WorkoutKind::Swimming,
        }
    }
}

impl WorkoutRecord {
    pub fn kind(&self) -> WorkoutKind {
        self.details.kind()
    }
}
