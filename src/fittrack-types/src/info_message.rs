use std::fmt;

use strum::{Display, EnumString};

use crate::WorkoutKind;

/// Language the summary labels are rendered in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, EnumString, Display)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Locale {
    #[default]
    Ru,
    En,
}

struct Labels {
    training_type: &'static str,
    duration: &'static str,
    hours: &'static str,
    distance: &'static str,
    km: &'static str,
    speed: &'static str,
    km_h: &'static str,
    calories: &'static str,
}

impl Locale {
    const fn labels(self) -> Labels {
        match self {
            Locale::Ru => Labels {
                training_type: "Тип тренировки",
                duration: "Длительность",
                hours: "ч.",
                distance: "Дистанция",
                km: "км",
                speed: "Ср. скорость",
                km_h: "км/ч",
                calories: "Потрачено ккал",
            },
            Locale::En => Labels {
                training_type: "Training type",
                duration: "Duration",
                hours: "h",
                distance: "Distance",
                km: "km",
                speed: "Mean speed",
                km_h: "km/h",
                calories: "Calories burned",
            },
        }
    }
}

/// Computed metrics of one workout.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InfoMessage {
    pub training_type: WorkoutKind,
    /// Hours
    pub duration: f64,
    /// Kilometers
    pub distance: f64,
    /// km/h
    pub speed: f64,
    pub calories: f64,
}

impl InfoMessage {
    pub fn get_message(&self) -> String {
        self.render(Locale::Ru)
    }

    /// Single line, every number with exactly three decimals.
    pub fn render(&self, locale: Locale) -> String {
        let l = locale.labels();
        format!(
            "{}: {}; {}: {:.3} {}; {}: {:.3} {}; {}: {:.3} {}; {}: {:.3}.",
            l.training_type,
            self.training_type,
            l.duration,
            self.duration,
            l.hours,
            l.distance,
            self.distance,
            l.km,
            l.speed,
            self.speed,
            l.km_h,
            l.calories,
            self.calories,
        )
    }
}

impl fmt::Display for InfoMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.get_message())
    }
}
