use serde::Deserialize;

use crate::types::workout::{ActivityInput, WorkoutKind};

/// Raw form contents as typed by the user. Only the field matching `kind` is read.
#[derive(Debug, Clone, Deserialize)]
pub struct FormInput {
    pub kind: WorkoutKind,
    #[serde(default)]
    pub distance: String,
    #[serde(default)]
    pub duration: String,
    #[serde(default)]
    pub step_rate: String,
    #[serde(default)]
    pub elevation_gain: String,
}

impl FormInput {
    pub fn running(distance: &str, duration: &str, step_rate: &str) -> Self {
        Self {
            kind: WorkoutKind::Running,
            distance: distance.to_string(),
            duration: duration.to_string(),
            step_rate: step_rate.to_string(),
            elevation_gain: String::new(),
        }
    }

    pub fn cycling(distance: &str, duration: &str, elevation_gain: &str) -> Self {
        Self {
            kind: WorkoutKind::Cycling,
            distance: distance.to_string(),
            duration: duration.to_string(),
            step_rate: String::new(),
            elevation_gain: elevation_gain.to_string(),
        }
    }
}

/// Validated numbers ready to become a workout once a location is attached.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WorkoutDraft {
    pub distance: f64,
    pub duration: f64,
    pub input: ActivityInput,
}
