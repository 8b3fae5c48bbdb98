use std::fmt;

use rand::Rng;
use uuid::Uuid;

use crate::types::phrases::pick_phrase;
use crate::types::workout::{Activity, Coords, Workout, WorkoutKind};

#[derive(Debug, Clone, PartialEq)]
pub struct SummaryDetail {
    pub icon: &'static str,
    pub value: String,
    pub unit: &'static str,
}

/// One entry of the workout list. `id` lets the UI report which entry was selected.
#[derive(Debug, Clone, PartialEq)]
pub struct WorkoutSummary {
    pub id: Uuid,
    pub kind: WorkoutKind,
    pub title: String,
    pub details: Vec<SummaryDetail>,
}

impl fmt::Display for WorkoutSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.title)?;
        for detail in &self.details {
            write!(f, " | {} {} {}", detail.icon, detail.value, detail.unit)?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MarkerPopup {
    pub location: Coords,
    pub text: String,
    pub css_class: String,
}

fn kind_icon(kind: WorkoutKind) -> &'static str {
    match kind {
        WorkoutKind::Running => "🏃‍♂️",
        WorkoutKind::Cycling => "🚴‍♀️",
    }
}

fn detail(icon: &'static str, value: String, unit: &'static str) -> SummaryDetail {
    SummaryDetail { icon, value, unit }
}

pub fn summarize(workout: &Workout) -> WorkoutSummary {
    let mut details = vec![
        detail(kind_icon(workout.kind()), workout.distance().to_string(), "km"),
        detail("⏱", workout.duration().to_string(), "min"),
    ];

    match *workout.activity() {
        Activity::Running { step_rate, pace } => {
            details.push(detail("⚡️", format!("{:.1}", pace), "min/km"));
            details.push(detail("🦶🏼", step_rate.to_string(), "spm"));
        }
        Activity::Cycling {
            elevation_gain,
            speed,
        } => {
            details.push(detail("⚡️", format!("{:.1}", speed), "km/h"));
            details.push(detail("⛰", elevation_gain.to_string(), "m"));
        }
    }

    WorkoutSummary {
        id: workout.id(),
        kind: workout.kind(),
        title: workout.description().to_string(),
        details,
    }
}

/// Popup for a marker. The phrase is drawn fresh on every call.
pub fn marker_popup<R: Rng + ?Sized>(workout: &Workout, rng: &mut R, phrases: &[&str]) -> MarkerPopup {
    MarkerPopup {
        location: workout.location(),
        text: pick_phrase(rng, phrases).to_string(),
        css_class: format!("{}-popup", workout.kind().as_str()),
    }
}
