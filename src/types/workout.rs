use chrono::{DateTime, Datelike, Local, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::WorkoutError;
use crate::pipeline::validate::{all_finite, all_positive};

const MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Latitude/longitude pair. Serialized as `[lat, lng]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "[f64; 2]", into = "[f64; 2]")]
pub struct Coords {
    pub lat: f64,
    pub lng: f64,
}

impl Coords {
    pub fn new(lat: f64, lng: f64) -> Result<Self, WorkoutError> {
        let in_range = lat.is_finite()
            && lng.is_finite()
            && (-90.0..=90.0).contains(&lat)
            && (-180.0..=180.0).contains(&lng);
        if !in_range {
            return Err(WorkoutError::InvalidLocation { lat, lng });
        }
        Ok(Self { lat, lng })
    }
}

impl TryFrom<[f64; 2]> for Coords {
    type Error = WorkoutError;

    fn try_from([lat, lng]: [f64; 2]) -> Result<Self, Self::Error> {
        Coords::new(lat, lng)
    }
}

impl From<Coords> for [f64; 2] {
    fn from(coords: Coords) -> Self {
        [coords.lat, coords.lng]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WorkoutKind {
    Running,
    Cycling,
}

impl WorkoutKind {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "running" => Some(WorkoutKind::Running),
            "cycling" => Some(WorkoutKind::Cycling),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            WorkoutKind::Running => "running",
            WorkoutKind::Cycling => "cycling",
        }
    }

    pub fn label(&self) -> String {
        let name = self.as_str();
        let mut chars = name.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }
}

/// Variant-specific field supplied at creation time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ActivityInput {
    Running { step_rate: u32 },
    Cycling { elevation_gain: f64 },
}

impl ActivityInput {
    pub fn kind(&self) -> WorkoutKind {
        match self {
            ActivityInput::Running { .. } => WorkoutKind::Running,
            ActivityInput::Cycling { .. } => WorkoutKind::Cycling,
        }
    }

    fn derive(self, distance: f64, duration: f64) -> Activity {
        match self {
            ActivityInput::Running { step_rate } => Activity::Running {
                step_rate,
                pace: duration / distance,
            },
            ActivityInput::Cycling { elevation_gain } => Activity::Cycling {
                elevation_gain,
                speed: distance / (duration / 60.0),
            },
        }
    }
}

/// Variant data together with its derived metric.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Activity {
    /// `pace` is minutes per km.
    Running { step_rate: u32, pace: f64 },
    /// `speed` is km per hour.
    Cycling { elevation_gain: f64, speed: f64 },
}

impl Activity {
    pub fn kind(&self) -> WorkoutKind {
        match self {
            Activity::Running { .. } => WorkoutKind::Running,
            Activity::Cycling { .. } => WorkoutKind::Cycling,
        }
    }

    pub fn input(&self) -> ActivityInput {
        match *self {
            Activity::Running { step_rate, .. } => ActivityInput::Running { step_rate },
            Activity::Cycling { elevation_gain, .. } => ActivityInput::Cycling { elevation_gain },
        }
    }
}

/// A recorded session. Everything except `interaction_count` is fixed at construction.
#[derive(Debug, Clone, PartialEq)]
pub struct Workout {
    id: Uuid,
    timestamp: DateTime<Utc>,
    location: Coords,
    /// km
    distance: f64,
    /// minutes
    duration: f64,
    interaction_count: u32,
    description: String,
    activity: Activity,
}

impl Workout {
    pub fn running(
        location: Coords,
        distance: f64,
        duration: f64,
        step_rate: u32,
    ) -> Result<Self, WorkoutError> {
        Self::new(
            location,
            distance,
            duration,
            ActivityInput::Running { step_rate },
            Utc::now(),
        )
    }

    pub fn cycling(
        location: Coords,
        distance: f64,
        duration: f64,
        elevation_gain: f64,
    ) -> Result<Self, WorkoutError> {
        Self::new(
            location,
            distance,
            duration,
            ActivityInput::Cycling { elevation_gain },
            Utc::now(),
        )
    }

    pub fn new(
        location: Coords,
        distance: f64,
        duration: f64,
        input: ActivityInput,
        timestamp: DateTime<Utc>,
    ) -> Result<Self, WorkoutError> {
        Self::restore(Uuid::new_v4(), timestamp, location, distance, duration, input, 0)
    }

    /// Rebuilds a workout from stored fields, recomputing everything derived.
    pub fn restore(
        id: Uuid,
        timestamp: DateTime<Utc>,
        location: Coords,
        distance: f64,
        duration: f64,
        input: ActivityInput,
        interaction_count: u32,
    ) -> Result<Self, WorkoutError> {
        if !all_finite(&[distance, duration]) {
            return Err(WorkoutError::InvalidMetric("distance and duration must be finite"));
        }
        if !all_positive(&[distance, duration]) {
            return Err(WorkoutError::InvalidMetric(
                "distance and duration must be greater than zero",
            ));
        }

        Ok(Self {
            id,
            timestamp,
            location,
            distance,
            duration,
            interaction_count,
            description: describe(input.kind(), &timestamp.with_timezone(&Local)),
            activity: input.derive(distance, duration),
        })
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    pub fn location(&self) -> Coords {
        self.location
    }

    pub fn distance(&self) -> f64 {
        self.distance
    }

    pub fn duration(&self) -> f64 {
        self.duration
    }

    pub fn interaction_count(&self) -> u32 {
        self.interaction_count
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn activity(&self) -> &Activity {
        &self.activity
    }

    pub fn kind(&self) -> WorkoutKind {
        self.activity.kind()
    }

    pub fn pace(&self) -> Option<f64> {
        match self.activity {
            Activity::Running { pace, .. } => Some(pace),
            Activity::Cycling { .. } => None,
        }
    }

    pub fn speed(&self) -> Option<f64> {
        match self.activity {
            Activity::Cycling { speed, .. } => Some(speed),
            Activity::Running { .. } => None,
        }
    }

    pub fn record_interaction(&mut self) {
        self.interaction_count = self.interaction_count.saturating_add(1);
    }
}

/// "<Variant> on <Month> <day>", e.g. "Running on March 15", in the timestamp's own zone.
/// Workouts pass their timestamp converted to local time.
pub fn describe<Tz: TimeZone>(kind: WorkoutKind, timestamp: &DateTime<Tz>) -> String {
    format!(
        "{} on {} {}",
        kind.label(),
        MONTHS[timestamp.month0() as usize],
        timestamp.day()
    )
}
