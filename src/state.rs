use uuid::Uuid;

use crate::types::workout::{Coords, Workout};

/// Validating a submission happens synchronously inside `FormOpen`: a rejected
/// form stays in `FormOpen`, a created workout moves to `MapReady`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ControllerState {
    Idle,
    AwaitingLocation,
    MapReady,
    /// Form visible; `location` is where the map was clicked.
    FormOpen { location: Coords },
    /// Location failed. No map for the rest of the session.
    Degraded,
}

impl ControllerState {
    pub fn name(&self) -> &'static str {
        match self {
            ControllerState::Idle => "idle",
            ControllerState::AwaitingLocation => "awaiting_location",
            ControllerState::MapReady => "map_ready",
            ControllerState::FormOpen { .. } => "form_open",
            ControllerState::Degraded => "degraded",
        }
    }
}

/// Insertion-ordered workouts with unique ids.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WorkoutCollection {
    workouts: Vec<Workout>,
}

impl WorkoutCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a collection, keeping the first occurrence of any repeated id.
    pub fn from_workouts(workouts: impl IntoIterator<Item = Workout>) -> Self {
        let mut collection = Self::new();
        for workout in workouts {
            if !collection.push(workout) {
                tracing::warn!("Dropping workout with duplicate id");
            }
        }
        collection
    }

    /// Appends `workout`; returns false and leaves the collection unchanged if the id is taken.
    pub fn push(&mut self, workout: Workout) -> bool {
        if self.get(workout.id()).is_some() {
            return false;
        }
        self.workouts.push(workout);
        true
    }

    pub fn get(&self, id: Uuid) -> Option<&Workout> {
        self.workouts.iter().find(|w| w.id() == id)
    }

    pub fn get_mut(&mut self, id: Uuid) -> Option<&mut Workout> {
        self.workouts.iter_mut().find(|w| w.id() == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Workout> {
        self.workouts.iter()
    }

    pub fn len(&self) -> usize {
        self.workouts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.workouts.is_empty()
    }
}
