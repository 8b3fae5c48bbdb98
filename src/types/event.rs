use serde::Deserialize;
use uuid::Uuid;

use crate::error::LocationError;
use crate::types::form::FormInput;
use crate::types::workout::{Coords, WorkoutKind};

/// Everything the controller reacts to. Routed through `AppController::dispatch`.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum Event {
    /// Outcome of the one-shot position request; produced internally, never read from input.
    #[serde(skip_deserializing)]
    LocationResolved(Result<Coords, LocationError>),
    MapClicked { location: Coords },
    TypeChanged { kind: WorkoutKind },
    FormSubmitted(FormInput),
    WorkoutSelected { id: Uuid },
}
