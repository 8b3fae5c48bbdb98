use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum WorkoutError {
    #[error("Invalid metric: {0}")]
    InvalidMetric(&'static str),
    #[error("Invalid location: ({lat}, {lng}) is outside geographic range")]
    InvalidLocation { lat: f64, lng: f64 },
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LocationError {
    #[error("Location permission denied")]
    Denied,
    #[error("Location unavailable: {0}")]
    Unavailable(String),
}

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("Storage I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to serialize workouts: {0}")]
    Serialize(serde_json::Error),
    #[error("Stored workouts are corrupt: {0}")]
    Corrupt(serde_json::Error),
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    LocationUnavailable(#[from] LocationError),
    #[error(transparent)]
    InvalidMetric(#[from] WorkoutError),
    #[error("Stored workouts ignored: {0}")]
    StorageCorrupt(String),
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error("Workout not found: {0}")]
    UnknownWorkout(Uuid),
}

impl AppError {
    /// Message surfaced to the user, if any. Storage problems are never shown.
    pub fn user_notice(&self) -> Option<&'static str> {
        match self {
            AppError::LocationUnavailable(_) => Some("Could not get your position"),
            AppError::InvalidMetric(_) => {
                Some("All inputs have to be filled in and with positive numbers")
            }
            AppError::StorageCorrupt(_) | AppError::Storage(_) | AppError::UnknownWorkout(_) => {
                None
            }
        }
    }
}
