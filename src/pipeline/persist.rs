use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use crate::error::{StorageError, WorkoutError};
use crate::state::WorkoutCollection;
use crate::types::workout::{Activity, ActivityInput, Coords, Workout, WorkoutKind};

/// A string-valued key/value slot that survives restarts.
pub trait Storage {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn write(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// One `<key>.json` file per key inside `dir`.
#[derive(Debug, Clone)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl Storage for FileStorage {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(contents) => Ok(Some(contents)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        fs::create_dir_all(&self.dir)?;
        let path = self.path_for(key);
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, value)?;
        fs::rename(&tmp, &path)?;
        Ok(())
    }
}

#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    slots: HashMap<String, String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_slot(key: &str, value: &str) -> Self {
        let mut storage = Self::new();
        storage.slots.insert(key.to_string(), value.to_string());
        storage
    }

    pub fn slot(&self, key: &str) -> Option<&str> {
        self.slots.get(key).map(String::as_str)
    }
}

impl Storage for MemoryStorage {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.slots.get(key).cloned())
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.slots.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct StoredWorkout {
    id: Uuid,
    timestamp: DateTime<Utc>,
    location: [f64; 2],
    distance: f64,
    duration: f64,
    variant: WorkoutKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    step_rate: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    elevation_gain: Option<f64>,
    #[serde(default)]
    interaction_count: u32,
}

impl From<&Workout> for StoredWorkout {
    fn from(workout: &Workout) -> Self {
        let (step_rate, elevation_gain) = match *workout.activity() {
            Activity::Running { step_rate, .. } => (Some(step_rate), None),
            Activity::Cycling { elevation_gain, .. } => (None, Some(elevation_gain)),
        };
        Self {
            id: workout.id(),
            timestamp: workout.timestamp(),
            location: workout.location().into(),
            distance: workout.distance(),
            duration: workout.duration(),
            variant: workout.kind(),
            step_rate,
            elevation_gain,
            interaction_count: workout.interaction_count(),
        }
    }
}

impl StoredWorkout {
    fn into_workout(self) -> Result<Workout, WorkoutError> {
        let input = match self.variant {
            WorkoutKind::Running => ActivityInput::Running {
                step_rate: self
                    .step_rate
                    .ok_or(WorkoutError::InvalidMetric("running entry has no step rate"))?,
            },
            WorkoutKind::Cycling => ActivityInput::Cycling {
                elevation_gain: self
                    .elevation_gain
                    .ok_or(WorkoutError::InvalidMetric("cycling entry has no elevation gain"))?,
            },
        };
        Workout::restore(
            self.id,
            self.timestamp,
            Coords::try_from(self.location)?,
            self.distance,
            self.duration,
            input,
            self.interaction_count,
        )
    }
}

pub fn encode(collection: &WorkoutCollection) -> Result<String, StorageError> {
    let stored: Vec<StoredWorkout> = collection.iter().map(StoredWorkout::from).collect();
    serde_json::to_string(&stored).map_err(StorageError::Serialize)
}

/// Parses a snapshot. Anything other than a JSON array is an error; individual
/// entries that fail to parse or to reconstruct are skipped.
pub fn decode(raw: &str) -> Result<WorkoutCollection, StorageError> {
    let entries: Vec<Value> = serde_json::from_str(raw).map_err(StorageError::Corrupt)?;
    let workouts = entries.into_iter().enumerate().filter_map(|(index, entry)| {
        let restored = serde_json::from_value::<StoredWorkout>(entry)
            .map_err(|err| err.to_string())
            .and_then(|stored| stored.into_workout().map_err(|err| err.to_string()));
        match restored {
            Ok(workout) => Some(workout),
            Err(err) => {
                tracing::warn!("Skipping stored workout #{}: {}", index, err);
                None
            }
        }
    });
    Ok(WorkoutCollection::from_workouts(workouts))
}

/// Persists the whole collection as one snapshot under a single key.
pub struct WorkoutStore<S: Storage> {
    storage: S,
    key: String,
}

impl<S: Storage> WorkoutStore<S> {
    pub fn new(storage: S, key: impl Into<String>) -> Self {
        Self {
            storage,
            key: key.into(),
        }
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn save(&mut self, collection: &WorkoutCollection) -> Result<(), StorageError> {
        let snapshot = encode(collection)?;
        self.storage.write(&self.key, &snapshot)?;
        tracing::debug!("Saved {} workouts to slot '{}'", collection.len(), self.key);
        Ok(())
    }

    /// Reads the slot. `Ok(None)` means nothing has been saved yet.
    pub fn try_load(&self) -> Result<Option<WorkoutCollection>, StorageError> {
        let Some(raw) = self.storage.read(&self.key)? else {
            return Ok(None);
        };
        let collection = decode(&raw)?;
        tracing::info!("Restored {} workouts from slot '{}'", collection.len(), self.key);
        Ok(Some(collection))
    }

    /// `None` on first run, and also when the slot cannot be read or parsed.
    pub fn load(&self) -> Option<WorkoutCollection> {
        self.try_load().unwrap_or_else(|err| {
            tracing::warn!("Ignoring slot '{}': {}", self.key, err);
            None
        })
    }
}
