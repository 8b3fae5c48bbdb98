use std::path::PathBuf;

use crate::types::workout::Coords;

#[derive(Debug, Clone)]
pub struct Config {
    pub storage_dir: PathBuf,
    pub storage_key: String,
    pub map_zoom: u8,
    pub home_location: Option<Coords>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            storage_dir: PathBuf::from(".workout-map"),
            storage_key: "workouts".to_string(),
            map_zoom: 13,
            home_location: None,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let storage_dir = std::env::var("WORKOUT_STORAGE_DIR")
            .ok()
            .filter(|s| !s.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or(defaults.storage_dir);

        let storage_key = std::env::var("WORKOUT_STORAGE_KEY")
            .ok()
            .filter(|s| !s.trim().is_empty())
            .unwrap_or(defaults.storage_key);

        let map_zoom = std::env::var("WORKOUT_MAP_ZOOM")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(defaults.map_zoom);

        let home_lat = std::env::var("WORKOUT_HOME_LAT")
            .ok()
            .and_then(|s| s.parse::<f64>().ok());
        let home_lng = std::env::var("WORKOUT_HOME_LNG")
            .ok()
            .and_then(|s| s.parse::<f64>().ok());
        let home_location = match (home_lat, home_lng) {
            (Some(lat), Some(lng)) => Coords::new(lat, lng).ok(),
            _ => None,
        };

        Self {
            storage_dir,
            storage_key,
            map_zoom,
            home_location,
        }
    }
}
