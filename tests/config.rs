use std::path::PathBuf;

use workout_map::config::Config;

#[test]
fn defaults_match_documented_values() {
    let config = Config::default();
    assert_eq!(config.storage_dir, PathBuf::from(".workout-map"));
    assert_eq!(config.storage_key, "workouts");
    assert_eq!(config.map_zoom, 13);
    assert!(config.home_location.is_none());
}

// Only test in this binary that touches the environment.
#[test]
fn from_env_reads_overrides_and_rejects_bad_home() {
    std::env::set_var("WORKOUT_STORAGE_DIR", "/tmp/workout-map-test");
    std::env::set_var("WORKOUT_STORAGE_KEY", "sessions");
    std::env::set_var("WORKOUT_MAP_ZOOM", "15");
    std::env::set_var("WORKOUT_HOME_LAT", "46.5197");
    std::env::set_var("WORKOUT_HOME_LNG", "6.6323");

    let config = Config::from_env();
    assert_eq!(config.storage_dir, PathBuf::from("/tmp/workout-map-test"));
    assert_eq!(config.storage_key, "sessions");
    assert_eq!(config.map_zoom, 15);
    let home = config.home_location.expect("home location");
    assert_eq!((home.lat, home.lng), (46.5197, 6.6323));

    std::env::set_var("WORKOUT_HOME_LAT", "north");
    assert!(Config::from_env().home_location.is_none());

    std::env::set_var("WORKOUT_HOME_LAT", "123.0");
    assert!(Config::from_env().home_location.is_none());

    std::env::set_var("WORKOUT_MAP_ZOOM", "very close");
    std::env::set_var("WORKOUT_STORAGE_KEY", "  ");
    let fallback = Config::from_env();
    assert_eq!(fallback.map_zoom, 13);
    assert_eq!(fallback.storage_key, "workouts");

    for key in [
        "WORKOUT_STORAGE_DIR",
        "WORKOUT_STORAGE_KEY",
        "WORKOUT_MAP_ZOOM",
        "WORKOUT_HOME_LAT",
        "WORKOUT_HOME_LNG",
    ] {
        std::env::remove_var(key);
    }
    assert!(Config::from_env().home_location.is_none());
}
