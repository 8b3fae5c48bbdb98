use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use workout_map::config::Config;
use workout_map::controller::AppController;
use workout_map::pipeline::persist::{FileStorage, WorkoutStore};
use workout_map::services::console::{ConsoleMap, ConsoleUi, FixedLocation};
use workout_map::types::event::Event;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    // Logs go to stderr; stdout is the user-facing surface
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "workout_map=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = Config::from_env();
    tracing::info!(
        "Storing workouts in {} (key '{}')",
        config.storage_dir.display(),
        config.storage_key
    );

    let store = WorkoutStore::new(FileStorage::new(config.storage_dir.clone()), config.storage_key.clone());
    let mut app = AppController::new(
        ConsoleMap::default(),
        ConsoleUi::default(),
        store,
        rand::rng(),
        config.map_zoom,
    );

    app.start(&FixedLocation::new(config.home_location)).await;

    // One JSON event per line, e.g. {"event":"map_clicked","location":[46.52,6.63]}
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        let line = match lines.next_line().await {
            Ok(Some(line)) => line,
            Ok(None) => break,
            Err(err) => {
                tracing::error!("Failed to read input: {}", err);
                break;
            }
        };
        if line.trim().is_empty() {
            continue;
        }
        match serde_json::from_str::<Event>(&line) {
            Ok(event) => app.dispatch(event),
            Err(err) => tracing::warn!("Unrecognized input '{}': {}", line.trim(), err),
        }
    }

    tracing::info!("Session ended with {} workouts", app.workouts().len());
}
