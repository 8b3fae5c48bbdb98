use std::io::Write;

use crate::error::LocationError;
use crate::pipeline::render::{MarkerPopup, WorkoutSummary};
use crate::services::{LocationService, MapService, UiSurface};
use crate::types::workout::{Coords, WorkoutKind};

/// Reports a configured position, or fails when none is set.
#[derive(Debug, Clone, Copy)]
pub struct FixedLocation {
    position: Option<Coords>,
}

impl FixedLocation {
    pub fn new(position: Option<Coords>) -> Self {
        Self { position }
    }
}

impl LocationService for FixedLocation {
    async fn current_position(&self) -> Result<Coords, LocationError> {
        tokio::task::yield_now().await;
        self.position
            .ok_or_else(|| LocationError::Unavailable("no home position configured".to_string()))
    }
}

/// Map that prints what it would draw.
#[derive(Debug, Default)]
pub struct ConsoleMap {
    maps_created: u32,
}

impl MapService for ConsoleMap {
    type Handle = u32;

    fn initialize(&mut self, center: Coords, zoom: u8) -> u32 {
        self.maps_created += 1;
        print_line(&format!(
            "[map] centered at {:.5}, {:.5} (zoom {})",
            center.lat, center.lng, zoom
        ));
        self.maps_created
    }

    fn subscribe_clicks(&mut self, map: &u32) {
        tracing::debug!("Map {} now reports clicks", map);
    }

    fn add_marker(&mut self, _map: &u32, popup: &MarkerPopup) {
        print_line(&format!(
            "[marker] {:.5}, {:.5} <{}> {}",
            popup.location.lat, popup.location.lng, popup.css_class, popup.text
        ));
    }

    fn set_view(&mut self, _map: &u32, center: Coords, zoom: u8) {
        print_line(&format!(
            "[map] moved to {:.5}, {:.5} (zoom {})",
            center.lat, center.lng, zoom
        ));
    }
}

#[derive(Debug)]
pub struct ConsoleUi {
    metric_field: WorkoutKind,
}

impl Default for ConsoleUi {
    fn default() -> Self {
        Self {
            metric_field: WorkoutKind::Running,
        }
    }
}

impl UiSurface for ConsoleUi {
    fn show_form(&mut self) {
        let field = match self.metric_field {
            WorkoutKind::Running => "step_rate",
            WorkoutKind::Cycling => "elevation_gain",
        };
        print_line(&format!("[form] open: distance, duration, {}", field));
    }

    fn hide_form(&mut self) {
        print_line("[form] cleared and hidden");
    }

    fn show_metric_field(&mut self, kind: WorkoutKind) {
        self.metric_field = kind;
    }

    fn render_summary(&mut self, summary: &WorkoutSummary) {
        print_line(&format!("[list] {} ({})", summary, summary.id));
    }

    fn alert(&mut self, message: &str) {
        print_line(&format!("[alert] {}", message));
    }
}

fn print_line(line: &str) {
    let mut stdout = std::io::stdout().lock();
    if let Err(err) = writeln!(stdout, "{}", line) {
        tracing::warn!("Failed to write to stdout: {}", err);
    }
}
