pub mod console;

use std::future::Future;

use crate::error::LocationError;
use crate::pipeline::render::{MarkerPopup, WorkoutSummary};
use crate::types::workout::{Coords, WorkoutKind};

/// One-shot position lookup. Resolves exactly once; no retry or cancellation.
pub trait LocationService {
    fn current_position(&self) -> impl Future<Output = Result<Coords, LocationError>>;
}

/// The interactive map. Clicks subscribed here come back as `Event::MapClicked`.
pub trait MapService {
    type Handle;

    fn initialize(&mut self, center: Coords, zoom: u8) -> Self::Handle;
    fn subscribe_clicks(&mut self, map: &Self::Handle);
    fn add_marker(&mut self, map: &Self::Handle, popup: &MarkerPopup);
    fn set_view(&mut self, map: &Self::Handle, center: Coords, zoom: u8);
}

/// Form and workout list.
pub trait UiSurface {
    fn show_form(&mut self);
    /// Clears every input and hides the form.
    fn hide_form(&mut self);
    /// Shows step rate for running, elevation gain for cycling.
    fn show_metric_field(&mut self, kind: WorkoutKind);
    fn render_summary(&mut self, summary: &WorkoutSummary);
    fn alert(&mut self, message: &str);
}
