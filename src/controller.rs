use chrono::Utc;
use rand::Rng;
use uuid::Uuid;

use crate::error::{AppError, LocationError, StorageError};
use crate::pipeline::persist::{Storage, WorkoutStore};
use crate::pipeline::render;
use crate::pipeline::validate::validate_form;
use crate::services::{LocationService, MapService, UiSurface};
use crate::state::{ControllerState, WorkoutCollection};
use crate::types::event::Event;
use crate::types::form::FormInput;
use crate::types::phrases::PHRASES;
use crate::types::workout::{Coords, Workout, WorkoutKind};

/// Owns the workout collection and drives map, form and storage from a single event stream.
pub struct AppController<M: MapService, U: UiSurface, S: Storage, R: Rng> {
    state: ControllerState,
    workouts: WorkoutCollection,
    map: M,
    map_handle: Option<M::Handle>,
    ui: U,
    store: WorkoutStore<S>,
    rng: R,
    zoom: u8,
}

impl<M: MapService, U: UiSurface, S: Storage, R: Rng> AppController<M, U, S, R> {
    pub fn new(map: M, ui: U, store: WorkoutStore<S>, rng: R, zoom: u8) -> Self {
        Self {
            state: ControllerState::Idle,
            workouts: WorkoutCollection::new(),
            map,
            map_handle: None,
            ui,
            store,
            rng,
            zoom,
        }
    }

    pub fn state(&self) -> ControllerState {
        self.state
    }

    pub fn workouts(&self) -> &WorkoutCollection {
        &self.workouts
    }

    pub fn map(&self) -> &M {
        &self.map
    }

    pub fn ui(&self) -> &U {
        &self.ui
    }

    pub fn store(&self) -> &WorkoutStore<S> {
        &self.store
    }

    /// Restores stored workouts, then waits for the position and feeds the result to `dispatch`.
    pub async fn start<L: LocationService>(&mut self, location: &L) {
        if self.state != ControllerState::Idle {
            tracing::warn!("start called in state {}", self.state.name());
            return;
        }

        self.restore();

        self.transition(ControllerState::AwaitingLocation);
        let position = location.current_position().await;
        self.dispatch(Event::LocationResolved(position));
    }

    pub fn dispatch(&mut self, event: Event) {
        let result = match event {
            Event::LocationResolved(position) => self.on_location(position),
            Event::MapClicked { location } => {
                self.on_map_click(location);
                Ok(())
            }
            Event::TypeChanged { kind } => {
                self.on_type_changed(kind);
                Ok(())
            }
            Event::FormSubmitted(form) => self.on_submit(form),
            Event::WorkoutSelected { id } => self.on_select(id),
        };

        if let Err(err) = result {
            self.report(err);
        }
    }

    fn restore(&mut self) {
        match self.store.try_load() {
            Ok(Some(restored)) => self.workouts = restored,
            Ok(None) => tracing::debug!("No stored workouts, starting empty"),
            Err(StorageError::Corrupt(err)) => {
                self.report(AppError::StorageCorrupt(err.to_string()))
            }
            Err(err) => self.report(err.into()),
        }

        for workout in self.workouts.iter() {
            self.ui.render_summary(&render::summarize(workout));
        }
    }

    fn on_location(&mut self, position: Result<Coords, LocationError>) -> Result<(), AppError> {
        if self.state != ControllerState::AwaitingLocation {
            tracing::debug!("Ignoring location result in state {}", self.state.name());
            return Ok(());
        }

        let center = match position {
            Ok(center) => center,
            Err(err) => {
                self.transition(ControllerState::Degraded);
                return Err(err.into());
            }
        };

        let handle = self.map.initialize(center, self.zoom);
        self.map.subscribe_clicks(&handle);
        for workout in self.workouts.iter() {
            let popup = render::marker_popup(workout, &mut self.rng, &PHRASES);
            self.map.add_marker(&handle, &popup);
        }
        self.map_handle = Some(handle);

        tracing::info!(
            "Map ready at {:.5}, {:.5} with {} markers",
            center.lat,
            center.lng,
            self.workouts.len()
        );
        self.transition(ControllerState::MapReady);
        Ok(())
    }

    fn on_map_click(&mut self, location: Coords) {
        match self.state {
            ControllerState::MapReady | ControllerState::FormOpen { .. } => {
                self.transition(ControllerState::FormOpen { location });
                self.ui.show_form();
            }
            _ => tracing::debug!("Ignoring map click in state {}", self.state.name()),
        }
    }

    fn on_type_changed(&mut self, kind: WorkoutKind) {
        self.ui.show_metric_field(kind);
    }

    fn on_submit(&mut self, form: FormInput) -> Result<(), AppError> {
        let ControllerState::FormOpen { location } = self.state else {
            tracing::debug!("Ignoring form submission in state {}", self.state.name());
            return Ok(());
        };

        let draft = validate_form(&form)?;
        let workout = Workout::new(location, draft.distance, draft.duration, draft.input, Utc::now())?;
        tracing::info!("Created {} ({})", workout.description(), workout.id());

        let id = workout.id();
        let popup = render::marker_popup(&workout, &mut self.rng, &PHRASES);
        let summary = render::summarize(&workout);
        let added = self.workouts.push(workout);

        if added {
            if let Some(handle) = &self.map_handle {
                self.map.add_marker(handle, &popup);
            }
            self.ui.render_summary(&summary);
        } else {
            tracing::warn!("Workout {} is already recorded, not adding it again", id);
        }
        self.ui.hide_form();
        self.transition(ControllerState::MapReady);

        if added {
            self.store.save(&self.workouts)?;
        }
        Ok(())
    }

    fn on_select(&mut self, id: Uuid) -> Result<(), AppError> {
        let workout = self
            .workouts
            .get_mut(id)
            .ok_or(AppError::UnknownWorkout(id))?;
        workout.record_interaction();
        let location = workout.location();

        match &self.map_handle {
            Some(handle) => self.map.set_view(handle, location, self.zoom),
            None => tracing::debug!("No map to recenter for workout {}", id),
        }
        Ok(())
    }

    fn transition(&mut self, next: ControllerState) {
        tracing::debug!("{} -> {}", self.state.name(), next.name());
        self.state = next;
    }

    fn report(&mut self, err: AppError) {
        match err.user_notice() {
            Some(notice) => {
                tracing::warn!("{}", err);
                self.ui.alert(notice);
            }
            None => tracing::warn!("Recovered: {}", err),
        }
    }
}
