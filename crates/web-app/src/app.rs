use log::error;
use motus_domain::{
    FormError, FormInput, IdentityError, Position, Workout, WorkoutDraft, WorkoutID,
    WorkoutRepository, WorkoutService,
};

use crate::{DEFAULT_ZOOM, Geolocator, Map};

/// What the form is currently for. Creating requires a location picked
/// on the map first; editing is bound to the identity of an existing
/// workout.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Mode {
    Create { location: Option<Position> },
    Edit { id: WorkoutID },
}

/// Application state machine. Wires the workout service to a map
/// backend and a geolocator and keeps the map markers in sync with the
/// workout list.
pub struct App<R, M, G> {
    service: WorkoutService<R>,
    map: M,
    geolocator: G,
    mode: Mode,
}

impl<R: WorkoutRepository, M: Map, G: Geolocator> App<R, M, G> {
    pub fn new(repository: R, map: M, geolocator: G) -> Self {
        Self {
            service: WorkoutService::new(repository),
            map,
            geolocator,
            mode: Mode::Create { location: None },
        }
    }

    /// Loads the persisted workouts and initializes the map at the
    /// user's position. Without a position the map stays uninitialized
    /// and no markers are rendered, but the workout list is available.
    pub fn start(&mut self) {
        self.service.load();
        match self.geolocator.current_position() {
            Ok(position) => {
                self.map.init(position, DEFAULT_ZOOM);
                self.render_markers();
            }
            Err(err) => error!("{err}"),
        }
    }

    #[must_use]
    pub fn mode(&self) -> Mode {
        self.mode
    }

    #[must_use]
    pub fn workouts(&self) -> &[Workout] {
        self.service.workouts()
    }

    /// Picks a location on the map. This always opens the form for a
    /// new workout, discarding any edit in progress.
    pub fn select_location(&mut self, position: Position) {
        self.mode = Mode::Create {
            location: Some(position),
        };
    }

    /// Opens the form prefilled with the values of an existing workout.
    pub fn edit(&mut self, id: WorkoutID) -> Result<FormInput, IdentityError> {
        let workout = self
            .service
            .workout(id)
            .ok_or(IdentityError::NotFound(id))?;
        let input = FormInput::from(workout);
        self.mode = Mode::Edit { id };
        Ok(input)
    }

    pub fn cancel(&mut self) {
        self.mode = Mode::Create { location: None };
    }

    /// Validates the form and applies it according to the current mode.
    /// On failure nothing is changed and the form stays open.
    pub fn submit(&mut self, input: &FormInput) -> Result<Workout, SubmitError> {
        let draft = WorkoutDraft::try_from(input)?;
        let workout = match self.mode {
            Mode::Create { location } => {
                let location = location.ok_or(SubmitError::NoLocation)?;
                let workout = self.service.create(draft, location);
                self.map.place_marker(workout.position, &workout.label);
                workout
            }
            Mode::Edit { id } => {
                let workout = self.service.replace(id, draft)?;
                self.render_markers();
                workout
            }
        };
        self.mode = Mode::Create { location: None };
        Ok(workout)
    }

    pub fn delete(&mut self, id: WorkoutID) -> Result<(), IdentityError> {
        self.service.delete(id)?;
        if self.mode == (Mode::Edit { id }) {
            self.mode = Mode::Create { location: None };
        }
        self.render_markers();
        Ok(())
    }

    pub fn clear(&mut self) {
        self.service.clear();
        self.map.clear_markers();
        self.mode = Mode::Create { location: None };
    }

    /// Centers the map on the workout's marker.
    pub fn select(&mut self, id: WorkoutID) -> Result<(), IdentityError> {
        let workout = self
            .service
            .workout(id)
            .ok_or(IdentityError::NotFound(id))?;
        self.map.center_on(workout.position);
        Ok(())
    }

    fn render_markers(&self) {
        self.map.clear_markers();
        for workout in self.service.workouts() {
            self.map.place_marker(workout.position, &workout.label);
        }
    }
}

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum SubmitError {
    #[error(transparent)]
    Form(#[from] FormError),
    #[error("no location has been selected on the map")]
    NoLocation,
    #[error(transparent)]
    Identity(#[from] IdentityError),
}
