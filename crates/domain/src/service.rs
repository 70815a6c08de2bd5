use log::{debug, error};

use crate::{
    IndexError, Position, StorageError, Workout, WorkoutDraft, WorkoutID, WorkoutRepository,
    WorkoutStore,
};

/// Owns the workout store and keeps it in sync with the persistence
/// backend. Every mutation is applied to the store first and then
/// written back; a failing write degrades to in-memory-only operation
/// instead of rolling back.
pub struct WorkoutService<R> {
    store: WorkoutStore,
    repository: R,
}

impl<R: WorkoutRepository> WorkoutService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            store: WorkoutStore::new(),
            repository,
        }
    }

    /// Initializes the store from the persisted state. A missing or
    /// unreadable blob counts as no prior data.
    pub fn load(&mut self) {
        match self.repository.read_workouts() {
            Ok(workouts) => self.store.replace_all(workouts),
            Err(err) => {
                error!("failed to read workouts: {err}");
                self.store.replace_all(Vec::new());
            }
        }
    }

    #[must_use]
    pub fn workouts(&self) -> &[Workout] {
        self.store.workouts()
    }

    #[must_use]
    pub fn workout(&self, id: WorkoutID) -> Option<&Workout> {
        self.store
            .position_of(id)
            .and_then(|index| self.store.get(index))
    }

    pub fn create(&mut self, draft: WorkoutDraft, position: Position) -> Workout {
        let workout = draft.into_workout(position);
        self.store.append(workout.clone());
        self.persist();
        workout
    }

    /// Replaces the workout with the given identity by a brand-new
    /// record built from `draft`. The list position and the coordinates
    /// of the edited workout are kept; the replacement gets a fresh
    /// identity and creation time.
    pub fn replace(
        &mut self,
        id: WorkoutID,
        draft: WorkoutDraft,
    ) -> Result<Workout, IdentityError> {
        let index = self
            .store
            .position_of(id)
            .ok_or(IdentityError::NotFound(id))?;
        let position = self
            .store
            .get(index)
            .map(|workout| workout.position)
            .ok_or(IdentityError::NotFound(id))?;
        let workout = draft.into_workout(position);
        self.store.replace_at(index, workout.clone())?;
        self.persist();
        Ok(workout)
    }

    pub fn delete(&mut self, id: WorkoutID) -> Result<Workout, IdentityError> {
        let index = self
            .store
            .position_of(id)
            .ok_or(IdentityError::NotFound(id))?;
        let workout = self.store.remove_at(index)?;
        self.persist();
        Ok(workout)
    }

    pub fn clear(&mut self) {
        self.store.clear();
        if let Err(err) = self.repository.clear_workouts() {
            error!("failed to clear workouts: {err}");
        }
    }

    fn persist(&self) {
        // The in-memory state stays authoritative if the write fails.
        if let Err(err) = self.repository.write_workouts(self.store.workouts()) {
            match err {
                StorageError::QuotaExceeded => debug!("failed to write workouts: {err}"),
                _ => error!("failed to write workouts: {err}"),
            }
        }
    }
}

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum IdentityError {
    #[error("no workout with ID {0}")]
    NotFound(WorkoutID),
    #[error(transparent)]
    Index(#[from] IndexError),
}
