use crate::{Workout, WorkoutID};

/// Ordered collection of workouts. Insertion order is significant, it
/// determines the rendering order of list entries and map markers.
#[derive(Debug, Default)]
pub struct WorkoutStore {
    workouts: Vec<Workout>,
}

impl WorkoutStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, workout: Workout) {
        self.workouts.push(workout);
    }

    /// Replaces the workout at `index`, keeping its list position, and
    /// returns the previous workout.
    pub fn replace_at(&mut self, index: usize, workout: Workout) -> Result<Workout, IndexError> {
        if index >= self.workouts.len() {
            return Err(IndexError::OutOfRange {
                index,
                len: self.workouts.len(),
            });
        }

        Ok(std::mem::replace(&mut self.workouts[index], workout))
    }

    pub fn remove_at(&mut self, index: usize) -> Result<Workout, IndexError> {
        if index >= self.workouts.len() {
            return Err(IndexError::OutOfRange {
                index,
                len: self.workouts.len(),
            });
        }

        Ok(self.workouts.remove(index))
    }

    /// Resolves the list position of a workout by its identity. Callers
    /// must resolve freshly before every positional operation, indices
    /// are invalidated by removals.
    #[must_use]
    pub fn position_of(&self, id: WorkoutID) -> Option<usize> {
        self.workouts.iter().position(|workout| workout.id == id)
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Workout> {
        self.workouts.get(index)
    }

    #[must_use]
    pub fn workouts(&self) -> &[Workout] {
        &self.workouts
    }

    pub fn replace_all(&mut self, workouts: Vec<Workout>) {
        self.workouts = workouts;
    }

    pub fn clear(&mut self) {
        self.workouts.clear();
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.workouts.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.workouts.is_empty()
    }
}

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum IndexError {
    #[error("index {index} out of range for {len} workouts")]
    OutOfRange { index: usize, len: usize },
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{Cadence, Distance, Duration, Position};

    fn workout() -> Workout {
        Workout::running(
            Position::new(10.0, 20.0).unwrap(),
            Distance::new(5.0).unwrap(),
            Duration::new(30.0).unwrap(),
            Cadence::new(170.0).unwrap(),
        )
    }

    #[test]
    fn test_append_preserves_insertion_order() {
        let mut store = WorkoutStore::new();
        assert!(store.is_empty());

        let first = workout();
        let second = workout();
        store.append(first.clone());
        store.append(second.clone());

        assert_eq!(store.len(), 2);
        assert_eq!(store.workouts(), [first, second]);
    }

    #[test]
    fn test_replace_at_preserves_length_and_position() {
        let mut store = WorkoutStore::new();
        let first = workout();
        let second = workout();
        let third = workout();
        store.append(first.clone());
        store.append(second.clone());

        let replaced = store.replace_at(0, third.clone()).unwrap();

        assert_eq!(replaced, first);
        assert_eq!(store.len(), 2);
        assert_eq!(store.workouts(), [third, second]);
    }

    #[test]
    fn test_replace_at_out_of_range() {
        let mut store = WorkoutStore::new();
        store.append(workout());

        assert_eq!(
            store.replace_at(1, workout()),
            Err(IndexError::OutOfRange { index: 1, len: 1 })
        );
    }

    #[test]
    fn test_remove_at_shifts_subsequent_workouts() {
        let mut store = WorkoutStore::new();
        let first = workout();
        let second = workout();
        let third = workout();
        store.append(first.clone());
        store.append(second.clone());
        store.append(third.clone());

        let removed = store.remove_at(1).unwrap();

        assert_eq!(removed, second);
        assert_eq!(store.workouts(), [first, third]);
    }

    #[test]
    fn test_remove_at_out_of_range() {
        let mut store = WorkoutStore::new();

        assert_eq!(
            store.remove_at(0),
            Err(IndexError::OutOfRange { index: 0, len: 0 })
        );
    }

    #[test]
    fn test_position_of_resolves_freshly_after_removal() {
        let mut store = WorkoutStore::new();
        let first = workout();
        let second = workout();
        store.append(first.clone());
        store.append(second.clone());

        assert_eq!(store.position_of(second.id), Some(1));

        store.remove_at(0).unwrap();

        assert_eq!(store.position_of(second.id), Some(0));
        assert_eq!(store.position_of(first.id), None);
    }

    #[test]
    fn test_clear() {
        let mut store = WorkoutStore::new();
        store.append(workout());
        store.clear();

        assert!(store.is_empty());
    }
}
