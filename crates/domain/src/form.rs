use crate::{
    Activity, Cadence, CadenceError, Distance, DistanceError, Duration, DurationError, Elevation,
    ElevationError, Position, Workout,
};

/// Raw form field values as entered by the user. All validation happens
/// in [`WorkoutDraft::try_from`], before any state is touched.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct FormInput {
    pub kind: String,
    pub distance: String,
    pub duration: String,
    pub cadence: String,
    pub elevation: String,
}

impl From<&Workout> for FormInput {
    fn from(workout: &Workout) -> Self {
        match workout.activity {
            Activity::Running { cadence, .. } => Self {
                kind: "running".to_string(),
                distance: workout.distance.to_string(),
                duration: workout.duration.to_string(),
                cadence: cadence.to_string(),
                elevation: String::new(),
            },
            Activity::Cycling { elevation_gain, .. } => Self {
                kind: "cycling".to_string(),
                distance: workout.distance.to_string(),
                duration: workout.duration.to_string(),
                cadence: String::new(),
                elevation: elevation_gain.to_string(),
            },
        }
    }
}

/// Validated form input, ready to be turned into a workout once a
/// position is known.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WorkoutDraft {
    Running {
        distance: Distance,
        duration: Duration,
        cadence: Cadence,
    },
    Cycling {
        distance: Distance,
        duration: Duration,
        elevation_gain: Elevation,
    },
}

impl WorkoutDraft {
    #[must_use]
    pub fn into_workout(self, position: Position) -> Workout {
        match self {
            WorkoutDraft::Running {
                distance,
                duration,
                cadence,
            } => Workout::running(position, distance, duration, cadence),
            WorkoutDraft::Cycling {
                distance,
                duration,
                elevation_gain,
            } => Workout::cycling(position, distance, duration, elevation_gain),
        }
    }
}

impl TryFrom<&FormInput> for WorkoutDraft {
    type Error = FormError;

    fn try_from(input: &FormInput) -> Result<Self, Self::Error> {
        match input.kind.as_str() {
            "running" => Ok(WorkoutDraft::Running {
                distance: Distance::try_from(input.distance.as_str())?,
                duration: Duration::try_from(input.duration.as_str())?,
                cadence: Cadence::try_from(input.cadence.as_str())?,
            }),
            "cycling" => Ok(WorkoutDraft::Cycling {
                distance: Distance::try_from(input.distance.as_str())?,
                duration: Duration::try_from(input.duration.as_str())?,
                elevation_gain: Elevation::try_from(input.elevation.as_str())?,
            }),
            kind => Err(FormError::UnknownKind(kind.to_string())),
        }
    }
}

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum FormError {
    #[error("Unknown workout type {0:?}")]
    UnknownKind(String),
    #[error(transparent)]
    Distance(#[from] DistanceError),
    #[error(transparent)]
    Duration(#[from] DurationError),
    #[error(transparent)]
    Cadence(#[from] CadenceError),
    #[error(transparent)]
    Elevation(#[from] ElevationError),
}
