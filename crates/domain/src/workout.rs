use std::fmt;

use chrono::{DateTime, Local, NaiveDate};
use derive_more::{Deref, Display};
use uuid::Uuid;

use crate::{Cadence, Distance, Duration, Elevation, Pace, Position, Speed, StorageError};

/// Persistence backend for the full ordered workout list. The list is
/// read and written as a whole; there is no per-record addressing.
pub trait WorkoutRepository {
    fn read_workouts(&self) -> Result<Vec<Workout>, StorageError>;
    fn write_workouts(&self, workouts: &[Workout]) -> Result<(), StorageError>;
    fn clear_workouts(&self) -> Result<(), StorageError>;
}

#[derive(Deref, Debug, Display, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct WorkoutID(Uuid);

impl WorkoutID {
    #[must_use]
    pub fn nil() -> Self {
        Self(Uuid::nil())
    }

    #[must_use]
    pub fn is_nil(&self) -> bool {
        self.0.is_nil()
    }
}

impl From<Uuid> for WorkoutID {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

impl From<u128> for WorkoutID {
    fn from(value: u128) -> Self {
        Self(Uuid::from_bytes(value.to_be_bytes()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    Running,
    Cycling,
}

impl Kind {
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Kind::Running => "Running",
            Kind::Cycling => "Cycling",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Variant data of a workout, including the metric derived from
/// distance and duration at creation time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Activity {
    Running { cadence: Cadence, pace: Pace },
    Cycling { elevation_gain: Elevation, speed: Speed },
}

impl Activity {
    #[must_use]
    pub fn kind(&self) -> Kind {
        match self {
            Activity::Running { .. } => Kind::Running,
            Activity::Cycling { .. } => Kind::Cycling,
        }
    }
}

/// A single recorded workout. Records are immutable once created;
/// editing replaces the whole record.
#[derive(Debug, Clone, PartialEq)]
pub struct Workout {
    pub id: WorkoutID,
    pub created_at: DateTime<Local>,
    pub position: Position,
    pub distance: Distance,
    pub duration: Duration,
    pub activity: Activity,
    pub label: String,
}

impl Workout {
    #[must_use]
    pub fn running(
        position: Position,
        distance: Distance,
        duration: Duration,
        cadence: Cadence,
    ) -> Self {
        let pace = Pace::calculate(duration, distance);
        Self::with_activity(position, distance, duration, Activity::Running { cadence, pace })
    }

    #[must_use]
    pub fn cycling(
        position: Position,
        distance: Distance,
        duration: Duration,
        elevation_gain: Elevation,
    ) -> Self {
        let speed = Speed::calculate(distance, duration);
        Self::with_activity(
            position,
            distance,
            duration,
            Activity::Cycling {
                elevation_gain,
                speed,
            },
        )
    }

    fn with_activity(
        position: Position,
        distance: Distance,
        duration: Duration,
        activity: Activity,
    ) -> Self {
        let created_at = Local::now();
        Self {
            id: WorkoutID::from(Uuid::new_v4()),
            label: label(activity.kind(), created_at.date_naive()),
            created_at,
            position,
            distance,
            duration,
            activity,
        }
    }

    #[must_use]
    pub fn kind(&self) -> Kind {
        self.activity.kind()
    }
}

/// Human-readable description of a workout, e.g. "Running on August 30".
#[must_use]
pub fn label(kind: Kind, date: NaiveDate) -> String {
    format!("{kind} on {}", date.format("%B %-d"))
}
