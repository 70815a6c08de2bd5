use chrono::{DateTime, Local};
use log::warn;
use motus_domain as domain;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::KeyValue;

pub const KEY_WORKOUTS: &str = "workout";

/// Persists the whole ordered workout list as a single JSON blob under
/// one fixed key.
pub struct WorkoutStorage<K> {
    backend: K,
}

impl<K: KeyValue> WorkoutStorage<K> {
    pub fn new(backend: K) -> Self {
        Self { backend }
    }
}

impl<K: KeyValue> domain::WorkoutRepository for WorkoutStorage<K> {
    fn read_workouts(&self) -> Result<Vec<domain::Workout>, domain::StorageError> {
        let Some(blob) = self.backend.get(KEY_WORKOUTS)? else {
            return Ok(Vec::new());
        };
        match parse(&blob) {
            Ok(workouts) => Ok(workouts),
            Err(err) => {
                // An unreadable blob counts as no prior data.
                warn!("discarding stored workouts: {err}");
                Ok(Vec::new())
            }
        }
    }

    fn write_workouts(&self, workouts: &[domain::Workout]) -> Result<(), domain::StorageError> {
        let entries = workouts.iter().map(WorkoutEntry::from).collect::<Vec<_>>();
        let blob = serde_json::to_string(&entries)
            .map_err(|err| domain::StorageError::Other(Box::new(err)))?;
        self.backend.set(KEY_WORKOUTS, &blob)
    }

    fn clear_workouts(&self) -> Result<(), domain::StorageError> {
        self.backend.remove(KEY_WORKOUTS)
    }
}

fn parse(blob: &str) -> Result<Vec<domain::Workout>, EntryError> {
    serde_json::from_str::<Vec<WorkoutEntry>>(blob)?
        .into_iter()
        .map(domain::Workout::try_from)
        .collect()
}

/// Stored representation of a workout. Field names are part of the blob
/// format and must not change.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutEntry {
    pub id: Uuid,
    pub created_at: DateTime<Local>,
    pub coordinates: [f64; 2],
    pub distance_km: f64,
    pub duration_min: f64,
    pub kind: EntryKind,
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cadence_spm: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pace_min_per_km: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub elevation_gain_m: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub speed_km_per_h: Option<f64>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    Running,
    Cycling,
}

impl From<&domain::Workout> for WorkoutEntry {
    fn from(workout: &domain::Workout) -> Self {
        let (kind, cadence_spm, pace_min_per_km, elevation_gain_m, speed_km_per_h) =
            match workout.activity {
                domain::Activity::Running { cadence, pace } => (
                    EntryKind::Running,
                    Some(cadence.into()),
                    Some(pace.into()),
                    None,
                    None,
                ),
                domain::Activity::Cycling {
                    elevation_gain,
                    speed,
                } => (
                    EntryKind::Cycling,
                    None,
                    None,
                    Some(elevation_gain.into()),
                    Some(speed.into()),
                ),
            };
        Self {
            id: *workout.id,
            created_at: workout.created_at,
            coordinates: [workout.position.latitude, workout.position.longitude],
            distance_km: workout.distance.into(),
            duration_min: workout.duration.into(),
            kind,
            label: workout.label.clone(),
            cadence_spm,
            pace_min_per_km,
            elevation_gain_m,
            speed_km_per_h,
        }
    }
}

impl TryFrom<WorkoutEntry> for domain::Workout {
    type Error = EntryError;

    // Stored values are restored verbatim. In particular the derived
    // fields (label, pace, speed) are copied, never recomputed.
    fn try_from(entry: WorkoutEntry) -> Result<Self, Self::Error> {
        let [latitude, longitude] = entry.coordinates;
        let activity = match entry.kind {
            EntryKind::Running => domain::Activity::Running {
                cadence: domain::Cadence::new(
                    entry
                        .cadence_spm
                        .ok_or(EntryError::MissingField("cadenceSpm"))?,
                )?,
                pace: entry
                    .pace_min_per_km
                    .ok_or(EntryError::MissingField("paceMinPerKm"))?
                    .into(),
            },
            EntryKind::Cycling => domain::Activity::Cycling {
                elevation_gain: domain::Elevation::new(
                    entry
                        .elevation_gain_m
                        .ok_or(EntryError::MissingField("elevationGainM"))?,
                )?,
                speed: entry
                    .speed_km_per_h
                    .ok_or(EntryError::MissingField("speedKmPerH"))?
                    .into(),
            },
        };
        Ok(Self {
            id: entry.id.into(),
            created_at: entry.created_at,
            position: domain::Position::new(latitude, longitude)?,
            distance: domain::Distance::new(entry.distance_km)?,
            duration: domain::Duration::new(entry.duration_min)?,
            activity,
            label: entry.label,
        })
    }
}

#[derive(thiserror::Error, Debug)]
pub enum EntryError {
    #[error("missing field {0:?}")]
    MissingField(&'static str),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Position(#[from] domain::PositionError),
    #[error(transparent)]
    Distance(#[from] domain::DistanceError),
    #[error(transparent)]
    Duration(#[from] domain::DurationError),
    #[error(transparent)]
    Cadence(#[from] domain::CadenceError),
    #[error(transparent)]
    Elevation(#[from] domain::ElevationError),
}
