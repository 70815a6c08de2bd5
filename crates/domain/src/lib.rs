#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

pub mod error;
pub mod form;
pub mod position;
pub mod quantity;
pub mod service;
pub mod store;
pub mod workout;

pub use error::StorageError;
pub use form::{FormError, FormInput, WorkoutDraft};
pub use position::{Position, PositionError};
pub use quantity::{
    Cadence, CadenceError, Distance, DistanceError, Duration, DurationError, Elevation,
    ElevationError, Pace, Speed,
};
pub use service::{IdentityError, WorkoutService};
pub use store::{IndexError, WorkoutStore};
pub use workout::{Activity, Kind, Workout, WorkoutID, WorkoutRepository, label};
