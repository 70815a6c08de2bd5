#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

use motus_domain::Position;

pub mod app;
pub mod log;

pub use app::{App, Mode, SubmitError};

pub const DEFAULT_ZOOM: u8 = 13;

/// Map rendering backend. The application never talks to the map tile
/// layer directly; it only places, clears and centers on markers.
pub trait Map {
    fn init(&self, center: Position, zoom: u8);
    fn place_marker(&self, position: Position, label: &str);
    fn clear_markers(&self);
    fn center_on(&self, position: Position);
}

impl<M: Map + ?Sized> Map for &M {
    fn init(&self, center: Position, zoom: u8) {
        (*self).init(center, zoom);
    }

    fn place_marker(&self, position: Position, label: &str) {
        (*self).place_marker(position, label);
    }

    fn clear_markers(&self) {
        (*self).clear_markers();
    }

    fn center_on(&self, position: Position) {
        (*self).center_on(position);
    }
}

pub trait Geolocator {
    fn current_position(&self) -> Result<Position, GeolocationError>;
}

impl<G: Geolocator + ?Sized> Geolocator for &G {
    fn current_position(&self) -> Result<Position, GeolocationError> {
        (*self).current_position()
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum GeolocationError {
    #[error("Could not get your location")]
    Unavailable,
}
