use crate::types::Coords;
use thiserror::Error;

/// Rejected form input. The user only ever sees [`BAD_INPUT_ALERT`].
#[derive(Error, Debug, Clone, PartialEq)]
pub enum InputError {
    #[error("{field} is not a finite number: {value:?}")]
    NotFinite { field: &'static str, value: String },
    #[error("{field} must be positive, got {value}")]
    NotPositive { field: &'static str, value: f64 },
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GeoError {
    #[error("location access denied")]
    Denied,
    #[error("position unavailable: {0}")]
    Unavailable(String),
}

/// A stored workout that breaks the model's invariants.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RecordError {
    #[error("coords out of range: {0}")]
    CoordsOutOfRange(Coords),
    #[error("{field} must be positive, got {value}")]
    NotPositive { field: &'static str, value: f64 },
    #[error("{unit} is not finite")]
    MetricNotFinite { unit: &'static str },
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoordsError {
    #[error("expected LAT,LNG, got {0:?}")]
    Format(String),
    #[error("coordinates out of range: {0}")]
    Range(String),
}

pub const BAD_INPUT_ALERT: &str = "Inputs have to be positive numbers!";
pub const NO_POSITION_ALERT: &str =
    "Could not get your position. Please allow access to your location.";
pub const SET_ASIDE_ALERT: &str =
    "Saved workouts could not be read. They were set aside and the list starts empty.";
pub const UNREADABLE_STORE_ALERT: &str =
    "Saved workouts could not be loaded. New workouts will not be saved until they can be.";
