//! Error type for the fallible helpers around the codec and distance engine.
//!
//! The core transforms (`encode`, `decode`, `distance`,
//! `distance_if_in_rectangle`) are total and never return these.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeoError {
    #[error("Invalid coordinate: {0}")]
    InvalidCoordinate(String),
    #[error("Invalid step: {0} bits per axis (expected 1..=32)")]
    InvalidStep(u8),
    #[error("Unknown distance unit: {0}")]
    UnknownUnit(String),
    #[error("Geohash error: {0}")]
    Geohash(String),
}

pub type Result<T> = std::result::Result<T, GeoError>;
