//! Error types for WedGIS

use thiserror::Error;

/// Main error type for WedGIS operations
#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid sector radii: inner = {inner}, outer = {outer}")]
    InvalidSector { inner: f64, outer: f64 },

    #[error("Invalid bearing: {value}")]
    InvalidBearing { value: f64 },

    #[error("Missing attribute: {0}")]
    MissingAttribute(&'static str),

    #[error("Invalid attribute: {name} = {value} ({reason})")]
    InvalidAttribute {
        name: &'static str,
        value: String,
        reason: String,
    },

    #[error("Feature has no point geometry")]
    MissingGeometry,
}

/// Result type alias for WedGIS operations
pub type Result<T> = std::result::Result<T, Error>;
