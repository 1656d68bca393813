//! # WedGIS Core
//!
//! Core types, traits and the error taxonomy for the WedGIS sector-geometry
//! library.
//!
//! This crate provides:
//! - `Bearing`: compass bearings and conversion to mathematical angles
//! - `AnnulusSpec`: validated input record for wedge construction
//! - `Observer`: a viewpoint's geometric and field-of-view attributes
//! - `Feature`: in-memory feature records with typed attribute access
//! - Algorithm traits for consistent API

pub mod annulus;
pub mod bearing;
pub mod error;
pub mod observer;
pub mod vector;

pub use annulus::AnnulusSpec;
pub use bearing::{normalize_span, Bearing};
pub use error::{Error, Result};
pub use observer::Observer;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::annulus::AnnulusSpec;
    pub use crate::bearing::{normalize_span, Bearing};
    pub use crate::error::{Error, Result};
    pub use crate::observer::Observer;
    pub use crate::Algorithm;
}

/// Core trait for all algorithms in WedGIS.
///
/// Algorithms are pure functions that transform input data according to parameters.
pub trait Algorithm {
    /// Input type for the algorithm
    type Input;
    /// Output type for the algorithm
    type Output;
    /// Parameters controlling algorithm behavior
    type Params: Default;
    /// Error type for algorithm execution
    type Error: std::error::Error;

    /// Returns the algorithm name
    fn name(&self) -> &'static str;

    /// Returns a description of what the algorithm does
    fn description(&self) -> &'static str;

    /// Execute the algorithm
    fn execute(&self, input: Self::Input, params: Self::Params) -> std::result::Result<Self::Output, Self::Error>;

    /// Execute with default parameters
    fn execute_default(&self, input: Self::Input) -> std::result::Result<Self::Output, Self::Error> {
        self.execute(input, Self::Params::default())
    }
}

/// Marker trait for algorithms that can be parallelized
pub trait ParallelAlgorithm: Algorithm {
    /// Execute in parallel using available cores
    fn execute_parallel(
        &self,
        input: Self::Input,
        params: Self::Params,
    ) -> std::result::Result<Self::Output, Self::Error>;
}
