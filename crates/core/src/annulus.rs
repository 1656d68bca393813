//! Validated input record for wedge construction

use geo_types::Point;
use serde::{Deserialize, Serialize};

use crate::bearing::{normalize_span, Bearing};
use crate::error::{Error, Result};

/// The immutable input to sector construction: a center point, an inner and
/// outer radius, and a bearing span read clockwise from `start` to `end`.
///
/// Validation happens here, before any arc sampling, so partially built
/// rings are never produced downstream. A zero-width bearing span and an
/// inner radius of exactly 0 are valid degenerate inputs, not errors.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnnulusSpec {
    center: Point<f64>,
    inner_radius: f64,
    outer_radius: f64,
    start: Bearing,
    end: Bearing,
}

impl AnnulusSpec {
    /// Create a validated spec.
    ///
    /// Rejects a negative or non-finite radius and `outer <= inner` as
    /// [`Error::InvalidSector`].
    pub fn new(
        center: Point<f64>,
        inner_radius: f64,
        outer_radius: f64,
        start: Bearing,
        end: Bearing,
    ) -> Result<Self> {
        if !inner_radius.is_finite()
            || !outer_radius.is_finite()
            || inner_radius < 0.0
            || outer_radius <= inner_radius
        {
            return Err(Error::InvalidSector {
                inner: inner_radius,
                outer: outer_radius,
            });
        }

        Ok(Self {
            center,
            inner_radius,
            outer_radius,
            start,
            end,
        })
    }

    /// Create a spec from bearings given in raw degrees.
    pub fn from_degrees(
        center: Point<f64>,
        inner_radius: f64,
        outer_radius: f64,
        start_deg: f64,
        end_deg: f64,
    ) -> Result<Self> {
        Self::new(
            center,
            inner_radius,
            outer_radius,
            Bearing::new(start_deg)?,
            Bearing::new(end_deg)?,
        )
    }

    /// Sector center in planar map units.
    pub fn center(&self) -> Point<f64> {
        self.center
    }

    /// Inner (near) radius, >= 0.
    pub fn inner_radius(&self) -> f64 {
        self.inner_radius
    }

    /// Outer (far) radius, > inner radius.
    pub fn outer_radius(&self) -> f64 {
        self.outer_radius
    }

    /// Start bearing of the clockwise sweep.
    pub fn start(&self) -> Bearing {
        self.start
    }

    /// End bearing of the clockwise sweep.
    pub fn end(&self) -> Bearing {
        self.end
    }

    /// The bearing span as a monotone math-angle pair
    /// (`start_angle >= end_angle`, radians).
    pub fn math_span(&self) -> (f64, f64) {
        normalize_span(self.start, self.end)
    }
}
