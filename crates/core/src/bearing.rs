//! Compass bearings and conversion to mathematical angles
//!
//! Bearings are degrees clockwise from north. All trigonometric code works in
//! the standard mathematical convention instead: radians, 0 = east,
//! counter-clockwise positive. The conversion between the two is
//! `radians(90 - bearing)`.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// A compass bearing in degrees clockwise from north.
///
/// Stored values lie in [0, 360]. The upper bound is kept distinct from 0 so
/// the pair (0, 360) describes a full circle rather than an empty span; every
/// other accepted input is wrapped into [0, 360) on construction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bearing(f64);

impl Bearing {
    /// Create a bearing from degrees.
    ///
    /// Accepts any finite value in [-360, 720] (slack for caller-side
    /// arithmetic such as `azimuth + 360`); anything else is rejected as
    /// [`Error::InvalidBearing`].
    pub fn new(degrees: f64) -> Result<Self> {
        if !degrees.is_finite() || !(-360.0..=720.0).contains(&degrees) {
            return Err(Error::InvalidBearing { value: degrees });
        }
        if degrees == 360.0 {
            Ok(Self(360.0))
        } else {
            Ok(Self(degrees.rem_euclid(360.0)))
        }
    }

    /// Bearing value in degrees.
    pub fn degrees(&self) -> f64 {
        self.0
    }

    /// Convert to a mathematical angle: radians, 0 = east, counter-clockwise
    /// positive.
    pub fn to_math_angle(&self) -> f64 {
        (90.0 - self.0).to_radians()
    }
}

/// Normalize a bearing pair into a monotone math-angle span.
///
/// The field of view is read clockwise from `start` to `end`. If
/// `start > end` as raw degree values the sector wraps through north and
/// `end` is treated as `end + 360` before conversion; this is the single
/// wraparound rule. A compass-clockwise sweep maps to a decreasing
/// mathematical angle, so the returned pair satisfies
/// `start_angle >= end_angle`. `start == end` yields a zero-width span,
/// which the ring builders accept as a degenerate sector.
pub fn normalize_span(start: Bearing, end: Bearing) -> (f64, f64) {
    let start_deg = start.degrees();
    let mut end_deg = end.degrees();
    if start_deg > end_deg {
        end_deg += 360.0;
    }
    ((90.0 - start_deg).to_radians(), (90.0 - end_deg).to_radians())
}
