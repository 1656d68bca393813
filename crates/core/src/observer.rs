//! Observer records
//!
//! An observer is one viewpoint's geometric and field-of-view attributes:
//! position, near/far range limits and the bearing pair bounding the
//! horizontal field of view. Records usually arrive as rows of a feature
//! table carrying the standard field names below.

use geo_types::{Geometry, Point};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::vector::Feature;

/// Inner (near) range limit field
pub const FIELD_RADIUS1: &str = "RADIUS1";
/// Outer (far) range limit field
pub const FIELD_RADIUS2: &str = "RADIUS2";
/// Start bearing field, degrees clockwise from north
pub const FIELD_AZIMUTH1: &str = "AZIMUTH1";
/// End bearing field, degrees clockwise from north
pub const FIELD_AZIMUTH2: &str = "AZIMUTH2";
/// Observer height offset field
pub const FIELD_OFFSETA: &str = "OFFSETA";

/// A radial line-of-sight / range-ring observer.
///
/// Radii are in planar map units; azimuths in degrees clockwise from north,
/// swept from `azimuth1` to `azimuth2`. `offset_a` (observer height above
/// the surface) is carried through for the visibility collaborators but has
/// no bearing on sector geometry.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Observer {
    /// Observer position
    pub center: Point<f64>,
    /// Inner (near) range limit
    pub radius1: f64,
    /// Outer (far) range limit
    pub radius2: f64,
    /// Start bearing of the field of view
    pub azimuth1: f64,
    /// End bearing of the field of view
    pub azimuth2: f64,
    /// Observer height above the surface
    pub offset_a: f64,
}

impl Observer {
    /// Extract an observer from a feature record.
    ///
    /// The feature must carry a point geometry and the numeric fields
    /// `RADIUS1`, `RADIUS2`, `AZIMUTH1` and `AZIMUTH2`; `OFFSETA` defaults
    /// to 0 when absent. Range and consistency checks happen later, at
    /// sector-construction time.
    pub fn from_feature(feature: &Feature) -> Result<Self> {
        let center = match &feature.geometry {
            Some(Geometry::Point(p)) => *p,
            _ => return Err(Error::MissingGeometry),
        };

        Ok(Self {
            center,
            radius1: required_f64(feature, FIELD_RADIUS1)?,
            radius2: required_f64(feature, FIELD_RADIUS2)?,
            azimuth1: required_f64(feature, FIELD_AZIMUTH1)?,
            azimuth2: required_f64(feature, FIELD_AZIMUTH2)?,
            offset_a: feature.f64_property(FIELD_OFFSETA).unwrap_or(0.0),
        })
    }
}

fn required_f64(feature: &Feature, name: &'static str) -> Result<f64> {
    match feature.get_property(name) {
        None => Err(Error::MissingAttribute(name)),
        Some(value) => value.as_f64().ok_or_else(|| Error::InvalidAttribute {
            name,
            value: format!("{value:?}"),
            reason: "expected a numeric field".into(),
        }),
    }
}
