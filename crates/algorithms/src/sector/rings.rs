//! Concentric range rings
//!
//! Full-circle polygons around an observer, sampled at the same angular step
//! as the wedge arcs so ring and wedge vertices line up along shared radii.

use geo::{LineString, Point, Polygon};

use wedgis_core::{Error, Observer, Result};

use super::arc::{arc_point, ARC_STEP_DEG};

/// Build a circle polygon of `radius` around `center`.
///
/// One vertex per [`ARC_STEP_DEG`] of arc plus an explicit closing vertex.
/// A non-positive or non-finite radius is rejected as
/// [`Error::InvalidSector`].
pub fn range_ring(center: Point<f64>, radius: f64) -> Result<Polygon<f64>> {
    if !radius.is_finite() || radius <= 0.0 {
        return Err(Error::InvalidSector {
            inner: 0.0,
            outer: radius,
        });
    }
    Ok(circle(center, radius))
}

/// Build the range circles for an observer: one at `radius1` (omitted when
/// zero) and one at `radius2`.
///
/// Radii are validated by the same rule as sector construction.
pub fn range_rings(observer: &Observer) -> Result<Vec<Polygon<f64>>> {
    if !observer.radius1.is_finite()
        || !observer.radius2.is_finite()
        || observer.radius1 < 0.0
        || observer.radius2 <= observer.radius1
    {
        return Err(Error::InvalidSector {
            inner: observer.radius1,
            outer: observer.radius2,
        });
    }

    let mut rings = Vec::with_capacity(2);
    if observer.radius1 > 0.0 {
        rings.push(circle(observer.center, observer.radius1));
    }
    rings.push(circle(observer.center, observer.radius2));
    Ok(rings)
}

fn circle(center: Point<f64>, radius: f64) -> Polygon<f64> {
    let step = ARC_STEP_DEG.to_radians();
    let n = (360.0 / ARC_STEP_DEG) as usize;

    let mut coords = Vec::with_capacity(n + 1);
    for i in 0..n {
        coords.push(arc_point(center, radius, i as f64 * step));
    }
    coords.push(coords[0]);

    Polygon::new(LineString::new(coords), vec![])
}
