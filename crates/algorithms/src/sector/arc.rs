//! Fixed-step sampling of circular arcs
//!
//! Arcs are walked in math-angle space (radians, 0 = east,
//! counter-clockwise). A clockwise compass sweep maps to a decreasing math
//! angle, so the walk runs downward from the start of the span. The walk
//! stops after overshooting the end of the span; it does not emit an exact
//! end-angle vertex. Components that need exact closure points append them
//! explicitly.

use geo::{Coord, Point};

/// Angular step between arc vertices, in degrees of arc.
///
/// Policy constant shared by wedge and range-ring construction; not a
/// per-call parameter.
pub const ARC_STEP_DEG: f64 = 5.0;

/// Tolerance on the walk bounds so spans that are exact multiples of the
/// step keep their final sample under accumulated rounding.
pub(crate) const ANGLE_EPS: f64 = 1e-9;

/// The point on the circle of `radius` around `center` at math angle `angle`.
#[inline]
pub(crate) fn arc_point(center: Point<f64>, radius: f64, angle: f64) -> Coord<f64> {
    Coord {
        x: center.x() + radius * angle.cos(),
        y: center.y() + radius * angle.sin(),
    }
}

/// Sample the arc of `radius` around `center` from `start_angle` down to
/// `end_angle` (radians, math convention) at the fixed [`ARC_STEP_DEG`] step.
///
/// Returns at least one vertex for any span with `start_angle >= end_angle`,
/// including a zero-width span.
pub fn sample_arc(
    center: Point<f64>,
    radius: f64,
    start_angle: f64,
    end_angle: f64,
) -> Vec<Coord<f64>> {
    let step = ARC_STEP_DEG.to_radians();
    let mut points = Vec::with_capacity(((start_angle - end_angle) / step) as usize + 2);

    let mut a = start_angle;
    while a >= end_angle - ANGLE_EPS {
        points.push(arc_point(center, radius, a));
        a -= step;
    }

    points
}
