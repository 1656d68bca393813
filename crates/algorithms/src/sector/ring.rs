//! Pie-wedge and donut-wedge polygon rings
//!
//! A pie wedge spans from the center point out to the outer radius; a donut
//! wedge is the annular band between the inner and outer radii. Both walk
//! the bearing span clockwise and close explicitly, so the exterior ring is
//! simple for any validated [`AnnulusSpec`].

use geo::{Coord, LineString, Polygon};
use wedgis_core::AnnulusSpec;

use super::arc::{arc_point, sample_arc, ANGLE_EPS, ARC_STEP_DEG};

/// Build the wedge ring for `spec`, selecting the mode on the inner radius:
/// a pie wedge when it is zero, a donut wedge otherwise.
pub fn wedge(spec: &AnnulusSpec) -> Polygon<f64> {
    if spec.inner_radius() == 0.0 {
        pie_wedge(spec)
    } else {
        donut_wedge(spec)
    }
}

/// Build a pie-wedge ring: the center point, the outer arc walked from the
/// start bearing to the end bearing, and the center point again as closure.
///
/// Always yields at least 3 vertices; a zero-width span degenerates to a
/// single radial spike rather than failing.
pub fn pie_wedge(spec: &AnnulusSpec) -> Polygon<f64> {
    let (start_angle, end_angle) = spec.math_span();
    let center = spec.center();
    let center_coord = Coord {
        x: center.x(),
        y: center.y(),
    };

    let mut coords = vec![center_coord];
    coords.extend(sample_arc(center, spec.outer_radius(), start_angle, end_angle));
    coords.push(center_coord);

    Polygon::new(LineString::new(coords), vec![])
}

/// Build a donut-wedge ring: the outer arc walked from the start bearing to
/// the end bearing, the inner arc walked back, and the exact outer vertex at
/// the start angle as closure.
///
/// Between the two walks the cursor steps back up by one interval, undoing
/// the final decrement, so the inner arc begins at the last outer sample's
/// angle. This keeps the two arcs' vertex counts equal and avoids a
/// duplicate vertex; changing it would alter vertex counts.
pub fn donut_wedge(spec: &AnnulusSpec) -> Polygon<f64> {
    let (start_angle, end_angle) = spec.math_span();
    let center = spec.center();
    let step = ARC_STEP_DEG.to_radians();

    let mut coords = Vec::new();

    // Outer arc, clockwise (decreasing math angle).
    let mut a = start_angle;
    while a >= end_angle - ANGLE_EPS {
        coords.push(arc_point(center, spec.outer_radius(), a));
        a -= step;
    }

    // Back up one interval: the inner walk starts where the outer loop
    // condition last held.
    a += step;

    // Inner arc, walked back toward the start angle.
    while a <= start_angle + ANGLE_EPS {
        coords.push(arc_point(center, spec.inner_radius(), a));
        a += step;
    }

    // Exact outer vertex at the start angle; closes the ring even when step
    // accumulation has drifted.
    coords.push(arc_point(center, spec.outer_radius(), start_angle));

    Polygon::new(LineString::new(coords), vec![])
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo::Point;

    fn spec(inner: f64, outer: f64, start: f64, end: f64) -> AnnulusSpec {
        AnnulusSpec::from_degrees(Point::new(0.0, 0.0), inner, outer, start, end).unwrap()
    }

    fn distance(c: &Coord<f64>) -> f64 {
        (c.x * c.x + c.y * c.y).sqrt()
    }

    #[test]
    fn test_pie_quarter_vertex_count() {
        // Center + 19 arc vertices + closing center
        let ring = pie_wedge(&spec(0.0, 100.0, 0.0, 90.0));
        assert_eq!(ring.exterior().0.len(), 21);
    }

    #[test]
    fn test_pie_opens_and_closes_at_center() {
        let ring = pie_wedge(&spec(0.0, 100.0, 0.0, 90.0));
        let coords = &ring.exterior().0;
        assert_eq!(coords.first(), coords.last());
        assert_eq!(*coords.first().unwrap(), Coord { x: 0.0, y: 0.0 });
    }

    #[test]
    fn test_pie_vertices_at_center_or_outer() {
        let ring = pie_wedge(&spec(0.0, 100.0, 30.0, 220.0));
        for c in &ring.exterior().0 {
            let d = distance(c);
            assert!(
                d < 1e-9 || (d - 100.0).abs() < 1e-9,
                "vertex at unexpected distance {}",
                d
            );
        }
    }

    #[test]
    fn test_donut_vertices_on_both_radii() {
        let ring = donut_wedge(&spec(50.0, 100.0, 40.0, 120.0));
        let mut inner = 0;
        let mut outer = 0;
        for c in &ring.exterior().0 {
            let d = distance(c);
            if (d - 50.0).abs() < 1e-9 {
                inner += 1;
            } else if (d - 100.0).abs() < 1e-9 {
                outer += 1;
            } else {
                panic!("vertex at unexpected distance {}", d);
            }
        }
        assert!(inner > 0 && outer > 0);
    }

    #[test]
    fn test_donut_arc_count_parity() {
        // Outer-arc count + inner-arc count + 1 closing vertex; the two arcs
        // always have the same count
        for (start, end) in [(40.0, 120.0), (0.0, 90.0), (350.0, 10.0), (123.4, 17.9)] {
            let ring = donut_wedge(&spec(50.0, 100.0, start, end));
            let coords = &ring.exterior().0;
            let outer: usize = coords
                .iter()
                .filter(|c| (distance(c) - 100.0).abs() < 1e-9)
                .count();
            let inner: usize = coords
                .iter()
                .filter(|c| (distance(c) - 50.0).abs() < 1e-9)
                .count();
            // Closing vertex sits on the outer radius
            assert_eq!(outer - 1, inner, "span {start}->{end}");
            assert_eq!(coords.len(), outer + inner);
        }
    }

    #[test]
    fn test_donut_first_and_closing_vertex_coincide() {
        let ring = donut_wedge(&spec(50.0, 100.0, 40.0, 120.0));
        let coords = &ring.exterior().0;
        assert_eq!(coords.first(), coords.last());
    }

    #[test]
    fn test_donut_closing_vertex_is_exact_outer_start() {
        let ring = donut_wedge(&spec(50.0, 100.0, 40.0, 120.0));
        let last = *ring.exterior().0.last().unwrap();
        let expected = 50.0_f64.to_radians(); // math angle of bearing 40
        assert!((last.x - 100.0 * expected.cos()).abs() < 1e-9);
        assert!((last.y - 100.0 * expected.sin()).abs() < 1e-9);
    }

    #[test]
    fn test_zero_span_pie_minimal_ring() {
        let ring = pie_wedge(&spec(0.0, 100.0, 45.0, 45.0));
        assert_eq!(ring.exterior().0.len(), 3);
    }

    #[test]
    fn test_zero_span_donut_minimal_ring() {
        let ring = donut_wedge(&spec(50.0, 100.0, 45.0, 45.0));
        assert_eq!(ring.exterior().0.len(), 3);
    }

    #[test]
    fn test_wedge_selects_mode_on_inner_radius() {
        let pie = wedge(&spec(0.0, 100.0, 0.0, 90.0));
        let donut = wedge(&spec(50.0, 100.0, 0.0, 90.0));
        // Pie opens at the center, donut on the outer arc
        assert_eq!(*pie.exterior().0.first().unwrap(), Coord { x: 0.0, y: 0.0 });
        assert!((distance(donut.exterior().0.first().unwrap()) - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_offset_center() {
        let spec =
            AnnulusSpec::from_degrees(Point::new(500.0, -250.0), 0.0, 10.0, 10.0, 80.0).unwrap();
        let ring = pie_wedge(&spec);
        for c in ring.exterior().0.iter().skip(1).rev().skip(1) {
            let d = ((c.x - 500.0).powi(2) + (c.y + 250.0).powi(2)).sqrt();
            assert!((d - 10.0).abs() < 1e-9);
        }
    }
}
