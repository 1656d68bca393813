//! End-to-end scenarios for observer sector construction.
//!
//! Each test builds rings through the public API only and checks the
//! geometric contract: vertex counts, closure, radial distances and the
//! compass span actually covered by the sampled vertices.

use geo::{Area, Coord, Point};
use wedgis_algorithms::sector::{build_sectors, donut_wedge, pie_wedge};
use wedgis_core::{AnnulusSpec, Observer};

fn observer(radius1: f64, radius2: f64, az1: f64, az2: f64) -> Observer {
    Observer {
        center: Point::new(0.0, 0.0),
        radius1,
        radius2,
        azimuth1: az1,
        azimuth2: az2,
        offset_a: 2.0,
    }
}

fn distance(c: &Coord<f64>) -> f64 {
    (c.x * c.x + c.y * c.y).sqrt()
}

/// Compass bearing of a vertex around the origin, in [0, 360).
fn bearing_of(c: &Coord<f64>) -> f64 {
    (90.0 - c.y.atan2(c.x).to_degrees()).rem_euclid(360.0)
}

#[test]
fn quarter_pie_wedge_vertex_layout() {
    // 0..90 degrees at radius 100: center + 19 arc vertices + closing center
    let spec =
        AnnulusSpec::from_degrees(Point::new(0.0, 0.0), 0.0, 100.0, 0.0, 90.0).unwrap();
    let ring = pie_wedge(&spec);
    let coords = &ring.exterior().0;

    assert_eq!(coords.len(), 21);
    assert_eq!(*coords.first().unwrap(), Coord { x: 0.0, y: 0.0 });
    assert_eq!(*coords.last().unwrap(), Coord { x: 0.0, y: 0.0 });

    // Arc vertices sweep exactly the commanded span
    for c in &coords[1..20] {
        let b = bearing_of(c);
        assert!(
            (-1e-6..=90.0 + 1e-6).contains(&b),
            "vertex bearing {} outside [0, 90]",
            b
        );
    }
}

#[test]
fn donut_wedge_first_vertex_at_start_bearing() {
    let spec =
        AnnulusSpec::from_degrees(Point::new(0.0, 0.0), 50.0, 100.0, 40.0, 120.0).unwrap();
    let ring = donut_wedge(&spec);
    let first = ring.exterior().0[0];

    // Outer-arc vertex at bearing 40: (100 cos 50, 100 sin 50) in math angles
    assert!((first.x - 64.28).abs() < 0.01, "x = {}", first.x);
    assert!((first.y - 76.60).abs() < 0.01, "y = {}", first.y);
}

#[test]
fn donut_wedge_vertex_count_and_radii() {
    // 80-degree span: 17 outer + 17 inner + 1 closing vertex
    let spec =
        AnnulusSpec::from_degrees(Point::new(0.0, 0.0), 50.0, 100.0, 40.0, 120.0).unwrap();
    let ring = donut_wedge(&spec);
    let coords = &ring.exterior().0;

    assert_eq!(coords.len(), 35);
    for c in coords {
        let d = distance(c);
        assert!(
            (d - 50.0).abs() < 1e-9 || (d - 100.0).abs() < 1e-9,
            "vertex at unexpected distance {}",
            d
        );
    }
}

#[test]
fn wraparound_span_covers_only_the_narrow_sector() {
    // 350 -> 10 is a 20-degree sector through north; the wide gap between
    // 10 and 350 stays empty
    let pair = build_sectors(&observer(50.0, 100.0, 350.0, 10.0)).unwrap();

    for ring in [&pair.field_of_view, &pair.range_band] {
        for c in &ring.exterior().0 {
            if distance(c) < 1e-9 {
                continue; // the pie ring's center vertex has no bearing
            }
            let b = bearing_of(c);
            assert!(
                b >= 350.0 - 1e-6 || b <= 10.0 + 1e-6,
                "vertex bearing {} falls in the excluded gap",
                b
            );
        }
    }

    // 20-degree span at a 5-degree step: 5 outer + 5 inner + 1 closing
    assert_eq!(pair.range_band.exterior().0.len(), 11);
}

#[test]
fn full_circle_pie_wedge_approximates_disk() {
    let spec =
        AnnulusSpec::from_degrees(Point::new(0.0, 0.0), 0.0, 1000.0, 0.0, 360.0).unwrap();
    let ring = pie_wedge(&spec);

    // Center + 73 arc vertices (0 and 360 both sampled) + closing center
    assert_eq!(ring.exterior().0.len(), 75);

    let expected = std::f64::consts::PI * 1000.0 * 1000.0;
    let actual = ring.unsigned_area();
    let error = (actual - expected).abs() / expected;
    assert!(
        error < 0.01,
        "Disk area error {:.3}% (expected {:.0}, got {:.0})",
        error * 100.0,
        expected,
        actual
    );
}

#[test]
fn zero_span_sectors_build_minimal_rings() {
    let pair = build_sectors(&observer(50.0, 100.0, 45.0, 45.0)).unwrap();
    assert!(pair.field_of_view.exterior().0.len() >= 3);
    assert!(pair.range_band.exterior().0.len() >= 3);
}

#[test]
fn all_vertices_within_radial_band() {
    let pair = build_sectors(&observer(250.0, 800.0, 300.0, 30.0)).unwrap();

    for c in &pair.field_of_view.exterior().0 {
        let d = distance(c);
        assert!(d < 1e-9 || (d - 800.0).abs() < 1e-9);
    }
    for c in &pair.range_band.exterior().0 {
        let d = distance(c);
        assert!(
            d >= 250.0 - 1e-9 && d <= 800.0 + 1e-9,
            "band vertex at distance {}",
            d
        );
    }
}
