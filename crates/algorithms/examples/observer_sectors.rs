//! Observer sector demo: feature table to wedge geometry
//!
//! Builds a small in-memory observer table, extracts the observer records,
//! runs the fault-tolerant batch composer and prints the resulting rings:
//!   - field-of-view pie wedge (vertex count, area)
//!   - range-band donut wedge (vertex count, area)
//!   - concentric range rings
//!
//! One record carries an inner radius above its outer radius, so the run
//! also shows a per-feature diagnostic instead of an aborted batch.
//!
//! Run:
//!   RUST_LOG=warn cargo run -p wedgis-algorithms --example observer_sectors

use geo::{Area, Geometry, Point};

use wedgis_algorithms::sector::{build_sector_batch, range_rings};
use wedgis_core::observer::{
    FIELD_AZIMUTH1, FIELD_AZIMUTH2, FIELD_OFFSETA, FIELD_RADIUS1, FIELD_RADIUS2,
};
use wedgis_core::vector::{AttributeValue, Feature, FeatureCollection};
use wedgis_core::Observer;

fn observer_feature(
    id: &str,
    center: (f64, f64),
    radius1: f64,
    radius2: f64,
    azimuth1: f64,
    azimuth2: f64,
) -> Feature {
    let mut f = Feature::new(Geometry::Point(Point::new(center.0, center.1)));
    f.id = Some(id.to_string());
    f.set_property(FIELD_RADIUS1, AttributeValue::Float(radius1));
    f.set_property(FIELD_RADIUS2, AttributeValue::Float(radius2));
    f.set_property(FIELD_AZIMUTH1, AttributeValue::Float(azimuth1));
    f.set_property(FIELD_AZIMUTH2, AttributeValue::Float(azimuth2));
    f.set_property(FIELD_OFFSETA, AttributeValue::Float(2.0));
    f
}

fn main() {
    env_logger::init();

    // --- 1. Build the observer table ---
    let mut table = FeatureCollection::new();
    table.push(observer_feature("op-north", (1000.0, 1000.0), 0.0, 800.0, 315.0, 45.0));
    table.push(observer_feature("op-ridge", (2500.0, 1200.0), 200.0, 1500.0, 40.0, 120.0));
    table.push(observer_feature("op-bad", (1800.0, 400.0), 900.0, 600.0, 0.0, 90.0));
    table.push(observer_feature("op-full", (500.0, 2000.0), 100.0, 1000.0, 0.0, 360.0));
    println!("Observer table: {} features", table.len());

    // --- 2. Extract observer records ---
    let observers: Vec<Observer> = table
        .iter()
        .map(|f| Observer::from_feature(f).expect("table carries all observer fields"))
        .collect();

    // --- 3. Compose sectors (bad records are logged and skipped) ---
    let outcome = build_sector_batch(&observers);
    println!(
        "\nSectors built: {} ok, {} skipped",
        outcome.built.len(),
        outcome.failed.len()
    );

    for (index, pair) in &outcome.built {
        println!("\nobserver #{index}");
        println!(
            "  field of view: {:4} vertices, area {:12.1}",
            pair.field_of_view.exterior().0.len(),
            pair.field_of_view.unsigned_area()
        );
        println!(
            "  range band:    {:4} vertices, area {:12.1}",
            pair.range_band.exterior().0.len(),
            pair.range_band.unsigned_area()
        );

        let rings = range_rings(&observers[*index]).expect("radii already validated");
        for (i, ring) in rings.iter().enumerate() {
            println!(
                "  range ring {i}:  {:4} vertices, area {:12.1}",
                ring.exterior().0.len(),
                ring.unsigned_area()
            );
        }
    }

    for (index, err) in &outcome.failed {
        println!("\nobserver #{index} skipped: {err}");
    }
}
