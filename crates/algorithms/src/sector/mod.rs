//! Sector ("wedge") geometry construction
//!
//! Builds the pie-shaped field-of-view outline and the annular "donut" range
//! band accompanying a radial line-of-sight observer:
//! - Arc: fixed-step vertex sampling of circular arcs in math-angle space
//! - Ring: pie-wedge and donut-wedge polygon rings
//! - Compose: per-observer ring pairs and fault-tolerant batches
//! - Rings: concentric range circles

mod arc;
mod compose;
mod ring;
mod rings;

pub use arc::{sample_arc, ARC_STEP_DEG};
pub use compose::{
    build_sector_batch, build_sector_batch_parallel, build_sectors, BatchOutcome, SectorBatch,
    SectorComposer, SectorPair,
};
pub use ring::{donut_wedge, pie_wedge, wedge};
pub use rings::{range_ring, range_rings};
