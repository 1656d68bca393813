//! # WedGIS Algorithms
//!
//! Sector ("wedge") geometry construction for radial line-of-sight and
//! range-ring observers.
//!
//! ## Available modules
//!
//! - **sector**: arc sampling, pie-wedge and donut-wedge rings, per-observer
//!   composition, fault-tolerant batches, concentric range rings

pub mod sector;

mod maybe_rayon;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::sector::{
        build_sector_batch, build_sectors, donut_wedge, pie_wedge, range_ring, range_rings,
        sample_arc, wedge, BatchOutcome, SectorBatch, SectorComposer, SectorPair, ARC_STEP_DEG,
    };
    pub use wedgis_core::prelude::*;
}
