//! Observer sector composition
//!
//! Maps one observer record onto its two rings: the pie-wedge field-of-view
//! silhouette (clipped against the visibility raster downstream) and the
//! donut-wedge range band (rendered alongside the range rings). Batches over
//! independent observers recover per feature: a bad record is reported and
//! skipped, never aborting the rest.

use geo::Polygon;
use log::warn;

use wedgis_core::{Algorithm, AnnulusSpec, Bearing, Error, Observer, ParallelAlgorithm, Result};

use crate::maybe_rayon::*;
use crate::sector::ring::wedge;

/// The two rings built for one observer.
#[derive(Debug, Clone)]
pub struct SectorPair {
    /// Pie wedge from the center out to `radius2`: the full field-of-view
    /// silhouette.
    pub field_of_view: Polygon<f64>,
    /// Donut wedge between `radius1` and `radius2`: the near/far range band.
    pub range_band: Polygon<f64>,
}

/// Build both sector rings for one observer.
///
/// The bearing pair is normalized once and shared, so the two rings are
/// angularly consistent. All validation happens before any sampling; on
/// error nothing is built. Pure function of the record: no I/O, no shared
/// state.
pub fn build_sectors(observer: &Observer) -> Result<SectorPair> {
    let start = Bearing::new(observer.azimuth1)?;
    let end = Bearing::new(observer.azimuth2)?;

    let silhouette = AnnulusSpec::new(observer.center, 0.0, observer.radius2, start, end)?;
    let band = AnnulusSpec::new(
        observer.center,
        observer.radius1,
        observer.radius2,
        start,
        end,
    )?;

    Ok(SectorPair {
        field_of_view: wedge(&silhouette),
        range_band: wedge(&band),
    })
}

/// Outcome of a batch over independent observers.
#[derive(Debug, Default)]
pub struct BatchOutcome {
    /// Built sector pairs, tagged with each observer's index in the input.
    pub built: Vec<(usize, SectorPair)>,
    /// Per-observer diagnostics for records that failed validation.
    pub failed: Vec<(usize, Error)>,
}

impl BatchOutcome {
    fn record(&mut self, index: usize, result: Result<SectorPair>) {
        match result {
            Ok(pair) => self.built.push((index, pair)),
            Err(err) => {
                warn!("observer {index} skipped: {err}");
                self.failed.push((index, err));
            }
        }
    }
}

/// Build sector pairs for a batch of observers.
///
/// Observers never interact; iteration order determines only output
/// ordering. Failed records are logged and collected as diagnostics while
/// the rest of the batch proceeds.
pub fn build_sector_batch(observers: &[Observer]) -> BatchOutcome {
    let mut outcome = BatchOutcome::default();
    for (index, observer) in observers.iter().enumerate() {
        outcome.record(index, build_sectors(observer));
    }
    outcome
}

/// Parallel variant of [`build_sector_batch`].
///
/// Same contract; each observer is independent, so the batch maps over the
/// available cores when the `parallel` feature is enabled. Results carry
/// their input index, so the outcome ordering is reproducible.
pub fn build_sector_batch_parallel(observers: &[Observer]) -> BatchOutcome {
    let indexed: Vec<(usize, Observer)> = observers.iter().copied().enumerate().collect();

    let results: Vec<(usize, Result<SectorPair>)> = indexed
        .into_par_iter()
        .map(|(index, observer)| (index, build_sectors(&observer)))
        .collect();

    let mut outcome = BatchOutcome::default();
    for (index, result) in results {
        outcome.record(index, result);
    }
    outcome
}

/// Sector composition for a single observer
#[derive(Debug, Clone, Default)]
pub struct SectorComposer;

impl Algorithm for SectorComposer {
    type Input = Observer;
    type Output = SectorPair;
    type Params = ();
    type Error = Error;

    fn name(&self) -> &'static str {
        "ObserverSectors"
    }

    fn description(&self) -> &'static str {
        "Build the field-of-view pie wedge and range-band donut wedge for one observer"
    }

    fn execute(&self, input: Self::Input, _params: Self::Params) -> Result<Self::Output> {
        build_sectors(&input)
    }
}

/// Fault-tolerant sector composition over an observer batch
#[derive(Debug, Clone, Default)]
pub struct SectorBatch;

impl Algorithm for SectorBatch {
    type Input = Vec<Observer>;
    type Output = BatchOutcome;
    type Params = ();
    type Error = Error;

    fn name(&self) -> &'static str {
        "ObserverSectorBatch"
    }

    fn description(&self) -> &'static str {
        "Build sector pairs for a batch of observers, skipping invalid records"
    }

    fn execute(&self, input: Self::Input, _params: Self::Params) -> Result<Self::Output> {
        Ok(build_sector_batch(&input))
    }
}

impl ParallelAlgorithm for SectorBatch {
    fn execute_parallel(&self, input: Self::Input, _params: Self::Params) -> Result<Self::Output> {
        Ok(build_sector_batch_parallel(&input))
    }
}
