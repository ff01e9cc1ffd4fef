use super::record::Record;
use super::Catalog;
use std::time::{Duration, Instant};
use tracing::debug;

/// Work done by a single sort
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SortStats {
    pub passes: usize,
    pub swaps: usize,
}

/// Outcome of a timed sort
#[derive(Debug, Clone, Copy)]
pub struct SortReport {
    pub elapsed: Duration,
    pub stats: SortStats,
}

impl SortReport {
    /// Elapsed wall-clock time in whole microseconds
    pub fn micros(&self) -> u128 {
        self.elapsed.as_micros()
    }
}

/// Sort ascending by price with adjacent compare-and-swap passes
///
/// Stops after the first pass that makes no swap. Equal prices are never
/// swapped, so their relative order survives.
pub fn bubble_sort_by_price(records: &mut [Record]) -> SortStats {
    let mut stats = SortStats::default();
    let mut unsorted = records.len();

    while unsorted > 1 {
        stats.passes += 1;
        let mut swapped = false;
        for j in 0..unsorted - 1 {
            if records[j].price > records[j + 1].price {
                records.swap(j, j + 1);
                stats.swaps += 1;
                swapped = true;
            }
        }
        if !swapped {
            break;
        }
        // the largest remaining price has settled at the end
        unsorted -= 1;
    }

    stats
}

/// Sort the catalog by price and measure how long it took
pub fn timed_sort_by_price(catalog: &mut Catalog) -> SortReport {
    let start = Instant::now();
    let stats = bubble_sort_by_price(catalog.records_mut());
    let elapsed = start.elapsed();

    debug!(
        records = catalog.len(),
        passes = stats.passes,
        swaps = stats.swaps,
        elapsed_us = %elapsed.as_micros(),
        "Sorted catalog by price"
    );

    SortReport { elapsed, stats }
}
