//! Personal-record selection over an athlete's benchmark results.

use crate::models::{BenchmarkResult, BenchmarkScoreType};
use crate::services::comparator::measurement_is_better;

/// Picks the single best of an athlete's results for one benchmark.
///
/// Returns `None` for an empty list. The fold only replaces the running
/// best on a strict improvement, so of two equal results the first in the
/// list wins, and for `Custom` benchmarks (no defined ordering) the first
/// element is returned as-is.
pub fn best_result<'a>(
    results: &'a [BenchmarkResult],
    score_type: BenchmarkScoreType,
) -> Option<&'a BenchmarkResult> {
    let (first, rest) = results.split_first()?;

    let mut best = first;
    for candidate in rest {
        if measurement_is_better(score_type, &candidate.measurement, &best.measurement) {
            best = candidate;
        }
    }

    Some(best)
}
