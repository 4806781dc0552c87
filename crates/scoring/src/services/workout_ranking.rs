//! Per-workout ranking of raw score submissions.

use tracing::debug;

use crate::dto::WorkoutRankEntry;
use crate::models::{RawScore, ScoreType};
use crate::services::comparator::compare;
use crate::services::score_value::comparable_value;

/// Ranks every submission for one workout within one division.
///
/// The caller supplies the scores already restricted to a single workout
/// and division. Every submission receives a rank: an unparseable score
/// parses to the sentinel extremum and sinks to the bottom rather than
/// being dropped. Ranks are dense `1..N` and points equal rank, with no
/// tie compression — equal values are separated by submission time, and
/// genuinely simultaneous ties by the stable sort's input order.
pub fn rank_workout(scores: &[RawScore], score_type: ScoreType) -> Vec<WorkoutRankEntry> {
    let mut parsed: Vec<(&RawScore, f64)> = scores
        .iter()
        .map(|score| (score, comparable_value(score_type, &score.score_value_text)))
        .collect();

    // sort_by is stable: exact ties keep their input order on every pass
    parsed.sort_by(|(score_a, value_a), (score_b, value_b)| {
        compare(
            score_type,
            *value_a,
            score_a.submitted_at,
            *value_b,
            score_b.submitted_at,
        )
    });

    debug!(scores = parsed.len(), ?score_type, "ranked workout");

    parsed
        .into_iter()
        .enumerate()
        .map(|(index, (score, _))| {
            let rank = index as u32 + 1;
            WorkoutRankEntry {
                score: score.clone(),
                rank,
                points: rank,
            }
        })
        .collect()
}
