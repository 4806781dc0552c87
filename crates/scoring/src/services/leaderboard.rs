//! Cross-workout aggregation into an event leaderboard.

use std::cmp::Ordering;
use std::collections::{BTreeMap, HashSet};

use tracing::debug;
use uuid::Uuid;

use crate::dto::{EventLeaderboardTable, LeaderboardRow, WodCell, WorkoutRankEntry};
use crate::models::{RawScore, WorkoutDescriptor};
use crate::services::workout_ranking::rank_workout;

/// Rank an athlete counts as holding in a workout they never entered, for
/// the cascading tie-break only. Kept at 999 for compatibility with the
/// historical leaderboards this engine replaces.
const MISSING_ENTRY_TIEBREAK_RANK: u32 = 999;

/// Builds the leaderboard table for one division of an event.
///
/// Each workout is ranked independently, placement points are summed per
/// athlete (golf scoring, lower total wins), and equal totals are broken
/// by walking the workout list in its defined order and comparing the two
/// athletes' ranks workout by workout. The whole computation is a pure
/// projection of the score snapshot and is recomputed from scratch on
/// every call.
pub fn build_event_leaderboard(
    workouts: &[WorkoutDescriptor],
    scores: &[RawScore],
    division_id: Uuid,
) -> EventLeaderboardTable {
    let division_scores: Vec<&RawScore> = scores
        .iter()
        .filter(|score| score.division_id == division_id)
        .collect();

    // workouts are mutually independent; rank each on its own
    let rankings: Vec<Vec<WorkoutRankEntry>> = workouts
        .iter()
        .map(|workout| {
            let workout_scores: Vec<RawScore> = division_scores
                .iter()
                .filter(|score| score.workout_id == workout.workout_id)
                .map(|score| (*score).clone())
                .collect();
            rank_workout(&workout_scores, workout.score_type)
        })
        .collect();

    // distinct athletes in first-appearance order keeps the build deterministic
    let mut seen = HashSet::new();
    let athletes: Vec<(Uuid, String)> = division_scores
        .iter()
        .filter(|score| seen.insert(score.athlete_id))
        .map(|score| (score.athlete_id, score.athlete_display_name.clone()))
        .collect();

    let mut rows: Vec<LeaderboardRow> = athletes
        .into_iter()
        .map(|(athlete_id, athlete_display_name)| {
            let mut cells = BTreeMap::new();
            let mut total_points = 0;

            for (workout, ranking) in workouts.iter().zip(&rankings) {
                let cell = ranking
                    .iter()
                    .find(|entry| entry.score.athlete_id == athlete_id)
                    .map(|entry| WodCell {
                        has_entry: true,
                        raw_display: entry.score.score_value_text.trim().to_string(),
                        rank_in_workout: entry.rank,
                        points: entry.points,
                    })
                    .unwrap_or_else(WodCell::missing);

                total_points += cell.points;
                cells.insert(workout.workout_id, cell);
            }

            LeaderboardRow {
                athlete_id,
                athlete_display_name,
                cells,
                total_points,
                overall_rank: 0,
            }
        })
        .collect();

    rows.sort_by(|a, b| {
        a.total_points
            .cmp(&b.total_points)
            .then_with(|| cascade_by_workout_rank(a, b, workouts))
    });

    for (index, row) in rows.iter_mut().enumerate() {
        row.overall_rank = index as u32 + 1;
    }

    debug!(
        %division_id,
        workouts = workouts.len(),
        athletes = rows.len(),
        "built event leaderboard"
    );

    EventLeaderboardTable {
        columns: workouts.to_vec(),
        rows,
        division_id,
    }
}

/// Walks the workout list in its defined order; the first workout where the
/// two athletes' ranks differ decides.
fn cascade_by_workout_rank(
    a: &LeaderboardRow,
    b: &LeaderboardRow,
    workouts: &[WorkoutDescriptor],
) -> Ordering {
    for workout in workouts {
        let ordering = tiebreak_rank(a, workout.workout_id).cmp(&tiebreak_rank(b, workout.workout_id));
        if ordering != Ordering::Equal {
            return ordering;
        }
    }
    Ordering::Equal
}

fn tiebreak_rank(row: &LeaderboardRow, workout_id: Uuid) -> u32 {
    match row.cells.get(&workout_id) {
        Some(cell) if cell.has_entry => cell.rank_in_workout,
        _ => MISSING_ENTRY_TIEBREAK_RANK,
    }
}
