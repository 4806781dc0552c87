use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::models::{RawScore, WorkoutDescriptor};

/// One ranked submission within a single workout's leaderboard.
///
/// Ranks are 1-based and dense, and placement points equal the rank —
/// golf scoring, so fewer points is better once totalled across workouts.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct WorkoutRankEntry {
    pub score: RawScore,
    pub rank: u32,
    pub points: u32,
}

/// One cell of the event leaderboard: an athlete's outcome in one workout.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct WodCell {
    pub has_entry: bool,
    pub raw_display: String,
    pub rank_in_workout: u32,
    pub points: u32,
}

impl WodCell {
    /// Cell for an athlete with no submission in this workout. Contributes
    /// nothing to the total and is excluded from that workout's ranking.
    pub fn missing() -> Self {
        Self {
            has_entry: false,
            raw_display: String::new(),
            rank_in_workout: 0,
            points: 0,
        }
    }
}

/// One athlete's row of the event leaderboard.
///
/// Cells are keyed by workout id in a `BTreeMap` so serialized output is
/// byte-identical across runs over the same snapshot.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct LeaderboardRow {
    pub athlete_id: Uuid,
    pub athlete_display_name: String,
    pub cells: BTreeMap<Uuid, WodCell>,
    pub total_points: u32,
    pub overall_rank: u32,
}

/// The finished leaderboard for one division of an event, ready for
/// presentation: one column per workout, one row per athlete.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct EventLeaderboardTable {
    pub columns: Vec<WorkoutDescriptor>,
    pub rows: Vec<LeaderboardRow>,
    pub division_id: Uuid,
}
