use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use super::score::ScoreType;

/// One workout of an event, as listed by the persistence layer.
///
/// The order of the workout list is significant: it is both the column
/// order of the leaderboard table and the walk order of the cascading
/// tie-break between athletes on equal total points.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct WorkoutDescriptor {
    pub workout_id: Uuid,
    pub name: String,
    pub score_type: ScoreType,
    pub unit: Option<String>,
}
