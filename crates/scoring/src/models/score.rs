use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Scoring scheme of a workout. Decides how the raw score text is parsed
/// and which direction counts as better.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "UPPERCASE")]
pub enum ScoreType {
    Time,
    Reps,
    Weight,
}

impl ScoreType {
    /// Times are raced down, everything else is pushed up.
    pub fn lower_is_better(&self) -> bool {
        matches!(self, Self::Time)
    }
}

/// A score submission as handed over by the persistence layer.
///
/// The engine only ever reads these; the submitting athlete owns the record.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RawScore {
    pub athlete_id: Uuid,
    pub athlete_display_name: String,
    pub workout_id: Uuid,
    pub division_id: Uuid,
    pub score_value_text: String,
    pub submitted_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_polarity_per_score_type() {
        assert!(ScoreType::Time.lower_is_better());
        assert!(!ScoreType::Reps.lower_is_better());
        assert!(!ScoreType::Weight.lower_is_better());
    }

    #[test]
    fn test_score_type_wire_format_is_uppercase() {
        assert_eq!(serde_json::to_string(&ScoreType::Time).unwrap(), "\"TIME\"");
        assert_eq!(
            serde_json::from_str::<ScoreType>("\"WEIGHT\"").unwrap(),
            ScoreType::Weight
        );
    }
}
