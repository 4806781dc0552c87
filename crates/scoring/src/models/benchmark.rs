use std::fmt;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Scoring scheme of a benchmark exercise. Overlaps with the workout-level
/// [`super::ScoreType`] but is a distinct enum: benchmarks additionally know
/// capped workouts ("finish under the cap or count reps") and free-form
/// custom scores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum BenchmarkScoreType {
    Time,
    Reps,
    Weight,
    TimeOrReps,
    Custom,
}

/// The measured outcome of one benchmark attempt.
///
/// Tagged by kind rather than a record of all-optional fields, so a
/// weight-typed result carrying only a rep count is unrepresentable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum BenchmarkMeasurement {
    Time { seconds: u32 },
    Reps { reps: u32 },
    Weight { amount: Decimal, unit: Option<String> },
    Custom { value: String },
}

impl BenchmarkMeasurement {
    pub fn time_seconds(&self) -> Option<u32> {
        match self {
            Self::Time { seconds } => Some(*seconds),
            _ => None,
        }
    }

    pub fn reps(&self) -> Option<u32> {
        match self {
            Self::Reps { reps } => Some(*reps),
            _ => None,
        }
    }

    pub fn weight(&self) -> Option<Decimal> {
        match self {
            Self::Weight { amount, .. } => Some(*amount),
            _ => None,
        }
    }
}

impl fmt::Display for BenchmarkMeasurement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Time { seconds } => {
                let hours = seconds / 3600;
                let minutes = (seconds % 3600) / 60;
                let secs = seconds % 60;
                if hours > 0 {
                    write!(f, "{hours}:{minutes:02}:{secs:02}")
                } else {
                    write!(f, "{minutes}:{secs:02}")
                }
            }
            Self::Reps { reps } => write!(f, "{reps} reps"),
            Self::Weight { amount, unit } => match unit {
                Some(unit) => write!(f, "{amount} {unit}"),
                None => write!(f, "{amount}"),
            },
            Self::Custom { value } => f.write_str(value),
        }
    }
}

/// One recorded benchmark attempt of an athlete. Several may exist per
/// athlete and benchmark; the best one is computed on demand, never stored.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct BenchmarkResult {
    pub athlete_id: Uuid,
    pub benchmark_id: Uuid,
    pub measurement: BenchmarkMeasurement,
    pub performed_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_time_under_an_hour() {
        let measurement = BenchmarkMeasurement::Time { seconds: 225 };
        assert_eq!(measurement.to_string(), "3:45");
    }

    #[test]
    fn test_display_time_with_hours() {
        let measurement = BenchmarkMeasurement::Time { seconds: 3725 };
        assert_eq!(measurement.to_string(), "1:02:05");
    }

    #[test]
    fn test_display_reps_and_weight() {
        let reps = BenchmarkMeasurement::Reps { reps: 120 };
        assert_eq!(reps.to_string(), "120 reps");

        let weight = BenchmarkMeasurement::Weight {
            amount: Decimal::new(1105, 1),
            unit: Some("kg".to_string()),
        };
        assert_eq!(weight.to_string(), "110.5 kg");
    }

    #[test]
    fn test_accessors_return_none_across_kinds() {
        let reps = BenchmarkMeasurement::Reps { reps: 21 };
        assert_eq!(reps.time_seconds(), None);
        assert_eq!(reps.weight(), None);
        assert_eq!(reps.reps(), Some(21));
    }
}
