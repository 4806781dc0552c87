//! Type-dependent comparison of parsed score values.

use std::cmp::Ordering;

use chrono::{DateTime, Utc};

use crate::models::{BenchmarkMeasurement, BenchmarkScoreType, ScoreType};

/// Best-first total order over parsed score values.
///
/// Polarity follows the score type: times race down, rep counts and loads
/// push up. Equal values fall back to submission time, earliest first.
/// Exact ties (equal value, equal timestamp) compare `Equal`; callers must
/// sort with a stable algorithm so repeated passes over the same snapshot
/// never reorder them.
pub fn compare(
    score_type: ScoreType,
    value_a: f64,
    submitted_a: DateTime<Utc>,
    value_b: f64,
    submitted_b: DateTime<Utc>,
) -> Ordering {
    let primary = if score_type.lower_is_better() {
        value_a.total_cmp(&value_b)
    } else {
        value_b.total_cmp(&value_a)
    };

    primary.then_with(|| submitted_a.cmp(&submitted_b))
}

/// True when score A strictly beats score B under the workout's score type.
pub fn is_better(
    score_type: ScoreType,
    value_a: f64,
    submitted_a: DateTime<Utc>,
    value_b: f64,
    submitted_b: DateTime<Utc>,
) -> bool {
    compare(score_type, value_a, submitted_a, value_b, submitted_b) == Ordering::Less
}

/// True when benchmark measurement A strictly beats B for the benchmark's
/// score type.
///
/// A measurement whose kind does not match the score type counts as worst
/// for that type. For `TimeOrReps`, finishing under the cap (a time) beats
/// any rep count, whatever the numbers; within the time class lower wins,
/// within the reps class higher wins. `Custom` has no defined ordering, so
/// nothing ever beats anything and the first result encountered stands.
pub fn measurement_is_better(
    score_type: BenchmarkScoreType,
    a: &BenchmarkMeasurement,
    b: &BenchmarkMeasurement,
) -> bool {
    match score_type {
        BenchmarkScoreType::Time => match (a.time_seconds(), b.time_seconds()) {
            (Some(ta), Some(tb)) => ta < tb,
            (Some(_), None) => true,
            _ => false,
        },
        BenchmarkScoreType::Reps => match (a.reps(), b.reps()) {
            (Some(ra), Some(rb)) => ra > rb,
            (Some(_), None) => true,
            _ => false,
        },
        BenchmarkScoreType::Weight => match (a.weight(), b.weight()) {
            (Some(wa), Some(wb)) => wa > wb,
            (Some(_), None) => true,
            _ => false,
        },
        BenchmarkScoreType::TimeOrReps => match (a.time_seconds(), b.time_seconds()) {
            (Some(ta), Some(tb)) => ta < tb,
            (Some(_), None) => true,
            (None, Some(_)) => false,
            (None, None) => match (a.reps(), b.reps()) {
                (Some(ra), Some(rb)) => ra > rb,
                (Some(_), None) => true,
                _ => false,
            },
        },
        BenchmarkScoreType::Custom => false,
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use rust_decimal::Decimal;

    use super::*;

    fn at(secs: i64) -> DateTime<Utc> {
        Utc.timestamp_opt(secs, 0).unwrap()
    }

    #[test]
    fn test_time_lower_value_wins() {
        assert!(is_better(ScoreType::Time, 300.0, at(0), 360.0, at(0)));
        assert!(!is_better(ScoreType::Time, 360.0, at(0), 300.0, at(0)));
    }

    #[test]
    fn test_reps_and_weight_higher_value_wins() {
        assert!(is_better(ScoreType::Reps, 120.0, at(0), 100.0, at(0)));
        assert!(is_better(ScoreType::Weight, 110.0, at(0), 100.0, at(0)));
        assert!(!is_better(ScoreType::Reps, 100.0, at(0), 120.0, at(0)));
    }

    #[test]
    fn test_equal_values_earlier_submission_wins() {
        assert!(is_better(ScoreType::Time, 300.0, at(10), 300.0, at(20)));
        assert!(!is_better(ScoreType::Time, 300.0, at(20), 300.0, at(10)));
        assert!(is_better(ScoreType::Reps, 50.0, at(10), 50.0, at(20)));
    }

    #[test]
    fn test_exact_ties_compare_equal() {
        assert_eq!(
            compare(ScoreType::Time, 300.0, at(10), 300.0, at(10)),
            Ordering::Equal
        );
    }

    #[test]
    fn test_sentinel_infinities_order_correctly() {
        // an unparseable time sits below every real time
        assert!(is_better(ScoreType::Time, 5400.0, at(0), f64::INFINITY, at(0)));
        // an unparseable rep count sits below every real count
        assert!(is_better(ScoreType::Reps, 1.0, at(0), f64::NEG_INFINITY, at(0)));
    }

    #[test]
    fn test_time_or_reps_time_beats_any_rep_count() {
        let slow_finish = BenchmarkMeasurement::Time { seconds: 1800 };
        let many_reps = BenchmarkMeasurement::Reps { reps: 500 };
        assert!(measurement_is_better(
            BenchmarkScoreType::TimeOrReps,
            &slow_finish,
            &many_reps
        ));
        assert!(!measurement_is_better(
            BenchmarkScoreType::TimeOrReps,
            &many_reps,
            &slow_finish
        ));
    }

    #[test]
    fn test_time_or_reps_within_each_class() {
        let fast = BenchmarkMeasurement::Time { seconds: 225 };
        let slow = BenchmarkMeasurement::Time { seconds: 250 };
        assert!(measurement_is_better(BenchmarkScoreType::TimeOrReps, &fast, &slow));

        let more = BenchmarkMeasurement::Reps { reps: 120 };
        let fewer = BenchmarkMeasurement::Reps { reps: 100 };
        assert!(measurement_is_better(BenchmarkScoreType::TimeOrReps, &more, &fewer));
    }

    #[test]
    fn test_mismatched_measurement_kind_counts_as_worst() {
        let weight = BenchmarkMeasurement::Weight {
            amount: Decimal::from(110),
            unit: Some("kg".to_string()),
        };
        let reps = BenchmarkMeasurement::Reps { reps: 5 };
        // a reps measurement on a weight benchmark never beats a real weight
        assert!(measurement_is_better(BenchmarkScoreType::Weight, &weight, &reps));
        assert!(!measurement_is_better(BenchmarkScoreType::Weight, &reps, &weight));
    }

    #[test]
    fn test_custom_has_no_ordering() {
        let a = BenchmarkMeasurement::Custom { value: "A".to_string() };
        let b = BenchmarkMeasurement::Custom { value: "B".to_string() };
        assert!(!measurement_is_better(BenchmarkScoreType::Custom, &a, &b));
        assert!(!measurement_is_better(BenchmarkScoreType::Custom, &b, &a));
    }
}
