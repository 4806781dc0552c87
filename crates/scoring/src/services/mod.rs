pub mod best_result;
pub mod comparator;
pub mod leaderboard;
pub mod score_value;
pub mod workout_ranking;
