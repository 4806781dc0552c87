pub mod dto;
pub mod error;
pub mod models;
pub mod services;

pub use error::{Result, ScoreParseError};
pub use models::{
    BenchmarkMeasurement, BenchmarkResult, BenchmarkScoreType, RawScore, ScoreType,
    WorkoutDescriptor,
};

// Re-export the engine entry points
pub use services::{
    best_result::best_result,
    leaderboard::build_event_leaderboard,
    workout_ranking::rank_workout,
};
