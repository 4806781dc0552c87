pub mod benchmark;
pub mod score;
pub mod workout;

pub use benchmark::{BenchmarkMeasurement, BenchmarkResult, BenchmarkScoreType};
pub use score::{RawScore, ScoreType};
pub use workout::WorkoutDescriptor;
