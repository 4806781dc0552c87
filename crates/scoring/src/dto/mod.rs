pub mod leaderboard;

pub use leaderboard::{EventLeaderboardTable, LeaderboardRow, WodCell, WorkoutRankEntry};
