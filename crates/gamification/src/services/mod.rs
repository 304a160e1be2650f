pub mod leaderboard;
pub mod level_curve;
pub mod personal_stats;
pub mod progress;
pub mod student_processor;
