pub mod dto;
pub mod models;
pub mod normalize;
pub mod services;

pub use dto::{
    Diagnostic, LeaderboardEntry, LevelProgress, Page, PageRequest, ProcessOutcome,
    ProcessedStudentData, UserStats,
};
pub use models::{GamificationRecord, RawField, RosterEntry};
pub use services::leaderboard::{build_class_leaderboard, build_leaderboard, paginate};
pub use services::level_curve::{calculate_level, level_threshold};
pub use services::personal_stats::resolve;
pub use services::progress::progress_to_next_level;
pub use services::student_processor::process;
