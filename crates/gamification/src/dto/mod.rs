pub mod leaderboard;
pub mod page;
pub mod progress;
pub mod stats;
pub mod student;

pub use leaderboard::LeaderboardEntry;
pub use page::{Page, PageRequest};
pub use progress::LevelProgress;
pub use stats::UserStats;
pub use student::{Diagnostic, ProcessOutcome, ProcessedStudentData};
