mod validator;

pub use validator::{SnapshotValidator, ValidationReport};

use gamification::{GamificationRecord, LeaderboardEntry, ProcessOutcome, RosterEntry, UserStats};

/// The two raw collections the core works on, captured at one point in time.
#[derive(Debug, Clone, Default)]
pub struct Snapshot {
    pub roster: Vec<RosterEntry>,
    pub records: Vec<GamificationRecord>,
}

impl Snapshot {
    pub fn students(&self) -> ProcessOutcome {
        gamification::process(&self.roster, &self.records)
    }

    pub fn leaderboard(&self, class_id: Option<&str>) -> Vec<LeaderboardEntry> {
        match class_id {
            Some(class_id) => {
                gamification::build_class_leaderboard(&self.records, &self.roster, class_id)
            }
            None => gamification::build_leaderboard(&self.records, &self.roster),
        }
    }

    pub fn stats(&self, username: &str) -> UserStats {
        gamification::resolve(&self.records, username)
    }
}
