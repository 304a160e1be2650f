use serde::Serialize;

/// A single user's standing.
///
/// `rank` is 1-based. A rank of 0 means the user has no record at all.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserStats {
    pub points: u64,
    pub level: u32,
    pub badges: Vec<String>,
    pub rank: usize,
}

impl UserStats {
    pub fn not_participating() -> Self {
        Self {
            points: 0,
            level: 1,
            badges: Vec::new(),
            rank: 0,
        }
    }

    pub fn is_participating(&self) -> bool {
        self.rank != 0
    }
}
