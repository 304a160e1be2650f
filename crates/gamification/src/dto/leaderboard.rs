use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardEntry {
    pub username: String,
    pub full_name: String,
    pub points: u64,
    pub level: u32,
    /// Number of badges, not their names.
    pub badges: usize,
}
