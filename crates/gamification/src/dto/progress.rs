use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LevelProgress {
    pub level: u32,
    /// Points earned since the current level's threshold.
    pub earned_in_level: i64,
    /// Width of the current level band. Can be zero or negative near the
    /// level 10/11 boundary.
    pub needed_for_level: i64,
    /// Always within `0.0..=100.0`.
    pub percent: f64,
}
