use crate::dto::UserStats;
use crate::models::GamificationRecord;
use crate::normalize::{parse_level, parse_points, reconcile_level, split_list};

use super::level_curve::calculate_level;

/// Resolves one user's points, level, badges and rank across all records.
///
/// A user without any record gets [`UserStats::not_participating`]. A user
/// whose record is not rankable (no points cell) is placed one past the end
/// of the ranking.
pub fn resolve(records: &[GamificationRecord], username: &str) -> UserStats {
    let Some(record) = records
        .iter()
        .find(|record| record.username() == Some(username))
    else {
        return UserStats::not_participating();
    };

    let points = parse_points(record.points.as_ref());
    let level = reconcile_level(calculate_level(points), parse_level(record.level.as_ref()));

    let mut ranked: Vec<(&str, u64)> = records
        .iter()
        .filter_map(|record| {
            let name = record.username()?;
            let raw_points = record.points.as_ref()?;
            Some((name, parse_points(Some(raw_points))))
        })
        .collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1));

    let rank = ranked
        .iter()
        .position(|(name, _)| *name == username)
        .map(|idx| idx + 1)
        .unwrap_or(ranked.len() + 1);

    UserStats {
        points,
        level,
        badges: split_list(record.badges.as_deref()),
        rank,
    }
}
