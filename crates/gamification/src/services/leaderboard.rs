use crate::dto::{LeaderboardEntry, Page, PageRequest};
use crate::models::{GamificationRecord, RosterEntry};
use crate::normalize::{parse_level, parse_points, reconcile_level, split_list};

use super::level_curve::calculate_level;

/// Ranks every record that names a student and carries a points cell.
///
/// Full names come from the first roster row with the same username, falling
/// back to the username itself. Entries are sorted by points descending with a
/// stable sort, so ties keep their input order.
pub fn build_leaderboard(
    records: &[GamificationRecord],
    roster: &[RosterEntry],
) -> Vec<LeaderboardEntry> {
    rank(records.iter(), roster.iter())
}

/// [`build_leaderboard`] restricted to one class: both inputs are filtered
/// on `class_id` first.
pub fn build_class_leaderboard(
    records: &[GamificationRecord],
    roster: &[RosterEntry],
    class_id: &str,
) -> Vec<LeaderboardEntry> {
    rank(
        records
            .iter()
            .filter(|record| record.class_id() == Some(class_id)),
        roster
            .iter()
            .filter(|entry| entry.class_id() == Some(class_id)),
    )
}

fn rank<'a, R, S>(records: R, roster: S) -> Vec<LeaderboardEntry>
where
    R: Iterator<Item = &'a GamificationRecord>,
    S: Iterator<Item = &'a RosterEntry> + Clone,
{
    let mut entries: Vec<LeaderboardEntry> = records
        .filter_map(|record| {
            let username = record.username()?;
            let raw_points = record.points.as_ref()?;

            let full_name = roster
                .clone()
                .find(|entry| entry.username == username)
                .map(|entry| entry.display_name().to_string())
                .unwrap_or_else(|| username.to_string());

            let points = parse_points(Some(raw_points));
            let stored_level = parse_level(record.level.as_ref());
            let level = reconcile_level(calculate_level(points), stored_level);

            Some(LeaderboardEntry {
                username: username.to_string(),
                full_name,
                points,
                level,
                badges: split_list(record.badges.as_deref()).len(),
            })
        })
        .collect();

    entries.sort_by(|a, b| b.points.cmp(&a.points));
    entries
}

/// One page of a ranked leaderboard.
pub fn paginate(entries: &[LeaderboardEntry], request: PageRequest) -> Page<LeaderboardEntry> {
    Page::slice(entries, request)
}
