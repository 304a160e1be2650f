use crate::dto::LevelProgress;

use super::level_curve::{calculate_level, level_threshold};

/// Progress within the current level, for a 0-100 progress bar.
///
/// `percent` is clamped so a zero-width or inverted band near the level
/// 10/11 boundary still renders.
pub fn progress_to_next_level(points: u64) -> LevelProgress {
    let current_level = calculate_level(points);
    let current_floor = level_threshold(current_level);
    let next_floor = level_threshold(current_level.saturating_add(1));

    let earned_in_level = signed(points) - signed(current_floor);
    let needed_for_level = signed(next_floor) - signed(current_floor);

    let percent = if needed_for_level > 0 {
        (earned_in_level as f64 / needed_for_level as f64 * 100.0).clamp(0.0, 100.0)
    } else {
        100.0
    };

    LevelProgress {
        level: current_level,
        earned_in_level,
        needed_for_level,
        percent,
    }
}

fn signed(value: u64) -> i64 {
    i64::try_from(value).unwrap_or(i64::MAX)
}
