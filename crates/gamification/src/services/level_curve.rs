/// Minimum points for levels 1 through 10.
const LEVEL_THRESHOLDS: [u64; 10] = [0, 100, 300, 600, 1000, 1500, 2100, 2800, 3600, 4500];

/// Points at which the open-ended part of the curve starts.
const OPEN_ENDED_START: u64 = 5500;

/// Points per level past [`OPEN_ENDED_START`].
const POINTS_PER_OPEN_LEVEL: u64 = 1000;

const TABLE_TOP_LEVEL: u32 = LEVEL_THRESHOLDS.len() as u32;

/// Maps accumulated points to a level >= 1.
///
/// Levels 1-10 follow the threshold table; from 5500 points on the level is
/// `10 + (points - 5500) / 1000`. Note that 5500 itself is still level 10
/// even though [`level_threshold`] places level 11 at 5500.
pub fn calculate_level(points: u64) -> u32 {
    if points >= OPEN_ENDED_START {
        let extra = (points - OPEN_ENDED_START) / POINTS_PER_OPEN_LEVEL;
        return TABLE_TOP_LEVEL.saturating_add(u32::try_from(extra).unwrap_or(u32::MAX));
    }

    LEVEL_THRESHOLDS
        .iter()
        .rposition(|&threshold| points >= threshold)
        .map(|idx| idx as u32 + 1)
        .unwrap_or(1)
}

/// Minimum points required to reach `level`. Levels below 1 are treated as 1.
pub fn level_threshold(level: u32) -> u64 {
    match level {
        0 | 1 => 0,
        l if l <= TABLE_TOP_LEVEL => LEVEL_THRESHOLDS[(l - 1) as usize],
        l => {
            let extra = u64::from(l - TABLE_TOP_LEVEL - 1);
            OPEN_ENDED_START.saturating_add(extra.saturating_mul(POINTS_PER_OPEN_LEVEL))
        }
    }
}
