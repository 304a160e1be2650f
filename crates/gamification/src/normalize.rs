//! Parsing boundary for loosely-typed gamification columns.
//!
//! Every default substitution the core makes lives here. All functions are
//! total: malformed input degrades to a safe value, it never fails.

use crate::models::RawField;

/// Points as a non-negative integer. Missing, unparseable or negative cells become 0.
pub fn parse_points(raw: Option<&RawField>) -> u64 {
    raw.and_then(RawField::as_integer)
        .map(|points| points.max(0) as u64)
        .unwrap_or(0)
}

/// Stored level as an integer >= 1. Missing, unparseable or sub-1 cells become 1.
pub fn parse_level(raw: Option<&RawField>) -> u32 {
    raw.and_then(RawField::as_integer)
        .map(|level| level.clamp(1, i64::from(u32::MAX)) as u32)
        .unwrap_or(1)
}

/// Splits comma-delimited text into trimmed, non-empty entries.
///
/// Order and duplicates are preserved.
pub fn split_list(raw: Option<&str>) -> Vec<String> {
    raw.map(|text| {
        text.split(',')
            .map(str::trim)
            .filter(|entry| !entry.is_empty())
            .map(str::to_string)
            .collect()
    })
    .unwrap_or_default()
}

/// A stored level can raise the displayed level but never lower it below
/// what the points earn.
pub fn reconcile_level(calculated: u32, stored: u32) -> u32 {
    calculated.max(stored)
}
