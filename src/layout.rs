// File: src/layout.rs
//
// Computes draw blocks for the weekly grid from the active-entry sequence.
// Stateless: every call is a pure function of its input, so the grid is
// recomputed whole on each toggle instead of patched incrementally.
use crate::model::{ScheduleEntry, SessionKind};
use chrono::{NaiveTime, Timelike};

/// Fraction of a day column that blocks may occupy.
pub const AVAILABLE_WIDTH: f32 = 0.8;

/// Number of day columns on the grid (Sunday..Friday).
pub const DAY_COUNT: usize = 6;

/// One rectangle on the weekly grid, in grid units: x in day columns
/// (0.0..6.0), y in fractional hours of the day.
#[derive(Debug, Clone, PartialEq)]
pub struct Block {
    pub day_index: usize,
    pub x_offset: f32,
    pub width: f32,
    pub y_start: f32,
    pub y_end: f32,
    /// Color class of the block, keyed by session kind.
    pub kind: SessionKind,
    /// Kind, group numbers, and source title, one per line.
    pub label: String,
}

/// Lays out the given entries on the six-day grid.
///
/// All entries sharing a day split that day's column evenly, whether or not
/// their time ranges actually overlap. Slot order within a day is the input
/// order, which callers take from `ScheduleStore::active_entries()`.
pub fn layout(entries: &[&ScheduleEntry]) -> Vec<Block> {
    let mut by_day: [Vec<&ScheduleEntry>; DAY_COUNT] = Default::default();
    for &entry in entries {
        by_day[entry.day.index()].push(entry);
    }

    let mut blocks = Vec::with_capacity(entries.len());
    for (day_index, bucket) in by_day.iter().enumerate() {
        if bucket.is_empty() {
            continue;
        }
        let width = AVAILABLE_WIDTH / bucket.len() as f32;
        for (slot, entry) in bucket.iter().enumerate() {
            blocks.push(Block {
                day_index,
                x_offset: day_index as f32 + slot as f32 * width,
                width,
                y_start: fractional_hour(entry.start),
                y_end: fractional_hour(entry.end),
                kind: entry.kind,
                label: format!(
                    "{}\nGroup: {}\n{}",
                    entry.kind.hebrew(),
                    entry.group_numbers.join(", "),
                    entry.source_label
                ),
            });
        }
    }
    blocks
}

/// 09:30 -> 9.5
fn fractional_hour(t: NaiveTime) -> f32 {
    t.hour() as f32 + t.minute() as f32 / 60.0
}
