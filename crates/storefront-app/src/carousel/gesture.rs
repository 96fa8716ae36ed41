//! Drag/swipe interpretation

use super::Direction;

/// Default drag threshold, in pointer units
pub const DEFAULT_DRAG_THRESHOLD: u32 = 50;

/// Decide whether a horizontal drag from `start_x` to `end_x` navigates
///
/// Movement beyond `threshold` from right to left (`start_x > end_x`) moves
/// forward; beyond it in the other direction moves backward. Anything at or
/// below the threshold is a click, not a swipe.
pub fn interpret_drag(start_x: i32, end_x: i32, threshold: u32) -> Option<Direction> {
    if start_x.abs_diff(end_x) <= threshold {
        return None;
    }
    if start_x > end_x {
        Some(Direction::Forward)
    } else {
        Some(Direction::Backward)
    }
}
