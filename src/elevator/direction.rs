use crate::elevator::queues::{CallQueue, RequestQueue};
use crate::shared::{CallStatus, Direction};

/// Any stop or call strictly above `floor`.
pub fn has_work_above(requests: &RequestQueue, calls: &CallQueue, floor: u8) -> bool {
    requests.nearest_above(floor).is_some()
        || calls.nearest_above(floor, CallStatus::is_pending).is_some()
}

/// Any stop or call strictly below `floor`.
pub fn has_work_below(requests: &RequestQueue, calls: &CallQueue, floor: u8) -> bool {
    requests.nearest_below(floor).is_some()
        || calls.nearest_below(floor, CallStatus::is_pending).is_some()
}

/**
 * Keeps `current` while there is work ahead in it, otherwise collapses to
 * `Direction::Rest`. Never flips up to down or back.
 */
pub fn settle_direction(
    current: Direction,
    requests: &RequestQueue,
    calls: &CallQueue,
    floor: u8,
) -> Direction {
    match current {
        Direction::Up if has_work_above(requests, calls, floor) => Direction::Up,
        Direction::Down if has_work_below(requests, calls, floor) => Direction::Down,
        _ => Direction::Rest,
    }
}

/**
 * Chooses the direction for the next advance.
 *
 * A moving car keeps sweeping while work remains ahead. Once it rests it
 * prefers going up over going down.
 */
pub fn resolve_direction(
    current: Direction,
    requests: &RequestQueue,
    calls: &CallQueue,
    floor: u8,
) -> Direction {
    match settle_direction(current, requests, calls, floor) {
        Direction::Rest => {
            if has_work_above(requests, calls, floor) {
                Direction::Up
            } else if has_work_below(requests, calls, floor) {
                Direction::Down
            } else {
                Direction::Rest
            }
        }
        moving => moving,
    }
}
