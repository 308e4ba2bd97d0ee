use crate::elevator::queues::{CallQueue, RequestQueue};
use crate::shared::{CallStatus, Direction};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NextStop {
    pub floor: u8,
    /// The floor was picked for a call in the travel direction, so that call gets reduced on arrival.
    pub serviced_via_call: bool,
}

/**
 * Finds the nearest floor ahead of `floor` in `direction` that needs service.
 *
 * Calls in the travel direction (or `Both`) win over calls in the opposite
 * direction. An opposite call is only used when no same-direction call is
 * ahead at all; the car still stops there, but the call is left pending.
 */
pub fn select_next_stop(
    direction: Direction,
    requests: &RequestQueue,
    calls: &CallQueue,
    floor: u8,
) -> Option<NextStop> {
    match direction {
        Direction::Up => {
            let request = requests.nearest_above(floor);
            let same_direction = calls.nearest_above(floor, |c| c.matches(Direction::Up));
            let call = same_direction.or_else(|| calls.nearest_above(floor, |c| c == CallStatus::Down));
            nearest(request, call, same_direction, std::cmp::min::<u8>)
        }
        Direction::Down => {
            let request = requests.nearest_below(floor);
            let same_direction = calls.nearest_below(floor, |c| c.matches(Direction::Down));
            let call = same_direction.or_else(|| calls.nearest_below(floor, |c| c == CallStatus::Up));
            nearest(request, call, same_direction, std::cmp::max::<u8>)
        }
        Direction::Rest => None,
    }
}

fn nearest(
    request: Option<u8>,
    call: Option<u8>,
    same_direction: Option<u8>,
    closer: fn(u8, u8) -> u8,
) -> Option<NextStop> {
    let floor = match (request, call) {
        (Some(r), Some(c)) => closer(r, c),
        (Some(r), None) => r,
        (None, Some(c)) => c,
        (None, None) => return None,
    };
    Some(NextStop {
        floor,
        serviced_via_call: same_direction == Some(floor),
    })
}
