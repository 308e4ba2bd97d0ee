use crate::shared::{CallStatus, Direction, ElevatorError, StopStatus};

/*
 * Both queues are indexed by floor number. Slot `0` is a sentinel that is
 * never read or written, so the backing vectors hold `n_floors + 1` entries
 * and floor `f` lives at index `f`.
 */

fn check_floor(floor: u8, n_floors: u8) -> Result<usize, ElevatorError> {
    if floor == 0 || floor > n_floors {
        return Err(ElevatorError::FloorOutOfRange { floor, n_floors });
    }
    Ok(floor as usize)
}

// Floors strictly above `floor`, nearest first.
fn floors_above(floor: u8, len: usize) -> impl Iterator<Item = usize> {
    (floor as usize + 1)..len
}

// Floors strictly below `floor` down to 1, nearest first.
fn floors_below(floor: u8, len: usize) -> impl Iterator<Item = usize> {
    (1..(floor as usize).min(len)).rev()
}

/// Stop requests placed from inside the car.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestQueue {
    stops: Vec<StopStatus>,
}

impl RequestQueue {
    pub fn new(n_floors: u8) -> RequestQueue {
        RequestQueue {
            stops: vec![StopStatus::None; n_floors as usize + 1],
        }
    }

    pub fn n_floors(&self) -> u8 {
        (self.stops.len() - 1) as u8
    }

    /// Marks `floor` as requested. Returns `false` if it already was.
    pub fn request(&mut self, floor: u8) -> Result<bool, ElevatorError> {
        let index = check_floor(floor, self.n_floors())?;
        if self.stops[index].is_pending() {
            return Ok(false);
        }
        self.stops[index] = StopStatus::Stop;
        Ok(true)
    }

    pub fn status(&self, floor: u8) -> Result<StopStatus, ElevatorError> {
        let index = check_floor(floor, self.n_floors())?;
        Ok(self.stops[index])
    }

    /// Clears the stop at `floor`, returning whether one was pending.
    pub fn clear(&mut self, floor: u8) -> Result<bool, ElevatorError> {
        check_floor(floor, self.n_floors())?;
        Ok(self.clear_reached(floor))
    }

    // Floors outside the queue, including the sentinel, hold no stop.
    pub(crate) fn clear_reached(&mut self, floor: u8) -> bool {
        match self.stops.get_mut(floor as usize) {
            Some(slot) if floor > 0 => {
                let was_pending = slot.is_pending();
                *slot = StopStatus::None;
                was_pending
            }
            _ => false,
        }
    }

    pub fn nearest_above(&self, floor: u8) -> Option<u8> {
        floors_above(floor, self.stops.len())
            .find(|&f| self.stops[f].is_pending())
            .map(|f| f as u8)
    }

    pub fn nearest_below(&self, floor: u8) -> Option<u8> {
        floors_below(floor, self.stops.len())
            .find(|&f| self.stops[f].is_pending())
            .map(|f| f as u8)
    }

    pub fn is_empty(&self) -> bool {
        !self.stops.iter().skip(1).any(|s| s.is_pending())
    }

    pub fn snapshot(&self) -> Vec<StopStatus> {
        self.stops[1..].to_vec()
    }
}

/// Landing calls, one merged status per floor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallQueue {
    calls: Vec<CallStatus>,
}

impl CallQueue {
    pub fn new(n_floors: u8) -> CallQueue {
        CallQueue {
            calls: vec![CallStatus::None; n_floors as usize + 1],
        }
    }

    pub fn n_floors(&self) -> u8 {
        (self.calls.len() - 1) as u8
    }

    /// Merges a call for `direction` into `floor` and returns the new status.
    pub fn call(&mut self, floor: u8, direction: Direction) -> Result<CallStatus, ElevatorError> {
        let index = check_floor(floor, self.n_floors())?;
        let merged = self.calls[index]
            .merge(direction)
            .ok_or(ElevatorError::InvalidCallDirection(direction))?;
        self.calls[index] = merged;
        Ok(merged)
    }

    pub fn status(&self, floor: u8) -> Result<CallStatus, ElevatorError> {
        let index = check_floor(floor, self.n_floors())?;
        Ok(self.calls[index])
    }

    /// Reduces the call at `floor` after the car serviced it travelling in `travel`.
    pub fn service(&mut self, floor: u8, travel: Direction) -> Result<CallStatus, ElevatorError> {
        let index = check_floor(floor, self.n_floors())?;
        self.service_reached(floor, travel);
        Ok(self.calls[index])
    }

    // Returns whether a pending call was reduced. Floors outside the queue hold no call.
    pub(crate) fn service_reached(&mut self, floor: u8, travel: Direction) -> bool {
        match self.calls.get_mut(floor as usize) {
            Some(slot) if floor > 0 => {
                let was_pending = slot.is_pending();
                *slot = slot.reduce(travel);
                was_pending
            }
            _ => false,
        }
    }

    pub fn nearest_above<F>(&self, floor: u8, wanted: F) -> Option<u8>
    where
        F: Fn(CallStatus) -> bool,
    {
        floors_above(floor, self.calls.len())
            .find(|&f| wanted(self.calls[f]))
            .map(|f| f as u8)
    }

    pub fn nearest_below<F>(&self, floor: u8, wanted: F) -> Option<u8>
    where
        F: Fn(CallStatus) -> bool,
    {
        floors_below(floor, self.calls.len())
            .find(|&f| wanted(self.calls[f]))
            .map(|f| f as u8)
    }

    pub fn is_empty(&self) -> bool {
        !self.calls.iter().skip(1).any(|c| c.is_pending())
    }

    pub fn snapshot(&self) -> Vec<CallStatus> {
        self.calls[1..].to_vec()
    }
}
