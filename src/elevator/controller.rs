use crate::config::ElevatorConfig;
use crate::elevator::direction;
use crate::elevator::queues::{CallQueue, RequestQueue};
use crate::elevator::selector;
use crate::shared::{CallStatus, Direction, ElevatorError, ElevatorSnapshot, StopStatus, Visit};
use log::{debug, info};

/**
 * Dispatch logic of a single elevator car.
 *
 * The `ElevatorController` owns the stop requests placed inside the car, the
 * landing calls placed on each floor, the floor the car last stopped at and
 * the direction it is sweeping in. Every call to `visit_next_floor` moves the
 * car to at most one new floor, SCAN style: it keeps going in its current
 * direction while there is work ahead and only turns around once that side is
 * exhausted.
 *
 * # Fields
 * - `current_floor`:   Floor the car last stopped at, starts at 1.
 * - `direction`:       Sweep direction, `Rest` when nothing is pending.
 * - `requests`:        Stop requests from the car panel, direction agnostic.
 * - `calls`:           Landing calls with the direction(s) passengers want to travel.
 *
 * The controller is a plain value with no interior locking. Hosts that share
 * it between threads hand it to a single owner, see `crate::dispatcher`.
 */
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElevatorController {
    current_floor: u8,
    direction: Direction,
    requests: RequestQueue,
    calls: CallQueue,
}

impl ElevatorController {
    pub fn new(n_floors: u8) -> ElevatorController {
        ElevatorController {
            current_floor: 1,
            direction: Direction::Rest,
            requests: RequestQueue::new(n_floors),
            calls: CallQueue::new(n_floors),
        }
    }

    pub fn from_config(config: &ElevatorConfig) -> ElevatorController {
        ElevatorController::new(config.n_floors)
    }

    /// Registers a stop from the car panel. Requesting the same floor twice is a no-op.
    pub fn request_stop(&mut self, floor: u8) -> Result<(), ElevatorError> {
        if self.requests.request(floor)? {
            debug!("stop requested at floor {}", floor);
        }
        Ok(())
    }

    /// Registers a landing call. `direction` must be up or down.
    pub fn call(&mut self, floor: u8, direction: Direction) -> Result<(), ElevatorError> {
        let status = self.calls.call(floor, direction)?;
        debug!("call {} at floor {}, now {:?}", direction, floor, status);
        Ok(())
    }

    /**
     * Advances the car by one stop.
     *
     * Returns `None` without moving when nothing is pending. Before moving on,
     * the car serves its own floor: the stop there, and the call there if it
     * matches the travel direction. A resting car takes any call on its floor.
     *
     * From any state, a drain without new requests ends within
     * `stops + 2 * call directions` advances, counting `Both` as two.
     */
    pub fn visit_next_floor(&mut self) -> Option<Visit> {
        let floor = self.current_floor;
        let travel =
            direction::resolve_direction(self.direction, &self.requests, &self.calls, floor);
        if travel != self.direction {
            debug!("direction {} -> {} at floor {}", self.direction, travel, floor);
        }
        self.direction = travel;

        if let Some(visit) = self.service_current_floor(travel) {
            return Some(visit);
        }

        let next = match selector::select_next_stop(travel, &self.requests, &self.calls, floor) {
            Some(next) => next,
            None => {
                self.direction = Direction::Rest;
                return None;
            }
        };

        self.current_floor = next.floor;
        self.requests.clear_reached(next.floor);
        if next.serviced_via_call {
            self.calls.service_reached(next.floor, travel);
        }
        self.direction =
            direction::settle_direction(travel, &self.requests, &self.calls, next.floor);

        info!(
            "visited floor {} going {} (call serviced: {})",
            next.floor, travel, next.serviced_via_call
        );
        Some(Visit {
            floor: next.floor,
            direction: travel,
            serviced_call: next.serviced_via_call,
        })
    }

    fn service_current_floor(&mut self, travel: Direction) -> Option<Visit> {
        let floor = self.current_floor;
        let stop = self.requests.status(floor).map(StopStatus::is_pending).unwrap_or(false);
        let call = self
            .calls
            .status(floor)
            .map(|c| match travel {
                Direction::Rest => c.is_pending(),
                moving => c.matches(moving),
            })
            .unwrap_or(false);
        if !stop && !call {
            return None;
        }

        self.requests.clear_reached(floor);
        let serviced_call = call && self.calls.service_reached(floor, travel);
        self.direction = direction::settle_direction(travel, &self.requests, &self.calls, floor);

        info!("serviced floor {} in place going {}", floor, travel);
        Some(Visit {
            floor,
            direction: travel,
            serviced_call,
        })
    }

    pub fn n_floors(&self) -> u8 {
        self.requests.n_floors()
    }

    pub fn current_floor(&self) -> u8 {
        self.current_floor
    }

    pub fn current_direction(&self) -> Direction {
        self.direction
    }

    /// Places the car on `floor` without servicing anything there.
    pub fn set_current_floor(&mut self, floor: u8) -> Result<(), ElevatorError> {
        if floor == 0 || floor > self.n_floors() {
            return Err(ElevatorError::FloorOutOfRange {
                floor,
                n_floors: self.n_floors(),
            });
        }
        self.current_floor = floor;
        Ok(())
    }

    pub fn set_current_direction(&mut self, direction: Direction) {
        self.direction = direction;
    }

    pub fn stop_status(&self, floor: u8) -> Result<StopStatus, ElevatorError> {
        self.requests.status(floor)
    }

    pub fn call_status(&self, floor: u8) -> Result<CallStatus, ElevatorError> {
        self.calls.status(floor)
    }

    /// Stop statuses of floors `1..=n_floors`.
    pub fn stops(&self) -> Vec<StopStatus> {
        self.requests.snapshot()
    }

    /// Call statuses of floors `1..=n_floors`.
    pub fn calls(&self) -> Vec<CallStatus> {
        self.calls.snapshot()
    }

    pub fn has_pending_work(&self) -> bool {
        !self.requests.is_empty() || !self.calls.is_empty()
    }

    pub fn is_idle(&self) -> bool {
        self.direction == Direction::Rest && !self.has_pending_work()
    }

    pub fn snapshot(&self) -> ElevatorSnapshot {
        ElevatorSnapshot {
            floor: self.current_floor,
            direction: self.direction,
            stops: self.stops(),
            calls: self.calls(),
        }
    }
}
