/***************************************/
/*        3rd party libraries          */
/***************************************/
use serde::Deserialize;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/***************************************/
/*           Local modules             */
/***************************************/
use crate::shared::ElevatorError;

/***************************************/
/*       Public data structures        */
/***************************************/
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    #[default]
    Rest,
    Up,
    Down,
}

impl Direction {
    /// Up and down swap, rest stays rest.
    pub fn opposite(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Rest => Direction::Rest,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Rest => "rest",
            Direction::Up => "up",
            Direction::Down => "down",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Direction {
    type Err = ElevatorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "rest" => Ok(Direction::Rest),
            "up" => Ok(Direction::Up),
            "down" => Ok(Direction::Down),
            other => Err(ElevatorError::UnknownDirection(other.to_string())),
        }
    }
}

/// Whether a passenger inside the car has asked for a floor.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum StopStatus {
    #[default]
    None,
    Stop,
}

impl StopStatus {
    pub fn is_pending(self) -> bool {
        self == StopStatus::Stop
    }
}

/**
 * Landing call state of a single floor.
 *
 * `Both` only exists as the merge of an up and a down call on the same
 * floor, see `merge`. Servicing a floor reduces the status with `reduce`.
 */
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum CallStatus {
    #[default]
    None,
    Up,
    Down,
    Both,
}

impl CallStatus {
    pub fn is_pending(self) -> bool {
        self != CallStatus::None
    }

    /// True if the call wants to travel in `direction`.
    pub fn matches(self, direction: Direction) -> bool {
        match (self, direction) {
            (CallStatus::Both, Direction::Up | Direction::Down) => true,
            (CallStatus::Up, Direction::Up) => true,
            (CallStatus::Down, Direction::Down) => true,
            _ => false,
        }
    }

    /// Adds a landing call for `direction`. Returns `None` for `Direction::Rest`.
    pub fn merge(self, direction: Direction) -> Option<CallStatus> {
        let requested = match direction {
            Direction::Up => CallStatus::Up,
            Direction::Down => CallStatus::Down,
            Direction::Rest => return None,
        };
        let merged = match self {
            CallStatus::None => requested,
            current if current == requested => current,
            _ => CallStatus::Both,
        };
        Some(merged)
    }

    /// Status left after the car serviced this floor while travelling in `travel`.
    pub fn reduce(self, travel: Direction) -> CallStatus {
        match (self, travel) {
            (CallStatus::Both, Direction::Up) => CallStatus::Down,
            (CallStatus::Both, Direction::Down) => CallStatus::Up,
            _ => CallStatus::None,
        }
    }
}

/// Outcome of a single advance of the car.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Visit {
    pub floor: u8,
    pub direction: Direction,
    #[serde(rename = "servicedCall")]
    pub serviced_call: bool,
}

/// Read-only copy of the controller state. `stops[i]` and `calls[i]` belong to floor `i + 1`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ElevatorSnapshot {
    pub floor: u8,
    pub direction: Direction,
    pub stops: Vec<StopStatus>,
    pub calls: Vec<CallStatus>,
}
