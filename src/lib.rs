/*
 * Dispatch logic for a single elevator car.
 *
 * `elevator` holds the controller (request queue, call queue, direction
 * resolver and next-stop selector). `dispatcher` runs a controller on its own
 * thread behind crossbeam channels. `config` loads `config.toml`.
 */

/* Modules */
pub mod config;
pub mod dispatcher;
pub mod elevator;
pub mod shared;

pub use elevator::ElevatorController;
pub use shared::{CallStatus, Direction, ElevatorError, ElevatorSnapshot, StopStatus, Visit};
