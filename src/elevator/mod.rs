pub mod controller;
pub mod direction;
pub mod queues;
pub mod selector;
#[cfg(test)]
mod controller_tests;

pub use controller::ElevatorController;
pub use queues::{CallQueue, RequestQueue};
pub use selector::NextStop;
