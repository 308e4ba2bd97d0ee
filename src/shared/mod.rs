pub mod error;
pub mod macros;
pub mod structs;

pub use error::ElevatorError;
pub use structs::CallStatus;
pub use structs::Direction;
pub use structs::ElevatorSnapshot;
pub use structs::StopStatus;
pub use structs::Visit;
