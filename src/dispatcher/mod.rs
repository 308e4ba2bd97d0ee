pub mod dispatcher;

pub use dispatcher::drive_to_rest;
pub use dispatcher::Command;
pub use dispatcher::Dispatcher;
