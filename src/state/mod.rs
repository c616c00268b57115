pub mod appliance;
pub mod command;
pub mod event;
pub mod rejection;

pub use appliance::{Appliance, CookerState, Cycle};
pub use command::{Command, Notice};
pub use event::Event;
pub use rejection::Rejection;
