pub mod config;
pub mod core;
pub mod dispatch;
pub mod error;
pub mod logging;
pub mod scheduler;
pub mod sim;

pub use crate::core::SchedCoreEvent;
pub use error::SimError;
pub use scheduler::Scheduler;
pub use sim::{Job, Schedule, Sim};
