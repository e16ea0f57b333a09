pub mod driver;
pub mod event;
pub mod observer;
pub mod state;

pub use driver::{Dispatch, SchedCore};
pub use event::SchedCoreEvent;
pub use state::{Process, ProcessId, ProcessState, SimCtx, Ticks};
