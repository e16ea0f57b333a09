pub mod fifo;
pub mod sjf;

use crate::core::state::{ProcessId, SimCtx};
pub use fifo::FifoScheduler;
pub use sjf::SjfScheduler;

#[derive(Debug, PartialEq, Eq)]
pub enum DispatchError {
    NoReadyProcess,
}

/// A non-preemptive scheduling policy.
///
/// The core hands every arrived process to `enqueue` exactly once, in
/// (arrival time, input order) order, and asks `dispatch` for the next process
/// to run whenever the CPU is free. The returned process runs to completion.
pub trait Scheduler {
    /// Name used on the command line to select this policy.
    const NAME: &'static str;

    fn init(ctx: &SimCtx) -> Self;

    fn exit(&mut self, _ctx: &SimCtx) {}

    fn enqueue(&mut self, ctx: &SimCtx, process: ProcessId);

    fn dispatch(&mut self, ctx: &SimCtx) -> Result<ProcessId, DispatchError>;
}
