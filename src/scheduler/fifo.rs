use std::collections::VecDeque;

use super::{DispatchError, ProcessId, Scheduler, SimCtx};

pub struct FifoScheduler {
    ready: VecDeque<ProcessId>,
}

impl Scheduler for FifoScheduler {
    const NAME: &'static str = "FIFO";

    fn init(ctx: &SimCtx) -> Self {
        Self {
            ready: VecDeque::with_capacity(ctx.processes.len()),
        }
    }

    // Arrivals come in (arrival, input order), so the back of the queue is
    // always the latest arrival
    fn enqueue(&mut self, ctx: &SimCtx, process: ProcessId) {
        debug_assert!(
            self.ready
                .back()
                .is_none_or(|&last| ctx.process(last).arrival_time
                    <= ctx.process(process).arrival_time),
            "Process {process} enqueued out of arrival order"
        );
        self.ready.push_back(process);
    }

    fn dispatch(&mut self, _ctx: &SimCtx) -> Result<ProcessId, DispatchError> {
        self.ready.pop_front().ok_or(DispatchError::NoReadyProcess)
    }

    fn exit(&mut self, _ctx: &SimCtx) {
        debug_assert!(self.ready.is_empty(), "FIFO queue not drained on exit");
    }
}
