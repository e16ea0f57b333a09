use std::cmp::Ordering;

use keyed_priority_queue::KeyedPriorityQueue;

use super::{DispatchError, ProcessId, Scheduler, SimCtx};
use crate::core::Ticks;

/// Ready-queue key: shortest burst, then earliest arrival, then input order.
#[derive(PartialEq, Eq, Debug, Copy, Clone)]
pub struct BurstKey {
    pub burst: Ticks,
    pub arrival: Ticks,
    pub process: ProcessId,
}

impl BurstKey {
    fn tuple(&self) -> (Ticks, Ticks, ProcessId) {
        (self.burst, self.arrival, self.process)
    }
}

// KeyedPriorityQueue is a max-heap, so the smallest key must compare greatest
impl PartialOrd for BurstKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for BurstKey {
    fn cmp(&self, other: &Self) -> Ordering {
        other.tuple().cmp(&self.tuple())
    }
}

pub struct SjfScheduler {
    ready: KeyedPriorityQueue<ProcessId, BurstKey>,
}

impl Scheduler for SjfScheduler {
    const NAME: &'static str = "SJF";

    fn init(_ctx: &SimCtx) -> Self {
        Self {
            ready: KeyedPriorityQueue::new(),
        }
    }

    fn enqueue(&mut self, ctx: &SimCtx, process: ProcessId) {
        let p = ctx.process(process);
        let key = BurstKey {
            burst: p.remaining_burst_time,
            arrival: p.arrival_time,
            process,
        };
        let prev = self.ready.push(process, key);
        debug_assert!(prev.is_none(), "Process {process} enqueued twice");
    }

    fn dispatch(&mut self, _ctx: &SimCtx) -> Result<ProcessId, DispatchError> {
        self.ready
            .pop()
            .map(|(process, _)| process)
            .ok_or(DispatchError::NoReadyProcess)
    }

    fn exit(&mut self, _ctx: &SimCtx) {
        debug_assert!(self.ready.is_empty(), "SJF queue not drained on exit");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::Job;

    fn key(burst: Ticks, arrival: Ticks, process: ProcessId) -> BurstKey {
        BurstKey {
            burst,
            arrival,
            process,
        }
    }

    #[test]
    fn shorter_burst_ranks_higher() {
        assert!(key(2, 6, 2) > key(3, 6, 1));
    }

    #[test]
    fn ties_fall_back_to_arrival_then_input_order() {
        assert!(key(3, 1, 5) > key(3, 2, 0));
        assert!(key(3, 2, 0) > key(3, 2, 1));
    }

    #[test]
    fn dispatch_pops_shortest_ready_process() {
        let mut ctx = SimCtx::new();
        for (id, arrival, burst) in [("A", 0, 7), ("B", 0, 3), ("C", 0, 3)] {
            ctx.create_process(&Job::new(id, arrival, burst));
        }

        let mut sjf = SjfScheduler::init(&ctx);
        for pid in 0..3 {
            sjf.enqueue(&ctx, pid);
        }

        assert_eq!(sjf.dispatch(&ctx), Ok(1));
        assert_eq!(sjf.dispatch(&ctx), Ok(2));
        assert_eq!(sjf.dispatch(&ctx), Ok(0));
        assert_eq!(sjf.dispatch(&ctx), Err(DispatchError::NoReadyProcess));
    }
}
