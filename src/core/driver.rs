use super::{
    event::SchedCoreEvent,
    observer::Observer,
    state::{ProcessId, ProcessState, SimCtx, Ticks},
};
use crate::scheduler::{DispatchError, Scheduler};
use tracing::{debug, trace};

/// One uninterrupted run of a process on the CPU.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dispatch {
    pub process: ProcessId,
    pub start: Ticks,
    pub finish: Ticks,
}

pub struct SchedCore<S: Scheduler> {
    pub ctx: SimCtx,
    pub scheduler: S,
    observer: Observer,
    events: Vec<SchedCoreEvent>,
}

impl<S: Scheduler> SchedCore<S> {
    pub fn new(ctx: SimCtx) -> Self {
        let scheduler = S::init(&ctx);
        Self {
            ctx,
            scheduler,
            observer: Observer::new(),
            events: Vec::new(),
        }
    }

    pub fn wake_process(&mut self, process: ProcessId) {
        self.ctx.mark_ready(process);
        self.events.push(SchedCoreEvent::ProcessStateChange {
            process,
            from: ProcessState::Pending,
            to: ProcessState::Ready,
            at: self.ctx.now,
        });
        trace!(pid = process, now = self.ctx.now, "enqueue");
        self.scheduler.enqueue(&self.ctx, process);
    }

    // Ask the policy for the next process and run it to completion.
    // None when nothing is ready.
    pub fn dispatch_next(&mut self) -> Option<Dispatch> {
        let process = match self.scheduler.dispatch(&self.ctx) {
            Ok(process) => process,
            Err(DispatchError::NoReadyProcess) => return None,
        };

        let start = self.ctx.now;
        let from = self.ctx.set_running(process);
        self.events.push(SchedCoreEvent::ProcessStateChange {
            process,
            from,
            to: ProcessState::Running,
            at: start,
        });
        self.events.push(SchedCoreEvent::CpuCurrentChange {
            from: None,
            to: Some(process),
            at: start,
        });

        // Non-preemptive: the whole remaining burst is consumed in one go
        let burst = self.ctx.process(process).remaining_burst_time;
        self.ctx.advance_time(burst);
        self.ctx.busy_time += burst;
        let finish = self.ctx.now;

        self.ctx.mark_completed(process, finish);
        self.events.push(SchedCoreEvent::ProcessStateChange {
            process,
            from: ProcessState::Running,
            to: ProcessState::Completed,
            at: finish,
        });
        self.events.push(SchedCoreEvent::CpuCurrentChange {
            from: Some(process),
            to: None,
            at: finish,
        });

        debug!(
            policy = S::NAME,
            pid = process,
            id = %self.ctx.process(process).id,
            start,
            finish,
            "ran to completion"
        );

        self.observer.observe(&self.ctx);
        Some(Dispatch {
            process,
            start,
            finish,
        })
    }

    pub fn idle_until(&mut self, until: Ticks) {
        debug_assert!(self.ctx.cpu_is_idle(), "Idling with a process on CPU");
        let from = self.ctx.now;
        if until <= from {
            return;
        }

        self.ctx.advance_time(until - from);
        self.ctx.idle_time += until - from;
        self.events
            .push(SchedCoreEvent::CpuIdle { from, to: until });
        debug!(from, to = until, "cpu idle");

        self.observer.observe(&self.ctx);
    }

    pub fn finish(&mut self) {
        self.scheduler.exit(&self.ctx);
    }

    pub fn take_events(&mut self) -> Vec<SchedCoreEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn now(&self) -> Ticks {
        self.ctx.now
    }

    pub fn observer(&self) -> &Observer {
        &self.observer
    }
}
