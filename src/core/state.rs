use crate::sim::Job;

// Index into Process Vec
pub type ProcessId = usize;
pub type Ticks = u64;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProcessState {
    // Not yet arrived
    Pending,
    // Arrived and handed to the scheduler
    Ready,
    Running,
    Completed,
}

#[derive(Debug, Clone)]
pub struct Process {
    pub pid: ProcessId,
    pub id: String,
    pub state: ProcessState,
    pub arrival_time: Ticks,
    pub burst_time: Ticks,
    pub remaining_burst_time: Ticks,
    pub start_time: Option<Ticks>,
    pub completion_time: Option<Ticks>,
}

impl Process {
    pub fn is_completed(&self) -> bool {
        self.state == ProcessState::Completed
    }
}

/// The process table and the simulated clock.
#[derive(Debug)]
pub struct SimCtx {
    pub now: Ticks,
    pub processes: Vec<Process>,
    pub current: Option<ProcessId>,
    pub busy_time: Ticks,
    pub idle_time: Ticks,
}

impl SimCtx {
    pub fn new() -> Self {
        Self {
            now: 0,
            processes: Vec::new(),
            current: None,
            busy_time: 0,
            idle_time: 0,
        }
    }

    pub fn create_process(&mut self, job: &Job) -> ProcessId {
        let pid = self.processes.len();
        self.processes.push(Process {
            pid,
            id: job.id.clone(),
            state: ProcessState::Pending,
            arrival_time: job.arrival_time,
            burst_time: job.burst_time,
            remaining_burst_time: job.burst_time,
            start_time: None,
            completion_time: None,
        });
        pid
    }

    pub fn process(&self, pid: ProcessId) -> &Process {
        &self.processes[pid]
    }

    pub fn process_mut(&mut self, pid: ProcessId) -> &mut Process {
        &mut self.processes[pid]
    }

    // Sim::new bounds the horizon, so this cannot overflow
    pub fn advance_time(&mut self, delta: Ticks) {
        self.now += delta;
    }

    pub fn cpu_is_idle(&self) -> bool {
        self.current.is_none()
    }

    pub fn all_completed(&self) -> bool {
        self.processes.iter().all(Process::is_completed)
    }

    pub fn mark_ready(&mut self, pid: ProcessId) {
        let now = self.now;
        let process = self.process_mut(pid);
        debug_assert_eq!(
            process.state,
            ProcessState::Pending,
            "Process {pid} admitted twice"
        );
        debug_assert!(
            process.arrival_time <= now,
            "Process {pid} admitted before its arrival"
        );
        process.state = ProcessState::Ready;
    }

    // Return previous state
    pub fn set_running(&mut self, pid: ProcessId) -> ProcessState {
        debug_assert!(self.cpu_is_idle(), "CPU already running a process");

        let now = self.now;
        self.current = Some(pid);
        let process = self.process_mut(pid);
        let prev_state = process.state;
        debug_assert_eq!(
            prev_state,
            ProcessState::Ready,
            "Process {pid} must be Ready before it runs"
        );
        process.state = ProcessState::Running;
        process.start_time = Some(now);
        prev_state
    }

    pub fn mark_completed(&mut self, pid: ProcessId, completion_time: Ticks) {
        debug_assert_eq!(self.current, Some(pid), "Completing a process not on CPU");

        let process = self.process_mut(pid);
        debug_assert!(
            process.state == ProcessState::Running,
            "Process {pid} must have been running before marked complete"
        );

        process.state = ProcessState::Completed;
        process.remaining_burst_time = 0;
        process.completion_time = Some(completion_time);
        self.current = None;
    }
}

impl Default for SimCtx {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn job(id: &str, arrival_time: Ticks, burst_time: Ticks) -> Job {
        Job {
            id: id.to_string(),
            arrival_time,
            burst_time,
        }
    }

    #[test]
    fn pids_follow_insertion_order() {
        let mut ctx = SimCtx::new();
        assert_eq!(ctx.create_process(&job("A", 3, 1)), 0);
        assert_eq!(ctx.create_process(&job("B", 0, 1)), 1);
        assert_eq!(ctx.process(1).id, "B");
        assert_eq!(ctx.process(0).state, ProcessState::Pending);
    }

    #[test]
    fn lifecycle_ends_completed_with_no_remaining_burst() {
        let mut ctx = SimCtx::new();
        let pid = ctx.create_process(&job("A", 0, 4));

        ctx.mark_ready(pid);
        assert_eq!(ctx.set_running(pid), ProcessState::Ready);
        assert!(!ctx.cpu_is_idle());
        assert_eq!(ctx.process(pid).start_time, Some(0));

        ctx.advance_time(4);
        ctx.mark_completed(pid, ctx.now);

        let process = ctx.process(pid);
        assert!(process.is_completed());
        assert_eq!(process.remaining_burst_time, 0);
        assert_eq!(process.completion_time, Some(4));
        assert!(ctx.cpu_is_idle());
        assert!(ctx.all_completed());
    }
}
