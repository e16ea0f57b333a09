use super::state::{ProcessState, SimCtx};

#[derive(Debug)]
pub struct Observer {
    step: u64,
}

impl Observer {
    pub fn new() -> Self {
        Self { step: 0 }
    }

    pub fn steps(&self) -> u64 {
        self.step
    }

    // Called between steps, when no process may be on the CPU
    pub fn observe(&mut self, ctx: &SimCtx) {
        self.step += 1;

        debug_assert!(
            ctx.current.is_none(),
            "Process {:?} still on CPU after step {}",
            ctx.current,
            self.step
        );
        debug_assert_eq!(
            ctx.busy_time + ctx.idle_time,
            ctx.now,
            "Busy and idle time must account for every tick"
        );

        for process in &ctx.processes {
            let pid = process.pid;
            match process.state {
                ProcessState::Completed => {
                    debug_assert_eq!(
                        process.remaining_burst_time, 0,
                        "Completed process {pid} has burst left"
                    );
                    debug_assert!(
                        process.completion_time.is_some_and(|t| t <= ctx.now),
                        "Completed process {pid} has no past completion time"
                    );
                }
                ProcessState::Ready => {
                    debug_assert!(
                        process.arrival_time <= ctx.now,
                        "Ready process {pid} has not arrived yet"
                    );
                    debug_assert!(
                        process.start_time.is_none(),
                        "Ready process {pid} was already started"
                    );
                }
                ProcessState::Running => {
                    debug_assert!(false, "Process {pid} Running between steps");
                }
                ProcessState::Pending => {}
            }
        }
    }
}

impl Default for Observer {
    fn default() -> Self {
        Self::new()
    }
}
