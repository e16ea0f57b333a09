use crate::core::{ProcessId, ProcessState, Ticks};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SchedCoreEvent {
    ProcessStateChange {
        process: ProcessId,
        from: ProcessState,
        to: ProcessState,
        at: Ticks,
    },
    CpuCurrentChange {
        from: Option<ProcessId>,
        to: Option<ProcessId>,
        at: Ticks,
    },
    // Nothing ready; clock jumped to the next arrival
    CpuIdle {
        from: Ticks,
        to: Ticks,
    },
}
