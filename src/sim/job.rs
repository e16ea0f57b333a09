use crate::core::state::Ticks;

/// Input descriptor for one process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Job {
    pub id: String,
    pub arrival_time: Ticks,
    pub burst_time: Ticks,
}

impl Job {
    pub fn new(id: impl Into<String>, arrival_time: Ticks, burst_time: Ticks) -> Self {
        Self {
            id: id.into(),
            arrival_time,
            burst_time,
        }
    }
}

/// What happened to one process during a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutionRecord {
    pub id: String,
    pub arrival_time: Ticks,
    pub burst_time: Ticks,
    pub start_time: Ticks,
    pub finish_time: Ticks,
}

impl ExecutionRecord {
    pub fn turnaround(&self) -> Ticks {
        self.finish_time - self.arrival_time
    }

    pub fn waiting(&self) -> Ticks {
        self.turnaround() - self.burst_time
    }

    // Time to first run; equals waiting for non-preemptive policies
    pub fn response(&self) -> Ticks {
        self.start_time - self.arrival_time
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn metrics_derive_from_times() {
        let record = ExecutionRecord {
            id: "P3".into(),
            arrival_time: 6,
            burst_time: 2,
            start_time: 9,
            finish_time: 11,
        };
        assert_eq!(record.turnaround(), 5);
        assert_eq!(record.waiting(), 3);
        assert_eq!(record.response(), 3);
    }
}
