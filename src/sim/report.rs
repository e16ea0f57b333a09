use std::fmt;

use average::{Estimate, Mean};

use super::job::ExecutionRecord;
use crate::core::state::Ticks;

/// Half-open span `[from, to)` with nothing ready to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IdleInterval {
    pub from: Ticks,
    pub to: Ticks,
}

impl IdleInterval {
    pub fn len(&self) -> Ticks {
        self.to - self.from
    }

    pub fn is_empty(&self) -> bool {
        self.from == self.to
    }
}

/// Outcome of one simulation run. Records are in execution order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schedule {
    pub policy: &'static str,
    pub records: Vec<ExecutionRecord>,
    pub idle: Vec<IdleInterval>,
    pub end_time: Ticks,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    pub avg_waiting: f64,
    pub avg_turnaround: f64,
    pub avg_response: f64,
    pub longest_wait: Ticks,
    pub total_burst: Ticks,
    pub total_idle: Ticks,
    pub makespan: Ticks,
    pub utilization: f64,
}

impl Schedule {
    pub fn record(&self, id: &str) -> Option<&ExecutionRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    pub fn execution_order(&self) -> Vec<&str> {
        self.records.iter().map(|r| r.id.as_str()).collect()
    }

    pub fn total_idle(&self) -> Ticks {
        self.idle.iter().map(IdleInterval::len).sum()
    }

    pub fn summary(&self) -> Summary {
        let total_burst: Ticks = self.records.iter().map(|r| r.burst_time).sum();
        let utilization = if self.end_time == 0 {
            0.0
        } else {
            total_burst as f64 / self.end_time as f64
        };

        Summary {
            avg_waiting: avg(self.records.iter().map(|r| r.waiting() as f64)),
            avg_turnaround: avg(self.records.iter().map(|r| r.turnaround() as f64)),
            avg_response: avg(self.records.iter().map(|r| r.response() as f64)),
            longest_wait: self.records.iter().map(ExecutionRecord::waiting).max().unwrap_or(0),
            total_burst,
            total_idle: self.total_idle(),
            makespan: self.end_time,
            utilization,
        }
    }
}

fn avg(iter: impl Iterator<Item = f64>) -> f64 {
    iter.collect::<Mean>().estimate()
}

impl fmt::Display for Schedule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Scheduling algorithm: {}", self.policy)?;
        writeln!(
            f,
            "{:<8} {:>8} {:>6} {:>6} {:>7} {:>8} {:>11}",
            "Process", "Arrival", "Burst", "Start", "Finish", "Waiting", "Turnaround"
        )?;
        for r in &self.records {
            writeln!(
                f,
                "{:<8} {:>8} {:>6} {:>6} {:>7} {:>8} {:>11}",
                r.id,
                r.arrival_time,
                r.burst_time,
                r.start_time,
                r.finish_time,
                r.waiting(),
                r.turnaround()
            )?;
        }

        for idle in &self.idle {
            writeln!(f, "CPU idle [{}, {})", idle.from, idle.to)?;
        }

        let summary = self.summary();
        writeln!(f, "Average waiting time: {:.2} ticks", summary.avg_waiting)?;
        writeln!(f, "Average turnaround time: {:.2} ticks", summary.avg_turnaround)?;
        writeln!(f, "Average response time: {:.2} ticks", summary.avg_response)?;
        writeln!(f, "Longest wait: {} ticks", summary.longest_wait)?;
        writeln!(f, "Total idle: {} ticks", summary.total_idle)?;
        writeln!(f, "Makespan: {} ticks", summary.makespan)?;
        writeln!(f, "CPU utilization: {:.1}%", summary.utilization * 100.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: &str, arrival: Ticks, burst: Ticks, start: Ticks) -> ExecutionRecord {
        ExecutionRecord {
            id: id.into(),
            arrival_time: arrival,
            burst_time: burst,
            start_time: start,
            finish_time: start + burst,
        }
    }

    fn fifo_schedule() -> Schedule {
        Schedule {
            policy: "FIFO",
            records: vec![record("P1", 0, 5, 0), record("P2", 6, 3, 6), record("P3", 6, 2, 9)],
            idle: vec![IdleInterval { from: 5, to: 6 }],
            end_time: 11,
        }
    }

    #[test]
    fn summary_averages_per_process_metrics() {
        let summary = fifo_schedule().summary();
        assert_eq!(summary.avg_waiting, 1.0);
        assert!((summary.avg_turnaround - 13.0 / 3.0).abs() < 1e-9);
        assert_eq!(summary.longest_wait, 3);
        assert_eq!(summary.total_burst, 10);
        assert_eq!(summary.total_idle, 1);
        assert_eq!(summary.makespan, 11);
    }

    #[test]
    fn display_lists_every_process_with_all_four_times() {
        let text = fifo_schedule().to_string();
        let p3 = text
            .lines()
            .find(|line| line.starts_with("P3"))
            .expect("P3 row");
        let cols: Vec<&str> = p3.split_whitespace().collect();
        assert_eq!(cols, ["P3", "6", "2", "9", "11", "3", "5"]);
        assert!(text.contains("CPU idle [5, 6)"));
    }
}
