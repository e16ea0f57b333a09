use super::{
    job::{ExecutionRecord, Job},
    report::{IdleInterval, Schedule},
};
use crate::{
    core::{
        driver::SchedCore,
        event::SchedCoreEvent,
        state::{ProcessId, SimCtx, Ticks},
    },
    error::SimError,
    scheduler::Scheduler,
};
use rustc_hash::FxHashMap;
use tracing::info;

pub struct Sim<S: Scheduler> {
    pub core: SchedCore<S>,
    pub records: Vec<ExecutionRecord>,
    pub idle: Vec<IdleInterval>,
    // Pids sorted by (arrival, input order); arrivals are admitted from the cursor
    arrivals: Vec<ProcessId>,
    arrival_cursor: usize,
    // id --> pid; rejects duplicates and resolves records back to processes
    ids: FxHashMap<String, ProcessId>,
}

impl<S: Scheduler> Sim<S> {
    pub fn new(jobs: Vec<Job>) -> Result<Self, SimError> {
        if jobs.is_empty() {
            return Err(SimError::EmptyWorkload);
        }

        // The run ends no later than the last arrival plus every burst
        let latest_arrival = jobs.iter().map(|job| job.arrival_time).max().unwrap_or(0);
        let horizon = jobs
            .iter()
            .try_fold(latest_arrival, |acc: Ticks, job| acc.checked_add(job.burst_time));
        if horizon.is_none() {
            return Err(SimError::TimeOverflow);
        }

        let mut ctx = SimCtx::new();
        let mut ids = FxHashMap::default();
        for job in &jobs {
            if ids.contains_key(&job.id) {
                return Err(SimError::DuplicateProcessId(job.id.clone()));
            }
            let pid = ctx.create_process(job);
            ids.insert(job.id.clone(), pid);
        }

        let mut arrivals: Vec<ProcessId> = (0..ctx.processes.len()).collect();
        // Stable sort keeps input order among equal arrivals
        arrivals.sort_by_key(|&pid| ctx.process(pid).arrival_time);

        Ok(Self {
            core: SchedCore::<S>::new(ctx),
            records: Vec::with_capacity(jobs.len()),
            idle: Vec::new(),
            arrivals,
            arrival_cursor: 0,
            ids,
        })
    }

    pub fn step(&mut self) -> Vec<SchedCoreEvent> {
        self.handle_arrivals();

        if let Some(dispatch) = self.core.dispatch_next() {
            let process = self.core.ctx.process(dispatch.process);
            self.records.push(ExecutionRecord {
                id: process.id.clone(),
                arrival_time: process.arrival_time,
                burst_time: process.burst_time,
                start_time: dispatch.start,
                finish_time: dispatch.finish,
            });
        } else if let Some(next) = self.next_arrival() {
            self.core.idle_until(next);
        }

        let events = self.core.take_events();
        for event in &events {
            if let SchedCoreEvent::CpuIdle { from, to } = *event {
                self.idle.push(IdleInterval { from, to });
            }
        }
        events
    }

    fn handle_arrivals(&mut self) {
        let now = self.core.now();
        while let Some(&pid) = self.arrivals.get(self.arrival_cursor) {
            if self.core.ctx.process(pid).arrival_time > now {
                break;
            }
            self.core.wake_process(pid);
            self.arrival_cursor += 1;
        }
    }

    fn next_arrival(&self) -> Option<Ticks> {
        self.arrivals
            .get(self.arrival_cursor)
            .map(|&pid| self.core.ctx.process(pid).arrival_time)
    }

    pub fn all_processes_completed(&self) -> bool {
        self.core.ctx.all_completed()
    }

    pub fn pid_of(&self, id: &str) -> Option<ProcessId> {
        self.ids.get(id).copied()
    }

    pub fn run(&mut self) -> Schedule {
        info!(
            policy = S::NAME,
            processes = self.core.ctx.processes.len(),
            "simulation start"
        );

        while !self.all_processes_completed() {
            self.step();
        }
        self.core.finish();

        let schedule = Schedule {
            policy: S::NAME,
            records: self.records.clone(),
            idle: self.idle.clone(),
            end_time: self.core.now(),
        };
        info!(
            policy = S::NAME,
            end_time = schedule.end_time,
            steps = self.core.observer().steps(),
            "simulation complete"
        );
        schedule
    }
}

/// Build a simulation for policy `S` and run it to completion.
pub fn simulate<S: Scheduler>(jobs: Vec<Job>) -> Result<Schedule, SimError> {
    Ok(Sim::<S>::new(jobs)?.run())
}
