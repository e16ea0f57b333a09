use tracing::warn;

use crate::{
    error::SimError,
    scheduler::{FifoScheduler, Scheduler, SjfScheduler},
    sim::{Job, Schedule, simulate},
};

pub type PolicyRunner = fn(Vec<Job>) -> Result<Schedule, SimError>;

pub struct PolicyEntry {
    pub name: &'static str,
    pub run: PolicyRunner,
}

const fn entry<S: Scheduler>() -> PolicyEntry {
    PolicyEntry {
        name: S::NAME,
        run: simulate::<S>,
    }
}

pub static POLICIES: &[PolicyEntry] = &[entry::<FifoScheduler>(), entry::<SjfScheduler>()];

// Names are matched exactly; "fifo" is not "FIFO"
pub fn lookup(name: &str) -> Result<&'static PolicyEntry, SimError> {
    POLICIES
        .iter()
        .find(|policy| policy.name == name)
        .ok_or_else(|| SimError::UnknownAlgorithm(name.to_string()))
}

pub fn run(name: &str, jobs: Vec<Job>) -> Result<Schedule, SimError> {
    let policy = lookup(name).inspect_err(|_| warn!(algorithm = name, "unknown algorithm"))?;
    (policy.run)(jobs)
}

pub fn policy_names() -> impl Iterator<Item = &'static str> {
    POLICIES.iter().map(|policy| policy.name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::default_jobs;

    #[test]
    fn registry_knows_fifo_and_sjf() {
        assert_eq!(policy_names().collect::<Vec<_>>(), ["FIFO", "SJF"]);
    }

    #[test]
    fn lookup_is_case_sensitive() {
        assert!(lookup("SJF").is_ok());
        assert_eq!(
            lookup("sjf").err(),
            Some(SimError::UnknownAlgorithm("sjf".into()))
        );
    }

    #[test]
    fn round_robin_is_not_registered() {
        assert!(matches!(
            run("RR", default_jobs()),
            Err(SimError::UnknownAlgorithm(name)) if name == "RR"
        ));
    }
}
