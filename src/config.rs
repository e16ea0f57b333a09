use clap::{Args, Parser, ValueEnum};

use crate::{
    core::Ticks,
    sim::{BernoulliParams, Job, bernoulli_jobs, default_jobs},
};

/// Simulate CPU scheduling of a process table under FIFO or non-preemptive SJF
#[derive(Parser, Debug)]
#[command(name = "sched_model", version, about)]
pub struct Cli {
    /// Scheduling algorithm, matched exactly: FIFO or SJF
    #[arg(long, value_name = "NAME", default_value = "FIFO", overrides_with = "algorithm")]
    pub algorithm: String,

    /// Process table to schedule
    #[arg(long, value_enum, default_value_t = WorkloadKind::Default)]
    pub workload: WorkloadKind,

    #[command(flatten)]
    pub bernoulli: BernoulliArgs,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum WorkloadKind {
    /// P1 (arrival 0, burst 5), P2 (6, 3), P3 (6, 2)
    Default,
    /// Randomly generated arrivals, see the --ticks/--p-* options
    Bernoulli,
}

#[derive(Args, Debug, Clone)]
pub struct BernoulliArgs {
    /// Ticks over which arrivals are generated
    #[arg(long, default_value_t = 500)]
    pub ticks: Ticks,

    /// Per-tick arrival probability
    #[arg(long, default_value_t = 0.3)]
    pub p_arrival: f64,

    /// Probability that an arriving job is short
    #[arg(long, default_value_t = 0.3)]
    pub p_short: f64,

    #[arg(long, default_value_t = 2)]
    pub short_burst: Ticks,

    #[arg(long, default_value_t = 6)]
    pub long_burst: Ticks,

    #[arg(long, default_value_t = 0)]
    pub seed: u64,
}

impl From<&BernoulliArgs> for BernoulliParams {
    fn from(args: &BernoulliArgs) -> Self {
        Self {
            ticks: args.ticks,
            p_arrival: args.p_arrival,
            p_short: args.p_short,
            short_burst: args.short_burst,
            long_burst: args.long_burst,
            seed: args.seed,
        }
    }
}

impl Cli {
    pub fn jobs(&self) -> Vec<Job> {
        match self.workload {
            WorkloadKind::Default => default_jobs(),
            WorkloadKind::Bernoulli => bernoulli_jobs(&BernoulliParams::from(&self.bernoulli)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_fifo_on_the_builtin_table() {
        let cli = Cli::try_parse_from(["sched_model"]).unwrap();
        assert_eq!(cli.algorithm, "FIFO");
        assert_eq!(cli.workload, WorkloadKind::Default);
        assert_eq!(cli.jobs(), default_jobs());
    }

    #[test]
    fn unknown_algorithm_names_still_parse() {
        let cli = Cli::try_parse_from(["sched_model", "--algorithm", "XYZ"]).unwrap();
        assert_eq!(cli.algorithm, "XYZ");
    }

    #[test]
    fn last_algorithm_flag_wins() {
        let cli =
            Cli::try_parse_from(["sched_model", "--algorithm", "SJF", "--algorithm", "FIFO"]).unwrap();
        assert_eq!(cli.algorithm, "FIFO");
    }

    #[test]
    fn algorithm_flag_without_value_is_a_usage_error() {
        assert!(Cli::try_parse_from(["sched_model", "--algorithm"]).is_err());
    }

    #[test]
    fn bernoulli_knobs_reach_the_generator() {
        let cli = Cli::try_parse_from([
            "sched_model",
            "--workload",
            "bernoulli",
            "--ticks",
            "50",
            "--p-arrival",
            "1.0",
            "--seed",
            "7",
        ])
        .unwrap();
        let params = BernoulliParams::from(&cli.bernoulli);
        assert_eq!(params.ticks, 50);
        assert_eq!(params.seed, 7);
        assert_eq!(cli.jobs().len(), 50);
    }
}
