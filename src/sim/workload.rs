use rand::prelude::*;

use super::job::Job;
use crate::core::state::Ticks;

/// The built-in three-process table.
pub fn default_jobs() -> Vec<Job> {
    vec![Job::new("P1", 0, 5), Job::new("P2", 6, 3), Job::new("P3", 6, 2)]
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BernoulliParams {
    pub ticks: Ticks,
    pub p_arrival: f64,
    pub p_short: f64,
    pub short_burst: Ticks,
    pub long_burst: Ticks,
    pub seed: u64,
}

impl Default for BernoulliParams {
    fn default() -> Self {
        Self {
            ticks: 500,
            p_arrival: 0.3,
            p_short: 0.3,
            short_burst: 2,
            long_burst: 6,
            seed: 0,
        }
    }
}

// At each tick a job arrives with probability p_arrival; it is short with
// probability p_short. Same seed, same workload.
pub fn bernoulli_jobs(params: &BernoulliParams) -> Vec<Job> {
    let mut rng = StdRng::seed_from_u64(params.seed);
    let mut jobs = Vec::new();

    for t in 0..params.ticks {
        if rng.random::<f64>() < params.p_arrival {
            let burst_time = if rng.random::<f64>() < params.p_short {
                params.short_burst
            } else {
                params.long_burst
            };

            jobs.push(Job::new(format!("P{}", jobs.len() + 1), t, burst_time));
        }
    }

    jobs
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bernoulli_is_deterministic_per_seed() {
        let params = BernoulliParams {
            ticks: 100,
            ..Default::default()
        };
        assert_eq!(bernoulli_jobs(&params), bernoulli_jobs(&params));
    }

    #[test]
    fn bernoulli_jobs_use_configured_bursts_and_stay_in_range() {
        let params = BernoulliParams {
            ticks: 200,
            p_arrival: 1.0,
            ..Default::default()
        };
        let jobs = bernoulli_jobs(&params);

        assert_eq!(jobs.len(), 200);
        assert!(jobs.iter().all(|j| j.burst_time == 2 || j.burst_time == 6));
        assert!(jobs.windows(2).all(|w| w[0].arrival_time < w[1].arrival_time));
    }

    #[test]
    fn zero_arrival_probability_yields_no_jobs() {
        let params = BernoulliParams {
            p_arrival: 0.0,
            ..Default::default()
        };
        assert!(bernoulli_jobs(&params).is_empty());
    }
}
