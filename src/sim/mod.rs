pub mod driver;
pub mod job;
pub mod report;
pub mod workload;

pub use driver::{Sim, simulate};
pub use job::{ExecutionRecord, Job};
pub use report::{IdleInterval, Schedule, Summary};
pub use workload::{BernoulliParams, bernoulli_jobs, default_jobs};
