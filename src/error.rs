use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SimError {
    #[error("unknown scheduling algorithm: {0}")]
    UnknownAlgorithm(String),

    #[error("workload has no processes")]
    EmptyWorkload,

    #[error("duplicate process id: {0}")]
    DuplicateProcessId(String),

    #[error("latest arrival plus total burst time does not fit in the clock")]
    TimeOverflow,
}
