use thiserror::Error;

/// Failures surfaced to the caller. Both fire before any table is allocated;
/// everything past construction is deterministic and total.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum AlignError {
    #[error("witness A contains no tokens")]
    EmptyWitnessA,
    #[error("witness B contains no tokens")]
    EmptyWitnessB,
}
