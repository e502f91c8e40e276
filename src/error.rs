use std::fmt;
use thiserror::Error;

/// The stage of a seed run an error came from. Only used to describe the
/// failure; every stage fails the same way.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SeedStep {
    Configure,
    Reset,
    CreateClub,
    CreateEvent,
    CreateMembership,
}

impl fmt::Display for SeedStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            SeedStep::Configure => "configure",
            SeedStep::Reset => "reset schema",
            SeedStep::CreateClub => "create club",
            SeedStep::CreateEvent => "create event",
            SeedStep::CreateMembership => "create membership",
        })
    }
}

#[derive(Debug, Error)]
#[error("{step} failed: {cause:#}")]
pub struct SeedError {
    pub step: SeedStep,
    cause: anyhow::Error,
}

pub type SeedResult<T> = Result<T, SeedError>;

impl SeedError {
    pub fn new(step: SeedStep, e: impl Into<anyhow::Error>) -> SeedError {
        SeedError {
            step,
            cause: e.into(),
        }
    }

    pub fn cause(&self) -> &anyhow::Error {
        &self.cause
    }
}

/// Tags a store result with the step it belongs to.
pub trait StepContext<T> {
    fn step(self, step: SeedStep) -> SeedResult<T>;
}

impl<T, E: Into<anyhow::Error>> StepContext<T> for Result<T, E> {
    fn step(self, step: SeedStep) -> SeedResult<T> {
        self.map_err(|e| SeedError::new(step, e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_names_step_and_cause() {
        let res: Result<(), _> = Err(anyhow::anyhow!("connection refused"));
        let err = res.step(SeedStep::Reset).unwrap_err();
        assert_eq!(err.step, SeedStep::Reset);
        assert_eq!(err.to_string(), "reset schema failed: connection refused");
    }

    #[test]
    fn keeps_cause_chain() {
        let cause = anyhow::anyhow!("role \"seed\" does not exist").context("failed to connect");
        let err = SeedError::new(SeedStep::CreateClub, cause);
        assert_eq!(
            err.to_string(),
            "create club failed: failed to connect: role \"seed\" does not exist"
        );
    }
}
