//! Scaffolding steps and their outcome reporting

pub mod app_config;
pub mod create;
pub mod install;

pub use create::CreateOperation;

/// Outcome of a step that is allowed to fail without aborting the run
///
/// Fatal failures travel as errors; advisory failures travel as a `Degraded`
/// outcome carrying the guidance shown to the user, so the orchestrator can
/// tell the two apart explicitly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepOutcome {
    /// The step finished normally
    Completed,
    /// The step failed; scaffolding continues and the user finishes by hand
    Degraded { warning: String },
}

impl StepOutcome {
    /// Create a degraded outcome
    #[inline]
    pub fn degraded<S: Into<String>>(warning: S) -> Self {
        Self::Degraded {
            warning: warning.into(),
        }
    }

    /// Log the warning when the step degraded
    #[inline]
    pub fn report(&self) {
        if let Self::Degraded { warning } = self {
            tracing::warn!("{warning}");
        }
    }
}
