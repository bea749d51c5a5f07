use thiserror::Error;

use super::steps::StepKey;

/// Problems building a flow
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WizardError {
    #[error("a flow needs at least one step")]
    EmptyFlow,

    #[error("step id {0} appears more than once")]
    DuplicateStepId(StepKey),

    #[error("step index {index} is outside a flow of {len} steps")]
    OutOfRangeIndex { index: usize, len: usize },
}

/// Why a transition was not applied. The state is unchanged in every case.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransitionError {
    #[error("step {} is not complete: {}", index + 1, unmet.join(", "))]
    ValidationFailed { index: usize, unmet: Vec<String> },

    #[error("already at the first step")]
    NoPreviousStep,

    #[error("step index {index} is outside a flow of {len} steps")]
    OutOfRangeIndex { index: usize, len: usize },

    #[error("already on that step")]
    AlreadyCurrent,

    #[error("the flow has already been submitted")]
    FlowClosed,
}

impl TransitionError {
    /// Expected outcomes the user can fix, as opposed to host mistakes
    pub fn is_user_facing(&self) -> bool {
        matches!(
            self,
            TransitionError::ValidationFailed { .. } | TransitionError::NoPreviousStep
        )
    }
}
