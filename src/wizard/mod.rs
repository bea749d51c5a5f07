//! Guided wizard engine: step sequencing, progress and the validation gate.
//!
//! The engine holds no form data and renders nothing. The host hands it the
//! ordered step definitions once, then supplies a [`ValidationResult`] every
//! time it wants to move forward.

mod error;
mod gate;
mod progress;
mod steps;

pub use error::{TransitionError, WizardError};
pub use gate::{StepValidator, Transition, ValidationResult};
pub use progress::progress_percent;
pub use steps::{status_of, Step, StepDef, StepKey, StepStatus};

use std::collections::HashSet;
use tracing::{debug, info};

/// Position of one in-progress flow
#[derive(Debug, Clone)]
pub struct WizardState {
    steps: Vec<StepDef>,
    current_index: usize,
    submitted: bool,
}

impl WizardState {
    pub fn new(steps: Vec<StepDef>) -> Result<Self, WizardError> {
        Self::starting_at(steps, 0)
    }

    /// Build a flow positioned at `index`, e.g. when resuming a session
    pub fn starting_at(steps: Vec<StepDef>, index: usize) -> Result<Self, WizardError> {
        if steps.is_empty() {
            return Err(WizardError::EmptyFlow);
        }

        let mut seen = HashSet::new();
        for step in &steps {
            if !seen.insert(step.id) {
                return Err(WizardError::DuplicateStepId(step.id));
            }
        }

        if index >= steps.len() {
            return Err(WizardError::OutOfRangeIndex {
                index,
                len: steps.len(),
            });
        }

        Ok(Self {
            steps,
            current_index: index,
            submitted: false,
        })
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn step_count(&self) -> usize {
        self.steps.len()
    }

    pub fn definitions(&self) -> &[StepDef] {
        &self.steps
    }

    pub fn current_step(&self) -> &StepDef {
        &self.steps[self.current_index]
    }

    pub fn is_last(&self) -> bool {
        self.current_index == self.steps.len() - 1
    }

    pub fn is_submitted(&self) -> bool {
        self.submitted
    }

    /// Every step with its status derived from the current position
    pub fn steps(&self) -> Vec<Step> {
        status_of(&self.steps, self.current_index)
    }

    pub fn progress_percent(&self) -> u8 {
        progress_percent(self.current_index, self.steps.len())
    }

    /// Move one step forward if `validation` allows leaving the current step.
    ///
    /// On the last step a valid result finishes the flow instead of moving.
    pub fn advance(&mut self, validation: &ValidationResult) -> Result<Transition, TransitionError> {
        if self.submitted {
            return Err(TransitionError::FlowClosed);
        }

        if !validation.is_valid {
            debug!(
                "Advance rejected at step {}: {:?}",
                self.current_index, validation.unmet
            );
            return Err(TransitionError::ValidationFailed {
                index: self.current_index,
                unmet: validation.unmet.clone(),
            });
        }

        if self.is_last() {
            self.submitted = true;
            info!("Flow completed at step {}", self.current_index);
            return Ok(Transition::Completed);
        }

        let from = self.current_index;
        self.current_index += 1;
        debug!("Advanced from step {} to {}", from, self.current_index);
        Ok(Transition::Moved {
            from,
            to: self.current_index,
        })
    }

    /// Move one step back. Never gated.
    pub fn retreat(&mut self) -> Result<Transition, TransitionError> {
        if self.submitted {
            return Err(TransitionError::FlowClosed);
        }

        if self.current_index == 0 {
            return Err(TransitionError::NoPreviousStep);
        }

        let from = self.current_index;
        self.current_index -= 1;
        debug!("Retreated from step {} to {}", from, self.current_index);
        Ok(Transition::Moved {
            from,
            to: self.current_index,
        })
    }

    /// Jump straight to `target`.
    ///
    /// Going back is free. Going forward asks `validator` about every step
    /// being left behind, and stops at the first one that fails.
    pub fn jump_to<V>(&mut self, target: usize, validator: &V) -> Result<Transition, TransitionError>
    where
        V: StepValidator + ?Sized,
    {
        if self.submitted {
            return Err(TransitionError::FlowClosed);
        }

        if target >= self.steps.len() {
            return Err(TransitionError::OutOfRangeIndex {
                index: target,
                len: self.steps.len(),
            });
        }

        if target == self.current_index {
            return Err(TransitionError::AlreadyCurrent);
        }

        if target > self.current_index {
            for index in self.current_index..target {
                let result = validator.validate(index, &self.steps[index]);
                if !result.is_valid {
                    debug!("Jump to {} blocked at step {}", target, index);
                    return Err(TransitionError::ValidationFailed {
                        index,
                        unmet: result.unmet,
                    });
                }
            }
        }

        let from = self.current_index;
        self.current_index = target;
        debug!("Jumped from step {} to {}", from, target);
        Ok(Transition::Moved { from, to: target })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flow() -> WizardState {
        let defs = ["Introduction", "Your Details", "Applicant 2", "Documents", "Review & Submit"]
            .iter()
            .enumerate()
            .map(|(i, name)| StepDef::new(i as StepKey + 1, *name))
            .collect();
        WizardState::new(defs).unwrap()
    }

    #[test]
    fn starts_on_first_step() {
        let state = flow();
        assert_eq!(state.current_index(), 0);
        assert_eq!(state.progress_percent(), 20);
        let steps = state.steps();
        assert_eq!(steps[0].status, StepStatus::Current);
        assert!(steps[1..].iter().all(|s| s.status == StepStatus::Upcoming));
    }

    #[test]
    fn rejects_bad_construction() {
        assert_eq!(WizardState::new(Vec::new()).unwrap_err(), WizardError::EmptyFlow);

        let dup = vec![StepDef::new(1, "a"), StepDef::new(1, "b")];
        assert_eq!(WizardState::new(dup).unwrap_err(), WizardError::DuplicateStepId(1));

        let defs = vec![StepDef::new(1, "a"), StepDef::new(2, "b")];
        assert_eq!(
            WizardState::starting_at(defs, 2).unwrap_err(),
            WizardError::OutOfRangeIndex { index: 2, len: 2 }
        );
    }

    #[test]
    fn invalid_advance_leaves_state_alone() {
        let mut state = flow();
        state.advance(&ValidationResult::valid()).unwrap();
        let before = state.steps();

        let err = state
            .advance(&ValidationResult::invalid("email is required"))
            .unwrap_err();
        assert_eq!(
            err,
            TransitionError::ValidationFailed {
                index: 1,
                unmet: vec!["email is required".to_string()],
            }
        );
        assert_eq!(state.current_index(), 1);
        assert_eq!(state.steps(), before);
    }

    #[test]
    fn advance_then_retreat_round_trips() {
        let mut state = flow();
        state.advance(&ValidationResult::valid()).unwrap();
        let index = state.current_index();
        let statuses = state.steps();

        assert_eq!(
            state.advance(&ValidationResult::valid()).unwrap(),
            Transition::Moved { from: 1, to: 2 }
        );
        assert_eq!(state.retreat().unwrap(), Transition::Moved { from: 2, to: 1 });
        assert_eq!(state.current_index(), index);
        assert_eq!(state.steps(), statuses);
        assert_eq!(state.steps()[2].status, StepStatus::Upcoming);
    }

    #[test]
    fn retreat_at_start_reports_no_previous_step() {
        let mut state = flow();
        assert_eq!(state.retreat().unwrap_err(), TransitionError::NoPreviousStep);
        assert_eq!(state.current_index(), 0);
    }

    #[test]
    fn last_step_completes_instead_of_moving() {
        let mut state = flow();
        for _ in 0..4 {
            state.advance(&ValidationResult::valid()).unwrap();
        }
        assert!(state.is_last());
        assert_eq!(state.progress_percent(), 100);

        assert_eq!(
            state.advance(&ValidationResult::valid()).unwrap(),
            Transition::Completed
        );
        assert_eq!(state.current_index(), 4);
        assert!(state.is_submitted());
        assert_eq!(state.retreat().unwrap_err(), TransitionError::FlowClosed);
        assert_eq!(
            state.advance(&ValidationResult::valid()).unwrap_err(),
            TransitionError::FlowClosed
        );
    }

    #[test]
    fn jump_forward_checks_every_skipped_step() {
        let mut state = flow();
        let blocks_documents = |index: usize, _: &StepDef| {
            if index == 3 {
                ValidationResult::invalid("documents missing")
            } else {
                ValidationResult::valid()
            }
        };

        assert_eq!(
            state.jump_to(2, &blocks_documents).unwrap(),
            Transition::Moved { from: 0, to: 2 }
        );
        let err = state.jump_to(4, &blocks_documents).unwrap_err();
        assert!(matches!(err, TransitionError::ValidationFailed { index: 3, .. }));
        assert_eq!(state.current_index(), 2);
    }

    #[test]
    fn jump_back_is_never_gated() {
        let mut state = flow();
        for _ in 0..3 {
            state.advance(&ValidationResult::valid()).unwrap();
        }
        let refuse_all = |_: usize, _: &StepDef| ValidationResult::invalid("nope");
        assert_eq!(
            state.jump_to(0, &refuse_all).unwrap(),
            Transition::Moved { from: 3, to: 0 }
        );
        assert_eq!(state.steps()[0].status, StepStatus::Current);
    }

    #[test]
    fn jump_rejects_current_and_out_of_range_targets() {
        let mut state = flow();
        let accept = |_: usize, _: &StepDef| ValidationResult::valid();
        assert_eq!(state.jump_to(0, &accept).unwrap_err(), TransitionError::AlreadyCurrent);
        assert_eq!(
            state.jump_to(5, &accept).unwrap_err(),
            TransitionError::OutOfRangeIndex { index: 5, len: 5 }
        );
    }
}
