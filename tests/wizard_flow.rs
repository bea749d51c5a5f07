use finbank_wizard::application::{ApplicationConfig, ApplicationForms, ApplicationStep};
use finbank_wizard::wizard::{
    StepDef, StepStatus, Transition, TransitionError, ValidationResult, WizardState,
};

fn application_flow() -> WizardState {
    WizardState::new(ApplicationStep::definitions()).unwrap()
}

fn review(accuracy: bool, terms: bool) -> ValidationResult {
    ValidationResult::all([
        (accuracy, "accuracy confirmed"),
        (terms, "terms accepted"),
    ])
}

#[test]
fn five_steps_reach_submission() {
    let mut state = application_flow();
    let mut progress = vec![state.progress_percent()];

    for _ in 0..4 {
        let result = state.advance(&ValidationResult::valid()).unwrap();
        assert!(matches!(result, Transition::Moved { .. }));
        progress.push(state.progress_percent());
    }

    assert_eq!(progress, vec![20, 40, 60, 80, 100]);
    assert_eq!(state.current_index(), 4);
    assert_eq!(
        ApplicationStep::from_id(state.current_step().id),
        Some(ApplicationStep::ReviewAndSubmit)
    );

    assert_eq!(state.advance(&review(true, true)).unwrap(), Transition::Completed);
    assert_eq!(state.current_index(), 4);
    assert!(state.is_submitted());
}

#[test]
fn review_with_only_accuracy_flag_is_rejected() {
    let mut state = application_flow();
    for _ in 0..4 {
        state.advance(&ValidationResult::valid()).unwrap();
    }

    let err = state.advance(&review(true, false)).unwrap_err();
    assert_eq!(
        err,
        TransitionError::ValidationFailed {
            index: 4,
            unmet: vec!["terms accepted".to_string()],
        }
    );
    assert_eq!(state.current_index(), 4);
    assert!(!state.is_submitted());

    assert!(state.advance(&review(false, true)).is_err());
    assert_eq!(state.current_index(), 4);
}

#[test]
fn every_step_rejects_invalid_results() {
    let mut state = application_flow();
    loop {
        let before = state.steps();
        let index = state.current_index();
        let err = state.advance(&ValidationResult::from(false)).unwrap_err();
        assert!(matches!(err, TransitionError::ValidationFailed { index: i, .. } if i == index));
        assert_eq!(state.steps(), before);

        if state.is_last() {
            break;
        }
        state.advance(&ValidationResult::valid()).unwrap();
    }
}

#[test]
fn retreat_resets_statuses_from_position() {
    let mut state = application_flow();
    state.advance(&ValidationResult::valid()).unwrap();
    state.advance(&ValidationResult::valid()).unwrap();
    state.retreat().unwrap();

    let statuses: Vec<StepStatus> = state.steps().into_iter().map(|s| s.status).collect();
    assert_eq!(
        statuses,
        vec![
            StepStatus::Completed,
            StepStatus::Current,
            StepStatus::Upcoming,
            StepStatus::Upcoming,
            StepStatus::Upcoming,
        ]
    );

    state.retreat().unwrap();
    assert_eq!(state.retreat().unwrap_err(), TransitionError::NoPreviousStep);
    assert_eq!(state.current_index(), 0);
}

#[test]
fn fresh_forms_gate_a_jump_at_the_details_step() {
    let today = chrono::NaiveDate::from_ymd_opt(2026, 10, 18).unwrap();
    let forms = ApplicationForms::new(&ApplicationConfig::default(), today);
    let mut state = application_flow();

    let err = state.jump_to(4, &forms).unwrap_err();
    assert!(matches!(err, TransitionError::ValidationFailed { index: 1, .. }));
    assert_eq!(state.current_index(), 0);

    assert_eq!(state.jump_to(1, &forms).unwrap(), Transition::Moved { from: 0, to: 1 });
}

#[test]
fn custom_flows_work_with_any_step_list() {
    let steps = vec![StepDef::new(10, "Start"), StepDef::new(20, "Finish")];
    let mut state = WizardState::new(steps).unwrap();
    assert_eq!(state.progress_percent(), 50);
    state.advance(&ValidationResult::valid()).unwrap();
    assert_eq!(state.progress_percent(), 100);
    assert_eq!(state.advance(&ValidationResult::valid()).unwrap(), Transition::Completed);
}
