use super::steps::StepDef;

/// Host-supplied verdict on whether the current step may be left forwards
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ValidationResult {
    pub is_valid: bool,
    /// Human-readable conditions still unmet, empty when valid
    pub unmet: Vec<String>,
}

impl ValidationResult {
    pub fn valid() -> Self {
        Self {
            is_valid: true,
            unmet: Vec::new(),
        }
    }

    pub fn invalid(reason: impl Into<String>) -> Self {
        Self {
            is_valid: false,
            unmet: vec![reason.into()],
        }
    }

    /// Conjunction of named conditions; every false one is reported as unmet
    pub fn all<'a, I>(conditions: I) -> Self
    where
        I: IntoIterator<Item = (bool, &'a str)>,
    {
        let unmet: Vec<String> = conditions
            .into_iter()
            .filter(|(ok, _)| !ok)
            .map(|(_, name)| name.to_string())
            .collect();
        Self {
            is_valid: unmet.is_empty(),
            unmet,
        }
    }

    /// Collect the outcome of several independent checks
    pub fn from_errors(errors: Vec<String>) -> Self {
        Self {
            is_valid: errors.is_empty(),
            unmet: errors,
        }
    }
}

impl From<bool> for ValidationResult {
    fn from(is_valid: bool) -> Self {
        if is_valid {
            Self::valid()
        } else {
            Self::invalid("step requirements not met")
        }
    }
}

/// Anything able to judge a step by its position and definition.
///
/// Used when a transition passes several steps at once, so the gate can ask
/// about each of them in turn.
pub trait StepValidator {
    fn validate(&self, index: usize, step: &StepDef) -> ValidationResult;
}

impl<F> StepValidator for F
where
    F: Fn(usize, &StepDef) -> ValidationResult,
{
    fn validate(&self, index: usize, step: &StepDef) -> ValidationResult {
        self(index, step)
    }
}

/// Outcome of an accepted transition
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transition {
    Moved { from: usize, to: usize },
    /// Validated advance from the last step; the flow is finished
    Completed,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn conjunction_reports_each_missing_flag() {
        let result = ValidationResult::all([(true, "accuracy confirmed"), (false, "terms accepted")]);
        assert!(!result.is_valid);
        assert_eq!(result.unmet, vec!["terms accepted".to_string()]);

        let both = ValidationResult::all([(true, "a"), (true, "b")]);
        assert!(both.is_valid);
        assert!(both.unmet.is_empty());
    }

    #[test]
    fn bool_conversion() {
        assert!(ValidationResult::from(true).is_valid);
        let failed = ValidationResult::from(false);
        assert!(!failed.is_valid);
        assert_eq!(failed.unmet.len(), 1);
    }

    #[test]
    fn closures_are_validators() {
        let validator = |index: usize, _: &StepDef| ValidationResult::from(index != 1);
        let step = StepDef::new(2, "Details");
        assert!(validator.validate(0, &step).is_valid);
        assert!(!validator.validate(1, &step).is_valid);
    }
}
