use crate::wizard::{StepDef, StepKey};

/// Stages of the joint account application, in flow order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApplicationStep {
    Introduction,
    PrimaryApplicant,
    SecondApplicant,
    Documents,
    ReviewAndSubmit,
}

impl ApplicationStep {
    pub const ALL: [ApplicationStep; 5] = [
        ApplicationStep::Introduction,
        ApplicationStep::PrimaryApplicant,
        ApplicationStep::SecondApplicant,
        ApplicationStep::Documents,
        ApplicationStep::ReviewAndSubmit,
    ];

    pub fn id(&self) -> StepKey {
        match self {
            ApplicationStep::Introduction => 1,
            ApplicationStep::PrimaryApplicant => 2,
            ApplicationStep::SecondApplicant => 3,
            ApplicationStep::Documents => 4,
            ApplicationStep::ReviewAndSubmit => 5,
        }
    }

    pub fn from_id(id: StepKey) -> Option<Self> {
        Self::ALL.iter().copied().find(|step| step.id() == id)
    }

    pub fn short_name(&self) -> &'static str {
        match self {
            ApplicationStep::Introduction => "Introduction",
            ApplicationStep::PrimaryApplicant => "Your Details",
            ApplicationStep::SecondApplicant => "Applicant 2",
            ApplicationStep::Documents => "Documents",
            ApplicationStep::ReviewAndSubmit => "Review & Submit",
        }
    }

    pub fn definition(&self) -> StepDef {
        StepDef::new(self.id(), self.short_name())
    }

    pub fn definitions() -> Vec<StepDef> {
        Self::ALL.iter().map(|step| step.definition()).collect()
    }

    /// Number of focusable fields the step's content panel offers
    pub fn field_count(&self) -> usize {
        match self {
            ApplicationStep::Introduction => 0,
            ApplicationStep::PrimaryApplicant => 6,
            // choice, name, email
            ApplicationStep::SecondApplicant => 3,
            ApplicationStep::Documents => 2,
            ApplicationStep::ReviewAndSubmit => 2,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_round_trip_and_are_unique() {
        for step in ApplicationStep::ALL {
            assert_eq!(ApplicationStep::from_id(step.id()), Some(step));
        }
        assert_eq!(ApplicationStep::from_id(42), None);
    }

    #[test]
    fn definitions_keep_flow_order() {
        let names: Vec<String> = ApplicationStep::definitions()
            .into_iter()
            .map(|def| def.name)
            .collect();
        assert_eq!(
            names,
            vec!["Introduction", "Your Details", "Applicant 2", "Documents", "Review & Submit"]
        );
    }
}
