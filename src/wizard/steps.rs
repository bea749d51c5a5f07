/// Stable identifier of a step within one flow
pub type StepKey = u32;

/// A step as supplied by the host when the flow starts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepDef {
    pub id: StepKey,
    /// Display only, never used for sequencing
    pub name: String,
}

impl StepDef {
    pub fn new(id: StepKey, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

/// Display status of a step, always derived from the current position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepStatus {
    Completed,
    Current,
    Upcoming,
}

impl StepStatus {
    pub fn marker(&self, position: usize) -> String {
        match self {
            StepStatus::Completed => "[x]".to_string(),
            StepStatus::Current => format!("[{position}]"),
            StepStatus::Upcoming => format!(" {position} "),
        }
    }
}

/// A step together with its derived status
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    pub id: StepKey,
    pub name: String,
    pub status: StepStatus,
}

/// Recompute every step's status from `current_index`.
///
/// Indices below the current one are completed, the current one is current and
/// the rest are upcoming. Nothing is stored, so calling this twice with the
/// same inputs yields the same list.
pub fn status_of(steps: &[StepDef], current_index: usize) -> Vec<Step> {
    debug_assert!(
        steps.is_empty() || current_index < steps.len(),
        "current index {current_index} outside flow of {} steps",
        steps.len()
    );

    steps
        .iter()
        .enumerate()
        .map(|(idx, def)| Step {
            id: def.id,
            name: def.name.clone(),
            status: match idx.cmp(&current_index) {
                std::cmp::Ordering::Less => StepStatus::Completed,
                std::cmp::Ordering::Equal => StepStatus::Current,
                std::cmp::Ordering::Greater => StepStatus::Upcoming,
            },
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn defs(n: u32) -> Vec<StepDef> {
        (1..=n).map(|id| StepDef::new(id, format!("Step {id}"))).collect()
    }

    #[test]
    fn exactly_one_current_for_every_index() {
        let steps = defs(5);
        for current in 0..steps.len() {
            let statuses = status_of(&steps, current);
            assert_eq!(statuses.len(), 5);
            for (idx, step) in statuses.iter().enumerate() {
                let expected = if idx < current {
                    StepStatus::Completed
                } else if idx == current {
                    StepStatus::Current
                } else {
                    StepStatus::Upcoming
                };
                assert_eq!(step.status, expected, "index {idx} with current {current}");
            }
            let current_count = statuses
                .iter()
                .filter(|s| s.status == StepStatus::Current)
                .count();
            assert_eq!(current_count, 1);
        }
    }

    #[test]
    fn status_of_is_idempotent_and_keeps_order() {
        let steps = defs(3);
        let first = status_of(&steps, 1);
        let second = status_of(&steps, 1);
        assert_eq!(first, second);
        let ids: Vec<StepKey> = first.iter().map(|s| s.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn markers_follow_indicator_style() {
        assert_eq!(StepStatus::Completed.marker(1), "[x]");
        assert_eq!(StepStatus::Current.marker(2), "[2]");
        assert_eq!(StepStatus::Upcoming.marker(3), " 3 ");
    }
}
