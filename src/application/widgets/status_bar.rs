/// Hints shown in the status bar, refreshed after every key
#[derive(Debug, Clone, Default)]
pub struct StatusBarState {
    /// Left side hint text (e.g., "i: edit  j/k: fields")
    pub left_hint: String,
    /// Right side hint text (e.g., "n: next  p: back")
    pub right_hint: String,
}

impl StatusBarState {
    fn new(left: &str, right: &str) -> Self {
        Self {
            left_hint: left.to_string(),
            right_hint: right.to_string(),
        }
    }

    pub fn introduction() -> Self {
        Self::new("Read the requirements", "Enter/n: start  q: cancel")
    }

    /// Normal mode on a step with text fields
    pub fn form_normal() -> Self {
        Self::new("j/k: fields  i: edit", "n: next  p: back")
    }

    pub fn form_insert() -> Self {
        Self::new("Type to enter text", "Esc: normal  Tab: next field")
    }

    /// Normal mode on a choice or checkbox
    pub fn toggle_normal() -> Self {
        Self::new("j/k: fields  Space: toggle", "n: next  p: back")
    }

    pub fn review(ready: bool) -> Self {
        if ready {
            Self::new("Ready to submit", "n: submit  p: back")
        } else {
            Self::new("Both confirmations required", "Space: toggle  p: back")
        }
    }

    pub fn command_mode() -> Self {
        Self::new("", "Enter: run  Esc: cancel")
    }

    pub fn confirm() -> Self {
        Self::new("", "y: yes  n: no")
    }

    pub fn help() -> Self {
        Self::new("", "q/Esc: close help")
    }
}
