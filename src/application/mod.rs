mod config;
mod forms;
mod steps;
pub mod ui;
mod widgets;

pub use config::{ApplicantConfig, ApplicationConfig, DocumentsConfig, FlowConfig, GeneralConfig};
pub use forms::{
    ApplicationForms, DocumentsForm, EmploymentStatus, PrimaryApplicantForm, ReviewForm,
    SecondApplicantForm, SecondApplicantMode,
};
pub use steps::ApplicationStep;
pub use widgets::StatusBarState;

use chrono::NaiveDate;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::fmt;
use tracing::{debug, info, warn};

use crate::error::Result;
use crate::ui::Theme;
use crate::vim::{parse_command, Command, InputBuffer, ModeAction, VimMode};
use crate::wizard::{Transition, TransitionError, WizardState};

/// Outcomes the host loop has to act on
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApplicationAction {
    /// The last step was validated; the application is complete
    Submitted(ApplicationSummary),
    /// The user abandoned the application
    Cancelled,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SecondApplicantSummary {
    Details { name: String, email: String },
    Invited { email: String },
}

/// What gets reported once the application is submitted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApplicationSummary {
    pub primary_name: String,
    pub primary_email: String,
    pub employment: Option<EmploymentStatus>,
    pub second_applicant: SecondApplicantSummary,
}

impl fmt::Display for ApplicationSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} <{}>", self.primary_name, self.primary_email)?;
        match &self.second_applicant {
            SecondApplicantSummary::Details { name, email } => {
                write!(f, " with {name} <{email}>")
            }
            SecondApplicantSummary::Invited { email } => {
                write!(f, ", invitation sent to {email}")
            }
        }
    }
}

/// Kind of a focusable field in the content panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    /// Cycles through a fixed set of options
    Choice,
    Checkbox,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Info,
    Success,
    Error,
}

/// Message displayed to the user
pub struct Message {
    pub text: String,
    pub kind: MessageKind,
}

impl Message {
    pub fn is_error(&self) -> bool {
        self.kind == MessageKind::Error
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmAction {
    Cancel,
}

/// State of the application wizard screen
pub struct ApplicationApp {
    pub config: ApplicationConfig,
    pub theme: Theme,

    pub vim_mode: VimMode,
    pub command_buffer: InputBuffer,

    wizard: WizardState,
    pub forms: ApplicationForms,
    /// Focused field within the current step
    pub field_focus: usize,

    pub message: Option<Message>,
    pub confirm_action: Option<ConfirmAction>,
    pub show_help: bool,
    pub status_bar: StatusBarState,
}

impl ApplicationApp {
    pub fn new(config: ApplicationConfig) -> Result<Self> {
        let today = chrono::Local::now().date_naive();
        Self::with_date(config, today)
    }

    /// Build the app judging dates of birth against `today`
    pub fn with_date(config: ApplicationConfig, today: NaiveDate) -> Result<Self> {
        let wizard = WizardState::new(ApplicationStep::definitions())?;
        let forms = ApplicationForms::new(&config, today);

        let mut app = Self {
            config,
            theme: Theme::default(),
            vim_mode: VimMode::Normal,
            command_buffer: InputBuffer::new(),
            wizard,
            forms,
            field_focus: 0,
            message: None,
            confirm_action: None,
            show_help: false,
            status_bar: StatusBarState::default(),
        };
        app.update_status_bar();
        Ok(app)
    }

    pub fn wizard(&self) -> &WizardState {
        &self.wizard
    }

    pub fn current_step(&self) -> ApplicationStep {
        ApplicationStep::from_id(self.wizard.current_step().id)
            .unwrap_or(ApplicationStep::Introduction)
    }

    pub fn field_kind(step: ApplicationStep, idx: usize) -> Option<FieldKind> {
        if idx >= step.field_count() {
            return None;
        }
        let kind = match step {
            ApplicationStep::Introduction => return None,
            ApplicationStep::PrimaryApplicant if idx == PrimaryApplicantForm::EMPLOYMENT_FIELD => {
                FieldKind::Choice
            }
            ApplicationStep::SecondApplicant if idx == SecondApplicantForm::MODE_FIELD => {
                FieldKind::Choice
            }
            ApplicationStep::ReviewAndSubmit => FieldKind::Checkbox,
            _ => FieldKind::Text,
        };
        Some(kind)
    }

    pub fn focused_kind(&self) -> Option<FieldKind> {
        Self::field_kind(self.current_step(), self.field_focus)
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> Option<ApplicationAction> {
        if self.message.is_some() {
            self.message = None;
        }

        if let Some(action) = self.confirm_action {
            let result = self.handle_confirm_key(key, action);
            self.update_status_bar();
            return result;
        }

        if self.show_help {
            if matches!(key.code, KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('?')) {
                self.show_help = false;
            }
            self.update_status_bar();
            return None;
        }

        let result = match self.vim_mode {
            VimMode::Normal => self.handle_normal_mode(key),
            VimMode::Insert => self.handle_insert_mode(key),
            VimMode::Command => self.handle_command_mode(key),
        };

        self.update_status_bar();
        result
    }

    fn handle_normal_mode(&mut self, key: KeyEvent) -> Option<ApplicationAction> {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.confirm_action = Some(ConfirmAction::Cancel);
            return None;
        }

        match key.code {
            KeyCode::Char(':') => {
                self.vim_mode = self.vim_mode.transition(ModeAction::EnterCommand);
                self.command_buffer.clear();
            }

            KeyCode::Char('j') | KeyCode::Down | KeyCode::Tab => self.focus_next_field(),
            KeyCode::Char('k') | KeyCode::Up | KeyCode::BackTab => self.focus_previous_field(),

            KeyCode::Char('i') | KeyCode::Char('a') => {
                if self.focused_kind() == Some(FieldKind::Text) {
                    self.vim_mode = self.vim_mode.transition(ModeAction::EnterInsert);
                }
            }

            KeyCode::Char(' ') => self.toggle_focused(),

            KeyCode::Enter => match self.focused_kind() {
                Some(FieldKind::Text) => {
                    self.vim_mode = self.vim_mode.transition(ModeAction::EnterInsert);
                }
                Some(FieldKind::Choice) | Some(FieldKind::Checkbox) => self.toggle_focused(),
                None => return self.request_next(),
            },

            KeyCode::Char('n') | KeyCode::Char('l') | KeyCode::Right => {
                return self.request_next();
            }
            KeyCode::Char('p') | KeyCode::Char('h') | KeyCode::Left | KeyCode::Backspace => {
                self.request_previous();
            }

            KeyCode::Char(c) if c.is_ascii_digit() => {
                if let Some(num) = c.to_digit(10) {
                    if num > 0 {
                        self.request_jump(num as usize - 1);
                    }
                }
            }

            KeyCode::Char('?') | KeyCode::F(1) => {
                self.show_help = true;
            }
            KeyCode::Char('q') | KeyCode::Esc => {
                self.confirm_action = Some(ConfirmAction::Cancel);
            }

            _ => {}
        }
        None
    }

    fn handle_insert_mode(&mut self, key: KeyEvent) -> Option<ApplicationAction> {
        match key.code {
            KeyCode::Esc => {
                self.vim_mode = self.vim_mode.transition(ModeAction::Escape);
            }
            KeyCode::Enter => {
                self.vim_mode = self.vim_mode.transition(ModeAction::Escape);
                self.focus_next_field();
            }
            KeyCode::Tab => {
                self.focus_next_field();
                self.leave_insert_unless_text();
            }
            KeyCode::BackTab => {
                self.focus_previous_field();
                self.leave_insert_unless_text();
            }
            KeyCode::Backspace => {
                if let Some(buffer) = self.focused_buffer() {
                    buffer.delete_back();
                }
            }
            KeyCode::Delete => {
                if let Some(buffer) = self.focused_buffer() {
                    buffer.delete_forward();
                }
            }
            KeyCode::Left => {
                if let Some(buffer) = self.focused_buffer() {
                    buffer.move_left();
                }
            }
            KeyCode::Right => {
                if let Some(buffer) = self.focused_buffer() {
                    buffer.move_right();
                }
            }
            KeyCode::Home => {
                if let Some(buffer) = self.focused_buffer() {
                    buffer.move_start();
                }
            }
            KeyCode::End => {
                if let Some(buffer) = self.focused_buffer() {
                    buffer.move_end();
                }
            }
            KeyCode::Char(c) => {
                if key.modifiers.contains(KeyModifiers::CONTROL) {
                    match c {
                        'u' => {
                            if let Some(buffer) = self.focused_buffer() {
                                buffer.clear();
                            }
                        }
                        'a' => {
                            if let Some(buffer) = self.focused_buffer() {
                                buffer.move_start();
                            }
                        }
                        'e' => {
                            if let Some(buffer) = self.focused_buffer() {
                                buffer.move_end();
                            }
                        }
                        _ => {}
                    }
                } else if let Some(buffer) = self.focused_buffer() {
                    buffer.insert(c);
                }
            }
            _ => {}
        }
        None
    }

    fn handle_command_mode(&mut self, key: KeyEvent) -> Option<ApplicationAction> {
        match key.code {
            KeyCode::Esc => {
                self.vim_mode = self.vim_mode.transition(ModeAction::Escape);
                self.command_buffer.clear();
            }
            KeyCode::Enter => {
                let cmd = self.command_buffer.content().to_string();
                self.vim_mode = self.vim_mode.transition(ModeAction::Execute);
                self.command_buffer.clear();
                return self.execute_command(&cmd);
            }
            KeyCode::Backspace => {
                if self.command_buffer.is_empty() {
                    self.vim_mode = self.vim_mode.transition(ModeAction::Escape);
                } else {
                    self.command_buffer.delete_back();
                }
            }
            KeyCode::Char(c) => {
                self.command_buffer.insert(c);
            }
            _ => {}
        }
        None
    }

    fn handle_confirm_key(&mut self, key: KeyEvent, action: ConfirmAction) -> Option<ApplicationAction> {
        match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => {
                self.confirm_action = None;
                match action {
                    ConfirmAction::Cancel => {
                        info!("Application cancelled at step {}", self.wizard.current_index());
                        Some(ApplicationAction::Cancelled)
                    }
                }
            }
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
                self.confirm_action = None;
                None
            }
            _ => None,
        }
    }

    fn execute_command(&mut self, cmd: &str) -> Option<ApplicationAction> {
        match parse_command(cmd) {
            Ok(Command::Next) => return self.request_next(),
            Ok(Command::Back) => self.request_previous(),
            Ok(Command::Goto(step)) => self.request_jump(step - 1),
            Ok(Command::Submit) => {
                if self.wizard.is_last() {
                    return self.request_next();
                }
                self.set_error("Submit is only available on the last step".to_string());
            }
            Ok(Command::Help) => self.show_help = true,
            Ok(Command::Quit) => self.confirm_action = Some(ConfirmAction::Cancel),
            Err(e) => self.set_error(e.to_string()),
        }
        None
    }

    /// Ask the gate to leave the current step forwards
    pub fn request_next(&mut self) -> Option<ApplicationAction> {
        let step = self.current_step();
        let validation = self.forms.validate_step(step);

        match self.wizard.advance(&validation) {
            Ok(Transition::Moved { to, .. }) => {
                self.enter_step(to);
                None
            }
            Ok(Transition::Completed) => {
                let summary = self.summary();
                info!("Application submitted: {}", summary);
                self.set_success("Application submitted successfully!".to_string());
                Some(ApplicationAction::Submitted(summary))
            }
            Err(e) => {
                self.report_rejection(e);
                None
            }
        }
    }

    /// Go back one step; earlier answers are kept
    pub fn request_previous(&mut self) {
        match self.wizard.retreat() {
            Ok(Transition::Moved { to, .. }) => self.enter_step(to),
            Ok(Transition::Completed) => {}
            Err(e) => self.report_rejection(e),
        }
    }

    /// Jump to a step by index, if the flow allows jumping
    pub fn request_jump(&mut self, target: usize) {
        if !self.config.flow.allow_step_jump {
            self.set_error("Jumping between steps is disabled; use n/p".to_string());
            return;
        }

        match self.wizard.jump_to(target, &self.forms) {
            Ok(Transition::Moved { to, .. }) => self.enter_step(to),
            Ok(Transition::Completed) => {}
            Err(e) => self.report_rejection(e),
        }
    }

    fn enter_step(&mut self, index: usize) {
        self.field_focus = 0;
        self.vim_mode = VimMode::Normal;
        debug!(
            "Now on step {} ({}%)",
            index + 1,
            self.wizard.progress_percent()
        );
    }

    fn report_rejection(&mut self, error: TransitionError) {
        if error == TransitionError::NoPreviousStep {
            self.set_info("This is the first step".to_string());
            return;
        }

        if error.is_user_facing() {
            debug!("Transition rejected: {}", error);
        } else {
            warn!("Transition rejected: {}", error);
        }
        self.set_error(error.to_string());
    }

    fn summary(&self) -> ApplicationSummary {
        let primary = &self.forms.primary;
        let second = &self.forms.second;
        let second_applicant = match second.mode {
            SecondApplicantMode::ProvideDetails => SecondApplicantSummary::Details {
                name: second.full_name.trimmed().to_string(),
                email: second.email.trimmed().to_string(),
            },
            SecondApplicantMode::SendInvite => SecondApplicantSummary::Invited {
                email: second.email.trimmed().to_string(),
            },
        };

        ApplicationSummary {
            primary_name: primary.full_name.trimmed().to_string(),
            primary_email: primary.email.trimmed().to_string(),
            employment: primary.employment,
            second_applicant,
        }
    }

    fn focus_next_field(&mut self) {
        let count = self.current_step().field_count();
        if self.field_focus + 1 < count {
            self.field_focus += 1;
        }
    }

    fn focus_previous_field(&mut self) {
        self.field_focus = self.field_focus.saturating_sub(1);
    }

    fn leave_insert_unless_text(&mut self) {
        if self.focused_kind() != Some(FieldKind::Text) {
            self.vim_mode = VimMode::Normal;
        }
    }

    fn focused_buffer(&mut self) -> Option<&mut InputBuffer> {
        let idx = self.field_focus;
        match self.current_step() {
            ApplicationStep::PrimaryApplicant => self.forms.primary.field_mut(idx),
            ApplicationStep::SecondApplicant => self.forms.second.field_mut(idx),
            ApplicationStep::Documents => self.forms.documents.field_mut(idx),
            ApplicationStep::Introduction | ApplicationStep::ReviewAndSubmit => None,
        }
    }

    fn toggle_focused(&mut self) {
        let idx = self.field_focus;
        match (self.current_step(), self.focused_kind()) {
            (ApplicationStep::PrimaryApplicant, Some(FieldKind::Choice)) => {
                let primary = &mut self.forms.primary;
                primary.employment = Some(EmploymentStatus::cycle(primary.employment));
            }
            (ApplicationStep::SecondApplicant, Some(FieldKind::Choice)) => {
                self.forms.second.mode = self.forms.second.mode.toggled();
            }
            (ApplicationStep::ReviewAndSubmit, Some(FieldKind::Checkbox)) => {
                self.forms.review.toggle(idx);
            }
            _ => {}
        }
    }

    pub fn set_error(&mut self, text: String) {
        self.message = Some(Message {
            text,
            kind: MessageKind::Error,
        });
    }

    pub fn set_info(&mut self, text: String) {
        self.message = Some(Message {
            text,
            kind: MessageKind::Info,
        });
    }

    pub fn set_success(&mut self, text: String) {
        self.message = Some(Message {
            text,
            kind: MessageKind::Success,
        });
    }

    pub fn update_status_bar(&mut self) {
        if self.confirm_action.is_some() {
            self.status_bar = StatusBarState::confirm();
            return;
        }

        if self.show_help {
            self.status_bar = StatusBarState::help();
            return;
        }

        if self.vim_mode == VimMode::Command {
            self.status_bar = StatusBarState::command_mode();
            return;
        }

        let step = self.current_step();
        self.status_bar = match step {
            ApplicationStep::Introduction => StatusBarState::introduction(),
            ApplicationStep::ReviewAndSubmit => {
                StatusBarState::review(self.forms.validate_step(step).is_valid)
            }
            _ => match self.focused_kind() {
                Some(FieldKind::Text) if self.vim_mode == VimMode::Insert => {
                    StatusBarState::form_insert()
                }
                Some(FieldKind::Choice) | Some(FieldKind::Checkbox) => StatusBarState::toggle_normal(),
                _ => StatusBarState::form_normal(),
            },
        };
    }
}
