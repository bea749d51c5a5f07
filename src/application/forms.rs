use chrono::NaiveDate;
use regex::Regex;
use std::path::Path;
use std::sync::LazyLock;

use super::config::{ApplicantConfig, ApplicationConfig, DocumentsConfig};
use super::steps::ApplicationStep;
use crate::vim::InputBuffer;
use crate::wizard::{StepDef, StepValidator, ValidationResult};

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^@\s]+@[^@\s.]+(\.[^@\s.]+)+$").expect("email pattern compiles")
});

const DOB_FORMAT: &str = "%Y-%m-%d";

pub fn is_valid_email(value: &str) -> bool {
    EMAIL_RE.is_match(value.trim())
}

pub fn digit_count(value: &str) -> usize {
    value.chars().filter(|c| c.is_ascii_digit()).count()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmploymentStatus {
    Employed,
    SelfEmployed,
    Unemployed,
    Student,
    Retired,
}

impl EmploymentStatus {
    pub const ALL: [EmploymentStatus; 5] = [
        EmploymentStatus::Employed,
        EmploymentStatus::SelfEmployed,
        EmploymentStatus::Unemployed,
        EmploymentStatus::Student,
        EmploymentStatus::Retired,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            EmploymentStatus::Employed => "Employed",
            EmploymentStatus::SelfEmployed => "Self-Employed",
            EmploymentStatus::Unemployed => "Unemployed",
            EmploymentStatus::Student => "Student",
            EmploymentStatus::Retired => "Retired",
        }
    }

    /// Next option in the select list; `None` starts at the first one
    pub fn cycle(current: Option<Self>) -> Self {
        match current {
            None => Self::ALL[0],
            Some(status) => {
                let idx = Self::ALL.iter().position(|s| *s == status).unwrap_or(0);
                Self::ALL[(idx + 1) % Self::ALL.len()]
            }
        }
    }
}

/// "Your Details" form for applicant 1
#[derive(Debug, Clone, Default)]
pub struct PrimaryApplicantForm {
    pub full_name: InputBuffer,
    pub email: InputBuffer,
    pub phone: InputBuffer,
    /// YYYY-MM-DD
    pub date_of_birth: InputBuffer,
    pub address: InputBuffer,
    pub employment: Option<EmploymentStatus>,
}

impl PrimaryApplicantForm {
    pub const LABELS: [&'static str; 6] = [
        "Full Name",
        "Email",
        "Phone",
        "Date of Birth",
        "Address",
        "Employment",
    ];

    pub const EMPLOYMENT_FIELD: usize = 5;

    pub fn field_mut(&mut self, idx: usize) -> Option<&mut InputBuffer> {
        match idx {
            0 => Some(&mut self.full_name),
            1 => Some(&mut self.email),
            2 => Some(&mut self.phone),
            3 => Some(&mut self.date_of_birth),
            4 => Some(&mut self.address),
            _ => None,
        }
    }

    pub fn field(&self, idx: usize) -> Option<&InputBuffer> {
        match idx {
            0 => Some(&self.full_name),
            1 => Some(&self.email),
            2 => Some(&self.phone),
            3 => Some(&self.date_of_birth),
            4 => Some(&self.address),
            _ => None,
        }
    }

    pub fn validate(&self, rules: &ApplicantConfig, today: NaiveDate) -> ValidationResult {
        let mut errors = Vec::new();

        if self.full_name.trimmed().chars().count() < rules.min_name_length {
            errors.push(format!(
                "Full name must be at least {} characters",
                rules.min_name_length
            ));
        }

        if !is_valid_email(self.email.content()) {
            errors.push("Invalid email address".to_string());
        }

        if digit_count(self.phone.content()) < rules.min_phone_digits {
            errors.push(format!(
                "Phone number must be at least {} digits",
                rules.min_phone_digits
            ));
        }

        match NaiveDate::parse_from_str(self.date_of_birth.trimmed(), DOB_FORMAT) {
            Ok(dob) => match today.years_since(dob) {
                Some(age) if age >= rules.min_age => {}
                Some(_) => errors.push(format!("Applicant must be at least {}", rules.min_age)),
                None => errors.push("Date of birth is in the future".to_string()),
            },
            Err(_) => errors.push("Invalid date of birth (use YYYY-MM-DD)".to_string()),
        }

        if self.address.trimmed().chars().count() < rules.min_address_length {
            errors.push("Address is too short".to_string());
        }

        if self.employment.is_none() {
            errors.push("Please select employment status".to_string());
        }

        ValidationResult::from_errors(errors)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SecondApplicantMode {
    #[default]
    ProvideDetails,
    SendInvite,
}

impl SecondApplicantMode {
    pub fn label(&self) -> &'static str {
        match self {
            SecondApplicantMode::ProvideDetails => "I will provide details for Applicant 2 now",
            SecondApplicantMode::SendInvite => "Send an invitation to Applicant 2",
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            SecondApplicantMode::ProvideDetails => SecondApplicantMode::SendInvite,
            SecondApplicantMode::SendInvite => SecondApplicantMode::ProvideDetails,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct SecondApplicantForm {
    pub mode: SecondApplicantMode,
    pub full_name: InputBuffer,
    pub email: InputBuffer,
}

impl SecondApplicantForm {
    pub const MODE_FIELD: usize = 0;

    pub fn field_mut(&mut self, idx: usize) -> Option<&mut InputBuffer> {
        match idx {
            1 => Some(&mut self.full_name),
            2 => Some(&mut self.email),
            _ => None,
        }
    }

    pub fn validate(&self, rules: &ApplicantConfig) -> ValidationResult {
        let mut errors = Vec::new();

        if self.mode == SecondApplicantMode::ProvideDetails
            && self.full_name.trimmed().chars().count() < rules.min_name_length
        {
            errors.push(format!(
                "Applicant 2 name must be at least {} characters",
                rules.min_name_length
            ));
        }

        if !is_valid_email(self.email.content()) {
            errors.push("Applicant 2 needs a valid email address".to_string());
        }

        ValidationResult::from_errors(errors)
    }
}

/// Identification documents for both applicants, as local file paths
#[derive(Debug, Clone, Default)]
pub struct DocumentsForm {
    pub primary_id: InputBuffer,
    pub second_id: InputBuffer,
}

impl DocumentsForm {
    pub fn field_mut(&mut self, idx: usize) -> Option<&mut InputBuffer> {
        match idx {
            0 => Some(&mut self.primary_id),
            1 => Some(&mut self.second_id),
            _ => None,
        }
    }

    pub fn validate(&self, rules: &DocumentsConfig) -> ValidationResult {
        let mut errors = Vec::new();
        for (who, buffer) in [("Applicant 1", &self.primary_id), ("Applicant 2", &self.second_id)] {
            if let Err(problem) = check_document(buffer.trimmed(), rules) {
                errors.push(format!("{who} ID: {problem}"));
            }
        }
        ValidationResult::from_errors(errors)
    }
}

fn check_document(path: &str, rules: &DocumentsConfig) -> Result<(), String> {
    if path.is_empty() {
        return Err("no document attached".to_string());
    }

    let path = Path::new(path);
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .unwrap_or_default();
    if !rules.accepts_extension(extension) {
        return Err(format!(
            "accepted formats are {}",
            rules.accepted_extensions.join(", ")
        ));
    }

    let metadata = std::fs::metadata(path).map_err(|_| "file not found".to_string())?;
    if !metadata.is_file() {
        return Err("not a file".to_string());
    }
    if metadata.len() > rules.max_size_bytes() {
        return Err(format!("larger than {} MB", rules.max_size_mb));
    }
    Ok(())
}

/// Acknowledgements on the last step
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReviewForm {
    pub accuracy_confirmed: bool,
    pub terms_accepted: bool,
}

impl ReviewForm {
    pub fn toggle(&mut self, idx: usize) {
        match idx {
            0 => self.accuracy_confirmed = !self.accuracy_confirmed,
            1 => self.terms_accepted = !self.terms_accepted,
            _ => {}
        }
    }

    pub fn validate(&self) -> ValidationResult {
        ValidationResult::all([
            (self.accuracy_confirmed, "Confirm the information is accurate"),
            (self.terms_accepted, "Accept the Terms and Conditions"),
        ])
    }
}

/// All form state of one application, plus the rules it is judged by
#[derive(Debug, Clone)]
pub struct ApplicationForms {
    pub primary: PrimaryApplicantForm,
    pub second: SecondApplicantForm,
    pub documents: DocumentsForm,
    pub review: ReviewForm,
    applicant_rules: ApplicantConfig,
    document_rules: DocumentsConfig,
    today: NaiveDate,
}

impl ApplicationForms {
    pub fn new(config: &ApplicationConfig, today: NaiveDate) -> Self {
        Self {
            primary: PrimaryApplicantForm::default(),
            second: SecondApplicantForm::default(),
            documents: DocumentsForm::default(),
            review: ReviewForm::default(),
            applicant_rules: config.applicant.clone(),
            document_rules: config.documents.clone(),
            today,
        }
    }

    pub fn validate_step(&self, step: ApplicationStep) -> ValidationResult {
        match step {
            ApplicationStep::Introduction => ValidationResult::valid(),
            ApplicationStep::PrimaryApplicant => {
                self.primary.validate(&self.applicant_rules, self.today)
            }
            ApplicationStep::SecondApplicant => self.second.validate(&self.applicant_rules),
            ApplicationStep::Documents => self.documents.validate(&self.document_rules),
            ApplicationStep::ReviewAndSubmit => self.review.validate(),
        }
    }
}

impl StepValidator for ApplicationForms {
    fn validate(&self, _index: usize, step: &StepDef) -> ValidationResult {
        match ApplicationStep::from_id(step.id) {
            Some(step) => self.validate_step(step),
            None => ValidationResult::invalid(format!("unknown step {}", step.id)),
        }
    }
}
