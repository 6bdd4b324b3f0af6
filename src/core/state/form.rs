use serde::{Deserialize, Serialize};

use crate::core::{cmd::Cmd, msg::form::FormMsg};
use crate::relay::RelaySubmission;

/// How long a success/error banner stays up before the form returns to idle.
pub const STATUS_BANNER_MS: u64 = 3_000;

pub const FORM_SUBJECT: &str = "New Admission Form Submission";

/// The fields of the admission form, in presentation order.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, strum::Display, strum::EnumIter,
)]
pub enum FormField {
    StudentName,
    StudentClass,
    StudentSchool,
    ParentName,
    ParentContact,
    ParentEmail,
    Board,
}

impl FormField {
    /// The field name the relay contract expects.
    pub fn wire_name(&self) -> &'static str {
        match self {
            FormField::StudentName => "student_name",
            FormField::StudentClass => "student_class",
            FormField::StudentSchool => "student_school",
            FormField::ParentName => "parent_name",
            FormField::ParentContact => "parent_contact",
            FormField::ParentEmail => "parent_email",
            FormField::Board => "board",
        }
    }

    pub fn next(self) -> Self {
        use strum::IntoEnumIterator;
        let fields: Vec<FormField> = FormField::iter().collect();
        let pos = fields.iter().position(|f| *f == self).unwrap_or(0);
        fields[(pos + 1) % fields.len()]
    }

    pub fn prev(self) -> Self {
        use strum::IntoEnumIterator;
        let fields: Vec<FormField> = FormField::iter().collect();
        let pos = fields.iter().position(|f| *f == self).unwrap_or(0);
        fields[(pos + fields.len() - 1) % fields.len()]
    }

    pub fn label(&self) -> &'static str {
        match self {
            FormField::StudentName => "Student's Name",
            FormField::StudentClass => "Student's Grade",
            FormField::StudentSchool => "Student's School",
            FormField::ParentName => "Parent's Name",
            FormField::ParentContact => "Parent's Contact",
            FormField::ParentEmail => "Parent's Email",
            FormField::Board => "Board of Education",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdmissionFields {
    pub student_name: String,
    pub student_class: String,
    pub student_school: String,
    pub parent_name: String,
    pub parent_contact: String,
    pub parent_email: String,
    pub board: String,
}

impl AdmissionFields {
    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::StudentName => &self.student_name,
            FormField::StudentClass => &self.student_class,
            FormField::StudentSchool => &self.student_school,
            FormField::ParentName => &self.parent_name,
            FormField::ParentContact => &self.parent_contact,
            FormField::ParentEmail => &self.parent_email,
            FormField::Board => &self.board,
        }
    }

    pub fn set(&mut self, field: FormField, value: String) {
        let slot = match field {
            FormField::StudentName => &mut self.student_name,
            FormField::StudentClass => &mut self.student_class,
            FormField::StudentSchool => &mut self.student_school,
            FormField::ParentName => &mut self.parent_name,
            FormField::ParentContact => &mut self.parent_contact,
            FormField::ParentEmail => &mut self.parent_email,
            FormField::Board => &mut self.board,
        };
        *slot = value;
    }

    pub fn is_complete(&self) -> bool {
        use strum::IntoEnumIterator;
        FormField::iter().all(|field| !self.get(field).trim().is_empty())
    }

    /// Human-readable summary sent as the `message` part of the submission.
    pub fn message_body(&self) -> String {
        format!(
            "Admission Form Submission\n\
             ---------------------------------\n\
             Student's Name: {}\n\
             Student's Class: {}\n\
             Student's School: {}\n\
             Parent's Name: {}\n\
             Parent's Contact: {}\n\
             Parent's Email: {}\n\
             Board of Education: {}",
            self.student_name,
            self.student_class,
            self.student_school,
            self.parent_name,
            self.parent_contact,
            self.parent_email,
            self.board,
        )
    }

    pub fn to_submission(&self) -> RelaySubmission {
        use strum::IntoEnumIterator;
        RelaySubmission {
            subject: FORM_SUBJECT.to_string(),
            fields: FormField::iter()
                .map(|field| (field.wire_name().to_string(), self.get(field).to_string()))
                .collect(),
            message: self.message_body(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    #[error("all fields are required before submitting")]
    IncompleteForm,
    #[error("a submission is already in flight")]
    AlreadySending,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, strum::Display,
)]
pub enum FormStatus {
    #[default]
    Idle,
    Sending,
    Success,
    Error,
}

/// State of the admission form: field values plus a submission status
/// machine (idle → sending → success/error → idle after the banner window).
#[derive(Debug, Clone, PartialEq)]
pub struct FormState {
    fields: AdmissionFields,
    status: FormStatus,
    focused: FormField,
    idle_generation: u64,
    pending_idle: Option<u64>,
}

impl Default for FormState {
    fn default() -> Self {
        Self {
            fields: AdmissionFields::default(),
            status: FormStatus::default(),
            focused: FormField::StudentName,
            idle_generation: 0,
            pending_idle: None,
        }
    }
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fields(&self) -> &AdmissionFields {
        &self.fields
    }

    pub fn status(&self) -> FormStatus {
        self.status
    }

    pub fn focused(&self) -> FormField {
        self.focused
    }

    /// Validate and start a submission. The submission itself travels as a
    /// command; nothing here talks to the relay.
    pub fn submit(&mut self) -> Result<RelaySubmission, FormError> {
        if self.status == FormStatus::Sending {
            return Err(FormError::AlreadySending);
        }
        if !self.fields.is_complete() {
            return Err(FormError::IncompleteForm);
        }
        self.status = FormStatus::Sending;
        Ok(self.fields.to_submission())
    }

    fn finish(&mut self, success: bool) -> u64 {
        self.status = if success {
            FormStatus::Success
        } else {
            FormStatus::Error
        };
        if success {
            // The original clears the form after a successful submission
            self.fields = AdmissionFields::default();
        }
        self.idle_generation += 1;
        self.pending_idle = Some(self.idle_generation);
        self.idle_generation
    }

    /// Form-specific update function
    /// Returns: Generated commands
    pub fn update(&mut self, msg: FormMsg) -> Vec<Cmd> {
        match msg {
            FormMsg::UpdateField { field, value } => {
                self.fields.set(field, value);
                vec![]
            }

            FormMsg::FocusNext => {
                self.focused = self.focused.next();
                vec![]
            }

            FormMsg::FocusPrev => {
                self.focused = self.focused.prev();
                vec![]
            }

            FormMsg::Submit => match self.submit() {
                Ok(submission) => vec![Cmd::SubmitForm { submission }],
                Err(e) => vec![Cmd::LogError {
                    message: format!("form submit rejected: {e}"),
                }],
            },

            FormMsg::SubmissionFinished { success } => {
                let generation = self.finish(success);
                vec![Cmd::ScheduleFormIdle {
                    generation,
                    delay_ms: STATUS_BANNER_MS,
                }]
            }

            FormMsg::IdleFired { generation } => {
                if self.pending_idle == Some(generation) {
                    self.pending_idle = None;
                    self.status = FormStatus::Idle;
                    vec![]
                } else {
                    vec![Cmd::LogInfo {
                        message: format!("ignored stale form idle (generation {generation})"),
                    }]
                }
            }
        }
    }
}
