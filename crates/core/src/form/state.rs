//! # Form State
//!
//! The whole-form state: the four fields in display order, the submission
//! status, and the derived values the view renders (completion percent,
//! overall validity).

use serde::{Deserialize, Serialize};

use super::field::{FieldName, FormField};
use super::validate;

/// Submission lifecycle: idle → submitting → (success | error) → idle
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Submitting,
    Success,
    Error,
}

impl SubmissionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Submitting => "submitting",
            Self::Success => "success",
            Self::Error => "error",
        }
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self, Self::Submitting)
    }
}

/// State of the whole contact form
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct FormState {
    pub name: FormField,
    pub email: FormField,
    pub subject: FormField,
    pub message: FormField,
    pub status: SubmissionStatus,
}

impl FormState {
    pub fn field(&self, name: FieldName) -> &FormField {
        match name {
            FieldName::Name => &self.name,
            FieldName::Email => &self.email,
            FieldName::Subject => &self.subject,
            FieldName::Message => &self.message,
        }
    }

    pub fn field_mut(&mut self, name: FieldName) -> &mut FormField {
        match name {
            FieldName::Name => &mut self.name,
            FieldName::Email => &mut self.email,
            FieldName::Subject => &mut self.subject,
            FieldName::Message => &mut self.message,
        }
    }

    /// Fields in display order
    pub fn fields(&self) -> impl Iterator<Item = (FieldName, &FormField)> {
        FieldName::ALL.iter().map(|&name| (name, self.field(name)))
    }

    /// Revalidate one field in place, returning the new error if any.
    pub fn revalidate(&mut self, name: FieldName) -> Option<&'static str> {
        let error = validate::validate(name, &self.field(name).value);
        self.field_mut(name).error = error.map(str::to_string);
        error
    }

    /// Percentage of fields that are both filled and error-free (floored)
    pub fn completion_percent(&self) -> u8 {
        let total = FieldName::ALL.len();
        let complete = self.fields().filter(|(_, f)| f.is_complete()).count();
        (complete * 100 / total) as u8
    }

    /// True iff every field is trimmed-non-empty and error-free
    pub fn is_form_valid(&self) -> bool {
        self.fields().all(|(_, f)| f.is_complete())
    }

    /// Reset every field to empty/untouched/no-error
    pub fn reset_fields(&mut self) {
        for name in FieldName::ALL {
            *self.field_mut(name) = FormField::default();
        }
    }
}

/// Serializable read-model handed to the view layer
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FormSnapshot {
    pub name: FormField,
    pub email: FormField,
    pub subject: FormField,
    pub message: FormField,
    pub status: SubmissionStatus,
    pub completion_percent: u8,
    pub is_valid: bool,
}

impl From<&FormState> for FormSnapshot {
    fn from(state: &FormState) -> Self {
        Self {
            name: state.name.clone(),
            email: state.email.clone(),
            subject: state.subject.clone(),
            message: state.message.clone(),
            status: state.status,
            completion_percent: state.completion_percent(),
            is_valid: state.is_form_valid(),
        }
    }
}
