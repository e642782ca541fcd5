//! Field identity and per-field state.

use serde::{Deserialize, Serialize};

/// The four contact form fields, in display order
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum FieldName {
    Name,
    Email,
    Subject,
    Message,
}

impl FieldName {
    /// All fields in display order
    pub const ALL: [FieldName; 4] = [Self::Name, Self::Email, Self::Subject, Self::Message];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Subject => "subject",
            Self::Message => "message",
        }
    }

    /// Parse an input element name. Unknown names are not fields.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "name" => Some(Self::Name),
            "email" => Some(Self::Email),
            "subject" => Some(Self::Subject),
            "message" => Some(Self::Message),
            _ => None,
        }
    }
}

impl std::fmt::Display for FieldName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// State of a single input
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct FormField {
    /// Current text content
    pub value: String,
    /// True once the field has lost focus or been edited
    pub touched: bool,
    /// True while the input is active
    pub focused: bool,
    /// Current validation message; `None` means valid or not yet validated
    pub error: Option<String>,
}

impl FormField {
    /// A field that is filled and currently error-free
    pub fn is_complete(&self) -> bool {
        !self.value.trim().is_empty() && self.error.is_none()
    }
}
