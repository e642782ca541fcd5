//! # Feedback Events
//!
//! Transient feedback signals streamed to the view layer: shakes for
//! rejected input, a confetti burst for a delivered message, and status
//! transitions for the banner.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::field::FieldName;
use super::state::SubmissionStatus;
use crate::animation::{AnimationDirective, ConfettiBurst};
use crate::error::{SUBMIT_ERROR_MESSAGE, SUBMIT_SUCCESS_MESSAGE};

/// Kind of form feedback event
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum FormEventKind {
    /// A touched field revalidated to an error
    FieldShake,
    /// Submit was rejected by validation
    FormShake,
    /// A message was delivered; play the celebration once
    ConfettiBurst,
    /// The submission status changed
    StatusChanged,
}

/// A feedback event for the view layer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormEvent {
    /// Unique event ID
    pub id: String,
    /// Timestamp
    pub timestamp: DateTime<Utc>,
    /// Kind of event
    pub kind: FormEventKind,
    /// Associated data (JSON)
    #[serde(default)]
    pub data: Option<serde_json::Value>,
}

impl FormEvent {
    /// Create a new event
    pub fn new(kind: FormEventKind) -> Self {
        Self {
            id: event_id(),
            timestamp: Utc::now(),
            kind,
            data: None,
        }
    }

    /// Attach data to the event
    pub fn with_data(mut self, data: serde_json::Value) -> Self {
        self.data = Some(data);
        self
    }

    /// Shake one field with the given directive
    pub fn field_shake(field: FieldName, directive: &AnimationDirective) -> Self {
        Self::new(FormEventKind::FieldShake).with_data(serde_json::json!({
            "field": field.as_str(),
            "directive": directive,
        }))
    }

    /// Shake the whole form with the given directive
    pub fn form_shake(directive: &AnimationDirective) -> Self {
        Self::new(FormEventKind::FormShake).with_data(serde_json::json!({
            "directive": directive,
        }))
    }

    /// One-shot confetti burst
    pub fn confetti(burst: &ConfettiBurst) -> Self {
        Self::new(FormEventKind::ConfettiBurst).with_data(serde_json::json!({
            "burst": burst,
        }))
    }

    /// Status transition; success and error carry the generic banner text
    pub fn status_changed(status: SubmissionStatus) -> Self {
        let banner = match status {
            SubmissionStatus::Success => Some(SUBMIT_SUCCESS_MESSAGE),
            SubmissionStatus::Error => Some(SUBMIT_ERROR_MESSAGE),
            SubmissionStatus::Idle | SubmissionStatus::Submitting => None,
        };
        Self::new(FormEventKind::StatusChanged).with_data(serde_json::json!({
            "status": status.as_str(),
            "banner": banner,
        }))
    }
}

/// Generate a simple unique event ID
fn event_id() -> String {
    use std::time::{Duration, SystemTime, UNIX_EPOCH};
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or(Duration::ZERO)
        .as_nanos();
    format!("{:x}-{:x}", nanos, rand_u32())
}

/// Simple random number (not cryptographic)
fn rand_u32() -> u32 {
    use std::collections::hash_map::RandomState;
    use std::hash::{BuildHasher, Hasher};
    RandomState::new().build_hasher().finish() as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_creation() {
        let event = FormEvent::field_shake(FieldName::Email, &AnimationDirective::field_shake());
        assert_eq!(event.kind, FormEventKind::FieldShake);
        let data = event.data.unwrap();
        assert_eq!(data["field"], "email");
        assert_eq!(data["directive"]["duration_ms"], 400);
    }

    #[test]
    fn test_status_event_payload() {
        let event = FormEvent::status_changed(SubmissionStatus::Success);
        assert_eq!(event.kind, FormEventKind::StatusChanged);
        let data = event.data.unwrap();
        assert_eq!(data["status"], "success");
        assert_eq!(data["banner"], SUBMIT_SUCCESS_MESSAGE);

        let event = FormEvent::status_changed(SubmissionStatus::Submitting);
        assert_eq!(event.data.unwrap()["banner"], serde_json::Value::Null);
    }

    #[test]
    fn test_kind_serialization() {
        let json = serde_json::to_string(&FormEventKind::ConfettiBurst).unwrap();
        assert_eq!(json, "\"confetti_burst\"");
    }
}
