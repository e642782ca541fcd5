//! # Form Configuration
//!
//! Tunables for the form controller. Defaults match the observed behavior
//! of the contact surface: a 5 second feedback banner and the standard
//! shake/confetti treatments.

use serde::{Deserialize, Serialize};

use crate::animation::{AnimationDirective, ConfettiBurst};

/// Configuration for a [`FormController`](crate::form::FormController)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FormConfig {
    /// How long a success/error banner stays up before auto-reverting to
    /// idle, unless dismissed earlier
    pub feedback_timeout_ms: u64,
    /// Shake played when a touched field revalidates to an error
    pub field_shake: AnimationDirective,
    /// Shake played when submit is rejected by validation
    pub form_shake: AnimationDirective,
    /// Particle burst played after a successful submission
    pub confetti: ConfettiBurst,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            feedback_timeout_ms: 5_000,
            field_shake: AnimationDirective::field_shake(),
            form_shake: AnimationDirective::form_shake(),
            confetti: ConfettiBurst::default(),
        }
    }
}
