//! # Animation Directives
//!
//! Declarative animation configuration for the view layer. The controller
//! never animates anything itself; it attaches these directives to feedback
//! events and a generic animation scheduler on the view side plays them.

use serde::{Deserialize, Serialize};

/// Easing curve for a directive
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum Easing {
    Linear,
    #[default]
    EaseOut,
    EaseInOut,
}

/// A single declarative animation: animate `property` through `keyframes`
/// over `duration_ms` with the given easing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AnimationDirective {
    /// Property to animate (e.g. "x")
    pub property: String,
    /// Keyframe values, played in order
    pub keyframes: Vec<f64>,
    /// Total duration in milliseconds
    pub duration_ms: u64,
    /// Easing curve
    pub easing: Easing,
}

impl AnimationDirective {
    /// Horizontal shake for a single invalid field
    pub fn field_shake() -> Self {
        Self {
            property: "x".to_string(),
            keyframes: vec![0.0, -5.0, 5.0, -5.0, 5.0, 0.0],
            duration_ms: 400,
            easing: Easing::EaseOut,
        }
    }

    /// Stronger horizontal shake for a rejected submit
    pub fn form_shake() -> Self {
        Self {
            property: "x".to_string(),
            keyframes: vec![0.0, -10.0, 10.0, -10.0, 10.0, 0.0],
            duration_ms: 500,
            easing: Easing::EaseOut,
        }
    }
}

/// Configuration for the one-shot celebratory particle burst emitted after
/// a successful submission.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ConfettiBurst {
    /// Number of particles
    pub particle_count: u32,
    /// Particle palette (CSS hex colors)
    pub colors: Vec<String>,
    /// Particle size range in pixels
    pub min_size_px: u32,
    pub max_size_px: u32,
    /// Per-particle flight duration range in milliseconds
    pub min_duration_ms: u64,
    pub max_duration_ms: u64,
    /// Maximum per-particle start delay in milliseconds
    pub max_delay_ms: u64,
}

impl Default for ConfettiBurst {
    fn default() -> Self {
        Self {
            particle_count: 100,
            colors: vec![
                "#6366F1".to_string(),
                "#EC4899".to_string(),
                "#8B5CF6".to_string(),
                "#10B981".to_string(),
                "#3B82F6".to_string(),
            ],
            min_size_px: 4,
            max_size_px: 12,
            min_duration_ms: 1000,
            max_duration_ms: 3000,
            max_delay_ms: 500,
        }
    }
}
