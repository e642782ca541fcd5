//! # Lumen Core
//!
//! The engine behind the Lumen contact surface - form state, validation
//! rules, and the submission lifecycle, headless and view-framework
//! agnostic.
//!
//! ## Architecture
//!
//! - `form/` - Field state, validation, the controller, and feedback events
//! - `transport` - The injected asynchronous submit collaborator boundary
//! - `animation` - Declarative animation directives the view layer plays
//! - `config` - Controller tunables (feedback timeout, shake/confetti)
//!
//! ## Usage
//!
//! ```rust,ignore
//! use lumen_core::form::{FieldName, FormController};
//!
//! let (tx, rx) = tokio::sync::mpsc::channel(64);
//! let form = FormController::new().with_event_channel(tx);
//! form.on_change(FieldName::Email, "jo@example.com").await;
//! form.submit().await;
//! ```

pub mod animation;
pub mod config;
pub mod error;
pub mod form;
pub mod transport;

pub use animation::{AnimationDirective, ConfettiBurst, Easing};
pub use config::FormConfig;
pub use error::SubmitError;
pub use form::{
    FieldName, FormController, FormEvent, FormEventKind, FormField, FormSnapshot, FormState,
    SubmissionStatus,
};
pub use transport::{ContactMessage, SimulatedTransport, SubmitTransport};
