//! # Contact Form
//!
//! Field state, validation rules, the submission lifecycle, and the
//! feedback events it produces.
//!
//! ## Lifecycle
//!
//! ```text
//! idle → submitting → (success | error) → idle
//! ```

pub mod controller;
pub mod events;
pub mod field;
pub mod state;
pub mod validate;

pub use controller::FormController;
pub use events::{FormEvent, FormEventKind};
pub use field::{FieldName, FormField};
pub use state::{FormSnapshot, FormState, SubmissionStatus};
pub use validate::{validate, validate_named};
