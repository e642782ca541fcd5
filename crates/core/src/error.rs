//! Error types for the submission boundary.

use thiserror::Error;

/// Failure crossing the submit transport boundary.
///
/// The controller never surfaces the detail to the user; it collapses any
/// failure into `SubmissionStatus::Error` and a generic banner message.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SubmitError {
    /// The transport reported or threw a delivery failure
    #[error("delivery failed: {0}")]
    Delivery(String),
}

/// Generic user-facing banner text for a failed submission.
pub const SUBMIT_ERROR_MESSAGE: &str =
    "There was an error sending your message. Please try again later.";

/// User-facing banner text for a successful submission.
pub const SUBMIT_SUCCESS_MESSAGE: &str =
    "Thank you for your message. I will get back to you as soon as possible.";
