//! # Submit Transport
//!
//! The boundary between the form controller and whatever actually delivers
//! a message. The controller treats implementors as opaque: a network call,
//! a queue write, or a stub are all the same to it.

use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::SubmitError;

/// Plain field values handed to the transport, exactly as entered
/// (no trimming is applied on the way out).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

/// Asynchronous delivery collaborator for the form controller.
///
/// `Ok(true)` means delivered; `Ok(false)` or `Err` both count as failure.
/// The controller invokes `deliver` at most once per validated submit and
/// never retries.
#[async_trait]
pub trait SubmitTransport: Send + Sync {
    async fn deliver(&self, message: &ContactMessage) -> Result<bool, SubmitError>;
}

/// Default transport: waits a fixed simulated delay and succeeds.
///
/// Stands in for a real backend during development and demos, mirroring the
/// contact surface's behavior when no handler is wired up.
#[derive(Debug, Clone)]
pub struct SimulatedTransport {
    delay: Duration,
}

impl SimulatedTransport {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

impl Default for SimulatedTransport {
    fn default() -> Self {
        Self::new(Duration::from_millis(1_500))
    }
}

#[async_trait]
impl SubmitTransport for SimulatedTransport {
    async fn deliver(&self, _message: &ContactMessage) -> Result<bool, SubmitError> {
        tokio::time::sleep(self.delay).await;
        Ok(true)
    }
}
