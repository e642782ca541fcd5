//! # Form Controller
//!
//! Owns the contact form state and drives validation, the submission
//! lifecycle, and the transient feedback the view layer renders.
//!
//! State lives behind a single async mutex inside a shared inner, so event
//! handlers take `&self` and an in-flight submission can outlive the view's
//! borrow. At most one submission is ever in flight. The feedback timer
//! holds a weak reference to the inner: a wakeup after teardown is a no-op.

use std::sync::{Arc, Mutex as StdMutex};
use std::time::Duration;

use tokio::sync::{mpsc, Mutex};
use tokio::task::JoinHandle;

use super::events::FormEvent;
use super::field::FieldName;
use super::state::{FormSnapshot, FormState, SubmissionStatus};
use crate::config::FormConfig;
use crate::transport::{ContactMessage, SimulatedTransport, SubmitTransport};

struct FormInner {
    config: FormConfig,
    state: Mutex<FormState>,
    transport: Arc<dyn SubmitTransport>,
    event_tx: Option<mpsc::Sender<FormEvent>>,
    /// Pending auto-reset of the feedback banner; aborted on dismiss,
    /// resubmit, and teardown
    reset_task: StdMutex<Option<JoinHandle<()>>>,
}

/// The contact form controller
pub struct FormController {
    inner: Arc<FormInner>,
}

impl FormController {
    /// Create a controller with the default configuration and the
    /// simulated transport
    pub fn new() -> Self {
        Self::with_config(FormConfig::default())
    }

    /// Create a controller with a custom configuration
    pub fn with_config(config: FormConfig) -> Self {
        Self {
            inner: Arc::new(FormInner {
                config,
                state: Mutex::new(FormState::default()),
                transport: Arc::new(SimulatedTransport::default()),
                event_tx: None,
                reset_task: StdMutex::new(None),
            }),
        }
    }

    /// Set the submit transport
    pub fn with_transport(mut self, transport: Arc<dyn SubmitTransport>) -> Self {
        self.inner_mut().transport = transport;
        self
    }

    /// Set the event channel for streaming feedback to the view layer
    pub fn with_event_channel(mut self, tx: mpsc::Sender<FormEvent>) -> Self {
        self.inner_mut().event_tx = Some(tx);
        self
    }

    /// Builder-time mutable access; the inner is not yet shared
    fn inner_mut(&mut self) -> &mut FormInner {
        Arc::get_mut(&mut self.inner).expect("builder runs before the inner is shared")
    }

    pub fn config(&self) -> &FormConfig {
        &self.inner.config
    }

    /// Read-model for the view layer
    pub async fn snapshot(&self) -> FormSnapshot {
        FormSnapshot::from(&*self.inner.state.lock().await)
    }

    pub async fn status(&self) -> SubmissionStatus {
        self.inner.state.lock().await.status
    }

    pub async fn is_form_valid(&self) -> bool {
        self.inner.state.lock().await.is_form_valid()
    }

    pub async fn completion_percent(&self) -> u8 {
        self.inner.state.lock().await.completion_percent()
    }

    /// Handle an input change: update the value, mark the field touched,
    /// and revalidate. A field that was already touched shakes when it
    /// revalidates to an error.
    pub async fn on_change(&self, field: FieldName, value: impl Into<String>) {
        let shake = {
            let mut state = self.inner.state.lock().await;
            let was_touched = state.field(field).touched;
            let slot = state.field_mut(field);
            slot.value = value.into();
            slot.touched = true;
            state.revalidate(field).is_some() && was_touched
        };

        if shake {
            self.inner
                .emit(FormEvent::field_shake(field, &self.inner.config.field_shake))
                .await;
        }
    }

    /// Handle focus: no validation side effect
    pub async fn on_focus(&self, field: FieldName) {
        self.inner.state.lock().await.field_mut(field).focused = true;
    }

    /// Handle blur: mark touched and revalidate, shaking on error
    pub async fn on_blur(&self, field: FieldName) {
        let shake = {
            let mut state = self.inner.state.lock().await;
            let slot = state.field_mut(field);
            slot.focused = false;
            slot.touched = true;
            state.revalidate(field).is_some()
        };

        if shake {
            self.inner
                .emit(FormEvent::field_shake(field, &self.inner.config.field_shake))
                .await;
        }
    }

    /// Validate everything and, if clean, deliver the message through the
    /// transport. Exactly one delivery per validated pass; a submit while
    /// one is in flight is a no-op.
    pub async fn submit(&self) {
        self.inner.clone().submit().await;
    }

    /// Dismiss the feedback banner immediately, cancelling the auto-reset
    pub async fn dismiss_feedback(&self) {
        self.inner.cancel_reset();
        self.inner.clear_feedback().await;
    }
}

impl Default for FormController {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for FormController {
    fn drop(&mut self) {
        // Timers must not act on stale state after teardown
        self.inner.cancel_reset();
    }
}

impl FormInner {
    #[tracing::instrument(skip(self))]
    async fn submit(self: Arc<Self>) {
        let message = {
            let mut state = self.state.lock().await;

            if state.status.is_submitting() {
                tracing::debug!("submission already in flight, ignoring");
                return;
            }

            let mut has_errors = false;
            for field in FieldName::ALL {
                state.field_mut(field).touched = true;
                if state.revalidate(field).is_some() {
                    has_errors = true;
                }
            }

            if has_errors {
                None
            } else {
                // A pending banner reset must not fire mid-submission
                self.cancel_reset();
                state.status = SubmissionStatus::Submitting;
                Some(ContactMessage {
                    name: state.name.value.clone(),
                    email: state.email.value.clone(),
                    subject: state.subject.value.clone(),
                    message: state.message.value.clone(),
                })
            }
        };

        let Some(message) = message else {
            self.emit(FormEvent::form_shake(&self.config.form_shake)).await;
            return;
        };

        self.emit(FormEvent::status_changed(SubmissionStatus::Submitting))
            .await;

        let delivered = match self.transport.deliver(&message).await {
            Ok(true) => true,
            Ok(false) => {
                tracing::warn!("transport declined delivery");
                false
            }
            Err(e) => {
                tracing::warn!("transport failed: {}", e);
                false
            }
        };

        {
            let mut state = self.state.lock().await;
            if delivered {
                state.status = SubmissionStatus::Success;
                state.reset_fields();
            } else {
                // Fields are left as entered so the user can retry
                state.status = SubmissionStatus::Error;
            }
        }

        if delivered {
            self.emit(FormEvent::status_changed(SubmissionStatus::Success))
                .await;
            self.emit(FormEvent::confetti(&self.config.confetti)).await;
        } else {
            self.emit(FormEvent::status_changed(SubmissionStatus::Error))
                .await;
        }

        Self::schedule_status_reset(&self);
    }

    /// Revert a success/error banner to idle, if one is showing
    async fn clear_feedback(&self) {
        let changed = {
            let mut state = self.state.lock().await;
            match state.status {
                SubmissionStatus::Success | SubmissionStatus::Error => {
                    state.status = SubmissionStatus::Idle;
                    true
                }
                SubmissionStatus::Idle | SubmissionStatus::Submitting => false,
            }
        };

        if changed {
            self.emit(FormEvent::status_changed(SubmissionStatus::Idle))
                .await;
        }
    }

    /// Schedule the banner auto-reset. The task holds a weak reference, so
    /// a wakeup after teardown upgrades to nothing and does nothing.
    fn schedule_status_reset(this: &Arc<Self>) {
        let weak = Arc::downgrade(this);
        let timeout = Duration::from_millis(this.config.feedback_timeout_ms);

        let handle = tokio::spawn(async move {
            tokio::time::sleep(timeout).await;
            if let Some(inner) = weak.upgrade() {
                inner.clear_feedback().await;
            }
        });

        if let Ok(mut slot) = this.reset_task.lock() {
            if let Some(old) = slot.replace(handle) {
                old.abort();
            }
        }
    }

    fn cancel_reset(&self) {
        if let Ok(mut slot) = self.reset_task.lock() {
            if let Some(handle) = slot.take() {
                handle.abort();
            }
        }
    }

    /// Stream an event to the view layer, if a channel is attached
    async fn emit(&self, event: FormEvent) {
        if let Some(tx) = &self.event_tx {
            let _ = tx.send(event).await;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SubmitError;
    use crate::form::events::FormEventKind;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Transport that records every call and returns a fixed outcome
    struct RecordingTransport {
        calls: StdMutex<Vec<ContactMessage>>,
        outcome: Result<bool, SubmitError>,
    }

    impl RecordingTransport {
        fn with_outcome(outcome: Result<bool, SubmitError>) -> Arc<Self> {
            Arc::new(Self {
                calls: StdMutex::new(Vec::new()),
                outcome,
            })
        }

        fn ok() -> Arc<Self> {
            Self::with_outcome(Ok(true))
        }

        fn calls(&self) -> Vec<ContactMessage> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl SubmitTransport for RecordingTransport {
        async fn deliver(&self, message: &ContactMessage) -> Result<bool, SubmitError> {
            self.calls.lock().unwrap().push(message.clone());
            self.outcome.clone()
        }
    }

    /// Transport that blocks until released, for in-flight tests
    #[derive(Default)]
    struct GatedTransport {
        started: AtomicUsize,
        release: tokio::sync::Notify,
    }

    #[async_trait]
    impl SubmitTransport for GatedTransport {
        async fn deliver(&self, _message: &ContactMessage) -> Result<bool, SubmitError> {
            self.started.fetch_add(1, Ordering::SeqCst);
            self.release.notified().await;
            Ok(true)
        }
    }

    fn controller_with(
        transport: Arc<dyn SubmitTransport>,
    ) -> (FormController, mpsc::Receiver<FormEvent>) {
        let (tx, rx) = mpsc::channel(64);
        let controller = FormController::new()
            .with_transport(transport)
            .with_event_channel(tx);
        (controller, rx)
    }

    async fn fill_valid(controller: &FormController) {
        controller.on_change(FieldName::Name, "John ").await;
        controller
            .on_change(FieldName::Email, "john@example.com")
            .await;
        controller.on_change(FieldName::Subject, "A project").await;
        controller
            .on_change(FieldName::Message, "Tell me about your project...")
            .await;
    }

    fn drain(rx: &mut mpsc::Receiver<FormEvent>) -> Vec<FormEventKind> {
        let mut kinds = Vec::new();
        while let Ok(event) = rx.try_recv() {
            kinds.push(event.kind);
        }
        kinds
    }

    #[tokio::test]
    async fn test_change_marks_touched_and_validates() {
        let (controller, _rx) = controller_with(RecordingTransport::ok());
        controller.on_change(FieldName::Name, "J").await;

        let snapshot = controller.snapshot().await;
        assert!(snapshot.name.touched);
        assert_eq!(snapshot.name.error.as_deref(), Some("Name is required"));
        assert_eq!(snapshot.completion_percent, 0);
    }

    #[tokio::test]
    async fn test_first_invalid_change_does_not_shake() {
        let (controller, mut rx) = controller_with(RecordingTransport::ok());

        // Field was untouched before this edit: error yes, shake no
        controller.on_change(FieldName::Name, "J").await;
        assert!(drain(&mut rx).is_empty());

        // Already touched: the second bad edit shakes
        controller.on_change(FieldName::Name, "K").await;
        assert_eq!(drain(&mut rx), vec![FormEventKind::FieldShake]);
    }

    #[tokio::test]
    async fn test_focus_and_blur() {
        let (controller, mut rx) = controller_with(RecordingTransport::ok());

        controller.on_focus(FieldName::Email).await;
        let snapshot = controller.snapshot().await;
        assert!(snapshot.email.focused);
        assert!(!snapshot.email.touched);
        assert!(snapshot.email.error.is_none());
        assert!(drain(&mut rx).is_empty());

        controller.on_blur(FieldName::Email).await;
        let snapshot = controller.snapshot().await;
        assert!(!snapshot.email.focused);
        assert!(snapshot.email.touched);
        assert_eq!(
            snapshot.email.error.as_deref(),
            Some("Please enter a valid email address")
        );
        assert_eq!(drain(&mut rx), vec![FormEventKind::FieldShake]);
    }

    #[tokio::test]
    async fn test_completion_tracks_valid_fields() {
        let (controller, _rx) = controller_with(RecordingTransport::ok());
        assert_eq!(controller.completion_percent().await, 0);

        controller.on_change(FieldName::Name, "Jo").await;
        assert_eq!(controller.completion_percent().await, 25);
        assert!(!controller.is_form_valid().await);

        fill_valid(&controller).await;
        assert_eq!(controller.completion_percent().await, 100);
        assert!(controller.is_form_valid().await);
    }

    #[tokio::test]
    async fn test_submit_with_invalid_fields_aborts() {
        let transport = RecordingTransport::ok();
        let (controller, mut rx) = controller_with(transport.clone());

        controller.on_change(FieldName::Name, "Jo").await;
        drain(&mut rx);
        controller.submit().await;

        // Transport never invoked, every field marked touched
        assert!(transport.calls().is_empty());
        let snapshot = controller.snapshot().await;
        for field in [
            &snapshot.name,
            &snapshot.email,
            &snapshot.subject,
            &snapshot.message,
        ] {
            assert!(field.touched);
        }
        assert_eq!(snapshot.status, SubmissionStatus::Idle);
        assert_eq!(drain(&mut rx), vec![FormEventKind::FormShake]);
    }

    #[tokio::test]
    async fn test_successful_submit_delivers_and_resets() {
        let transport = RecordingTransport::ok();
        let (controller, mut rx) = controller_with(transport.clone());

        fill_valid(&controller).await;
        controller.submit().await;

        // Exactly one call, values exactly as entered (not trimmed)
        let calls = transport.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].name, "John ");
        assert_eq!(calls[0].email, "john@example.com");

        let snapshot = controller.snapshot().await;
        assert_eq!(snapshot.status, SubmissionStatus::Success);
        for field in [
            &snapshot.name,
            &snapshot.email,
            &snapshot.subject,
            &snapshot.message,
        ] {
            assert_eq!(field.value, "");
            assert!(!field.touched);
            assert!(!field.focused);
            assert!(field.error.is_none());
        }

        assert_eq!(
            drain(&mut rx),
            vec![
                FormEventKind::StatusChanged,
                FormEventKind::StatusChanged,
                FormEventKind::ConfettiBurst,
            ]
        );
    }

    #[tokio::test]
    async fn test_declined_delivery_keeps_fields() {
        let transport = RecordingTransport::with_outcome(Ok(false));
        let (controller, mut rx) = controller_with(transport.clone());

        fill_valid(&controller).await;
        controller.submit().await;

        assert_eq!(transport.calls().len(), 1);
        let snapshot = controller.snapshot().await;
        assert_eq!(snapshot.status, SubmissionStatus::Error);
        assert_eq!(snapshot.name.value, "John ");
        assert!(snapshot.name.touched);

        let kinds = drain(&mut rx);
        assert!(!kinds.contains(&FormEventKind::ConfettiBurst));
    }

    #[tokio::test]
    async fn test_transport_failure_sets_error_status() {
        let transport =
            RecordingTransport::with_outcome(Err(SubmitError::Delivery("503".to_string())));
        let (controller, _rx) = controller_with(transport);

        fill_valid(&controller).await;
        controller.submit().await;

        assert_eq!(controller.status().await, SubmissionStatus::Error);
    }

    #[tokio::test]
    async fn test_submit_while_in_flight_is_noop() {
        let transport = Arc::new(GatedTransport::default());
        let (controller, _rx) = controller_with(transport.clone());
        let controller = Arc::new(controller);

        fill_valid(&controller).await;
        let in_flight = {
            let controller = controller.clone();
            tokio::spawn(async move { controller.submit().await })
        };

        while transport.started.load(Ordering::SeqCst) == 0 {
            tokio::task::yield_now().await;
        }
        assert_eq!(controller.status().await, SubmissionStatus::Submitting);

        // Second submit must not reach the transport
        controller.submit().await;
        assert_eq!(transport.started.load(Ordering::SeqCst), 1);

        transport.release.notify_one();
        in_flight.await.unwrap();
        assert_eq!(transport.started.load(Ordering::SeqCst), 1);
        assert_eq!(controller.status().await, SubmissionStatus::Success);
    }

    #[tokio::test(start_paused = true)]
    async fn test_status_auto_resets_after_timeout() {
        let transport = RecordingTransport::ok();
        let (controller, _rx) = controller_with(transport);

        fill_valid(&controller).await;
        controller.submit().await;
        assert_eq!(controller.status().await, SubmissionStatus::Success);

        tokio::time::sleep(Duration::from_millis(4_999)).await;
        assert_eq!(controller.status().await, SubmissionStatus::Success);

        tokio::time::sleep(Duration::from_millis(2)).await;
        assert_eq!(controller.status().await, SubmissionStatus::Idle);
    }

    #[tokio::test(start_paused = true)]
    async fn test_error_status_also_auto_resets() {
        let transport = RecordingTransport::with_outcome(Ok(false));
        let (controller, _rx) = controller_with(transport);

        fill_valid(&controller).await;
        controller.submit().await;
        assert_eq!(controller.status().await, SubmissionStatus::Error);

        tokio::time::sleep(Duration::from_millis(5_001)).await;
        assert_eq!(controller.status().await, SubmissionStatus::Idle);
    }

    #[tokio::test(start_paused = true)]
    async fn test_dismiss_resets_immediately_and_cancels_timer() {
        let transport = RecordingTransport::ok();
        let (controller, mut rx) = controller_with(transport);

        fill_valid(&controller).await;
        controller.submit().await;
        drain(&mut rx);

        controller.dismiss_feedback().await;
        assert_eq!(controller.status().await, SubmissionStatus::Idle);
        assert_eq!(drain(&mut rx), vec![FormEventKind::StatusChanged]);

        // The cancelled timer must not emit a second idle transition
        tokio::time::sleep(Duration::from_millis(6_000)).await;
        assert_eq!(controller.status().await, SubmissionStatus::Idle);
        assert!(drain(&mut rx).is_empty());
    }

    #[tokio::test]
    async fn test_dismiss_while_idle_is_silent() {
        let (controller, mut rx) = controller_with(RecordingTransport::ok());
        controller.dismiss_feedback().await;
        assert_eq!(controller.status().await, SubmissionStatus::Idle);
        assert!(drain(&mut rx).is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_simulated_transport_end_to_end() {
        let (tx, _rx) = mpsc::channel(64);
        let controller = FormController::new().with_event_channel(tx);

        fill_valid(&controller).await;
        controller.submit().await;
        assert_eq!(controller.status().await, SubmissionStatus::Success);
    }
}
