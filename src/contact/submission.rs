//! Submission lifecycle of one contact form instance.
//!
//! ```text
//! Idle --submit--> Submitting --ok--> Success --delay--> Idle
//!                             \-err-> Error   --delay--> Idle
//! ```

use crate::contact::form::{ContactField, ContactForm, ContactFormData};
use crate::contact::transport::ContactTransport;
use crate::i18n::LanguageStrings;
use serde::Serialize;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;
use thiserror::Error;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, error, info};

/// Default time a success/error banner stays up before returning to `Idle`.
pub const STATUS_RESET_DELAY: Duration = Duration::from_secs(5);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SubmissionState {
    Idle,
    Submitting,
    Success,
    Error,
}

impl SubmissionState {
    /// Localized banner for this state, if it shows one.
    pub fn status_message(&self, strings: &LanguageStrings) -> Option<&'static str> {
        match self {
            SubmissionState::Success => Some(strings.success_message),
            SubmissionState::Error => Some(strings.error_message),
            SubmissionState::Idle | SubmissionState::Submitting => None,
        }
    }

    /// Text of the submit button in this state.
    pub fn button_label(&self, strings: &LanguageStrings) -> &'static str {
        match self {
            SubmissionState::Submitting => strings.loading_button,
            _ => strings.submit_button,
        }
    }
}

/// Why a submit request did nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SubmitRejected {
    #[error("a submission is already in flight")]
    InFlight,
    #[error("the form is not valid or has not been filled in")]
    NotReady,
}

/// Drives a [`ContactForm`] through the submission states.
///
/// One controller per mounted form. Dropping it cancels a pending
/// auto-reset, so no timer touches a form that is gone.
pub struct SubmissionController<T: ContactTransport> {
    form: Mutex<ContactForm>,
    transport: T,
    state: Arc<watch::Sender<SubmissionState>>,
    reset_delay: Duration,
    reset_task: Mutex<Option<JoinHandle<()>>>,
}

impl<T: ContactTransport> SubmissionController<T> {
    pub fn new(form: ContactForm, transport: T) -> Self {
        let (state, _) = watch::channel(SubmissionState::Idle);
        Self {
            form: Mutex::new(form),
            transport,
            state: Arc::new(state),
            reset_delay: STATUS_RESET_DELAY,
            reset_task: Mutex::new(None),
        }
    }

    pub fn with_reset_delay(mut self, delay: Duration) -> Self {
        self.reset_delay = delay;
        self
    }

    pub fn state(&self) -> SubmissionState {
        *self.state.borrow()
    }

    /// Receiver notified on every state change.
    pub fn subscribe(&self) -> watch::Receiver<SubmissionState> {
        self.state.subscribe()
    }

    /// Exclusive access to the form, e.g. to apply input events.
    pub fn form(&self) -> MutexGuard<'_, ContactForm> {
        self.form.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn set_field(&self, field: ContactField, value: impl Into<String>) {
        self.form().set_field(field, value);
    }

    /// Whether the submit button is enabled right now.
    pub fn can_submit(&self) -> bool {
        self.form().can_submit(self.state())
    }

    /// Banner to show for the current state.
    pub fn status_message(&self, strings: &LanguageStrings) -> Option<&'static str> {
        self.state().status_message(strings)
    }

    /// Send the current form through the transport.
    ///
    /// Rejected without side effects while a send is in flight or when the
    /// form cannot be submitted. On success the form is cleared; on failure
    /// the typed values stay. Either way the state returns to `Idle` after
    /// the reset delay.
    ///
    /// Dropping the returned future mid-send (a timeout, a `select!`) puts
    /// the controller straight back to `Idle` with the form untouched.
    pub async fn submit(&self) -> Result<SubmissionState, SubmitRejected> {
        let payload = self.begin()?;
        let mut in_flight = InFlightGuard {
            state: &self.state,
            settled: false,
        };

        let next = match self.transport.send(&payload).await {
            Ok(()) => {
                info!("Contact form submitted");
                self.form().reset();
                SubmissionState::Success
            }
            Err(e) => {
                error!("Contact form submission failed: {}", e);
                SubmissionState::Error
            }
        };

        in_flight.settled = true;
        self.state.send_replace(next);
        self.schedule_reset();
        Ok(next)
    }

    /// Check preconditions and enter `Submitting` atomically.
    fn begin(&self) -> Result<ContactFormData, SubmitRejected> {
        let form = self.form();
        let state = self.state();

        if state == SubmissionState::Submitting {
            debug!("Ignoring submit while a submission is in flight");
            return Err(SubmitRejected::InFlight);
        }
        if !form.can_submit(state) {
            return Err(SubmitRejected::NotReady);
        }

        // A banner from the previous attempt is replaced, not reset later
        self.cancel_reset();
        self.state.send_replace(SubmissionState::Submitting);
        Ok(form.data().clone())
    }

    fn schedule_reset(&self) {
        let state = Arc::clone(&self.state);
        let delay = self.reset_delay;

        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            state.send_if_modified(|current| {
                if matches!(current, SubmissionState::Success | SubmissionState::Error) {
                    *current = SubmissionState::Idle;
                    true
                } else {
                    false
                }
            });
        });

        let mut slot = self.reset_task.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(previous) = slot.replace(handle) {
            previous.abort();
        }
    }

    fn cancel_reset(&self) {
        let mut slot = self.reset_task.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(handle) = slot.take() {
            handle.abort();
        }
    }
}

/// Leaves `Submitting` if a send is abandoned before it settles.
struct InFlightGuard<'a> {
    state: &'a watch::Sender<SubmissionState>,
    settled: bool,
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        if !self.settled {
            debug!("Submission abandoned mid-send, back to idle");
            self.state.send_replace(SubmissionState::Idle);
        }
    }
}

impl<T: ContactTransport> Drop for SubmissionController<T> {
    fn drop(&mut self) {
        self.cancel_reset();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contact::schema::ContactSchema;
    use crate::contact::transport::{SimulatedTransport, TransportError};
    use crate::i18n::Language;
    use std::sync::atomic::{AtomicU32, Ordering};
    use tokio::sync::Notify;

    /// Transport that blocks until released and counts calls.
    struct GatedTransport {
        calls: Arc<AtomicU32>,
        gate: Arc<Notify>,
        succeed: bool,
    }

    impl GatedTransport {
        fn new(succeed: bool) -> (Self, Arc<AtomicU32>, Arc<Notify>) {
            let calls = Arc::new(AtomicU32::new(0));
            let gate = Arc::new(Notify::new());
            let transport = Self {
                calls: Arc::clone(&calls),
                gate: Arc::clone(&gate),
                succeed,
            };
            (transport, calls, gate)
        }
    }

    impl ContactTransport for GatedTransport {
        async fn send(&self, _data: &ContactFormData) -> Result<(), TransportError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.gate.notified().await;
            if self.succeed {
                Ok(())
            } else {
                Err(TransportError::Rejected("gate said no".to_string()))
            }
        }
    }

    fn filled_form() -> ContactForm {
        let mut form = ContactForm::new(ContactSchema::for_language(Language::ENGLISH));
        form.set_field(ContactField::Name, "Lucía Gómez");
        form.set_field(ContactField::Email, "lucia@example.com");
        form.set_field(ContactField::Subject, "custom");
        form.set_field(ContactField::Message, "We want a custom route to Oaxaca.");
        form
    }

    // ==================== SubmissionState Tests ====================

    #[test]
    fn test_status_message_per_state() {
        let strings = Language::ENGLISH.strings();
        assert_eq!(SubmissionState::Idle.status_message(strings), None);
        assert_eq!(SubmissionState::Submitting.status_message(strings), None);
        assert_eq!(
            SubmissionState::Success.status_message(strings),
            Some(strings.success_message)
        );
        assert_eq!(
            SubmissionState::Error.status_message(strings),
            Some(strings.error_message)
        );
    }

    #[test]
    fn test_button_label() {
        let strings = Language::SPANISH.strings();
        assert_eq!(SubmissionState::Idle.button_label(strings), "Enviar Mensaje");
        assert_eq!(SubmissionState::Submitting.button_label(strings), "Enviando...");
    }

    // ==================== Precondition Tests ====================

    #[tokio::test]
    async fn test_submit_rejects_untouched_form() {
        let controller = SubmissionController::new(
            ContactForm::new(ContactSchema::for_language(Language::ENGLISH)),
            SimulatedTransport::new(Duration::ZERO),
        );

        assert!(!controller.can_submit());
        assert_eq!(controller.submit().await, Err(SubmitRejected::NotReady));
        assert_eq!(controller.state(), SubmissionState::Idle);
    }

    #[tokio::test]
    async fn test_submit_rejects_invalid_form() {
        let mut form = filled_form();
        form.set_field(ContactField::Message, "1234567890");
        let (transport, calls, _gate) = GatedTransport::new(true);
        let controller = SubmissionController::new(form, transport);

        assert_eq!(controller.submit().await, Err(SubmitRejected::NotReady));
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    // ==================== Lifecycle Tests ====================

    #[tokio::test(start_paused = true)]
    async fn test_success_clears_form_then_returns_to_idle() {
        let strings = Language::ENGLISH.strings();
        let controller = Arc::new(SubmissionController::new(
            filled_form(),
            SimulatedTransport::new(Duration::from_secs(2)),
        ));
        let mut updates = controller.subscribe();

        let task = tokio::spawn({
            let controller = Arc::clone(&controller);
            async move { controller.submit().await }
        });

        updates.changed().await.unwrap();
        assert_eq!(*updates.borrow_and_update(), SubmissionState::Submitting);
        assert!(!controller.can_submit());

        assert_eq!(task.await.unwrap(), Ok(SubmissionState::Success));
        assert_eq!(controller.state(), SubmissionState::Success);
        assert_eq!(controller.status_message(strings), Some(strings.success_message));
        assert!(controller.form().data().is_empty());

        tokio::time::sleep(STATUS_RESET_DELAY + Duration::from_millis(1)).await;
        assert_eq!(controller.state(), SubmissionState::Idle);
        assert_eq!(controller.status_message(strings), None);
    }

    #[tokio::test(start_paused = true)]
    async fn test_error_keeps_form_then_returns_to_idle() {
        let controller = SubmissionController::new(
            filled_form(),
            SimulatedTransport::failing(Duration::from_secs(1)),
        )
        .with_reset_delay(Duration::from_secs(3));

        let before = controller.form().data().clone();
        assert_eq!(controller.submit().await, Ok(SubmissionState::Error));
        assert_eq!(controller.form().data(), &before);
        assert!(controller.can_submit());

        tokio::time::sleep(Duration::from_secs(2)).await;
        assert_eq!(controller.state(), SubmissionState::Error);
        tokio::time::sleep(Duration::from_secs(2)).await;
        assert_eq!(controller.state(), SubmissionState::Idle);
    }

    #[tokio::test]
    async fn test_submit_while_in_flight_is_ignored() {
        let (transport, calls, gate) = GatedTransport::new(true);
        let controller = Arc::new(SubmissionController::new(filled_form(), transport));

        let first = tokio::spawn({
            let controller = Arc::clone(&controller);
            async move { controller.submit().await }
        });

        let mut updates = controller.subscribe();
        updates
            .wait_for(|state| *state == SubmissionState::Submitting)
            .await
            .unwrap();

        assert_eq!(controller.submit().await, Err(SubmitRejected::InFlight));
        assert_eq!(calls.load(Ordering::SeqCst), 1);

        gate.notify_one();
        assert_eq!(first.await.unwrap(), Ok(SubmissionState::Success));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_resubmit_after_error_cancels_pending_reset() {
        let (transport, calls, gate) = GatedTransport::new(false);
        let controller = Arc::new(
            SubmissionController::new(filled_form(), transport)
                .with_reset_delay(Duration::from_secs(5)),
        );

        gate.notify_one();
        assert_eq!(controller.submit().await, Ok(SubmissionState::Error));

        tokio::time::sleep(Duration::from_secs(4)).await;
        let retry = tokio::spawn({
            let controller = Arc::clone(&controller);
            async move { controller.submit().await }
        });
        controller
            .subscribe()
            .wait_for(|state| *state == SubmissionState::Submitting)
            .await
            .unwrap();

        // The first attempt's timer would have fired here
        tokio::time::sleep(Duration::from_secs(2)).await;
        assert_eq!(controller.state(), SubmissionState::Submitting);
        assert_eq!(calls.load(Ordering::SeqCst), 2);

        gate.notify_one();
        assert_eq!(retry.await.unwrap(), Ok(SubmissionState::Error));
    }

    #[tokio::test(start_paused = true)]
    async fn test_abandoned_submit_does_not_lock_the_form() {
        let (transport, calls, gate) = GatedTransport::new(true);
        let controller = SubmissionController::new(filled_form(), transport);
        let before = controller.form().data().clone();

        let attempt = tokio::time::timeout(Duration::from_secs(10), controller.submit()).await;

        assert!(attempt.is_err(), "send should still be pending");
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(controller.state(), SubmissionState::Idle);
        assert_eq!(controller.form().data(), &before);
        assert!(controller.can_submit());

        // A later attempt goes through normally
        gate.notify_one();
        assert_eq!(controller.submit().await, Ok(SubmissionState::Success));
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_drop_cancels_reset_timer() {
        let controller = SubmissionController::new(
            filled_form(),
            SimulatedTransport::new(Duration::ZERO),
        );
        controller.submit().await.unwrap();

        let handle = controller
            .reset_task
            .lock()
            .unwrap()
            .as_ref()
            .map(|h| h.abort_handle())
            .expect("reset should be scheduled");

        drop(controller);
        tokio::task::yield_now().await;
        assert!(handle.is_finished());
    }
}
