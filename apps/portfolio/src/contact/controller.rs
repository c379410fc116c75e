//! Submission controller for the contact form.
//!
//! Owns the form record and the [`SubmissionStatus`]. One request at a time:
//! `submit` moves the status to `Submitting` before the network call and the
//! delivery task moves it on to `Success` or `Error` when the call returns.
//! A success clears the form and schedules a reset to `Idle`.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{watch, Mutex};
use tracing::{debug, info, warn};

use crate::contact::form::{ContactForm, FormField};
use crate::contact::status::SubmissionStatus;
use crate::contact::transport::{ContactTransport, SubmitError};

/// How long the "message sent" banner stays up.
pub const SUCCESS_RESET_DELAY: Duration = Duration::from_secs(5);

#[derive(Debug, Default)]
struct Inner {
    form: ContactForm,
    status: SubmissionStatus,
    /// Bumped on every accepted submit; a pending reset only applies to the
    /// submission that scheduled it.
    epoch: u64,
}

#[derive(Clone)]
pub struct SubmissionController {
    inner: Arc<Mutex<Inner>>,
    transport: Arc<dyn ContactTransport>,
    status_tx: Arc<watch::Sender<SubmissionStatus>>,
    reset_delay: Duration,
}

impl SubmissionController {
    pub fn new(transport: Arc<dyn ContactTransport>) -> Self {
        let (status_tx, _) = watch::channel(SubmissionStatus::Idle);
        Self {
            inner: Arc::new(Mutex::new(Inner::default())),
            transport,
            status_tx: Arc::new(status_tx),
            reset_delay: SUCCESS_RESET_DELAY,
        }
    }

    pub fn with_reset_delay(mut self, delay: Duration) -> Self {
        self.reset_delay = delay;
        self
    }

    pub async fn update_field(&self, field: FormField, value: impl Into<String>) {
        self.inner.lock().await.form.set(field, value);
    }

    pub async fn form(&self) -> ContactForm {
        self.inner.lock().await.form.clone()
    }

    pub async fn status(&self) -> SubmissionStatus {
        self.inner.lock().await.status
    }

    /// True while the send control should be disabled.
    pub async fn is_submitting(&self) -> bool {
        self.status().await.is_submitting()
    }

    /// Receiver that observes every status change.
    pub fn subscribe(&self) -> watch::Receiver<SubmissionStatus> {
        self.status_tx.subscribe()
    }

    /// Sends the current form.
    ///
    /// Returns `AlreadySubmitting` without side effects if a request is in
    /// flight. Delivery failures are returned as well as recorded as
    /// `SubmissionStatus::Error`; the form is left untouched for a retry.
    pub async fn submit(&self) -> Result<(), SubmitError> {
        let (form, epoch) = {
            let mut inner = self.inner.lock().await;
            let next = inner.status.begin().ok_or_else(|| {
                debug!("Ignoring submit while a message is in flight");
                SubmitError::AlreadySubmitting
            })?;
            inner.epoch += 1;
            self.set_status(&mut inner, next);
            (inner.form.clone(), inner.epoch)
        };

        info!(epoch, "Submitting contact message");

        // The delivery and the state transition run in their own task, so the
        // request completes and the in-flight state is released even if the
        // caller stops polling this future.
        let controller = self.clone();
        let task = tokio::spawn(async move {
            let outcome = controller.transport.deliver(&form).await;
            controller.complete(epoch, outcome.is_ok()).await;
            outcome
        });

        match task.await {
            Ok(outcome) => outcome,
            Err(e) => {
                warn!("Contact delivery task failed: {e}");
                self.complete(epoch, false).await;
                Err(SubmitError::Aborted)
            }
        }
    }

    async fn complete(&self, epoch: u64, succeeded: bool) {
        let mut inner = self.inner.lock().await;
        if inner.epoch != epoch || !inner.status.is_submitting() {
            return;
        }

        let next = inner.status.finish(succeeded);
        if succeeded {
            inner.form.clear();
            info!(epoch, "Contact message sent");
            self.schedule_reset(epoch);
        } else {
            warn!(epoch, "Contact message failed; form kept for retry");
        }
        self.set_status(&mut inner, next);
    }

    fn schedule_reset(&self, epoch: u64) {
        let controller = self.clone();
        tokio::spawn(async move {
            tokio::time::sleep(controller.reset_delay).await;
            let mut inner = controller.inner.lock().await;
            if inner.epoch == epoch {
                let next = inner.status.reset();
                controller.set_status(&mut inner, next);
            }
        });
    }

    fn set_status(&self, inner: &mut Inner, next: SubmissionStatus) {
        if inner.status != next {
            debug!("Submission status {:?} -> {:?}", inner.status, next);
            inner.status = next;
            self.status_tx.send_replace(next);
        }
    }
}
