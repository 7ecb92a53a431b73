//! Inquiry delivery with background progress tracking.
//!
//! The contact form hands a finished [`ContactInquiry`] to an
//! [`InquirySender`] on a background thread and observes the outcome through
//! a message channel polled from the main loop. The bundled
//! [`SimulatedSender`] stands in for a real backend call: it sleeps for a
//! fixed second and always succeeds.

use std::sync::mpsc::{channel, Receiver, Sender, TryRecvError};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use anyhow::Result;
use thiserror::Error;

/// A contact inquiry ready for delivery.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactInquiry {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// Errors the delivery channel can report.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DeliveryError {
    /// The backend rejected or could not accept the inquiry.
    #[error("delivery backend unavailable")]
    Unavailable,
    /// The delivery worker went away without reporting a result.
    #[error("delivery worker disconnected")]
    WorkerGone,
}

/// Abstract delivery capability for contact inquiries.
///
/// Implementations may block; the submission machinery always invokes
/// `send` from a background thread.
pub trait InquirySender: Send + Sync {
    /// Delivers the inquiry, blocking until the outcome is known.
    ///
    /// # Errors
    ///
    /// Returns a [`DeliveryError`] if the inquiry could not be delivered.
    fn send(&self, inquiry: &ContactInquiry) -> Result<(), DeliveryError>;
}

/// Fixed-delay always-succeeds stand-in for a real delivery backend.
#[derive(Debug, Clone)]
pub struct SimulatedSender {
    delay: Duration,
}

impl SimulatedSender {
    /// Creates a sender with a custom delay. Used by tests; the production
    /// default is one second.
    #[must_use]
    pub fn with_delay(delay: Duration) -> Self {
        Self { delay }
    }
}

impl Default for SimulatedSender {
    fn default() -> Self {
        Self {
            delay: Duration::from_millis(1000),
        }
    }
}

impl InquirySender for SimulatedSender {
    fn send(&self, _inquiry: &ContactInquiry) -> Result<(), DeliveryError> {
        thread::sleep(self.delay);
        Ok(())
    }
}

/// Submission status tracking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionStatus {
    /// No submission started
    Idle,
    /// Delivery thread running
    Sending,
    /// Last submission delivered
    Delivered,
    /// Last submission failed
    Failed,
}

/// Tracks one in-flight submission per form instance.
///
/// Owns the receiving end of the delivery channel. Dropping this state tears
/// the channel down, so a delivery completing after teardown has nowhere to
/// report to and is silently discarded.
pub struct SubmissionState {
    /// Current submission status
    pub status: SubmissionStatus,
    /// Message channel receiver for the in-flight delivery
    receiver: Option<Receiver<Result<(), DeliveryError>>>,
    /// Error from the last failed delivery, if any
    pub last_error: Option<DeliveryError>,
}

impl SubmissionState {
    /// Creates a new idle submission state.
    #[must_use]
    pub fn new() -> Self {
        Self {
            status: SubmissionStatus::Idle,
            receiver: None,
            last_error: None,
        }
    }

    /// Checks if a delivery is currently in flight.
    #[must_use]
    pub fn is_sending(&self) -> bool {
        self.status == SubmissionStatus::Sending
    }

    /// Starts a delivery in the background.
    ///
    /// # Errors
    ///
    /// Returns error if a delivery is already in flight; callers gate on
    /// [`Self::is_sending`] so this only trips on a logic error.
    pub fn start(
        &mut self,
        sender: Arc<dyn InquirySender>,
        inquiry: ContactInquiry,
    ) -> Result<()> {
        if self.is_sending() {
            anyhow::bail!("Submission already in progress");
        }

        let (tx, rx) = channel();
        self.receiver = Some(rx);
        self.status = SubmissionStatus::Sending;
        self.last_error = None;

        thread::spawn(move || {
            let result = sender.send(&inquiry);
            // The receiver may be gone if the form was torn down mid-delay;
            // the result is then dropped instead of mutating disposed state.
            report(&tx, result);
        });

        Ok(())
    }

    /// Polls the delivery channel for a completed submission.
    ///
    /// Returns the delivery outcome once, when it arrives; `None` while the
    /// delivery is still in flight or when nothing was started.
    pub fn poll(&mut self) -> Option<Result<(), DeliveryError>> {
        let receiver = self.receiver.as_ref()?;
        match receiver.try_recv() {
            Ok(result) => {
                self.receiver = None;
                match &result {
                    Ok(()) => {
                        self.status = SubmissionStatus::Delivered;
                        self.last_error = None;
                    }
                    Err(e) => {
                        self.status = SubmissionStatus::Failed;
                        self.last_error = Some(e.clone());
                    }
                }
                Some(result)
            }
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Disconnected) => {
                // Worker died without reporting.
                self.receiver = None;
                self.status = SubmissionStatus::Failed;
                self.last_error = Some(DeliveryError::WorkerGone);
                Some(Err(DeliveryError::WorkerGone))
            }
        }
    }
}

impl Default for SubmissionState {
    fn default() -> Self {
        Self::new()
    }
}

fn report(tx: &Sender<Result<(), DeliveryError>>, result: Result<(), DeliveryError>) {
    tx.send(result).ok();
}
