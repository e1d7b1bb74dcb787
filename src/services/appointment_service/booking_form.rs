use log::{debug, info};

use crate::error::{DraftError, SubmitError};
use crate::models::{AppointmentDraft, DraftField, Locale, SubmissionStatus};
use crate::services::appointment_service::relay::RelayClient;

/// A submission that passed validation and is waiting for the relay.
#[derive(Debug)]
pub struct PendingSubmission {
    generation: u64,
    draft: AppointmentDraft,
}

impl PendingSubmission {
    pub fn draft(&self) -> &AppointmentDraft {
        &self.draft
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }
}

/// State behind one rendered booking form: the draft, the last status and
/// how many requests are in flight.
#[derive(Debug, Clone, Default)]
pub struct BookingForm {
    draft: AppointmentDraft,
    status: SubmissionStatus,
    in_flight: usize,
    generation: u64,
    locale: Locale,
}

impl BookingForm {
    pub fn new(locale: Locale) -> Self {
        Self {
            locale,
            ..Default::default()
        }
    }

    pub fn draft(&self) -> &AppointmentDraft {
        &self.draft
    }

    pub fn status(&self) -> &SubmissionStatus {
        &self.status
    }

    pub fn is_submitting(&self) -> bool {
        self.in_flight > 0
    }

    pub fn update_field(&mut self, field: DraftField, value: &str) -> Result<(), DraftError> {
        self.draft.set(field, value)
    }

    /// Change event keyed by the input's `name` attribute.
    pub fn update_named(&mut self, name: &str, value: &str) -> Result<(), DraftError> {
        let field = name.parse()?;
        self.update_field(field, value)
    }

    /// Validates the draft and snapshots it for sending.
    ///
    /// Every attempt, including one that fails validation, supersedes the
    /// submissions started before it. On a missing required field the
    /// failure status is set here and no request should be made.
    pub fn begin_submit(&mut self) -> Result<PendingSubmission, SubmitError> {
        self.generation += 1;
        self.status = SubmissionStatus::Idle;

        if !self.draft.has_required_fields() {
            self.status = SubmissionStatus::Failure(self.locale.missing_required().to_string());
            return Err(SubmitError::Validation);
        }

        self.in_flight += 1;
        Ok(PendingSubmission {
            generation: self.generation,
            draft: self.draft.clone(),
        })
    }

    /// Applies the relay outcome. Returns false when a newer attempt has
    /// started since, in which case only the in-flight count changes.
    pub fn finish_submit(
        &mut self,
        pending: PendingSubmission,
        outcome: Result<(), SubmitError>,
    ) -> bool {
        self.in_flight = self.in_flight.saturating_sub(1);

        if pending.generation != self.generation {
            debug!(
                "Dropping outcome of submission {} (latest is {})",
                pending.generation, self.generation
            );
            return false;
        }

        self.status = match outcome {
            Ok(()) => {
                self.draft = AppointmentDraft::default();
                SubmissionStatus::Success(self.locale.submitted().to_string())
            }
            Err(err) => SubmissionStatus::Failure(self.failure_message(err)),
        };
        true
    }

    pub async fn submit(&mut self, relay: &RelayClient) -> &SubmissionStatus {
        if let Ok(pending) = self.begin_submit() {
            let outcome = relay.send(pending.draft()).await;
            self.finish_submit(pending, outcome);
        }
        info!("Booking submission finished: {}", self.status);
        &self.status
    }

    fn failure_message(&self, err: SubmitError) -> String {
        match err {
            SubmitError::Validation => self.locale.missing_required().to_string(),
            SubmitError::RelayRejection {
                message: Some(message),
                ..
            } => message,
            SubmitError::RelayRejection { message: None, .. } => self.locale.rejected().to_string(),
            SubmitError::Transport(_) => self.locale.network_error().to_string(),
        }
    }
}
