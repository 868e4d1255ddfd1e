//! UX survey form: validation, local recording, and backend submission.

use triptide_client::TripTideClient;
use triptide_core::{
    CoreError, SurveyResponse, OUT_OF_RANGE_PROMPT, QUESTION_COUNT, UNANSWERED_PROMPT,
};
use triptide_store::{KeyValueStore, ProfileStore};

/// Revealed once the form has been submitted.
pub const THANK_YOU: &str = "✅ Thank you for your feedback!";

/// What happened to each part of a submission.
///
/// Only validation can stop a submission; every later step is best effort.
#[derive(Debug, Clone, PartialEq)]
pub struct SubmissionReport {
    pub response: SurveyResponse,
    pub avg_score: f64,
    pub profile_recorded: bool,
    /// SUS score sent to the backend, if the submission went through.
    pub sus_score: Option<f64>,
    pub nps_sent: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SurveyState {
    AwaitingSubmit,
    Submitted(SubmissionReport),
}

#[derive(Debug, Clone, PartialEq)]
pub struct SurveyForm {
    state: SurveyState,
}

impl Default for SurveyForm {
    fn default() -> Self {
        Self::new()
    }
}

impl SurveyForm {
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: SurveyState::AwaitingSubmit,
        }
    }

    #[must_use]
    pub fn state(&self) -> &SurveyState {
        &self.state
    }

    /// Confirmation text, visible only after submission.
    #[must_use]
    pub fn status_message(&self) -> Option<&'static str> {
        match self.state {
            SurveyState::AwaitingSubmit => None,
            SurveyState::Submitted(_) => Some(THANK_YOU),
        }
    }

    /// Submits the form. `None` marks an unanswered question.
    ///
    /// # Errors
    ///
    /// Returns [`UNANSWERED_PROMPT`] if a question is blank or
    /// [`OUT_OF_RANGE_PROMPT`] if an answer is outside 1–5; the form then
    /// stays in [`SurveyState::AwaitingSubmit`].
    pub async fn submit<S: KeyValueStore>(
        &mut self,
        answers: &[Option<u8>; QUESTION_COUNT],
        client: &TripTideClient,
        profile: &ProfileStore<S>,
    ) -> Result<SubmissionReport, &'static str> {
        let response = SurveyResponse::from_answers(answers).map_err(|e| {
            tracing::info!(error = %e, "survey rejected");
            match e {
                CoreError::ScoreOutOfRange { .. } => OUT_OF_RANGE_PROMPT,
                _ => UNANSWERED_PROMPT,
            }
        })?;
        let avg_score = response.avg_score();

        let profile_recorded = match profile.set_ux_score(avg_score) {
            Ok(ux) => {
                tracing::debug!(
                    submissions = ux.num_submissions,
                    avg = ux.avg_score,
                    "ux score recorded"
                );
                true
            }
            Err(e) => {
                tracing::warn!(error = %e, "failed to record ux score in profile");
                false
            }
        };

        let sus_score = match client.submit_sus(&response.sus_list()).await {
            Ok(score) => Some(score),
            Err(e) => {
                tracing::warn!(error = %e, "SUS submission failed");
                None
            }
        };

        let nps_sent = match client.submit_nps(response.nps_score()).await {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!(error = %e, "NPS submission failed");
                false
            }
        };

        let report = SubmissionReport {
            response,
            avg_score,
            profile_recorded,
            sus_score,
            nps_sent,
        };
        self.state = SurveyState::Submitted(report.clone());
        Ok(report)
    }
}
