//! Campaign creation view state: the file + agent form and its submission
//! lifecycle.

use std::path::PathBuf;

use crate::api::{Agent, ApiError, UploadReceipt};

use super::loading::{Generation, LoadState};

/// Whether a submission is currently in flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmitStatus {
    /// No submission running; the form accepts a new attempt.
    #[default]
    Idle,
    /// A single upload is in flight; further attempts are ignored.
    Submitting,
}

/// Styling class of a submission outcome message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutcomeKind {
    /// The campaign was created.
    Success,
    /// Validation, rejection, or transport failure.
    Error,
}

/// Message shown after a submit attempt.
///
/// Cleared only by the next submit attempt, never auto-dismissed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    /// Success or error styling.
    pub kind: OutcomeKind,
    /// User-facing text.
    pub text: String,
}

impl Outcome {
    /// A success outcome.
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            kind: OutcomeKind::Success,
            text: text.into(),
        }
    }

    /// An error outcome.
    pub fn error(text: impl Into<String>) -> Self {
        Self {
            kind: OutcomeKind::Error,
            text: text.into(),
        }
    }

    /// Whether this outcome carries success styling.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self.kind, OutcomeKind::Success)
    }
}

/// An upload the handler should dispatch, produced by a successful guard
/// pass in [`CampaignState::begin_submit`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingUpload {
    /// The CSV to send.
    pub file: PathBuf,
    /// The chosen agent id.
    pub agent_id: String,
    /// Tag the completion must carry to be applied.
    pub generation: Generation,
}

/// State owned by the campaign creation section.
///
/// Four orthogonal axes: the view's own roster copy, the selected file, the
/// selected agent id, and the submission status plus its last outcome.
#[derive(Debug, Clone, Default)]
pub struct CampaignState {
    /// This view's independent copy of the agent roster.
    pub agents: LoadState<Vec<Agent>>,
    /// The CSV chosen for upload, if any.
    pub selected_file: Option<PathBuf>,
    /// The chosen agent id, if any. Never auto-selected.
    pub selected_agent_id: Option<String>,
    /// Submission status; at most one upload is in flight.
    pub submit: SubmitStatus,
    /// Outcome of the last submit attempt.
    pub outcome: Option<Outcome>,
    agents_generation: Generation,
    submit_generation: Generation,
}

impl CampaignState {
    /// Start this view's roster fetch.
    pub fn begin_agents_load(&mut self) -> Generation {
        self.agents = LoadState::Loading;
        self.agents_generation.advance()
    }

    /// Apply a roster fetch completion. Stale generations are dropped.
    ///
    /// A load failure replaces the selector with an error message; it does
    /// not touch the file selection.
    pub fn finish_agents_load(
        &mut self,
        generation: Generation,
        result: Result<Vec<Agent>, ApiError>,
    ) {
        if generation != self.agents_generation {
            tracing::debug!("dropping stale campaign roster result");
            return;
        }
        self.agents = match result {
            Ok(agents) => LoadState::Loaded(agents),
            Err(err) => LoadState::Failed(format!("Failed to load agents: {err}")),
        };
    }

    /// Invalidate a pending roster fetch (section deactivated).
    pub fn invalidate_agents(&mut self) {
        self.agents_generation.advance();
    }

    /// Replace the selected file unconditionally.
    pub fn select_file(&mut self, file: PathBuf) {
        self.selected_file = Some(file);
    }

    /// Replace the selected agent unconditionally.
    pub fn select_agent(&mut self, agent_id: String) {
        self.selected_agent_id = Some(agent_id);
    }

    /// Whether the submit control is enabled: file set, agent set, and no
    /// submission in flight.
    #[must_use]
    pub fn can_submit(&self) -> bool {
        self.selected_file.is_some()
            && self.selected_agent_id.is_some()
            && self.submit == SubmitStatus::Idle
    }

    /// Run the submit guards and, if they pass, transition to `Submitting`.
    ///
    /// Guard order: file first, then agent. A failed guard records a
    /// validation outcome and returns `None` without any network contact.
    /// While a submission is in flight the attempt is ignored entirely (the
    /// control is disabled; the previous outcome is not disturbed).
    pub fn begin_submit(&mut self) -> Option<PendingUpload> {
        if self.submit == SubmitStatus::Submitting {
            return None;
        }
        let Some(file) = self.selected_file.clone() else {
            self.outcome = Some(Outcome::error("Select a CSV file of leads first"));
            return None;
        };
        let Some(agent_id) = self.selected_agent_id.clone() else {
            self.outcome = Some(Outcome::error("Select an agent first"));
            return None;
        };

        self.outcome = None;
        self.submit = SubmitStatus::Submitting;
        Some(PendingUpload {
            file,
            agent_id,
            generation: self.submit_generation.advance(),
        })
    }

    /// Apply an upload completion. Stale generations are dropped.
    ///
    /// Success clears the file (a new campaign needs a fresh CSV) but keeps
    /// the agent. Failure keeps both so the user can retry as-is.
    pub fn finish_submit(&mut self, generation: Generation, result: Result<UploadReceipt, ApiError>) {
        if generation != self.submit_generation || self.submit != SubmitStatus::Submitting {
            tracing::debug!("dropping stale upload result");
            return;
        }
        self.submit = SubmitStatus::Idle;
        match result {
            Ok(receipt) => {
                let count = receipt.lead_ids.len();
                let noun = if count == 1 { "lead" } else { "leads" };
                self.outcome = Some(Outcome::success(format!(
                    "Campaign created: {count} {noun} queued for calling"
                )));
                self.selected_file = None;
            }
            Err(err) => {
                self.outcome = Some(Outcome::error(format!("Upload failed: {err}")));
            }
        }
    }
}
