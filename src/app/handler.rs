//! Action handlers for the application.
//!
//! [`Actions`] owns the HTTP client and the job dispatcher; every handler
//! mutates view state synchronously and, where a backend call is needed,
//! dispatches it to a worker thread. Completions come back as
//! [`NetEvent`]s through the event loop.

use std::sync::Arc;
use std::sync::mpsc;

use crate::api::{AgentDirectory, ApiClient};

use super::jobs::{Dispatcher, NetEvent};
use super::state::{App, Mode, Section};

/// Handler for application actions.
#[derive(Debug, Clone)]
pub struct Actions {
    api: Arc<ApiClient>,
    directory: Arc<dyn AgentDirectory>,
    jobs: Dispatcher,
}

impl Actions {
    /// Create an action handler; roster fetches go through the client's own
    /// [`AgentDirectory`] implementation.
    #[must_use]
    pub fn new(api: Arc<ApiClient>, events: mpsc::Sender<NetEvent>) -> Self {
        let directory: Arc<dyn AgentDirectory> = api.clone();
        Self {
            api,
            directory,
            jobs: Dispatcher::new(events),
        }
    }

    /// Create an action handler with an explicit agent directory.
    ///
    /// The seam both sections' roster fetches share; tests inject a stub
    /// directory here instead of standing up an HTTP server.
    #[must_use]
    pub fn with_directory(
        api: Arc<ApiClient>,
        directory: Arc<dyn AgentDirectory>,
        events: mpsc::Sender<NetEvent>,
    ) -> Self {
        Self {
            api,
            directory,
            jobs: Dispatcher::new(events),
        }
    }

    /// Switch to `section` and issue its fetches.
    ///
    /// Pending fetches of the section being left are invalidated, so their
    /// completions cannot land in a view the user has navigated away from.
    /// Activating the already-active section refetches it.
    pub fn activate_section(&self, app: &mut App, section: Section) {
        if app.section != section {
            match app.section {
                Section::Dashboard => app.roster.invalidate(),
                Section::CreateCampaign => app.campaign.invalidate_agents(),
            }
            app.section = section;
        }

        self.fetch_roster(app, section);
        if section == Section::Dashboard {
            self.fetch_dashboard_panels(app);
        }
        self.fetch_health(app);
    }

    /// Refetch everything the active section shows.
    pub fn refresh(&self, app: &mut App) {
        self.activate_section(app, app.section);
    }

    fn fetch_roster(&self, app: &mut App, section: Section) {
        let generation = match section {
            Section::Dashboard => app.roster.begin_agents_load(),
            Section::CreateCampaign => app.campaign.begin_agents_load(),
        };
        tracing::debug!(?section, "dispatching roster fetch");
        let directory = Arc::clone(&self.directory);
        self.jobs.spawn(move || NetEvent::RosterLoaded {
            section,
            generation,
            result: directory.list(),
        });
    }

    fn fetch_dashboard_panels(&self, app: &mut App) {
        let stats_generation = app.roster.begin_stats_load();
        let api = Arc::clone(&self.api);
        self.jobs.spawn(move || NetEvent::StatsLoaded {
            generation: stats_generation,
            result: api.lead_stats(),
        });

        let concurrency_generation = app.roster.begin_concurrency_load();
        let api = Arc::clone(&self.api);
        self.jobs.spawn(move || NetEvent::ConcurrencyLoaded {
            generation: concurrency_generation,
            result: api.concurrency(),
        });
    }

    fn fetch_health(&self, app: &mut App) {
        let generation = app.begin_health_check();
        let api = Arc::clone(&self.api);
        self.jobs.spawn(move || NetEvent::HealthChecked {
            generation,
            result: api.health(),
        });
    }

    /// Run the submit guards and dispatch the upload when they pass.
    ///
    /// Guard failures record a validation outcome without touching the
    /// network; a pass sends one multipart POST on a worker thread.
    pub fn submit_campaign(&self, app: &mut App) {
        let Some(pending) = app.campaign.begin_submit() else {
            return;
        };
        tracing::debug!(agent_id = %pending.agent_id, "dispatching lead upload");
        let api = Arc::clone(&self.api);
        self.jobs.spawn(move || NetEvent::UploadFinished {
            generation: pending.generation,
            result: api.upload_leads(&pending.file, &pending.agent_id),
        });
    }

    /// Dispatch the confirmed manual calling batch trigger.
    pub fn trigger_call_batch(&self, app: &mut App) {
        app.mode = Mode::Normal;
        app.status_message = Some("Triggering calling batch...".to_string());
        let api = Arc::clone(&self.api);
        self.jobs.spawn(move || NetEvent::BatchTriggered {
            result: api.trigger_call_batch(),
        });
    }
}
