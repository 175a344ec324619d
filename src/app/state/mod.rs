//! Application state.
//!
//! The main [`App`] struct aggregates per-section view states plus the
//! overlay selector states, organized into focused modules by domain.

mod campaign;
mod loading;
mod picker;
mod roster;

pub use campaign::{CampaignState, Outcome, OutcomeKind, PendingUpload, SubmitStatus};
pub use loading::{Generation, LoadState};
pub use picker::{AgentSelectorState, FilePickerState};
pub use roster::RosterState;

use crate::api::Health;
use crate::config::Config;

use super::jobs::NetEvent;

/// Top-level sections of the console.
///
/// A closed enumeration: navigation is matched exhaustively, and the CLI
/// rejects unknown section names at parse time rather than falling back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum Section {
    /// Read-only roster of configured voice agents.
    #[default]
    Dashboard,
    /// CSV upload form for launching a calling campaign.
    CreateCampaign,
}

impl Section {
    /// The other section (for Tab cycling between the two).
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Dashboard => Self::CreateCampaign,
            Self::CreateCampaign => Self::Dashboard,
        }
    }
}

impl std::fmt::Display for Section {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Dashboard => write!(f, "Dashboard"),
            Self::CreateCampaign => write!(f, "New Campaign"),
        }
    }
}

/// Application mode: normal operation or one of the modal overlays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Normal operation.
    #[default]
    Normal,
    /// Choosing a CSV file for the campaign form.
    FilePicker,
    /// Choosing an agent for the campaign form.
    AgentSelector,
    /// Confirming a manual calling batch trigger.
    ConfirmBatch,
    /// Showing the help overlay.
    Help,
}

/// Main application state.
#[derive(Debug)]
pub struct App {
    /// Application configuration.
    pub config: Config,
    /// Currently active section.
    pub section: Section,
    /// Current mode (normal or a modal overlay).
    pub mode: Mode,
    /// Whether the application should quit.
    pub should_quit: bool,
    /// Dashboard view state.
    pub roster: RosterState,
    /// Campaign form view state.
    pub campaign: CampaignState,
    /// Backend health probe result (status bar indicator).
    pub health: LoadState<Health>,
    /// CSV file picker overlay state.
    pub file_picker: FilePickerState,
    /// Agent selector overlay state.
    pub agent_selector: AgentSelectorState,
    /// Transient status-bar message (batch trigger feedback).
    pub status_message: Option<String>,
    health_generation: Generation,
}

impl App {
    /// Create the application opened on `section`.
    #[must_use]
    pub fn new(config: Config, section: Section) -> Self {
        Self {
            config,
            section,
            mode: Mode::Normal,
            should_quit: false,
            roster: RosterState::default(),
            campaign: CampaignState::default(),
            health: LoadState::Loading,
            file_picker: FilePickerState::default(),
            agent_selector: AgentSelectorState::default(),
            status_message: None,
            health_generation: Generation::default(),
        }
    }

    /// Start a health probe; returns the generation for its completion.
    pub fn begin_health_check(&mut self) -> Generation {
        self.health = LoadState::Loading;
        self.health_generation.advance()
    }

    /// Route a network completion to the state that owns it.
    ///
    /// Completions are tagged with the section and generation that issued
    /// them, so results land only in the view (and request lifetime) they
    /// belong to.
    pub fn apply_net_event(&mut self, event: NetEvent) {
        match event {
            NetEvent::RosterLoaded {
                section: Section::Dashboard,
                generation,
                result,
            } => self.roster.finish_agents_load(generation, result),
            NetEvent::RosterLoaded {
                section: Section::CreateCampaign,
                generation,
                result,
            } => self.campaign.finish_agents_load(generation, result),
            NetEvent::StatsLoaded { generation, result } => {
                self.roster.finish_stats_load(generation, result);
            }
            NetEvent::ConcurrencyLoaded { generation, result } => {
                self.roster.finish_concurrency_load(generation, result);
            }
            NetEvent::HealthChecked { generation, result } => {
                if generation == self.health_generation {
                    self.health = match result {
                        Ok(health) => LoadState::Loaded(health),
                        Err(err) => LoadState::Failed(err.to_string()),
                    };
                }
            }
            NetEvent::UploadFinished { generation, result } => {
                self.campaign.finish_submit(generation, result);
            }
            NetEvent::BatchTriggered { result } => {
                self.status_message = Some(match result {
                    Ok(()) => "Calling batch triggered".to_string(),
                    Err(err) => format!("Batch trigger failed: {err}"),
                });
            }
        }
    }

    /// Open the CSV file picker over the configured leads directory.
    pub fn open_file_picker(&mut self) {
        self.file_picker = FilePickerState::scan(&self.config.leads_dir);
        self.mode = Mode::FilePicker;
    }

    /// Open the agent selector over the campaign view's loaded roster.
    ///
    /// A no-op while the roster is loading or failed: the control can only
    /// offer ids that were actually loaded.
    pub fn open_agent_selector(&mut self) {
        if let LoadState::Loaded(agents) = &self.campaign.agents {
            self.agent_selector = AgentSelectorState::with_agents(agents.clone());
            self.mode = Mode::AgentSelector;
        }
    }

    /// Apply the file picker's highlighted entry to the form and close it.
    pub fn confirm_file_selection(&mut self) {
        if let Some(file) = self.file_picker.selected() {
            self.campaign.select_file(file.to_path_buf());
        }
        self.mode = Mode::Normal;
    }

    /// Apply the agent selector's highlighted entry to the form and close it.
    pub fn confirm_agent_selection(&mut self) {
        if let Some(agent) = self.agent_selector.selected() {
            self.campaign.select_agent(agent.id.clone());
        }
        self.mode = Mode::Normal;
    }

    /// Dismiss the current overlay.
    pub fn close_overlay(&mut self) {
        self.mode = Mode::Normal;
    }
}
