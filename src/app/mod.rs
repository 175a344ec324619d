//! Application state and behavior.

mod event;
mod handler;
mod jobs;
mod state;

pub use event::{Event, Handler};
pub use handler::Actions;
pub use jobs::{Dispatcher, NetEvent};
pub use state::{
    AgentSelectorState, App, CampaignState, FilePickerState, Generation, LoadState, Mode, Outcome,
    OutcomeKind, PendingUpload, RosterState, Section, SubmitStatus,
};
