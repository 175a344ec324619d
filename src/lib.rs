//! dialout - terminal console for outbound voice-agent calling campaigns.
//!
//! dialout talks to a campaign backend over HTTP: it shows the configured
//! voice agents on a dashboard and lets an operator upload a CSV of leads
//! to launch a calling campaign against a chosen agent.

pub mod api;
pub mod app;
pub mod config;
pub mod tui;

pub use api::{Agent, AgentDirectory, ApiClient, ApiError};
pub use app::{App, Mode, Section};
pub use config::Config;
