//! HTTP interface to the campaign backend.
//!
//! The backend is an external collaborator; this module only consumes its
//! request/response contracts. No call here retries: every failure is
//! terminal until the user re-initiates the action.

mod client;
mod directory;
mod error;
mod types;

pub use client::ApiClient;
pub use directory::AgentDirectory;
pub use error::ApiError;
pub use types::{Agent, ConcurrencyInfo, Health, LeadStats, UploadReceipt};
