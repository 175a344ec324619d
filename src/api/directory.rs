//! The agent directory capability.

use std::fmt;

use super::error::ApiError;
use super::types::Agent;

/// Source of the configured voice-agent roster.
///
/// Both the dashboard and the campaign form fetch their roster through this
/// seam rather than talking to the HTTP client directly, so the fetch
/// contract (one request per activation, loading/error surfaced to the view,
/// no retry) is defined once. Each consumer keeps its own loaded copy; the
/// directory does not cache.
pub trait AgentDirectory: Send + Sync + fmt::Debug {
    /// Fetch the current agent roster.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] when the backend rejects the request or is
    /// unreachable. Callers surface the message and wait for the user to
    /// retry; the directory itself never does.
    fn list(&self) -> Result<Vec<Agent>, ApiError>;
}
