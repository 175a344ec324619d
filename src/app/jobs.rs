//! Background network jobs.
//!
//! All backend calls are blocking, so they run on spawned worker threads and
//! report back through an [`mpsc`] channel the event loop drains every tick.
//! The UI thread never blocks on the network: the roster may still be
//! loading while the user is mid-selection of a file.

use std::sync::mpsc;
use std::thread;

use crate::api::{Agent, ApiError, ConcurrencyInfo, Health, LeadStats, UploadReceipt};

use super::state::{Generation, Section};

/// Completion of a background network job.
///
/// Roster and upload completions carry the generation current when the job
/// was dispatched; [`crate::app::App::apply_net_event`] drops stale ones.
#[derive(Debug)]
pub enum NetEvent {
    /// An agent roster fetch finished for one of the two sections.
    RosterLoaded {
        /// Section whose view issued the fetch.
        section: Section,
        /// Request generation at dispatch time.
        generation: Generation,
        /// Fetch result.
        result: Result<Vec<Agent>, ApiError>,
    },
    /// The lead-stats fetch finished.
    StatsLoaded {
        /// Request generation at dispatch time.
        generation: Generation,
        /// Fetch result.
        result: Result<LeadStats, ApiError>,
    },
    /// The concurrency fetch finished.
    ConcurrencyLoaded {
        /// Request generation at dispatch time.
        generation: Generation,
        /// Fetch result.
        result: Result<ConcurrencyInfo, ApiError>,
    },
    /// The backend health probe finished.
    HealthChecked {
        /// Request generation at dispatch time.
        generation: Generation,
        /// Probe result.
        result: Result<Health, ApiError>,
    },
    /// The lead upload finished.
    UploadFinished {
        /// Submission generation at dispatch time.
        generation: Generation,
        /// Upload result.
        result: Result<UploadReceipt, ApiError>,
    },
    /// The manual calling batch trigger finished.
    BatchTriggered {
        /// Trigger result.
        result: Result<(), ApiError>,
    },
}

/// Spawns network jobs on worker threads and funnels their completions into
/// the event loop's channel.
#[derive(Debug, Clone)]
pub struct Dispatcher {
    events: mpsc::Sender<NetEvent>,
}

impl Dispatcher {
    /// Create a dispatcher feeding `events`.
    #[must_use]
    pub const fn new(events: mpsc::Sender<NetEvent>) -> Self {
        Self { events }
    }

    /// Run `job` on a worker thread and deliver its completion.
    ///
    /// A send failure means the receiver is gone (the application is
    /// exiting), so the result is silently discarded.
    pub fn spawn<F>(&self, job: F)
    where
        F: FnOnce() -> NetEvent + Send + 'static,
    {
        let events = self.events.clone();
        thread::spawn(move || {
            let _ = events.send(job());
        });
    }
}
