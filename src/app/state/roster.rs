//! Dashboard view state: the read-only agent roster and campaign activity.

use chrono::{DateTime, Local};

use crate::api::{Agent, ApiError, ConcurrencyInfo, LeadStats};

use super::loading::{Generation, LoadState};

/// State owned by the dashboard section.
///
/// The roster here is deliberately independent from the campaign form's
/// copy: each section fetches fresh on activation and never shares a cache.
#[derive(Debug, Clone, Default)]
pub struct RosterState {
    /// The fetched agent roster.
    pub agents: LoadState<Vec<Agent>>,
    /// Scroll offset into the agent card list.
    pub scroll: usize,
    /// Lead counts per call status.
    pub stats: LoadState<LeadStats>,
    /// Current calling concurrency.
    pub concurrency: LoadState<ConcurrencyInfo>,
    /// When the roster last loaded successfully.
    pub refreshed_at: Option<DateTime<Local>>,
    agents_generation: Generation,
    stats_generation: Generation,
    concurrency_generation: Generation,
}

impl RosterState {
    /// Start a roster fetch: resets the view to loading and returns the
    /// generation the completion must carry.
    pub fn begin_agents_load(&mut self) -> Generation {
        self.agents = LoadState::Loading;
        self.agents_generation.advance()
    }

    /// Apply a roster fetch completion. Stale generations are dropped.
    pub fn finish_agents_load(
        &mut self,
        generation: Generation,
        result: Result<Vec<Agent>, ApiError>,
    ) {
        if generation != self.agents_generation {
            tracing::debug!("dropping stale dashboard roster result");
            return;
        }
        match result {
            Ok(agents) => {
                self.scroll = 0;
                self.refreshed_at = Some(Local::now());
                self.agents = LoadState::Loaded(agents);
            }
            Err(err) => self.agents = LoadState::Failed(format!("Failed to load agents: {err}")),
        }
    }

    /// Start a lead-stats fetch.
    pub fn begin_stats_load(&mut self) -> Generation {
        self.stats = LoadState::Loading;
        self.stats_generation.advance()
    }

    /// Apply a lead-stats completion. Stale generations are dropped.
    pub fn finish_stats_load(&mut self, generation: Generation, result: Result<LeadStats, ApiError>) {
        if generation != self.stats_generation {
            return;
        }
        self.stats = match result {
            Ok(stats) => LoadState::Loaded(stats),
            Err(err) => LoadState::Failed(err.to_string()),
        };
    }

    /// Start a concurrency fetch.
    pub fn begin_concurrency_load(&mut self) -> Generation {
        self.concurrency = LoadState::Loading;
        self.concurrency_generation.advance()
    }

    /// Apply a concurrency completion. Stale generations are dropped.
    pub fn finish_concurrency_load(
        &mut self,
        generation: Generation,
        result: Result<ConcurrencyInfo, ApiError>,
    ) {
        if generation != self.concurrency_generation {
            return;
        }
        self.concurrency = match result {
            Ok(info) => LoadState::Loaded(info),
            Err(err) => LoadState::Failed(err.to_string()),
        };
    }

    /// Invalidate every pending fetch owned by this view.
    ///
    /// Called when the section deactivates, so completions from the previous
    /// activation cannot land in a view the user has left.
    pub fn invalidate(&mut self) {
        self.agents_generation.advance();
        self.stats_generation.advance();
        self.concurrency_generation.advance();
    }

    /// Scroll the card list down, clamped to the roster length.
    pub fn scroll_down(&mut self) {
        let len = self.agents.loaded().map_or(0, Vec::len);
        if self.scroll + 1 < len {
            self.scroll += 1;
        }
    }

    /// Scroll the card list up.
    pub fn scroll_up(&mut self) {
        self.scroll = self.scroll.saturating_sub(1);
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn agent(id: &str) -> Agent {
        Agent {
            id: id.to_string(),
            name: None,
        }
    }

    #[test]
    fn load_success_resets_scroll_and_stamps_time() {
        let mut roster = RosterState::default();
        roster.scroll = 3;

        let generation = roster.begin_agents_load();
        assert!(roster.agents.is_loading());

        roster.finish_agents_load(generation, Ok(vec![agent("a1"), agent("a2")]));
        assert_eq!(roster.agents.loaded().map(Vec::len), Some(2));
        assert_eq!(roster.scroll, 0);
        assert!(roster.refreshed_at.is_some());
    }

    #[test]
    fn load_failure_carries_status_code() {
        let mut roster = RosterState::default();
        let generation = roster.begin_agents_load();

        roster.finish_agents_load(
            generation,
            Err(ApiError::Status {
                status: 500,
                detail: "request failed".to_string(),
            }),
        );

        let message = roster.agents.error().unwrap_or_default();
        assert!(message.contains("500"), "error must surface the status: {message}");
        assert_eq!(roster.agents.loaded(), None);
    }

    #[test]
    fn stale_completion_is_dropped() {
        let mut roster = RosterState::default();
        let stale = roster.begin_agents_load();
        let _current = roster.begin_agents_load();

        roster.finish_agents_load(stale, Ok(vec![agent("a1")]));
        assert!(roster.agents.is_loading(), "stale result must not land");
    }

    #[test]
    fn invalidate_discards_in_flight_results() {
        let mut roster = RosterState::default();
        let generation = roster.begin_agents_load();
        roster.invalidate();

        roster.finish_agents_load(generation, Ok(vec![agent("a1")]));
        assert!(roster.agents.is_loading());
    }

    #[test]
    fn scroll_is_clamped_to_roster() {
        let mut roster = RosterState::default();
        let generation = roster.begin_agents_load();
        roster.finish_agents_load(generation, Ok(vec![agent("a1"), agent("a2")]));

        roster.scroll_up();
        assert_eq!(roster.scroll, 0);
        roster.scroll_down();
        assert_eq!(roster.scroll, 1);
        roster.scroll_down();
        assert_eq!(roster.scroll, 1, "cannot scroll past the last card");
    }
}
