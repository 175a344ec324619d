//! Shared loading-state machinery for view-scoped fetches.

/// Lifecycle of a view-owned fetch.
///
/// Views start out `Loading` because activation always issues a request
/// immediately. There is no automatic retry: `Failed` sticks until the user
/// re-triggers the fetch.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LoadState<T> {
    /// A request is (or is about to be) in flight.
    #[default]
    Loading,
    /// The last request succeeded.
    Loaded(T),
    /// The last request failed; the message is shown to the user.
    Failed(String),
}

impl<T> LoadState<T> {
    /// Whether a request is still pending.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// The loaded value, if any.
    #[must_use]
    pub const fn loaded(&self) -> Option<&T> {
        match self {
            Self::Loaded(value) => Some(value),
            _ => None,
        }
    }

    /// The failure message, if any.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Failed(message) => Some(message),
            _ => None,
        }
    }
}

/// Monotonic tag binding an async completion to the request that issued it.
///
/// Each view-owned fetch carries the generation current at dispatch time.
/// Re-issuing a fetch or deactivating the view advances the counter, so a
/// completion arriving with an older tag is simply dropped: the worker
/// thread runs to completion, its result is discarded at the channel drain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Generation(u64);

impl Generation {
    /// Advance the counter and return the new value.
    pub const fn advance(&mut self) -> Self {
        self.0 += 1;
        *self
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn load_state_accessors() {
        let loading: LoadState<u8> = LoadState::Loading;
        assert!(loading.is_loading());
        assert_eq!(loading.loaded(), None);
        assert_eq!(loading.error(), None);

        let loaded = LoadState::Loaded(7u8);
        assert_eq!(loaded.loaded(), Some(&7));

        let failed: LoadState<u8> = LoadState::Failed("boom".to_string());
        assert_eq!(failed.error(), Some("boom"));
    }

    #[test]
    fn generations_advance_monotonically() {
        let mut generation = Generation::default();
        let first = generation.advance();
        let second = generation.advance();
        assert_ne!(first, second);
        assert_eq!(second, generation);
    }
}
