//! In-memory view state and its synchronization with the address bar.
//!
//! The session owns the album view's filter and sort state and keeps it in
//! step with a query string. Two sources of change exist: user edits (which
//! must be written back to the URL) and external URL changes such as
//! back/forward navigation (which must hydrate the state without being
//! echoed straight back). The latter is guarded by an explicit two-mode
//! machine instead of a timing flag: `begin_hydrate` enters `Hydrating`,
//! and the transition back to `Idle` happens synchronously in
//! `complete_update` at the end of the current update cycle.

use super::query;
use super::{AlbumFilters, AlbumSortKey, SortOrder};

/// Complete, codec-visible state of the album view.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BrowseState {
    pub filters: AlbumFilters,
    pub sort_key: AlbumSortKey,
    pub sort_order: SortOrder,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SyncPhase {
    /// User-driven changes propagate to the URL.
    Idle,
    /// State is being replaced from the URL; write-back is suppressed.
    Hydrating,
}

/// State holder for one album view, alive from mount to navigation away.
#[derive(Debug)]
pub struct BrowseSession {
    state: BrowseState,
    phase: SyncPhase,
    /// The query string the URL currently shows, in canonical encoding.
    synced_query: String,
}

impl Default for BrowseSession {
    fn default() -> Self {
        BrowseSession {
            state: BrowseState::default(),
            phase: SyncPhase::Idle,
            synced_query: String::new(),
        }
    }
}

impl BrowseSession {
    /// Mounts a session from the URL the view was opened with.
    pub fn from_query(initial: &str) -> BrowseSession {
        let mut session = BrowseSession::default();
        session.begin_hydrate(initial);
        session.complete_update();
        session
    }

    pub fn state(&self) -> &BrowseState {
        &self.state
    }

    pub fn phase(&self) -> SyncPhase {
        self.phase
    }

    /// Replaces the in-memory state from an externally changed URL. The
    /// session stays in `Hydrating` until `complete_update` runs, so this
    /// change is never written back.
    pub fn begin_hydrate(&mut self, query: &str) {
        self.phase = SyncPhase::Hydrating;
        self.state = query::decode(query);
    }

    /// Closes the current update cycle. Returns the query string to push
    /// to the URL, or `None` when the URL is already in step (always the
    /// case right after hydration).
    pub fn complete_update(&mut self) -> Option<String> {
        let query = query::encode(&self.state);
        match self.phase {
            SyncPhase::Hydrating => {
                self.phase = SyncPhase::Idle;
                self.synced_query = query;
                None
            }
            SyncPhase::Idle => {
                if query != self.synced_query {
                    self.synced_query = query.clone();
                    Some(query)
                } else {
                    None
                }
            }
        }
    }

    pub fn set_search(&mut self, value: &str) {
        self.state.filters.search = value.to_string();
    }

    /// Selecting a letter clears the artist pick: the two narrow the same
    /// axis and the UI treats them as mutually exclusive.
    pub fn set_letter(&mut self, value: &str) {
        self.state.filters.letter = value.to_string();
        if !value.is_empty() {
            self.state.filters.artist.clear();
        }
    }

    /// Picking an artist clears the letter, mirror of `set_letter`.
    pub fn set_artist(&mut self, value: &str) {
        self.state.filters.artist = value.to_string();
        if !value.is_empty() {
            self.state.filters.letter.clear();
        }
    }

    pub fn set_genre(&mut self, value: &str) {
        self.state.filters.genre = value.to_string();
    }

    pub fn set_year(&mut self, value: &str) {
        self.state.filters.year = value.to_string();
    }

    pub fn set_min_rating(&mut self, value: Option<f64>) {
        self.state.filters.min_rating = value;
    }

    pub fn set_sort(&mut self, key: AlbumSortKey, order: SortOrder) {
        self.state.sort_key = key;
        self.state.sort_order = order;
    }

    pub fn reset_filters(&mut self) {
        self.state = BrowseState::default();
    }
}
