//! The catalog browse engine: filtering, sorting and URL-state sync for
//! the album and artist views.

mod filter;
pub mod query;
mod sort;
mod state;

pub use filter::{AlbumFilters, ArtistFilters};
pub use sort::{sort_albums, sort_artists, AlbumSortKey, ArtistSortKey, SortOrder};
pub use state::{BrowseSession, BrowseState, SyncPhase};

use crate::catalog::{Album, ArtistRollup, SortNameRules};

/// Applies a view state to the full album collection: conjunctive filters
/// first, then the stable sort.
pub fn browse_albums(
    albums: &[Album],
    state: &BrowseState,
    rules: &SortNameRules,
) -> Vec<Album> {
    let mut filtered: Vec<Album> = albums
        .iter()
        .filter(|album| state.filters.matches(album, rules))
        .cloned()
        .collect();
    sort_albums(&mut filtered, state.sort_key, state.sort_order, rules);
    filtered
}

/// Same for the artist view, which works on precomputed rollups.
pub fn browse_artists(
    rollups: &[ArtistRollup],
    filters: &ArtistFilters,
    key: ArtistSortKey,
    order: SortOrder,
) -> Vec<ArtistRollup> {
    let mut filtered: Vec<ArtistRollup> = rollups
        .iter()
        .filter(|rollup| filters.matches(rollup))
        .cloned()
        .collect();
    sort_artists(&mut filtered, key, order);
    filtered
}
