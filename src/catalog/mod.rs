mod album;
mod artist;
mod sort_name;
mod summary;

pub use album::{Album, AlbumDraft};
pub use artist::{Artist, ArtistOption, ArtistRollup};
pub use sort_name::SortNameRules;
pub use summary::AlbumSummary;

#[cfg(test)]
pub(crate) mod test_support {
    use super::{Album, Artist};

    /// Bare album fixture; tests mutate the optional fields they care about.
    pub fn album(id: i64, title: &str, artist_name: &str) -> Album {
        Album {
            id,
            album_name: title.to_string(),
            release_year: None,
            release_order: None,
            genre: None,
            rating: None,
            cover_url: None,
            artist: Artist {
                id,
                artist_name: artist_name.to_string(),
                letter: None,
                albums: None,
            },
        }
    }
}
