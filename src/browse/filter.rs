//! Predicate filters for the album and artist views.
//!
//! Filters are conjunctive and each one is a no-op while its criterion is
//! unset. `matches` evaluates with short-circuit `&&` so a miss on an early
//! cheap predicate skips the normalization work of the later ones.

use crate::catalog::{Album, ArtistRollup, SortNameRules};

/// Formats a rating the way the backend's JSON does: integral values
/// without a decimal point ("9", not "9.0").
pub(crate) fn rating_string(value: f64) -> String {
    value.to_string()
}

/// Filter state of the album view. Empty strings and `None` mean "off".
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AlbumFilters {
    /// Substring match against title or artist name.
    pub search: String,
    /// Bucket letter token, `"#"` is a literal bucket.
    pub letter: String,
    /// Exact artist display name.
    pub artist: String,
    /// Substring match against genre.
    pub genre: String,
    /// Decimal prefix of the release year ("19" matches 1990..=1999 and 19).
    pub year: String,
    /// Minimum rating, matched by decimal prefix (see `matches_rating`).
    pub min_rating: Option<f64>,
}

impl AlbumFilters {
    pub fn matches(&self, album: &Album, rules: &SortNameRules) -> bool {
        self.matches_search(album)
            && self.matches_artist(album)
            && self.matches_genre(album)
            && self.matches_year(album)
            && self.matches_rating(album)
            && self.matches_letter(album, rules)
    }

    fn matches_search(&self, album: &Album) -> bool {
        let query = self.search.trim().to_lowercase();
        if query.is_empty() {
            return true;
        }
        album.album_name.to_lowercase().contains(&query)
            || album.artist_name().to_lowercase().contains(&query)
    }

    fn matches_letter(&self, album: &Album, rules: &SortNameRules) -> bool {
        let token = self.letter.trim();
        if token.is_empty() {
            return true;
        }
        token.to_uppercase() == rules.bucket_letter(album.artist_name()).to_string()
    }

    fn matches_artist(&self, album: &Album) -> bool {
        if self.artist.is_empty() {
            return true;
        }
        album.artist_name().to_lowercase() == self.artist.to_lowercase()
    }

    fn matches_genre(&self, album: &Album) -> bool {
        let query = self.genre.trim().to_lowercase();
        if query.is_empty() {
            return true;
        }
        match &album.genre {
            Some(genre) => genre.to_lowercase().contains(&query),
            None => false,
        }
    }

    fn matches_year(&self, album: &Album) -> bool {
        if self.year.trim().is_empty() {
            return true;
        }
        match album.release_year {
            Some(year) => year.to_string().starts_with(self.year.trim()),
            None => false,
        }
    }

    /// Decimal-prefix rule, not `>=`: the stringified rating must equal the
    /// stringified minimum or continue it with a decimal point. Rating 8.5
    /// passes a minimum of 8; rating 18 does not. Unrated albums never pass
    /// a set minimum. Kept bit-for-bit from the original behavior even
    /// though it reads like it was meant to be a numeric comparison.
    fn matches_rating(&self, album: &Album) -> bool {
        let min = match self.min_rating {
            Some(min) => min,
            None => return true,
        };
        let rating = match album.rating {
            Some(rating) => rating,
            None => return false,
        };
        let min_str = rating_string(min);
        let rating_str = rating_string(rating);
        rating_str == min_str || rating_str.starts_with(&format!("{min_str}."))
    }
}

/// Filter state of the artist view.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ArtistFilters {
    pub letter: String,
    pub artist: String,
}

impl ArtistFilters {
    pub fn matches(&self, rollup: &ArtistRollup) -> bool {
        self.matches_letter(rollup) && self.matches_artist(rollup)
    }

    fn matches_letter(&self, rollup: &ArtistRollup) -> bool {
        let token = self.letter.trim();
        token.is_empty() || token.to_uppercase() == rollup.letter.to_string()
    }

    fn matches_artist(&self, rollup: &ArtistRollup) -> bool {
        self.artist.is_empty()
            || rollup.artist.artist_name.to_lowercase() == self.artist.to_lowercase()
    }
}
