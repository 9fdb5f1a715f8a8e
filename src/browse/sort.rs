//! Deterministic ordering of filtered results.
//!
//! Every sort key expands to a fixed fallback chain of tagged values,
//! compared field by field until one side wins, so the resulting order is
//! total: two albums only tie when every field of the chain ties. The
//! direction flag inverts the whole chain comparison, not just the first
//! field.

use crate::catalog::{Album, ArtistRollup, SortNameRules};
use std::cmp::Ordering;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }

    pub fn from_param(value: &str) -> Option<SortOrder> {
        match value {
            "asc" => Some(SortOrder::Asc),
            "desc" => Some(SortOrder::Desc),
            _ => None,
        }
    }

    fn apply(&self, ord: Ordering) -> Ordering {
        match self {
            SortOrder::Asc => ord,
            SortOrder::Desc => ord.reverse(),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AlbumSortKey {
    Letter,
    #[default]
    Artist,
    Title,
    Year,
    Genre,
    Rating,
}

impl AlbumSortKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            AlbumSortKey::Letter => "letter",
            AlbumSortKey::Artist => "artist",
            AlbumSortKey::Title => "title",
            AlbumSortKey::Year => "year",
            AlbumSortKey::Genre => "genre",
            AlbumSortKey::Rating => "rating",
        }
    }

    pub fn from_param(value: &str) -> Option<AlbumSortKey> {
        match value {
            "letter" => Some(AlbumSortKey::Letter),
            "artist" => Some(AlbumSortKey::Artist),
            "title" => Some(AlbumSortKey::Title),
            "year" => Some(AlbumSortKey::Year),
            "genre" => Some(AlbumSortKey::Genre),
            "rating" => Some(AlbumSortKey::Rating),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ArtistSortKey {
    #[default]
    Letter,
    Artist,
    AlbumCount,
    AvgRating,
}

impl ArtistSortKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            ArtistSortKey::Letter => "letter",
            ArtistSortKey::Artist => "artist",
            ArtistSortKey::AlbumCount => "albumCount",
            ArtistSortKey::AvgRating => "avgRating",
        }
    }

    pub fn from_param(value: &str) -> Option<ArtistSortKey> {
        match value {
            "letter" => Some(ArtistSortKey::Letter),
            "artist" => Some(ArtistSortKey::Artist),
            "albumCount" => Some(ArtistSortKey::AlbumCount),
            "avgRating" => Some(ArtistSortKey::AvgRating),
            _ => None,
        }
    }
}

/// One field of a fallback chain. Keeping the comparison tagged avoids the
/// implicit string/number coercion the generic tuple approach invites.
#[derive(Clone, Debug)]
enum SortValue {
    /// Case-insensitive, numeric-aware text ("Track 9" before "Track 10").
    Text(String),
    /// Missing values sort after every present one (unknown year or
    /// release order goes last).
    Int(Option<i64>),
    /// Missing values sort before every present one (unrated is below all
    /// ratings).
    Score(Option<f64>),
}

fn compare_values(a: &SortValue, b: &SortValue) -> Ordering {
    match (a, b) {
        (SortValue::Text(x), SortValue::Text(y)) => natural_cmp(x, y),
        (SortValue::Int(x), SortValue::Int(y)) => match (x, y) {
            (None, None) => Ordering::Equal,
            (None, Some(_)) => Ordering::Greater,
            (Some(_), None) => Ordering::Less,
            (Some(x), Some(y)) => x.cmp(y),
        },
        (SortValue::Score(x), SortValue::Score(y)) => match (x, y) {
            (None, None) => Ordering::Equal,
            (None, Some(_)) => Ordering::Less,
            (Some(_), None) => Ordering::Greater,
            (Some(x), Some(y)) => x.total_cmp(y),
        },
        // Chains are fixed per key, so the variants always line up.
        _ => {
            debug_assert!(false, "mismatched sort value variants");
            Ordering::Equal
        }
    }
}

fn compare_chain(a: &[SortValue], b: &[SortValue]) -> Ordering {
    for (x, y) in a.iter().zip(b.iter()) {
        let ord = compare_values(x, y);
        if ord != Ordering::Equal {
            return ord;
        }
    }
    Ordering::Equal
}

/// Case-insensitive comparison that reads runs of ASCII digits as numbers,
/// so "Track 9" sorts before "Track 10". Runs that differ only in leading
/// zeros compare equal and the tie moves on to the rest of the string.
fn natural_cmp(a: &str, b: &str) -> Ordering {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();
    let mut i = 0;
    let mut j = 0;

    while i < a_chars.len() && j < b_chars.len() {
        let x = a_chars[i];
        let y = b_chars[j];

        if x.is_ascii_digit() && y.is_ascii_digit() {
            let a_run_start = i;
            while i < a_chars.len() && a_chars[i].is_ascii_digit() {
                i += 1;
            }
            let b_run_start = j;
            while j < b_chars.len() && b_chars[j].is_ascii_digit() {
                j += 1;
            }
            let ord = compare_digit_runs(&a_chars[a_run_start..i], &b_chars[b_run_start..j]);
            if ord != Ordering::Equal {
                return ord;
            }
            continue;
        }

        let xl = x.to_lowercase().next().unwrap_or(x);
        let yl = y.to_lowercase().next().unwrap_or(y);
        if xl != yl {
            return xl.cmp(&yl);
        }
        i += 1;
        j += 1;
    }

    (a_chars.len() - i).cmp(&(b_chars.len() - j))
}

fn compare_digit_runs(a: &[char], b: &[char]) -> Ordering {
    let a = strip_leading_zeros(a);
    let b = strip_leading_zeros(b);
    // Longer run of significant digits means a bigger number; equal-length
    // runs compare digit by digit.
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}

fn strip_leading_zeros(digits: &[char]) -> &[char] {
    let first = digits.iter().position(|c| *c != '0').unwrap_or(digits.len());
    &digits[first..]
}

fn artist_fallback(album: &Album, rules: &SortNameRules) -> Vec<SortValue> {
    vec![
        SortValue::Text(rules.sort_name(album.artist_name())),
        SortValue::Int(album.release_year.map(i64::from)),
        SortValue::Int(album.release_order.map(i64::from)),
        SortValue::Text(album.album_name.to_lowercase()),
    ]
}

fn album_chain(album: &Album, key: AlbumSortKey, rules: &SortNameRules) -> Vec<SortValue> {
    match key {
        AlbumSortKey::Letter => {
            let mut chain = vec![SortValue::Text(
                rules.bucket_letter(album.artist_name()).to_string(),
            )];
            chain.extend(artist_fallback(album, rules));
            chain
        }
        AlbumSortKey::Artist => artist_fallback(album, rules),
        AlbumSortKey::Title => vec![
            SortValue::Text(album.album_name.to_lowercase()),
            SortValue::Text(rules.sort_name(album.artist_name())),
            SortValue::Int(album.release_year.map(i64::from)),
            SortValue::Int(album.release_order.map(i64::from)),
        ],
        AlbumSortKey::Year => vec![
            SortValue::Int(album.release_year.map(i64::from)),
            SortValue::Int(album.release_order.map(i64::from)),
            SortValue::Text(rules.sort_name(album.artist_name())),
            SortValue::Text(album.album_name.to_lowercase()),
        ],
        AlbumSortKey::Genre => vec![
            SortValue::Text(album.genre.as_deref().unwrap_or("").to_lowercase()),
            SortValue::Text(rules.sort_name(album.artist_name())),
            SortValue::Int(album.release_year.map(i64::from)),
        ],
        AlbumSortKey::Rating => vec![
            SortValue::Score(album.rating),
            SortValue::Text(rules.sort_name(album.artist_name())),
            SortValue::Int(album.release_year.map(i64::from)),
        ],
    }
}

/// Stable sort of an album collection by the given key and direction.
/// Chains are extracted once per album, then compared.
pub fn sort_albums(
    albums: &mut Vec<Album>,
    key: AlbumSortKey,
    order: SortOrder,
    rules: &SortNameRules,
) {
    let mut decorated: Vec<(Vec<SortValue>, Album)> = albums
        .drain(..)
        .map(|album| (album_chain(&album, key, rules), album))
        .collect();
    decorated.sort_by(|(a, _), (b, _)| order.apply(compare_chain(a, b)));
    albums.extend(decorated.into_iter().map(|(_, album)| album));
}

/// Stable sort of the artist view.
///
/// The average-rating key keeps the original product behavior: artists
/// without a rated album go last in either direction, and on equal
/// averages the artist with more rated albums ranks higher when ascending.
pub fn sort_artists(rollups: &mut [ArtistRollup], key: ArtistSortKey, order: SortOrder) {
    rollups.sort_by(|a, b| match key {
        ArtistSortKey::Letter => order.apply(
            a.letter
                .cmp(&b.letter)
                .then_with(|| a.sort_name.cmp(&b.sort_name)),
        ),
        ArtistSortKey::Artist => order.apply(a.sort_name.cmp(&b.sort_name)),
        ArtistSortKey::AlbumCount => order.apply(
            a.album_count
                .cmp(&b.album_count)
                .then_with(|| a.sort_name.cmp(&b.sort_name)),
        ),
        ArtistSortKey::AvgRating => match (a.avg_rating, b.avg_rating) {
            (None, None) => order.apply(a.sort_name.cmp(&b.sort_name)),
            (None, Some(_)) => Ordering::Greater,
            (Some(_), None) => Ordering::Less,
            (Some(x), Some(y)) => {
                let avg = x.total_cmp(&y);
                if avg != Ordering::Equal {
                    order.apply(avg)
                } else {
                    let rated = a.rated_count.cmp(&b.rated_count);
                    if rated != Ordering::Equal {
                        order.apply(rated).reverse()
                    } else {
                        order.apply(a.sort_name.cmp(&b.sort_name))
                    }
                }
            }
        },
    });
}
