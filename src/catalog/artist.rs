use super::{Album, SortNameRules};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// An artist as served by the backend.
#[derive(Clone, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct Artist {
    pub id: i64,
    pub artist_name: String,
    /// Grouping letter as stored server-side. Kept for wire fidelity but
    /// never trusted: the letter is always recomputed from the name.
    #[serde(default)]
    pub letter: Option<String>,
    /// Embedded albums, present on the artist listing endpoint.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub albums: Option<Vec<Album>>,
}

/// One entry of the artist picker: a unique display name with its bucket
/// letter. Identity is the case-folded trimmed name; the first spelling
/// seen wins.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ArtistOption {
    pub name: String,
    pub letter: char,
}

fn collect_options<'a, I>(names: I, rules: &SortNameRules) -> Vec<ArtistOption>
where
    I: Iterator<Item = &'a str>,
{
    let mut by_key: HashMap<String, usize> = HashMap::new();
    let mut options: Vec<ArtistOption> = Vec::new();

    for raw in names {
        let name = raw.trim();
        if name.is_empty() {
            continue;
        }
        let key = name.to_lowercase();
        if !by_key.contains_key(&key) {
            by_key.insert(key, options.len());
            options.push(ArtistOption {
                name: name.to_string(),
                letter: rules.bucket_letter(name),
            });
        }
    }

    options.sort_by(|a, b| {
        (a.letter, rules.sort_name(&a.name)).cmp(&(b.letter, rules.sort_name(&b.name)))
    });
    options
}

impl ArtistOption {
    /// Distinct artists appearing in an album collection, ordered by
    /// (letter, sort name).
    pub fn from_albums(albums: &[Album], rules: &SortNameRules) -> Vec<ArtistOption> {
        collect_options(albums.iter().map(|a| a.artist_name()), rules)
    }

    /// Same, built from the artist listing.
    pub fn from_artists(artists: &[Artist], rules: &SortNameRules) -> Vec<ArtistOption> {
        collect_options(artists.iter().map(|a| a.artist_name.as_str()), rules)
    }
}

/// An artist row enriched with the derived values the browse views need,
/// computed once per fetch instead of per comparison.
#[derive(Clone, Debug)]
pub struct ArtistRollup {
    pub artist: Artist,
    pub sort_name: String,
    pub letter: char,
    pub album_count: usize,
    pub rated_count: usize,
    /// Mean rating over rated albums only; `None` when nothing is rated.
    pub avg_rating: Option<f64>,
}

impl ArtistRollup {
    pub fn build(artist: Artist, rules: &SortNameRules) -> ArtistRollup {
        let albums = artist.albums.as_deref().unwrap_or(&[]);
        let ratings: Vec<f64> = albums.iter().filter_map(|a| a.rating).collect();
        let avg_rating = if ratings.is_empty() {
            None
        } else {
            Some(ratings.iter().sum::<f64>() / ratings.len() as f64)
        };
        ArtistRollup {
            sort_name: rules.sort_name(&artist.artist_name),
            letter: rules.bucket_letter(&artist.artist_name),
            album_count: albums.len(),
            rated_count: ratings.len(),
            avg_rating,
            artist,
        }
    }

    pub fn build_all(artists: Vec<Artist>, rules: &SortNameRules) -> Vec<ArtistRollup> {
        artists
            .into_iter()
            .map(|a| ArtistRollup::build(a, rules))
            .collect()
    }
}
