use super::Artist;
use serde::{Deserialize, Serialize};

/// A catalog entry as served by the backend.
///
/// Wire names are the backend's camelCase. Every optional column is an
/// explicit `Option`; how a missing value filters and sorts is decided in
/// `browse`, never here.
#[derive(Clone, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct Album {
    pub id: i64,
    pub album_name: String,
    pub release_year: Option<i32>,
    /// Disambiguates same-year releases by an artist.
    #[serde(default)]
    pub release_order: Option<i32>,
    #[serde(default)]
    pub genre: Option<String>,
    /// Open scale, observed 1-10.
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default, rename = "coverURL")]
    pub cover_url: Option<String>,
    pub artist: Artist,
}

impl Album {
    pub fn artist_name(&self) -> &str {
        &self.artist.artist_name
    }
}

/// Body for create/update calls. The id and any server-derived fields are
/// left out.
#[derive(Clone, Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct AlbumDraft {
    pub album_name: String,
    pub release_year: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub release_order: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub genre: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none", rename = "coverURL")]
    pub cover_url: Option<String>,
    pub artist: Artist,
}
