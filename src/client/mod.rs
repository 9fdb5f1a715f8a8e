//! HTTP client for the catalog REST backend.

use crate::catalog::{Album, AlbumDraft, Artist};
use serde::Serialize;
use std::time::Duration;
use thiserror::Error;

/// Failures are surfaced generically: the views only distinguish "worked"
/// from "didn't", log the rest, and degrade to an empty collection.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("unexpected status {status} from {url}")]
    Status {
        status: reqwest::StatusCode,
        url: String,
    },
}

pub type ApiResult<T> = Result<T, ApiError>;

/// Body for artist create/update calls.
#[derive(Clone, Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct ArtistDraft {
    pub artist_name: String,
}

/// Client for the albums/artists resources.
pub struct CatalogApi {
    client: reqwest::Client,
    base_url: String,
}

impl CatalogApi {
    /// # Arguments
    /// * `base_url` - Base URL of the backend (e.g., "http://localhost:7373/api")
    /// * `timeout_sec` - Request timeout in seconds
    pub fn new(base_url: String, timeout_sec: u64) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_sec))
            .build()
            .expect("Failed to create HTTP client");

        // Ensure base_url doesn't have trailing slash
        let base_url = base_url.trim_end_matches('/').to_string();

        Self { client, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn checked(&self, response: reqwest::Response) -> ApiResult<reqwest::Response> {
        if response.status().is_success() {
            Ok(response)
        } else {
            Err(ApiError::Status {
                status: response.status(),
                url: response.url().to_string(),
            })
        }
    }

    async fn get_json<T: serde::de::DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        let url = format!("{}{}", self.base_url, path);
        let response = self.client.get(&url).send().await?;
        Ok(self.checked(response).await?.json().await?)
    }

    /// The whole album collection, fetched wholesale on view activation.
    pub async fn list_albums(&self) -> ApiResult<Vec<Album>> {
        self.get_json("/albums").await
    }

    pub async fn get_album(&self, id: i64) -> ApiResult<Album> {
        self.get_json(&format!("/albums/{id}")).await
    }

    pub async fn create_album(&self, draft: &AlbumDraft) -> ApiResult<Album> {
        let url = format!("{}/albums/add-album", self.base_url);
        let response = self.client.post(&url).json(draft).send().await?;
        Ok(self.checked(response).await?.json().await?)
    }

    pub async fn update_album(&self, id: i64, draft: &AlbumDraft) -> ApiResult<Album> {
        let url = format!("{}/albums/update-album/{}", self.base_url, id);
        let response = self.client.put(&url).json(draft).send().await?;
        Ok(self.checked(response).await?.json().await?)
    }

    pub async fn delete_album(&self, id: i64) -> ApiResult<()> {
        let url = format!("{}/albums/delete-album/{}", self.base_url, id);
        let response = self.client.delete(&url).send().await?;
        self.checked(response).await?;
        Ok(())
    }

    /// The artist listing, with each artist's albums embedded.
    pub async fn list_artists(&self) -> ApiResult<Vec<Artist>> {
        self.get_json("/artists").await
    }

    pub async fn get_artist(&self, id: i64) -> ApiResult<Artist> {
        self.get_json(&format!("/artists/{id}")).await
    }

    pub async fn artist_albums(&self, id: i64) -> ApiResult<Vec<Album>> {
        self.get_json(&format!("/artists/{id}/albums")).await
    }

    pub async fn create_artist(&self, draft: &ArtistDraft) -> ApiResult<Artist> {
        let url = format!("{}/artists", self.base_url);
        let response = self.client.post(&url).json(draft).send().await?;
        Ok(self.checked(response).await?.json().await?)
    }

    pub async fn update_artist(&self, id: i64, draft: &ArtistDraft) -> ApiResult<Artist> {
        let url = format!("{}/artists/{}", self.base_url, id);
        let response = self.client.put(&url).json(draft).send().await?;
        Ok(self.checked(response).await?.json().await?)
    }

    pub async fn delete_artist(&self, id: i64) -> ApiResult<()> {
        let url = format!("{}/artists/{}", self.base_url, id);
        let response = self.client.delete(&url).send().await?;
        self.checked(response).await?;
        Ok(())
    }
}
