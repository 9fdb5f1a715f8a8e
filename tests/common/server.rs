//! Stub catalog backend for the e2e tests.
//!
//! The real backend is an external collaborator; here a small axum app
//! serves the canned fixtures on a random port so the client is exercised
//! over actual HTTP. Mutating routes update the in-memory collection the
//! same way the real service would.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{delete, get, post, put};
use axum::{Json, Router};
use serde_json::Value;
use std::sync::{Arc, Mutex};

use super::fixtures;

#[derive(Clone)]
struct BackendState {
    albums: Arc<Mutex<Vec<Value>>>,
    artists: Arc<Mutex<Vec<Value>>>,
}

pub struct TestBackend {
    /// Base URL to hand to `CatalogApi`, including the `/api` prefix.
    pub base_url: String,
}

async fn list_albums(State(state): State<BackendState>) -> Json<Value> {
    Json(Value::Array(state.albums.lock().unwrap().clone()))
}

async fn get_album(State(state): State<BackendState>, Path(id): Path<i64>) -> Response {
    let albums = state.albums.lock().unwrap();
    match albums.iter().find(|a| a["id"] == id) {
        Some(album) => Json(album.clone()).into_response(),
        None => StatusCode::NOT_FOUND.into_response(),
    }
}

async fn add_album(State(state): State<BackendState>, Json(mut body): Json<Value>) -> Response {
    let mut albums = state.albums.lock().unwrap();
    let next_id = albums
        .iter()
        .filter_map(|a| a["id"].as_i64())
        .max()
        .unwrap_or(0)
        + 1;
    body["id"] = next_id.into();
    albums.push(body.clone());
    (StatusCode::CREATED, Json(body)).into_response()
}

async fn update_album(
    State(state): State<BackendState>,
    Path(id): Path<i64>,
    Json(mut body): Json<Value>,
) -> Response {
    let mut albums = state.albums.lock().unwrap();
    match albums.iter_mut().find(|a| a["id"] == id) {
        Some(album) => {
            body["id"] = id.into();
            *album = body.clone();
            Json(body).into_response()
        }
        None => StatusCode::NOT_FOUND.into_response(),
    }
}

async fn delete_album(State(state): State<BackendState>, Path(id): Path<i64>) -> Response {
    let mut albums = state.albums.lock().unwrap();
    let before = albums.len();
    albums.retain(|a| a["id"] != id);
    if albums.len() < before {
        StatusCode::NO_CONTENT.into_response()
    } else {
        StatusCode::NOT_FOUND.into_response()
    }
}

async fn list_artists(State(state): State<BackendState>) -> Json<Value> {
    Json(Value::Array(state.artists.lock().unwrap().clone()))
}

async fn add_artist(State(state): State<BackendState>, Json(mut body): Json<Value>) -> Response {
    let mut artists = state.artists.lock().unwrap();
    let next_id = artists
        .iter()
        .filter_map(|a| a["id"].as_i64())
        .max()
        .unwrap_or(0)
        + 1;
    body["id"] = next_id.into();
    artists.push(body.clone());
    (StatusCode::CREATED, Json(body)).into_response()
}

async fn update_artist(
    State(state): State<BackendState>,
    Path(id): Path<i64>,
    Json(mut body): Json<Value>,
) -> Response {
    let mut artists = state.artists.lock().unwrap();
    match artists.iter_mut().find(|a| a["id"] == id) {
        Some(artist) => {
            body["id"] = id.into();
            *artist = body.clone();
            Json(body).into_response()
        }
        None => StatusCode::NOT_FOUND.into_response(),
    }
}

async fn delete_artist(State(state): State<BackendState>, Path(id): Path<i64>) -> Response {
    let mut artists = state.artists.lock().unwrap();
    let before = artists.len();
    artists.retain(|a| a["id"] != id);
    if artists.len() < before {
        StatusCode::NO_CONTENT.into_response()
    } else {
        StatusCode::NOT_FOUND.into_response()
    }
}

async fn get_artist(State(state): State<BackendState>, Path(id): Path<i64>) -> Response {
    let artists = state.artists.lock().unwrap();
    match artists.iter().find(|a| a["id"] == id) {
        Some(artist) => Json(artist.clone()).into_response(),
        None => StatusCode::NOT_FOUND.into_response(),
    }
}

async fn artist_albums(State(state): State<BackendState>, Path(id): Path<i64>) -> Response {
    let artists = state.artists.lock().unwrap();
    match artists.iter().find(|a| a["id"] == id) {
        Some(artist) => Json(artist["albums"].clone()).into_response(),
        None => StatusCode::NOT_FOUND.into_response(),
    }
}

impl TestBackend {
    /// Spawns the stub on a random port and returns its base URL.
    pub async fn spawn() -> TestBackend {
        let state = BackendState {
            albums: Arc::new(Mutex::new(fixtures::albums())),
            artists: Arc::new(Mutex::new(fixtures::artists())),
        };

        let app: Router = Router::new()
            .route("/api/albums", get(list_albums))
            .route("/api/albums/{id}", get(get_album))
            .route("/api/albums/add-album", post(add_album))
            .route("/api/albums/update-album/{id}", put(update_album))
            .route("/api/albums/delete-album/{id}", delete(delete_album))
            .route("/api/artists", get(list_artists).post(add_artist))
            .route(
                "/api/artists/{id}",
                get(get_artist).put(update_artist).delete(delete_artist),
            )
            .route("/api/artists/{id}/albums", get(artist_albums))
            .with_state(state);

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        TestBackend {
            base_url: format!("http://{addr}/api"),
        }
    }
}
