//! Canned backend payloads, in the backend's camelCase JSON.

use serde_json::{json, Value};

pub fn albums() -> Vec<Value> {
    vec![
        json!({
            "id": 1,
            "albumName": "Abbey Road",
            "releaseYear": 1969,
            "genre": "Rock",
            "rating": 9,
            "coverURL": "http://covers.local/abbey-road.jpg",
            "artist": { "id": 10, "letter": "B", "artistName": "The Beatles" }
        }),
        json!({
            "id": 2,
            "albumName": "Let It Be",
            "releaseYear": 1970,
            "genre": "Rock",
            "rating": 7,
            "artist": { "id": 10, "letter": "B", "artistName": "The Beatles" }
        }),
        json!({
            "id": 3,
            "albumName": "Nevermind",
            "releaseYear": 1991,
            "genre": "Grunge",
            "rating": 9,
            "artist": { "id": 11, "letter": "N", "artistName": "Nirvana" }
        }),
        json!({
            "id": 4,
            "albumName": "Unreleased Demos",
            "releaseYear": null,
            "genre": null,
            "rating": null,
            "artist": { "id": 12, "letter": "O", "artistName": "The Obscure" }
        }),
    ]
}

pub fn artists() -> Vec<Value> {
    vec![
        json!({
            "id": 10,
            "letter": "B",
            "artistName": "The Beatles",
            "albums": [
                { "id": 1, "albumName": "Abbey Road", "releaseYear": 1969, "rating": 9,
                  "artist": { "id": 10, "artistName": "The Beatles" } },
                { "id": 2, "albumName": "Let It Be", "releaseYear": 1970, "rating": 7,
                  "artist": { "id": 10, "artistName": "The Beatles" } }
            ]
        }),
        json!({
            "id": 11,
            "letter": "N",
            "artistName": "Nirvana",
            "albums": [
                { "id": 3, "albumName": "Nevermind", "releaseYear": 1991, "rating": 9,
                  "artist": { "id": 11, "artistName": "Nirvana" } }
            ]
        }),
        json!({
            "id": 12,
            "letter": "O",
            "artistName": "The Obscure",
            "albums": [
                { "id": 4, "albumName": "Unreleased Demos", "releaseYear": null, "rating": null,
                  "artist": { "id": 12, "artistName": "The Obscure" } }
            ]
        }),
    ]
}
