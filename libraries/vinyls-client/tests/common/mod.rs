//! Shared fixtures for the adapter tests.

#![allow(dead_code)]

use std::sync::{Arc, Once};
use vinyls_client::{ClientConfig, HttpClient};
use wiremock::MockServer;

static INIT: Once = Once::new();

pub fn init_tracing() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_test_writer()
            .with_max_level(tracing::Level::DEBUG)
            .try_init();
    });
}

/// HTTP client pointed at a mock server.
pub fn http_client(server: &MockServer) -> Arc<HttpClient> {
    init_tracing();
    let config = ClientConfig {
        log_bodies: true,
        ..ClientConfig::new(server.uri())
    };
    Arc::new(HttpClient::new(&config).expect("mock server uri is valid"))
}

pub fn track_json(id: i64, name: &str) -> serde_json::Value {
    serde_json::json!({ "id": id, "name": name, "duration": "5:05" })
}

pub fn musician_json(id: i64, name: &str) -> serde_json::Value {
    serde_json::json!({
        "id": id,
        "name": name,
        "image": format!("https://example.com/performers/{}.jpg", id),
        "description": "Cantante, compositor y actor panameño.",
        "birthDate": "1948-07-16T00:00:00.000Z"
    })
}

pub fn band_json(id: i64, name: &str) -> serde_json::Value {
    serde_json::json!({
        "id": id,
        "name": name,
        "image": format!("https://example.com/performers/{}.jpg", id),
        "description": "Banda británica de rock.",
        "creationDate": "1970-01-01T00:00:00.000Z"
    })
}

pub fn comment_json(id: i64, rating: i64) -> serde_json::Value {
    serde_json::json!({ "id": id, "description": "The most relevant salsa album", "rating": rating })
}

/// Album with no nested sequences at all.
pub fn bare_album_json(id: i64, name: &str) -> serde_json::Value {
    serde_json::json!({
        "id": id,
        "name": name,
        "cover": format!("https://example.com/covers/{}.jpg", id),
        "releaseDate": "1984-08-01T00:00:00.000Z",
        "description": "Buscando América es el primer álbum de la banda.",
        "genre": "Salsa",
        "recordLabel": "Elektra"
    })
}

pub fn album_json(
    id: i64,
    name: &str,
    tracks: serde_json::Value,
    performers: serde_json::Value,
    comments: serde_json::Value,
) -> serde_json::Value {
    let mut album = bare_album_json(id, name);
    album["tracks"] = tracks;
    album["performers"] = performers;
    album["comments"] = comments;
    album
}

pub fn collector_album_json(id: i64, price: i64, status: &str, album_id: i64) -> serde_json::Value {
    serde_json::json!({
        "id": id,
        "price": price,
        "status": status,
        "album": bare_album_json(album_id, "Poeta del pueblo")
    })
}
