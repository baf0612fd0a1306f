//! Wire-format records for the Vinyls REST API.
//!
//! These mirror the backend JSON exactly, nullability included. Conversion
//! into `vinyls_core` types lives in the mapping module.

use serde::{Deserialize, Serialize};

// =============================================================================
// Album Types
// =============================================================================

/// Album as returned by `/albums` and `/albums/{id}`.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AlbumDto {
    pub id: i64,
    pub name: String,
    pub cover: String,
    #[serde(rename = "releaseDate")]
    pub release_date: String,
    pub description: String,
    pub genre: String,
    #[serde(rename = "recordLabel")]
    pub record_label: String,
    #[serde(default)]
    pub tracks: Option<Vec<TrackDto>>,
    #[serde(default)]
    pub performers: Option<Vec<PerformerDto>>,
    #[serde(default)]
    pub comments: Option<Vec<CommentDto>>,
}

/// Request body for creating or replacing an album.
///
/// Carries no id and no nested collections; the server assigns those.
#[derive(Debug, Clone, Serialize)]
pub struct AlbumCreateDto {
    pub name: String,
    pub cover: String,
    #[serde(rename = "releaseDate")]
    pub release_date: String,
    pub description: String,
    pub genre: String,
    #[serde(rename = "recordLabel")]
    pub record_label: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TrackDto {
    pub id: i64,
    pub name: String,
    pub duration: String,
}

/// Musician or band nested in an album or a collector.
///
/// Musicians carry `birthDate`, bands carry `creationDate`.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PerformerDto {
    pub id: i64,
    pub name: String,
    pub image: String,
    pub description: String,
    #[serde(rename = "birthDate", default)]
    pub birth_date: Option<String>,
    #[serde(rename = "creationDate", default)]
    pub creation_date: Option<String>,
}

// =============================================================================
// Comment Types
// =============================================================================

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CommentDto {
    pub id: i64,
    pub description: String,
    pub rating: i64,
}

/// Request body for `POST /albums/{id}/comments`.
#[derive(Debug, Clone, Serialize)]
pub struct CommentCreateDto {
    pub description: String,
    pub rating: i64,
    pub collector: CollectorRefDto,
}

#[derive(Debug, Clone, Serialize)]
pub struct CollectorRefDto {
    pub id: i64,
}

// =============================================================================
// Artist Types
// =============================================================================

/// Musician as returned by `/musicians` and `/musicians/{id}`.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ArtistDto {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub image: Option<String>,
    pub description: String,
    #[serde(rename = "birthDate")]
    pub birth_date: String,
    #[serde(default)]
    pub albums: Option<Vec<ArtistAlbumDto>>,
    #[serde(rename = "performerPrizes", default)]
    pub performer_prizes: Option<Vec<PerformerPrizeDto>>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ArtistAlbumDto {
    pub id: i64,
    pub name: String,
    pub cover: String,
    #[serde(rename = "releaseDate")]
    pub release_date: String,
    pub description: String,
    pub genre: String,
    #[serde(rename = "recordLabel")]
    pub record_label: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PerformerPrizeDto {
    pub id: i64,
    #[serde(rename = "premiationDate")]
    pub premiation_date: String,
}

// =============================================================================
// Collector Types
// =============================================================================

/// Collector as returned by `/collectors` and `/collectors/{id}`.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CollectorDto {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub telephone: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub comments: Option<Vec<CommentDto>>,
    #[serde(rename = "favoritePerformers", default)]
    pub favorite_performers: Option<Vec<PerformerDto>>,
    #[serde(rename = "collectorAlbums", default)]
    pub collector_albums: Option<Vec<CollectorAlbumSummaryDto>>,
}

/// Collector album entry nested in a collector (no album body).
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CollectorAlbumSummaryDto {
    pub id: i64,
    pub price: i64,
    pub status: String,
}

/// Entry of `/collectors/{id}/albums`.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CollectorAlbumDto {
    pub id: i64,
    pub price: i64,
    pub status: String,
    pub album: AlbumDto,
}
