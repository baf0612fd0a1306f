//! Musician endpoints of the Vinyls API.

use crate::error::ServiceResult;
use crate::http::HttpClient;
use crate::types::ArtistDto;
use async_trait::async_trait;
use std::sync::Arc;
use tracing::debug;
use vinyls_core::{Artist, ArtistId};

#[async_trait]
pub trait ArtistService: Send + Sync {
    async fn get_artists(&self) -> ServiceResult<Vec<Artist>>;

    async fn get_artist(&self, id: ArtistId) -> ServiceResult<Artist>;
}

/// `ArtistService` backed by the `/musicians` endpoints.
#[derive(Debug, Clone)]
pub struct ArtistAdapter {
    http: Arc<HttpClient>,
}

impl ArtistAdapter {
    pub fn new(http: Arc<HttpClient>) -> Self {
        Self { http }
    }
}

#[async_trait]
impl ArtistService for ArtistAdapter {
    async fn get_artists(&self) -> ServiceResult<Vec<Artist>> {
        debug!("Fetching musicians");

        let dtos: Vec<ArtistDto> = self.http.get("musicians").await?.into_body()?;
        let artists = dtos
            .into_iter()
            .map(Artist::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        debug!(artists = artists.len(), "Fetched musicians");
        Ok(artists)
    }

    async fn get_artist(&self, id: ArtistId) -> ServiceResult<Artist> {
        debug!(artist_id = id, "Fetching musician");

        let dto: ArtistDto = self
            .http
            .get(&format!("musicians/{}", id))
            .await?
            .into_body()?;

        Ok(Artist::try_from(dto)?)
    }
}
