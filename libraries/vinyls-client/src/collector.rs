//! Collector endpoints of the Vinyls API.

use crate::config::ClientConfig;
use crate::error::ServiceResult;
use crate::http::HttpClient;
use crate::mapping::collector_from_dto;
use crate::types::{CollectorAlbumDto, CollectorDto};
use async_trait::async_trait;
use std::sync::Arc;
use tracing::debug;
use vinyls_core::{Collector, CollectorAlbum, CollectorId};

#[async_trait]
pub trait CollectorService: Send + Sync {
    async fn get_collectors(&self) -> ServiceResult<Vec<Collector>>;

    async fn get_collector(&self, id: CollectorId) -> ServiceResult<Collector>;

    /// Albums in a collector's collection, with price and status.
    async fn get_collector_albums(&self, id: CollectorId) -> ServiceResult<Vec<CollectorAlbum>>;
}

/// `CollectorService` backed by the `/collectors` endpoints.
#[derive(Debug, Clone)]
pub struct CollectorAdapter {
    http: Arc<HttpClient>,
    config: ClientConfig,
}

impl CollectorAdapter {
    pub fn new(http: Arc<HttpClient>, config: &ClientConfig) -> Self {
        Self {
            http,
            config: config.clone(),
        }
    }

    fn to_collector(&self, dto: CollectorDto) -> Collector {
        collector_from_dto(dto, |id| self.config.collector_placeholder(id))
    }
}

#[async_trait]
impl CollectorService for CollectorAdapter {
    async fn get_collectors(&self) -> ServiceResult<Vec<Collector>> {
        debug!("Fetching collectors");

        let dtos: Vec<CollectorDto> = self.http.get("collectors").await?.into_body()?;
        let collectors: Vec<Collector> = dtos
            .into_iter()
            .map(|dto| self.to_collector(dto))
            .collect();

        debug!(collectors = collectors.len(), "Fetched collectors");
        Ok(collectors)
    }

    async fn get_collector(&self, id: CollectorId) -> ServiceResult<Collector> {
        debug!(collector_id = id, "Fetching collector");

        let dto: CollectorDto = self
            .http
            .get(&format!("collectors/{}", id))
            .await?
            .into_body()?;

        Ok(self.to_collector(dto))
    }

    async fn get_collector_albums(&self, id: CollectorId) -> ServiceResult<Vec<CollectorAlbum>> {
        debug!(collector_id = id, "Fetching collector albums");

        let dtos: Vec<CollectorAlbumDto> = self
            .http
            .get(&format!("collectors/{}/albums", id))
            .await?
            .into_body()?;

        let albums = dtos
            .into_iter()
            .map(CollectorAlbum::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        debug!(collector_id = id, albums = albums.len(), "Fetched collector albums");
        Ok(albums)
    }
}
