//! Composition root for the Vinyls data-access layer.

use crate::album::AlbumAdapter;
use crate::artist::ArtistAdapter;
use crate::cache::CatalogCache;
use crate::collector::CollectorAdapter;
use crate::config::ClientConfig;
use crate::error::ConfigError;
use crate::http::HttpClient;
use crate::repository::{AlbumRepository, ArtistRepository, CollectorRepository};
use std::sync::Arc;

/// Owns the HTTP client, the cache and one repository per resource.
///
/// Build one per application and hand its repositories to the screens.
///
/// # Example
///
/// ```ignore
/// use vinyls_client::{ClientConfig, VinylsClient};
///
/// let client = VinylsClient::new(ClientConfig::new("http://localhost:3000"))?;
/// let artists = client.artists().get_artists().await?;
/// ```
#[derive(Clone)]
pub struct VinylsClient {
    config: ClientConfig,
    http: Arc<HttpClient>,
    cache: Arc<CatalogCache>,
    albums: Arc<AlbumRepository>,
    artists: Arc<ArtistRepository>,
    collectors: Arc<CollectorRepository>,
}

impl VinylsClient {
    /// Create a new client with the given configuration.
    pub fn new(config: ClientConfig) -> Result<Self, ConfigError> {
        let http = Arc::new(HttpClient::new(&config)?);
        let cache = Arc::new(CatalogCache::new());

        let albums = Arc::new(AlbumRepository::new(
            Arc::new(AlbumAdapter::new(Arc::clone(&http))),
            Arc::clone(&cache),
        ));
        let artists = Arc::new(ArtistRepository::new(
            Arc::new(ArtistAdapter::new(Arc::clone(&http))),
            Arc::clone(&cache),
        ));
        let collectors = Arc::new(CollectorRepository::new(
            Arc::new(CollectorAdapter::new(Arc::clone(&http), &config)),
            Arc::clone(&cache),
        ));

        Ok(Self {
            config,
            http,
            cache,
            albums,
            artists,
            collectors,
        })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Base URL after normalization.
    pub fn base_url(&self) -> &str {
        self.http.base_url()
    }

    pub fn cache(&self) -> Arc<CatalogCache> {
        Arc::clone(&self.cache)
    }

    pub fn albums(&self) -> Arc<AlbumRepository> {
        Arc::clone(&self.albums)
    }

    pub fn artists(&self) -> Arc<ArtistRepository> {
        Arc::clone(&self.artists)
    }

    pub fn collectors(&self) -> Arc<CollectorRepository> {
        Arc::clone(&self.collectors)
    }
}
