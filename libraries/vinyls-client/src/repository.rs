//! Repositories the screens talk to.
//!
//! Each one forwards to its service adapter and consults the shared
//! [`CatalogCache`] for the lists that are cached.

use crate::album::AlbumService;
use crate::artist::ArtistService;
use crate::cache::CatalogCache;
use crate::collector::CollectorService;
use crate::error::ServiceResult;
use std::sync::Arc;
use tracing::debug;
use vinyls_core::{
    Album, AlbumId, Artist, ArtistAlbum, ArtistId, Collector, CollectorAlbum, CollectorDetail,
    CollectorId, Comment, NewComment,
};

pub struct AlbumRepository {
    service: Arc<dyn AlbumService>,
    cache: Arc<CatalogCache>,
}

impl AlbumRepository {
    pub fn new(service: Arc<dyn AlbumService>, cache: Arc<CatalogCache>) -> Self {
        Self { service, cache }
    }

    pub async fn get_albums(&self) -> ServiceResult<Vec<Album>> {
        self.service.get_albums().await
    }

    pub async fn get_album(&self, id: AlbumId) -> ServiceResult<Album> {
        self.service.get_album(id).await
    }

    pub async fn create_album(&self, album: &Album) -> ServiceResult<Album> {
        self.service.create_album(album).await
    }

    pub async fn update_album(&self, id: AlbumId, album: &Album) -> ServiceResult<Album> {
        self.service.update_album(id, album).await
    }

    pub async fn delete_album(&self, id: AlbumId) -> ServiceResult<()> {
        self.service.delete_album(id).await
    }

    /// Comments on an album, served from the cache once fetched.
    pub async fn get_comments(&self, album_id: AlbumId) -> ServiceResult<Vec<Comment>> {
        let cached = self.cache.album_comments.get(album_id);
        if !cached.is_empty() {
            debug!(album_id, comments = cached.len(), "Comments served from cache");
            return Ok(cached);
        }

        let comments = self.service.get_comments(album_id).await?;
        self.cache.album_comments.put(album_id, comments.clone());
        Ok(comments)
    }

    /// Post a comment. The comment cache is not updated.
    pub async fn add_comment(
        &self,
        album_id: AlbumId,
        comment: &NewComment,
    ) -> ServiceResult<Comment> {
        self.service.add_comment(album_id, comment).await
    }

    pub fn clear_cache(&self) {
        self.cache.album_comments.clear();
    }
}

pub struct ArtistRepository {
    service: Arc<dyn ArtistService>,
    cache: Arc<CatalogCache>,
}

impl ArtistRepository {
    pub fn new(service: Arc<dyn ArtistService>, cache: Arc<CatalogCache>) -> Self {
        Self { service, cache }
    }

    pub async fn get_artists(&self) -> ServiceResult<Vec<Artist>> {
        self.service.get_artists().await
    }

    pub async fn get_artist(&self, id: ArtistId) -> ServiceResult<Artist> {
        self.service.get_artist(id).await
    }

    /// Album summaries of an artist, served from the cache once fetched.
    pub async fn get_artist_albums(&self, id: ArtistId) -> ServiceResult<Vec<ArtistAlbum>> {
        let cached = self.cache.artist_albums.get(id);
        if !cached.is_empty() {
            debug!(artist_id = id, albums = cached.len(), "Artist albums served from cache");
            return Ok(cached);
        }

        let albums = self.service.get_artist(id).await?.albums;
        self.cache.artist_albums.put(id, albums.clone());
        Ok(albums)
    }

    pub fn clear_cache(&self) {
        self.cache.artist_albums.clear();
    }
}

pub struct CollectorRepository {
    service: Arc<dyn CollectorService>,
    cache: Arc<CatalogCache>,
}

impl CollectorRepository {
    pub fn new(service: Arc<dyn CollectorService>, cache: Arc<CatalogCache>) -> Self {
        Self { service, cache }
    }

    pub async fn get_collectors(&self) -> ServiceResult<Vec<Collector>> {
        self.service.get_collectors().await
    }

    pub async fn get_collector(&self, id: CollectorId) -> ServiceResult<Collector> {
        self.service.get_collector(id).await
    }

    /// Albums of a collector, served from the cache once fetched.
    pub async fn get_collector_albums(&self, id: CollectorId) -> ServiceResult<Vec<CollectorAlbum>> {
        let cached = self.cache.collector_albums.get(id);
        if !cached.is_empty() {
            debug!(collector_id = id, albums = cached.len(), "Collector albums served from cache");
            return Ok(cached);
        }

        let albums = self.service.get_collector_albums(id).await?;
        self.cache.collector_albums.put(id, albums.clone());
        Ok(albums)
    }

    /// Collector plus their albums; fails if either call fails.
    pub async fn get_collector_detail(&self, id: CollectorId) -> ServiceResult<CollectorDetail> {
        let collector = self.get_collector(id).await?;
        let albums = self.get_collector_albums(id).await?;
        Ok(CollectorDetail { collector, albums })
    }

    pub fn clear_cache(&self) {
        self.cache.collector_albums.clear();
    }
}
