//! Service doubles and fixtures shared by the screen tests.

#![allow(dead_code)]

use async_trait::async_trait;
use mockall::mock;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Once};
use tokio::sync::Notify;
use vinyls_client::{
    AlbumRepository, AlbumService, ArtistService, CatalogCache, CollectorService, ServiceResult,
};
use vinyls_core::{
    Album, AlbumId, Artist, ArtistId, Collector, CollectorAlbum, CollectorAlbumStatus,
    CollectorId, Comment, NewComment, Rating, Track,
};

static INIT: Once = Once::new();

pub fn init_tracing() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_test_writer()
            .with_max_level(tracing::Level::DEBUG)
            .try_init();
    });
}

mock! {
    pub Albums {}

    #[async_trait]
    impl AlbumService for Albums {
        async fn get_albums(&self) -> ServiceResult<Vec<Album>>;
        async fn get_album(&self, id: AlbumId) -> ServiceResult<Album>;
        async fn create_album(&self, album: &Album) -> ServiceResult<Album>;
        async fn update_album(&self, id: AlbumId, album: &Album) -> ServiceResult<Album>;
        async fn delete_album(&self, id: AlbumId) -> ServiceResult<()>;
        async fn get_comments(&self, album_id: AlbumId) -> ServiceResult<Vec<Comment>>;
        async fn add_comment(&self, album_id: AlbumId, comment: &NewComment) -> ServiceResult<Comment>;
    }
}

mock! {
    pub Artists {}

    #[async_trait]
    impl ArtistService for Artists {
        async fn get_artists(&self) -> ServiceResult<Vec<Artist>>;
        async fn get_artist(&self, id: ArtistId) -> ServiceResult<Artist>;
    }
}

mock! {
    pub Collectors {}

    #[async_trait]
    impl CollectorService for Collectors {
        async fn get_collectors(&self) -> ServiceResult<Vec<Collector>>;
        async fn get_collector(&self, id: CollectorId) -> ServiceResult<Collector>;
        async fn get_collector_albums(&self, id: CollectorId) -> ServiceResult<Vec<CollectorAlbum>>;
    }
}

pub fn cache() -> Arc<CatalogCache> {
    Arc::new(CatalogCache::new())
}

pub fn album(id: AlbumId, name: &str) -> Album {
    Album {
        id,
        name: name.to_string(),
        cover: format!("https://example.com/covers/{}.jpg", id),
        release_date: "1984-08-01T00:00:00.000Z".to_string(),
        description: "Salsa".to_string(),
        genre: "Salsa".to_string(),
        record_label: "Elektra".to_string(),
        tracks: vec![Track {
            id: 1,
            name: "Decisiones".to_string(),
            duration: "5:05".to_string(),
        }],
        performers: Vec::new(),
        comments: Vec::new(),
    }
}

pub fn comment(id: i64, description: &str) -> Comment {
    Comment {
        id,
        description: description.to_string(),
        rating: Rating::MAX,
    }
}

pub fn artist(id: ArtistId, name: &str) -> Artist {
    Artist {
        id,
        name: name.to_string(),
        image: None,
        description: "Cantante panameño".to_string(),
        birth_date: "1948-07-16T00:00:00.000Z".to_string(),
        albums: Vec::new(),
        prizes: Vec::new(),
    }
}

pub fn collector(id: CollectorId, name: &str) -> Collector {
    Collector {
        id,
        name: name.to_string(),
        telephone: "3502457896".to_string(),
        email: "manollo@caracol.com.co".to_string(),
        image: format!("placeholder-{}", id),
        album_count: 1,
    }
}

pub fn collector_album(id: i64, album_id: AlbumId) -> CollectorAlbum {
    CollectorAlbum {
        id,
        price: 35,
        status: CollectorAlbumStatus::Active,
        album: album(album_id, "Poeta del pueblo"),
    }
}

/// Album service whose first `get_albums` call hangs until the task is
/// aborted; later calls answer immediately.
pub struct GatedAlbums {
    pub started: Arc<Notify>,
    gate_closed: AtomicBool,
    answer: Vec<Album>,
}

impl GatedAlbums {
    pub fn new(answer: Vec<Album>) -> Self {
        Self {
            started: Arc::new(Notify::new()),
            gate_closed: AtomicBool::new(true),
            answer,
        }
    }
}

#[async_trait]
impl AlbumService for GatedAlbums {
    async fn get_albums(&self) -> ServiceResult<Vec<Album>> {
        self.started.notify_one();
        if self.gate_closed.swap(false, Ordering::SeqCst) {
            std::future::pending::<()>().await;
        }
        Ok(self.answer.clone())
    }

    async fn get_album(&self, _id: AlbumId) -> ServiceResult<Album> {
        unimplemented!()
    }

    async fn create_album(&self, _album: &Album) -> ServiceResult<Album> {
        unimplemented!()
    }

    async fn update_album(&self, _id: AlbumId, _album: &Album) -> ServiceResult<Album> {
        unimplemented!()
    }

    async fn delete_album(&self, _id: AlbumId) -> ServiceResult<()> {
        unimplemented!()
    }

    async fn get_comments(&self, _album_id: AlbumId) -> ServiceResult<Vec<Comment>> {
        unimplemented!()
    }

    async fn add_comment(
        &self,
        _album_id: AlbumId,
        _comment: &NewComment,
    ) -> ServiceResult<Comment> {
        unimplemented!()
    }
}

pub fn album_repository(service: impl AlbumService + 'static) -> Arc<AlbumRepository> {
    Arc::new(AlbumRepository::new(Arc::new(service), cache()))
}
