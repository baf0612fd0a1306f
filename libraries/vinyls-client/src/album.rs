//! Album endpoints of the Vinyls API.

use crate::error::ServiceResult;
use crate::http::HttpClient;
use crate::types::{AlbumCreateDto, AlbumDto, CommentCreateDto, CommentDto};
use async_trait::async_trait;
use std::sync::Arc;
use tracing::debug;
use vinyls_core::{Album, AlbumId, Comment, NewComment};

/// Album operations the repositories depend on.
#[async_trait]
pub trait AlbumService: Send + Sync {
    /// All albums, in the order the server returned them.
    async fn get_albums(&self) -> ServiceResult<Vec<Album>>;

    async fn get_album(&self, id: AlbumId) -> ServiceResult<Album>;

    /// Create an album; the returned value carries the server-assigned id.
    async fn create_album(&self, album: &Album) -> ServiceResult<Album>;

    async fn update_album(&self, id: AlbumId, album: &Album) -> ServiceResult<Album>;

    async fn delete_album(&self, id: AlbumId) -> ServiceResult<()>;

    async fn get_comments(&self, album_id: AlbumId) -> ServiceResult<Vec<Comment>>;

    /// Post a comment on an album and return it as stored by the server.
    async fn add_comment(&self, album_id: AlbumId, comment: &NewComment)
        -> ServiceResult<Comment>;
}

/// `AlbumService` backed by the REST API.
#[derive(Debug, Clone)]
pub struct AlbumAdapter {
    http: Arc<HttpClient>,
}

impl AlbumAdapter {
    pub fn new(http: Arc<HttpClient>) -> Self {
        Self { http }
    }
}

#[async_trait]
impl AlbumService for AlbumAdapter {
    async fn get_albums(&self) -> ServiceResult<Vec<Album>> {
        debug!("Fetching albums");

        let dtos: Vec<AlbumDto> = self.http.get("albums").await?.into_body()?;
        let albums = dtos
            .into_iter()
            .map(Album::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        debug!(albums = albums.len(), "Fetched albums");
        Ok(albums)
    }

    async fn get_album(&self, id: AlbumId) -> ServiceResult<Album> {
        debug!(album_id = id, "Fetching album");

        let dto: AlbumDto = self
            .http
            .get(&format!("albums/{}", id))
            .await?
            .into_body()?;

        Ok(Album::try_from(dto)?)
    }

    async fn create_album(&self, album: &Album) -> ServiceResult<Album> {
        debug!(name = %album.name, "Creating album");

        let request = AlbumCreateDto::from(album);
        let dto: AlbumDto = self.http.post("albums", &request).await?.into_written()?;

        debug!(album_id = dto.id, "Album created");
        Ok(Album::try_from(dto)?)
    }

    async fn update_album(&self, id: AlbumId, album: &Album) -> ServiceResult<Album> {
        debug!(album_id = id, "Updating album");

        let request = AlbumCreateDto::from(album);
        let dto: AlbumDto = self
            .http
            .put(&format!("albums/{}", id), &request)
            .await?
            .into_written()?;

        Ok(Album::try_from(dto)?)
    }

    async fn delete_album(&self, id: AlbumId) -> ServiceResult<()> {
        debug!(album_id = id, "Deleting album");

        self.http
            .delete(&format!("albums/{}", id))
            .await?
            .into_status()?;

        debug!(album_id = id, "Album deleted");
        Ok(())
    }

    async fn get_comments(&self, album_id: AlbumId) -> ServiceResult<Vec<Comment>> {
        debug!(album_id, "Fetching album comments");

        let dtos: Vec<CommentDto> = self
            .http
            .get(&format!("albums/{}/comments", album_id))
            .await?
            .into_body()?;

        Ok(dtos
            .into_iter()
            .map(Comment::try_from)
            .collect::<Result<Vec<_>, _>>()?)
    }

    async fn add_comment(
        &self,
        album_id: AlbumId,
        comment: &NewComment,
    ) -> ServiceResult<Comment> {
        debug!(album_id, collector_id = comment.collector_id, "Posting comment");

        let request = CommentCreateDto::from(comment);
        let dto: CommentDto = self
            .http
            .post(&format!("albums/{}/comments", album_id), &request)
            .await?
            .into_written()?;

        Ok(Comment::try_from(dto)?)
    }
}
