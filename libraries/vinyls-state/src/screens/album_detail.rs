//! Album detail screen.
//!
//! Besides the album itself the screen keeps a few purely local toggles and
//! the comment being typed. Only `add_comment` talks to the backend; tracks
//! added here stay on this device.

use super::LastRequested;
use crate::store::StateStore;
use crate::task::{guarded, ScreenTask};
use crate::ui_state::UiState;
use std::sync::Arc;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, warn};
use vinyls_client::AlbumRepository;
use vinyls_core::{Album, AlbumId, CollectorId, NewComment, Rating, Track};

/// Snapshot of the album detail screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlbumDetail {
    pub album: UiState<Album>,
    pub is_playing: bool,
    pub is_liked: bool,
    pub is_saved: bool,
    /// Comment text being typed
    pub comment_draft: String,
    pub is_posting_comment: bool,
    /// Why the last comment could not be posted
    pub comment_error: Option<String>,
}

impl Default for AlbumDetail {
    fn default() -> Self {
        Self {
            album: UiState::Loading,
            is_playing: false,
            is_liked: false,
            is_saved: false,
            comment_draft: String::new(),
            is_posting_comment: false,
            comment_error: None,
        }
    }
}

pub struct AlbumDetailState {
    repository: Arc<AlbumRepository>,
    collector_id: CollectorId,
    store: StateStore<AlbumDetail>,
    load_task: ScreenTask,
    comment_task: ScreenTask,
    last: LastRequested,
}

impl AlbumDetailState {
    /// `collector_id` is the collector comments are posted as.
    pub fn new(repository: Arc<AlbumRepository>, collector_id: CollectorId) -> Self {
        Self {
            repository,
            collector_id,
            store: StateStore::new(AlbumDetail::default()),
            load_task: ScreenTask::new(),
            comment_task: ScreenTask::new(),
            last: LastRequested::default(),
        }
    }

    pub fn state(&self) -> AlbumDetail {
        self.store.current()
    }

    pub fn subscribe(&self) -> watch::Receiver<AlbumDetail> {
        self.store.subscribe()
    }

    pub fn load(&self, id: AlbumId) -> JoinHandle<()> {
        debug!(album_id = id, "Loading album screen");
        let same_album = self.last.get() == Some(id);
        self.last.set(id);

        let ticket = self.load_task.begin();
        if same_album {
            self.store.update(|state| {
                state.album = UiState::Loading;
                state.comment_error = None;
            });
        } else {
            self.store.set(AlbumDetail::default());
        }

        let repository = Arc::clone(&self.repository);
        let store = self.store.clone();
        self.load_task.spawn(async move {
            let album = match guarded(repository.get_album(id)).await {
                Ok(result) => UiState::from(result),
                Err(message) => UiState::Error(message),
            };
            if let UiState::Error(message) = &album {
                warn!(album_id = id, error = %message, "Album fetch failed");
            }

            store.update_if(|state| {
                if !ticket.is_current() {
                    return false;
                }
                state.album = album;
                true
            });
        })
    }

    pub fn retry(&self) -> Option<JoinHandle<()>> {
        self.last.get().map(|id| self.load(id))
    }

    pub fn toggle_playing(&self) {
        self.store.update(|state| state.is_playing = !state.is_playing);
    }

    pub fn toggle_liked(&self) {
        self.store.update(|state| state.is_liked = !state.is_liked);
    }

    pub fn toggle_saved(&self) {
        self.store.update(|state| state.is_saved = !state.is_saved);
    }

    pub fn set_comment_draft(&self, text: impl Into<String>) {
        let text = text.into();
        self.store.update(|state| state.comment_draft = text);
    }

    /// Append a track to the loaded album. Nothing is sent to the backend.
    ///
    /// Returns false if no album is loaded.
    pub fn add_track(&self, track: Track) -> bool {
        self.store.update_if(|state| match &state.album {
            UiState::Success(album) => {
                state.album = UiState::Success(album.with_track(track));
                true
            }
            _ => false,
        })
    }

    /// Post the current draft as a comment on the loaded album.
    ///
    /// Does nothing and returns `None` when the draft is blank, no album is
    /// loaded, or a comment is already being posted.
    pub fn add_comment(&self) -> Option<JoinHandle<()>> {
        let collector_id = self.collector_id;
        let mut request = None;
        self.store.update_if(|state| {
            if state.is_posting_comment {
                return false;
            }
            let Some(album_id) = state.album.data().map(|album| album.id) else {
                return false;
            };
            let Ok(comment) = NewComment::new(&state.comment_draft, Rating::MAX, collector_id)
            else {
                return false;
            };

            request = Some((album_id, comment));
            state.is_posting_comment = true;
            state.comment_error = None;
            true
        });
        let (album_id, comment) = request?;

        debug!(album_id, "Posting comment");
        let repository = Arc::clone(&self.repository);
        let store = self.store.clone();

        Some(self.comment_task.spawn(async move {
            let result = guarded(repository.add_comment(album_id, &comment)).await;

            store.update(|state| {
                state.is_posting_comment = false;
                let showing = state.album.data().map(|album| album.id) == Some(album_id);
                match result {
                    Ok(Ok(stored)) => {
                        if let UiState::Success(album) = &state.album {
                            if album.id == album_id {
                                state.album = UiState::Success(album.with_comment(stored));
                                state.comment_draft.clear();
                            }
                        }
                    }
                    Ok(Err(e)) => {
                        warn!(album_id, error = %e, "Posting comment failed");
                        if showing {
                            state.comment_error = Some(e.to_string());
                        }
                    }
                    Err(message) => {
                        if showing {
                            state.comment_error = Some(message);
                        }
                    }
                }
            });
        }))
    }
}
