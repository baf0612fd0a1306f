use super::{LastRequested, ResourceScreen};
use crate::ui_state::UiState;
use std::sync::Arc;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::debug;
use vinyls_client::ArtistRepository;
use vinyls_core::{Artist, ArtistId};

/// Musicians list screen.
pub struct ArtistListState {
    repository: Arc<ArtistRepository>,
    screen: ResourceScreen<Vec<Artist>>,
}

impl ArtistListState {
    pub fn new(repository: Arc<ArtistRepository>) -> Self {
        Self {
            repository,
            screen: ResourceScreen::new(),
        }
    }

    pub fn state(&self) -> UiState<Vec<Artist>> {
        self.screen.state()
    }

    pub fn subscribe(&self) -> watch::Receiver<UiState<Vec<Artist>>> {
        self.screen.subscribe()
    }

    pub fn load(&self) -> JoinHandle<()> {
        debug!("Loading artists screen");
        let repository = Arc::clone(&self.repository);
        self.screen
            .launch(async move { repository.get_artists().await })
    }

    pub fn retry(&self) -> JoinHandle<()> {
        self.load()
    }
}

/// Musician detail screen.
pub struct ArtistDetailState {
    repository: Arc<ArtistRepository>,
    screen: ResourceScreen<Artist>,
    last: LastRequested,
}

impl ArtistDetailState {
    pub fn new(repository: Arc<ArtistRepository>) -> Self {
        Self {
            repository,
            screen: ResourceScreen::new(),
            last: LastRequested::default(),
        }
    }

    pub fn state(&self) -> UiState<Artist> {
        self.screen.state()
    }

    pub fn subscribe(&self) -> watch::Receiver<UiState<Artist>> {
        self.screen.subscribe()
    }

    pub fn load(&self, id: ArtistId) -> JoinHandle<()> {
        debug!(artist_id = id, "Loading artist screen");
        self.last.set(id);
        let repository = Arc::clone(&self.repository);
        self.screen
            .launch(async move { repository.get_artist(id).await })
    }

    /// Reload the last requested artist; `None` if nothing was loaded yet.
    pub fn retry(&self) -> Option<JoinHandle<()>> {
        self.last.get().map(|id| self.load(id))
    }
}
