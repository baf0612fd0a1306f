use super::ResourceScreen;
use crate::ui_state::UiState;
use std::sync::Arc;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::debug;
use vinyls_client::AlbumRepository;
use vinyls_core::Album;

/// Albums list screen.
pub struct AlbumListState {
    repository: Arc<AlbumRepository>,
    screen: ResourceScreen<Vec<Album>>,
}

impl AlbumListState {
    pub fn new(repository: Arc<AlbumRepository>) -> Self {
        Self {
            repository,
            screen: ResourceScreen::new(),
        }
    }

    pub fn state(&self) -> UiState<Vec<Album>> {
        self.screen.state()
    }

    pub fn subscribe(&self) -> watch::Receiver<UiState<Vec<Album>>> {
        self.screen.subscribe()
    }

    /// Fetch every album.
    pub fn load(&self) -> JoinHandle<()> {
        debug!("Loading albums screen");
        let repository = Arc::clone(&self.repository);
        self.screen
            .launch(async move { repository.get_albums().await })
    }

    pub fn retry(&self) -> JoinHandle<()> {
        self.load()
    }
}
