use super::{LastRequested, ResourceScreen};
use crate::ui_state::UiState;
use std::sync::Arc;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::debug;
use vinyls_client::CollectorRepository;
use vinyls_core::{Collector, CollectorDetail, CollectorId};

/// Collections list screen.
pub struct CollectorListState {
    repository: Arc<CollectorRepository>,
    screen: ResourceScreen<Vec<Collector>>,
}

impl CollectorListState {
    pub fn new(repository: Arc<CollectorRepository>) -> Self {
        Self {
            repository,
            screen: ResourceScreen::new(),
        }
    }

    pub fn state(&self) -> UiState<Vec<Collector>> {
        self.screen.state()
    }

    pub fn subscribe(&self) -> watch::Receiver<UiState<Vec<Collector>>> {
        self.screen.subscribe()
    }

    pub fn load(&self) -> JoinHandle<()> {
        debug!("Loading collectors screen");
        let repository = Arc::clone(&self.repository);
        self.screen
            .launch(async move { repository.get_collectors().await })
    }

    pub fn retry(&self) -> JoinHandle<()> {
        self.load()
    }
}

/// Collection detail screen: the collector and the albums they hold.
pub struct CollectorDetailState {
    repository: Arc<CollectorRepository>,
    screen: ResourceScreen<CollectorDetail>,
    last: LastRequested,
}

impl CollectorDetailState {
    pub fn new(repository: Arc<CollectorRepository>) -> Self {
        Self {
            repository,
            screen: ResourceScreen::new(),
            last: LastRequested::default(),
        }
    }

    pub fn state(&self) -> UiState<CollectorDetail> {
        self.screen.state()
    }

    pub fn subscribe(&self) -> watch::Receiver<UiState<CollectorDetail>> {
        self.screen.subscribe()
    }

    pub fn load(&self, id: CollectorId) -> JoinHandle<()> {
        debug!(collector_id = id, "Loading collection screen");
        self.last.set(id);
        let repository = Arc::clone(&self.repository);
        self.screen
            .launch(async move { repository.get_collector_detail(id).await })
    }

    pub fn retry(&self) -> Option<JoinHandle<()>> {
        self.last.get().map(|id| self.load(id))
    }
}
