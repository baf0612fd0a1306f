//! One state holder per screen.

mod album_detail;
mod album_list;
mod artist;
mod collector;

pub use album_detail::{AlbumDetail, AlbumDetailState};
pub use album_list::AlbumListState;
pub use artist::{ArtistDetailState, ArtistListState};
pub use collector::{CollectorDetailState, CollectorListState};

use crate::store::StateStore;
use crate::task::{guarded, ScreenTask};
use crate::ui_state::UiState;
use std::future::Future;
use std::sync::{Mutex, PoisonError};
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::warn;
use vinyls_client::ServiceResult;

/// State and running task of a screen that shows one fetched resource.
#[derive(Debug)]
pub struct ResourceScreen<T> {
    store: StateStore<UiState<T>>,
    task: ScreenTask,
}

impl<T> ResourceScreen<T>
where
    T: Clone + Send + Sync + 'static,
{
    pub fn new() -> Self {
        Self {
            store: StateStore::new(UiState::Loading),
            task: ScreenTask::new(),
        }
    }

    pub fn state(&self) -> UiState<T> {
        self.store.current()
    }

    pub fn subscribe(&self) -> watch::Receiver<UiState<T>> {
        self.store.subscribe()
    }

    /// Publish `Loading`, run `fetch` and publish its outcome.
    ///
    /// The outcome is dropped if another fetch was launched in the meantime.
    pub fn launch<F>(&self, fetch: F) -> JoinHandle<()>
    where
        F: Future<Output = ServiceResult<T>> + Send + 'static,
    {
        let ticket = self.task.begin();
        self.store.set(UiState::Loading);

        let store = self.store.clone();
        self.task.spawn(async move {
            let next = match guarded(fetch).await {
                Ok(Ok(data)) => UiState::Success(data),
                Ok(Err(e)) => {
                    warn!(error = %e, "Screen fetch failed");
                    UiState::Error(e.to_string())
                }
                Err(message) => UiState::Error(message),
            };

            store.update_if(|state| {
                if ticket.is_current() {
                    *state = next;
                    true
                } else {
                    false
                }
            });
        })
    }
}

impl<T> Default for ResourceScreen<T>
where
    T: Clone + Send + Sync + 'static,
{
    fn default() -> Self {
        Self::new()
    }
}

/// Id of the resource a detail screen last loaded, for retries.
#[derive(Debug, Default)]
pub(crate) struct LastRequested(Mutex<Option<i64>>);

impl LastRequested {
    pub(crate) fn set(&self, id: i64) {
        *self.0.lock().unwrap_or_else(PoisonError::into_inner) = Some(id);
    }

    pub(crate) fn get(&self) -> Option<i64> {
        *self.0.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
