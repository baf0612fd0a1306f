//! Screen-scoped task management.

use futures_util::FutureExt;
use std::any::Any;
use std::future::Future;
use std::panic::AssertUnwindSafe;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, PoisonError};
use tokio::task::{AbortHandle, JoinHandle};
use tracing::{debug, error};

/// Proof that a fetch was the most recent one started on its screen.
#[derive(Debug, Clone)]
pub struct Ticket {
    generation: u64,
    latest: Arc<AtomicU64>,
}

impl Ticket {
    /// False once a newer fetch has been started on the same screen
    pub fn is_current(&self) -> bool {
        self.latest.load(Ordering::SeqCst) == self.generation
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }
}

/// The background task a screen is running, if any.
///
/// Spawning a new task aborts the previous one; dropping the `ScreenTask`
/// aborts whatever is still running.
#[derive(Debug, Default)]
pub struct ScreenTask {
    latest: Arc<AtomicU64>,
    running: Mutex<Option<AbortHandle>>,
}

impl ScreenTask {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new generation, invalidating every earlier ticket.
    pub fn begin(&self) -> Ticket {
        let generation = self.latest.fetch_add(1, Ordering::SeqCst) + 1;
        Ticket {
            generation,
            latest: Arc::clone(&self.latest),
        }
    }

    /// Spawn `future` as this screen's task, aborting the previous one.
    ///
    /// Must be called from within a tokio runtime.
    pub fn spawn<F>(&self, future: F) -> JoinHandle<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let handle = tokio::spawn(future);

        let previous = self
            .running
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .replace(handle.abort_handle());
        if let Some(previous) = previous {
            debug!("Aborting superseded screen task");
            previous.abort();
        }

        handle
    }

    /// Abort the running task and invalidate its ticket.
    pub fn cancel(&self) {
        self.latest.fetch_add(1, Ordering::SeqCst);
        if let Some(running) = self
            .running
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take()
        {
            running.abort();
        }
    }
}

impl Drop for ScreenTask {
    fn drop(&mut self) {
        if let Some(running) = self
            .running
            .get_mut()
            .unwrap_or_else(PoisonError::into_inner)
            .take()
        {
            running.abort();
        }
    }
}

/// Run `future`, turning a panic into an error message.
pub(crate) async fn guarded<F, T>(future: F) -> Result<T, String>
where
    F: Future<Output = T>,
{
    AssertUnwindSafe(future).catch_unwind().await.map_err(|panic| {
        let reason = panic_reason(&*panic);
        error!(reason = %reason, "Screen task panicked");
        format!("Unexpected error: {}", reason)
    })
}

fn panic_reason(panic: &(dyn Any + Send)) -> String {
    if let Some(s) = panic.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = panic.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}
