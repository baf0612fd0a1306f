//! Observable snapshot store backed by a watch channel.

use std::sync::Arc;
use tokio::sync::watch;

/// Holds the current snapshot of a screen and notifies subscribers on change.
///
/// Cloning the store shares the same channel.
#[derive(Debug)]
pub struct StateStore<S> {
    sender: Arc<watch::Sender<S>>,
    receiver: watch::Receiver<S>,
}

impl<S> Clone for StateStore<S> {
    fn clone(&self) -> Self {
        Self {
            sender: Arc::clone(&self.sender),
            receiver: self.receiver.clone(),
        }
    }
}

impl<S: Clone> StateStore<S> {
    pub fn new(initial: S) -> Self {
        let (sender, receiver) = watch::channel(initial);
        Self {
            sender: Arc::new(sender),
            receiver,
        }
    }

    /// Clone of the current snapshot
    pub fn current(&self) -> S {
        self.receiver.borrow().clone()
    }

    /// Subscribe to snapshot changes
    pub fn subscribe(&self) -> watch::Receiver<S> {
        self.receiver.clone()
    }

    /// Replace the snapshot
    pub fn set(&self, state: S) {
        self.sender.send_replace(state);
    }

    /// Derive the next snapshot from the current one
    pub fn update<F>(&self, f: F)
    where
        F: FnOnce(&mut S),
    {
        self.sender.send_modify(f);
    }

    /// Like `update`, but subscribers are only notified when `f` returns true
    pub fn update_if<F>(&self, f: F) -> bool
    where
        F: FnOnce(&mut S) -> bool,
    {
        self.sender.send_if_modified(f)
    }
}
