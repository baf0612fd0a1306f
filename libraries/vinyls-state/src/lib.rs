//! Vinyls State
//!
//! Observable, per-screen UI state for the vinyl catalog.
//!
//! Each screen owns a state holder that turns user or lifecycle events into
//! repository calls and republishes an immutable snapshot when they finish.
//! Snapshots are observed through `tokio::sync::watch` receivers.
//!
//! Starting a new load on a screen cancels the one still in flight, and a
//! result is only published if no newer load was started meanwhile. Dropping
//! a holder cancels whatever it was running.
//!
//! # Example
//!
//! ```ignore
//! use vinyls_client::{ClientConfig, VinylsClient};
//! use vinyls_state::{AlbumListState, UiState};
//!
//! let client = VinylsClient::new(ClientConfig::default())?;
//! let screen = AlbumListState::new(client.albums());
//!
//! screen.load().await?;
//! if let UiState::Success(albums) = screen.state() {
//!     println!("{} albums", albums.len());
//! }
//! ```

mod screens;
mod store;
mod task;
mod ui_state;

pub use screens::{
    AlbumDetail, AlbumDetailState, AlbumListState, ArtistDetailState, ArtistListState,
    CollectorDetailState, CollectorListState, ResourceScreen,
};
pub use store::StateStore;
pub use task::{ScreenTask, Ticket};
pub use ui_state::UiState;
