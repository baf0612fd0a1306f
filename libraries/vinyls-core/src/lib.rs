//! Vinyls Core
//!
//! Domain types and error handling for the vinyl catalog client.
//!
//! This crate holds the UI-facing model shared by the network layer
//! (`vinyls-client`) and the screen state holders (`vinyls-state`). Nothing in
//! here knows about HTTP or the wire format.
//!
//! # Example
//!
//! ```rust
//! use vinyls_core::{Comment, Rating};
//!
//! let comment = Comment {
//!     id: 1,
//!     description: "Great pressing".to_string(),
//!     rating: Rating::MAX,
//! };
//! assert_eq!(comment.rating.get(), 5);
//! ```

#![forbid(unsafe_code)]

pub mod error;
pub mod types;

pub use error::{Result, VinylsError};

pub use types::{
    Album, AlbumId, Artist, ArtistAlbum, ArtistId, Collector, CollectorAlbum,
    CollectorAlbumStatus, CollectorDetail, CollectorId, Comment, CommentId, NewComment, Performer, PerformerPrize,
    Rating, Track, TrackId,
};
