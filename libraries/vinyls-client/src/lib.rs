//! Vinyls Client
//!
//! Data-access layer for the Vinyls catalog REST API.
//!
//! # Layers
//!
//! - **HTTP client** ([`HttpClient`]): one configured `reqwest` client that
//!   returns status, body and error body for every call
//! - **Service adapters** ([`AlbumAdapter`], [`ArtistAdapter`],
//!   [`CollectorAdapter`]): turn HTTP responses into [`ServiceResult`]s and
//!   wire DTOs into domain values
//! - **Cache** ([`CatalogCache`]): unbounded, first-write-wins lists keyed by id
//! - **Repositories** ([`AlbumRepository`], [`ArtistRepository`],
//!   [`CollectorRepository`]): thin pass-through the screens talk to
//!
//! # Example
//!
//! ```ignore
//! use vinyls_client::{ClientConfig, VinylsClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = VinylsClient::new(ClientConfig::default())?;
//!
//!     let albums = client.albums().get_albums().await?;
//!     println!("Found {} albums", albums.len());
//!
//!     let detail = client.collectors().get_collector_detail(100).await?;
//!     println!("{} owns {} albums", detail.collector.name, detail.albums.len());
//!
//!     Ok(())
//! }
//! ```

mod album;
mod artist;
mod cache;
mod client;
mod collector;
mod config;
mod error;
mod http;
mod mapping;
mod repository;
pub mod types;

pub use album::{AlbumAdapter, AlbumService};
pub use artist::{ArtistAdapter, ArtistService};
pub use cache::{CatalogCache, ListCache};
pub use client::VinylsClient;
pub use collector::{CollectorAdapter, CollectorService};
pub use config::{ClientConfig, Environment, ACTIVE_ENVIRONMENT};
pub use error::{ConfigError, HttpError, ServiceError, ServiceResult};
pub use http::{ApiResponse, HttpClient};
pub use mapping::collector_from_dto;
pub use repository::{AlbumRepository, ArtistRepository, CollectorRepository};
