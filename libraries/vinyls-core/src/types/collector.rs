//! Collector types

use super::Album;
use crate::error::VinylsError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub type CollectorId = i64;

/// A record collector
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Collector {
    pub id: CollectorId,
    pub name: String,
    pub telephone: String,
    pub email: String,
    /// First favorite performer's image, or a placeholder keyed by id
    pub image: String,
    /// Number of albums in the collection
    pub album_count: usize,
}

/// A collector together with the albums in their collection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollectorDetail {
    pub collector: Collector,
    pub albums: Vec<CollectorAlbum>,
}

/// Availability of an album in a collector's collection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CollectorAlbumStatus {
    Active,
    Inactive,
}

impl CollectorAlbumStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Inactive => "Inactive",
        }
    }
}

impl FromStr for CollectorAlbumStatus {
    type Err = VinylsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "active" => Ok(Self::Active),
            "inactive" => Ok(Self::Inactive),
            _ => Err(VinylsError::UnknownStatus(s.to_string())),
        }
    }
}

impl fmt::Display for CollectorAlbumStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An album held by a collector, with its asking price
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollectorAlbum {
    pub id: i64,
    pub price: i64,
    pub status: CollectorAlbumStatus,
    pub album: Album,
}
