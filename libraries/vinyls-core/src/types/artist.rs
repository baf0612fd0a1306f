//! Artist types

use super::year_of;
use serde::{Deserialize, Serialize};

pub type ArtistId = i64;

/// A musician with their discography summary and prizes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Artist {
    pub id: ArtistId,
    pub name: String,
    pub image: Option<String>,
    pub description: String,
    pub birth_date: String,
    #[serde(default)]
    pub albums: Vec<ArtistAlbum>,
    #[serde(default)]
    pub prizes: Vec<PerformerPrize>,
}

impl Artist {
    pub fn birth_year(&self) -> Option<i32> {
        year_of(&self.birth_date)
    }
}

/// Lightweight album summary listed on an artist (no nested tracks)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtistAlbum {
    pub id: i64,
    pub name: String,
    pub cover: String,
    pub release_date: String,
    pub description: String,
    pub genre: String,
    pub record_label: String,
}

/// A prize awarded to a performer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PerformerPrize {
    pub id: i64,
    pub premiation_date: String,
}
