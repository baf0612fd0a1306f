//! Album types

use super::{year_of, Comment, Performer, Track};
use serde::{Deserialize, Serialize};

pub type AlbumId = i64;

/// An album with its nested tracks, performers and comments
///
/// Nested sequences are always present; an album the backend sent without
/// tracks simply has an empty `tracks` vector.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Album {
    pub id: AlbumId,
    pub name: String,
    pub cover: String,
    /// ISO-8601 release date as sent by the backend
    pub release_date: String,
    pub description: String,
    pub genre: String,
    pub record_label: String,
    #[serde(default)]
    pub tracks: Vec<Track>,
    #[serde(default)]
    pub performers: Vec<Performer>,
    #[serde(default)]
    pub comments: Vec<Comment>,
}

impl Album {
    /// Release year, if the release date parses
    pub fn release_year(&self) -> Option<i32> {
        year_of(&self.release_date)
    }

    /// Copy of this album with one more track at the end
    #[must_use]
    pub fn with_track(&self, track: Track) -> Self {
        let mut album = self.clone();
        album.tracks.push(track);
        album
    }

    /// Copy of this album with one more comment at the end
    #[must_use]
    pub fn with_comment(&self, comment: Comment) -> Self {
        let mut album = self.clone();
        album.comments.push(comment);
        album
    }
}
