//! Track types

use serde::{Deserialize, Serialize};

pub type TrackId = i64;

/// A track on an album
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Track {
    pub id: TrackId,
    pub name: String,
    /// Display duration as sent by the backend (e.g. `"4:05"`), not parsed
    pub duration: String,
}
