//! Performer types

use super::year_of;
use serde::{Deserialize, Serialize};

/// A performer credited on an album
///
/// The backend tells musicians and bands apart only by which date field it
/// fills in; here the distinction is an explicit variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Performer {
    /// A solo musician
    Musician {
        id: i64,
        name: String,
        image: String,
        description: String,
        birth_date: String,
    },
    /// A band
    Band {
        id: i64,
        name: String,
        image: String,
        description: String,
        creation_date: String,
    },
}

impl Performer {
    /// Performer ID
    pub fn id(&self) -> i64 {
        match self {
            Self::Musician { id, .. } | Self::Band { id, .. } => *id,
        }
    }

    /// Display name
    pub fn name(&self) -> &str {
        match self {
            Self::Musician { name, .. } | Self::Band { name, .. } => name,
        }
    }

    /// Image reference
    pub fn image(&self) -> &str {
        match self {
            Self::Musician { image, .. } | Self::Band { image, .. } => image,
        }
    }

    /// Description
    pub fn description(&self) -> &str {
        match self {
            Self::Musician { description, .. } | Self::Band { description, .. } => description,
        }
    }

    /// Birth date for musicians, creation date for bands
    pub fn since(&self) -> &str {
        match self {
            Self::Musician { birth_date, .. } => birth_date,
            Self::Band { creation_date, .. } => creation_date,
        }
    }

    /// Year the musician was born or the band was formed
    pub fn since_year(&self) -> Option<i32> {
        year_of(self.since())
    }

    pub fn is_band(&self) -> bool {
        matches!(self, Self::Band { .. })
    }
}
