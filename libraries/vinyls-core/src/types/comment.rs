//! Comment types

use crate::error::{Result, VinylsError};
use serde::{Deserialize, Serialize};
use std::fmt;

pub type CommentId = i64;

/// Star rating attached to a comment, always within 1..=5
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct Rating(u8);

impl Rating {
    /// Lowest accepted rating
    pub const MIN: Rating = Rating(1);
    /// Highest accepted rating
    pub const MAX: Rating = Rating(5);

    /// Create a rating, rejecting values outside 1..=5
    pub fn new(value: i64) -> Result<Self> {
        if (i64::from(Self::MIN.0)..=i64::from(Self::MAX.0)).contains(&value) {
            Ok(Self(value as u8))
        } else {
            Err(VinylsError::InvalidRating(value))
        }
    }

    pub fn get(self) -> u8 {
        self.0
    }
}

impl TryFrom<i64> for Rating {
    type Error = VinylsError;

    fn try_from(value: i64) -> Result<Self> {
        Self::new(value)
    }
}

impl From<Rating> for i64 {
    fn from(rating: Rating) -> Self {
        i64::from(rating.0)
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/5", self.0)
    }
}

/// A collector's comment on an album
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    pub id: CommentId,
    pub description: String,
    pub rating: Rating,
}

/// Data for posting a new comment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewComment {
    pub description: String,
    pub rating: Rating,
    /// Collector the comment is posted as
    pub collector_id: i64,
}

impl NewComment {
    /// Trims `description`, rejecting one that is blank.
    pub fn new(description: &str, rating: Rating, collector_id: i64) -> Result<Self> {
        let description = description.trim();
        if description.is_empty() {
            return Err(VinylsError::invalid_input("comment description is empty"));
        }

        Ok(Self {
            description: description.to_string(),
            rating,
            collector_id,
        })
    }
}
