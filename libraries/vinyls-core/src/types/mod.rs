mod album;
mod artist;
mod collector;
mod comment;
mod performer;
mod track;

pub use album::{Album, AlbumId};
pub use artist::{Artist, ArtistAlbum, ArtistId, PerformerPrize};
pub use collector::{Collector, CollectorAlbum, CollectorAlbumStatus, CollectorDetail, CollectorId};
pub use comment::{Comment, CommentId, NewComment, Rating};
pub use performer::Performer;
pub use track::{Track, TrackId};

/// Parse the year out of an ISO-8601 date or timestamp.
///
/// Accepts full RFC 3339 timestamps (`1984-08-01T00:00:00.000Z`) as well as
/// plain calendar dates (`1984-08-01`).
pub(crate) fn year_of(date: &str) -> Option<i32> {
    use chrono::Datelike;

    if let Ok(ts) = chrono::DateTime::parse_from_rfc3339(date) {
        return Some(ts.year());
    }
    chrono::NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .ok()
        .map(|d| d.year())
}
