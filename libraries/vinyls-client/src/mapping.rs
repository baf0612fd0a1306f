//! DTO to domain conversion.
//!
//! Null nested sequences become empty vectors, and the loosely typed wire
//! fields (performer dates, ratings, statuses) are validated here.

use crate::types::{
    AlbumCreateDto, AlbumDto, ArtistAlbumDto, ArtistDto, CollectorAlbumDto, CollectorDto,
    CommentCreateDto, CommentDto, CollectorRefDto, PerformerDto, PerformerPrizeDto, TrackDto,
};
use vinyls_core::{
    Album, Artist, ArtistAlbum, Collector, CollectorAlbum, Comment, NewComment, Performer,
    PerformerPrize, Rating, Result, Track, VinylsError,
};

fn map_all<D, T>(items: Option<Vec<D>>) -> Result<Vec<T>>
where
    T: TryFrom<D, Error = VinylsError>,
{
    items
        .unwrap_or_default()
        .into_iter()
        .map(T::try_from)
        .collect()
}

impl TryFrom<AlbumDto> for Album {
    type Error = VinylsError;

    fn try_from(dto: AlbumDto) -> Result<Self> {
        Ok(Self {
            id: dto.id,
            name: dto.name,
            cover: dto.cover,
            release_date: dto.release_date,
            description: dto.description,
            genre: dto.genre,
            record_label: dto.record_label,
            tracks: map_all(dto.tracks)?,
            performers: map_all(dto.performers)?,
            comments: map_all(dto.comments)?,
        })
    }
}

impl From<&Album> for AlbumCreateDto {
    fn from(album: &Album) -> Self {
        Self {
            name: album.name.clone(),
            cover: album.cover.clone(),
            release_date: album.release_date.clone(),
            description: album.description.clone(),
            genre: album.genre.clone(),
            record_label: album.record_label.clone(),
        }
    }
}

impl TryFrom<TrackDto> for Track {
    type Error = VinylsError;

    fn try_from(dto: TrackDto) -> Result<Self> {
        Ok(Self {
            id: dto.id,
            name: dto.name,
            duration: dto.duration,
        })
    }
}

/// A performer with a birth date is a musician; otherwise a creation date
/// makes it a band. Neither is a mapping error.
impl TryFrom<PerformerDto> for Performer {
    type Error = VinylsError;

    fn try_from(dto: PerformerDto) -> Result<Self> {
        match (dto.birth_date, dto.creation_date) {
            (Some(birth_date), _) => Ok(Self::Musician {
                id: dto.id,
                name: dto.name,
                image: dto.image,
                description: dto.description,
                birth_date,
            }),
            (None, Some(creation_date)) => Ok(Self::Band {
                id: dto.id,
                name: dto.name,
                image: dto.image,
                description: dto.description,
                creation_date,
            }),
            (None, None) => Err(VinylsError::MissingPerformerDate(dto.id)),
        }
    }
}

impl TryFrom<CommentDto> for Comment {
    type Error = VinylsError;

    fn try_from(dto: CommentDto) -> Result<Self> {
        Ok(Self {
            id: dto.id,
            description: dto.description,
            rating: Rating::new(dto.rating)?,
        })
    }
}

impl From<&NewComment> for CommentCreateDto {
    fn from(comment: &NewComment) -> Self {
        Self {
            description: comment.description.clone(),
            rating: comment.rating.into(),
            collector: CollectorRefDto {
                id: comment.collector_id,
            },
        }
    }
}

impl TryFrom<ArtistDto> for Artist {
    type Error = VinylsError;

    fn try_from(dto: ArtistDto) -> Result<Self> {
        Ok(Self {
            id: dto.id,
            name: dto.name,
            image: dto.image,
            description: dto.description,
            birth_date: dto.birth_date,
            albums: map_all(dto.albums)?,
            prizes: map_all(dto.performer_prizes)?,
        })
    }
}

impl TryFrom<ArtistAlbumDto> for ArtistAlbum {
    type Error = VinylsError;

    fn try_from(dto: ArtistAlbumDto) -> Result<Self> {
        Ok(Self {
            id: dto.id,
            name: dto.name,
            cover: dto.cover,
            release_date: dto.release_date,
            description: dto.description,
            genre: dto.genre,
            record_label: dto.record_label,
        })
    }
}

impl TryFrom<PerformerPrizeDto> for PerformerPrize {
    type Error = VinylsError;

    fn try_from(dto: PerformerPrizeDto) -> Result<Self> {
        Ok(Self {
            id: dto.id,
            premiation_date: dto.premiation_date,
        })
    }
}

impl TryFrom<CollectorAlbumDto> for CollectorAlbum {
    type Error = VinylsError;

    fn try_from(dto: CollectorAlbumDto) -> Result<Self> {
        Ok(Self {
            id: dto.id,
            price: dto.price,
            status: dto.status.parse()?,
            album: Album::try_from(dto.album)?,
        })
    }
}

/// Build a collector, deriving its image and album count.
///
/// The image is the first favorite performer's, or `placeholder` when the
/// collector has none.
pub fn collector_from_dto(dto: CollectorDto, placeholder: impl FnOnce(i64) -> String) -> Collector {
    let image = dto
        .favorite_performers
        .as_ref()
        .and_then(|performers| performers.first())
        .map(|performer| performer.image.clone())
        .unwrap_or_else(|| placeholder(dto.id));
    let album_count = dto.collector_albums.as_ref().map_or(0, Vec::len);

    Collector {
        id: dto.id,
        name: dto.name,
        telephone: dto.telephone.unwrap_or_default(),
        email: dto.email.unwrap_or_default(),
        image,
        album_count,
    }
}
