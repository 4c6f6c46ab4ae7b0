use crate::{
    resolve::ResolveError,
    util::sort::{CoordinateError, LocateError},
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("sequence must be provided")]
    MissingSequence,
    #[error("can't iterate over a nil value")]
    NilSequence,
    #[error("can't sort {0}")]
    UnsortableKind(String),
    #[error("fieldName should be a string")]
    FieldName,
    #[error("centerLat should be a float")]
    CenterLat,
    #[error("centerLon should be a float")]
    CenterLon,
    #[error(transparent)]
    Resolve(#[from] ResolveError),
    #[error(transparent)]
    Coordinate(#[from] CoordinateError),
}

impl From<LocateError> for Error {
    fn from(from: LocateError) -> Self {
        match from {
            LocateError::Resolve(err) => Self::Resolve(err),
            LocateError::Coordinate(err) => Self::Coordinate(err),
        }
    }
}
