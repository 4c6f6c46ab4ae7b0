mod error;
mod sort_by_distance;

pub use self::{error::Error, sort_by_distance::*};

pub type Result<T> = std::result::Result<T, Error>;
