use crate::{
    path::FieldPath,
    resolve::{Resolve, ResolveError},
};
use geosort_entities::geo::{Distance, MapPoint};
use thiserror::Error;

const LAT: &str = "lat";
const LON: &str = "lon";

#[derive(Debug, Error)]
pub enum CoordinateError {
    #[error("location has no `{member}` member: {source}")]
    Missing {
        member: &'static str,
        source: ResolveError,
    },
    #[error("`{member}` of location should be a number, got {type_name}")]
    NotNumeric {
        member: &'static str,
        type_name: String,
    },
}

#[derive(Debug, Error)]
pub enum LocateError {
    #[error(transparent)]
    Resolve(#[from] ResolveError),
    #[error(transparent)]
    Coordinate(#[from] CoordinateError),
}

fn coordinate_member<T>(location: &T, member: &'static str) -> Result<f64, CoordinateError>
where
    T: Resolve + ?Sized,
{
    let value = location
        .resolve(member)
        .map_err(|source| CoordinateError::Missing { member, source })?;
    value.as_f64().ok_or_else(|| CoordinateError::NotNumeric {
        member,
        type_name: value.type_name(),
    })
}

/// Read the `lat` and `lon` members of a location.
pub fn extract_map_point<T>(location: &T) -> Result<MapPoint, CoordinateError>
where
    T: Resolve + ?Sized,
{
    let lat = coordinate_member(location, LAT)?;
    let lon = coordinate_member(location, LON)?;
    Ok(MapPoint::from_lat_lon_deg(lat, lon))
}

/// Follow `path` from `elem` to its location.
pub fn locate<T>(elem: &T, path: &FieldPath) -> Result<MapPoint, LocateError>
where
    T: Resolve + ?Sized,
{
    let pos = match path.walk(elem)? {
        Some(location) => extract_map_point(&location)?,
        None => extract_map_point(elem)?,
    };
    Ok(pos)
}

#[derive(Debug)]
struct Pair<T> {
    distance: Distance,
    value: T,
}

/// Values keyed by their distance.
#[derive(Debug)]
pub struct PairList<T> {
    pairs: Vec<Pair<T>>,
}

impl<T> PairList<T> {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            pairs: Vec::with_capacity(capacity),
        }
    }

    pub fn push(&mut self, distance: Distance, value: T) {
        self.pairs.push(Pair { distance, value });
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Ascending by distance. Values with equal distance keep their order.
    pub fn into_sorted(mut self) -> Vec<T> {
        // stable
        self.pairs
            .sort_by(|a, b| a.distance.to_meters().total_cmp(&b.distance.to_meters()));
        self.pairs.into_iter().map(|p| p.value).collect()
    }
}

/// Sort borrowed elements by the distance of their location to `center`.
pub fn sort_by_distance_to<'a, T, I>(
    elems: I,
    path: &FieldPath,
    center: MapPoint,
) -> Result<Vec<T>, LocateError>
where
    T: Resolve + Clone + 'a,
    I: IntoIterator<Item = &'a T>,
{
    let elems = elems.into_iter();
    let mut pairs = PairList::with_capacity(elems.size_hint().0);
    for elem in elems {
        let pos = locate(elem, path)?;
        let distance = MapPoint::distance(center, pos);
        let distance = if distance.to_meters().is_nan() {
            log::warn!("invalid coordinate: {}/{}", pos.lat(), pos.lon());
            Distance::infinite()
        } else {
            distance
        };
        pairs.push(distance, elem.clone());
    }
    log::debug!("Sorting {} elements by distance to {center}", pairs.len());
    Ok(pairs.into_sorted())
}

pub trait SortByDistanceTo {
    type Item;

    fn sort_by_distance_to(
        &self,
        path: &FieldPath,
        center: MapPoint,
    ) -> Result<Vec<Self::Item>, LocateError>;
}

impl<T> SortByDistanceTo for [T]
where
    T: Resolve + Clone,
{
    type Item = T;

    fn sort_by_distance_to(
        &self,
        path: &FieldPath,
        center: MapPoint,
    ) -> Result<Vec<T>, LocateError> {
        sort_by_distance_to(self, path, center)
    }
}
