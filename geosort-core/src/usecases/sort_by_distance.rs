use super::{Error, Result};
use crate::{
    path::FieldPath,
    util::sort,
    value::{Map, Value},
};
use geosort_entities::geo::MapPoint;

/// The collections that can be sorted.
#[derive(Debug, Clone, Copy)]
pub enum Collection<'a> {
    Seq(&'a [Value]),
    /// Only the values survive, keys are dropped.
    Map(&'a Map),
}

impl<'a> Collection<'a> {
    pub fn try_from_value(value: Option<&'a Value>) -> Result<Self> {
        match value {
            None => Err(Error::MissingSequence),
            Some(Value::Null) => Err(Error::NilSequence),
            Some(Value::Seq(seq)) => Ok(Self::Seq(seq)),
            Some(Value::Map(map)) => Ok(Self::Map(map)),
            Some(other) => Err(Error::UnsortableKind(other.type_name())),
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Self::Seq(seq) => seq.len(),
            Self::Map(map) => map.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn sort_by_distance_to(self, path: &FieldPath, center: MapPoint) -> Result<Vec<Value>> {
        let sorted = match self {
            Self::Seq(seq) => sort::sort_by_distance_to(seq, path, center)?,
            Self::Map(map) => sort::sort_by_distance_to(map.values(), path, center)?,
        };
        Ok(sorted)
    }
}

/// Reorder `seq` by ascending distance of the location
/// found at `field_name` to (`lat`, `lon`).
///
/// `seq` must be a sequence or a map; the result is always a sequence.
pub fn sort_by_distance(
    seq: Option<&Value>,
    field_name: &Value,
    lat: &Value,
    lon: &Value,
) -> Result<Vec<Value>> {
    let collection = Collection::try_from_value(seq)?;
    let path = field_name
        .as_str()
        .map(FieldPath::parse)
        .ok_or(Error::FieldName)?;
    let center_lat = lat.as_f64().ok_or(Error::CenterLat)?;
    let center_lon = lon.as_f64().ok_or(Error::CenterLon)?;
    let center = MapPoint::from_lat_lon_deg(center_lat, center_lon);
    collection.sort_by_distance_to(&path, center)
}
