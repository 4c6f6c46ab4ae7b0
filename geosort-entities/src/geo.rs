use itertools::Itertools;
use std::{f64::consts::PI, fmt, str::FromStr};
use thiserror::Error;

/// Earth radius of the spherical approximation in meters.
pub const EARTH_RADIUS: Distance = Distance::from_meters(6_378_100.0);

/// A geographical location given in decimal degrees.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MapPoint {
    lat: f64,
    lon: f64,
}

impl MapPoint {
    pub const fn from_lat_lon_deg(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    pub const fn lat(self) -> f64 {
        self.lat
    }

    pub const fn lon(self) -> f64 {
        self.lon
    }

    pub fn is_finite(self) -> bool {
        self.lat.is_finite() && self.lon.is_finite()
    }

    pub fn to_lat_lon_rad(self) -> (f64, f64) {
        (self.lat * PI / 180.0, self.lon * PI / 180.0)
    }

    /// Calculate the great-circle distance on the surface
    /// of the earth with the haversine formula.
    /// Reference: http://en.wikipedia.org/wiki/Haversine_formula
    pub fn distance(p1: MapPoint, p2: MapPoint) -> Distance {
        // Rounding may push `h` slightly out of [0, 1] for (near) antipodal points.
        let h = haversine(p1, p2).clamp(0.0, 1.0);

        Distance::from_meters(2.0 * EARTH_RADIUS.to_meters() * h.sqrt().asin())
    }
}

/// Distance in meters between two points given in decimal degrees.
pub fn distance_meters(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    MapPoint::distance(
        MapPoint::from_lat_lon_deg(lat1, lon1),
        MapPoint::from_lat_lon_deg(lat2, lon2),
    )
    .to_meters()
}

fn haversine(p1: MapPoint, p2: MapPoint) -> f64 {
    let (lat1_rad, lon1_rad) = p1.to_lat_lon_rad();
    let (lat2_rad, lon2_rad) = p2.to_lat_lon_rad();
    hsin(lat2_rad - lat1_rad) + lat1_rad.cos() * lat2_rad.cos() * hsin(lon2_rad - lon1_rad)
}

// haversin(θ)
fn hsin(theta: f64) -> f64 {
    (theta / 2.0).sin().powi(2)
}

impl fmt::Display for MapPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.lat, self.lon)
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum MapPointParseError {
    #[error("Invalid latitude '{0}'")]
    Lat(String),
    #[error("Invalid longitude '{0}'")]
    Lon(String),
    #[error("Failed to parse MapPoint: {0}")]
    Format(String),
}

impl FromStr for MapPoint {
    type Err = MapPointParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let Some((lat_deg_str, lon_deg_str)) = s.split(',').collect_tuple() else {
            return Err(MapPointParseError::Format(s.to_string()));
        };
        let lat = lat_deg_str
            .trim()
            .parse::<f64>()
            .map_err(|_| MapPointParseError::Lat(lat_deg_str.to_string()))?;
        let lon = lon_deg_str
            .trim()
            .parse::<f64>()
            .map_err(|_| MapPointParseError::Lon(lon_deg_str.to_string()))?;
        Ok(Self::from_lat_lon_deg(lat, lon))
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd)]
pub struct Distance(pub f64);

impl Distance {
    /// Sorts behind every finite distance.
    pub const fn infinite() -> Self {
        Self(f64::INFINITY)
    }

    pub const fn from_meters(meters: f64) -> Self {
        Self(meters)
    }

    pub const fn to_meters(self) -> f64 {
        self.0
    }

    pub fn is_valid(self) -> bool {
        self.0 >= 0.0
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} m", self.0)
    }
}

#[cfg(test)]
mod tests {

    use super::*;
    use rand::prelude::*;
    use std::f64::consts::FRAC_PI_2;

    #[test]
    fn no_distance() {
        let p1 = MapPoint::from_lat_lon_deg(0.0, 0.0);
        assert_eq!(MapPoint::distance(p1, p1).to_meters(), 0.0);

        let p2 = MapPoint::from_lat_lon_deg(-25.0, 55.0);
        assert_eq!(MapPoint::distance(p2, p2).to_meters(), 0.0);

        let p1 = MapPoint::from_lat_lon_deg(-15.0, -180.0);
        let p2 = MapPoint::from_lat_lon_deg(-15.0, 180.0);
        assert!(MapPoint::distance(p1, p2).to_meters() < 0.000001);
    }

    #[test]
    fn quarter_great_circle() {
        let d = distance_meters(0.0, 0.0, 0.0, 90.0);
        let expected = FRAC_PI_2 * EARTH_RADIUS.to_meters();
        assert!((d - expected).abs() < 0.001);
        assert!(d > 10_018_000.0);
        assert!(d < 10_019_000.0);
    }

    #[test]
    fn antipodal_points() {
        let d = distance_meters(0.0, 0.0, 0.0, 180.0);
        assert!(!d.is_nan());
        assert!((d - PI * EARTH_RADIUS.to_meters()).abs() < 0.001);

        let d = distance_meters(90.0, 0.0, -90.0, 0.0);
        assert!(!d.is_nan());
        assert!((d - PI * EARTH_RADIUS.to_meters()).abs() < 0.001);

        let d = distance_meters(45.0, 10.0, -45.0, -170.0);
        assert!(!d.is_nan());
    }

    #[test]
    fn integral_antipodes() {
        let half_circumference = PI * EARTH_RADIUS.to_meters();
        let mut rounded_past_one = 0;
        for lat in -89..=89 {
            for lon in -180..0 {
                let p1 = MapPoint::from_lat_lon_deg(f64::from(lat), f64::from(lon));
                let p2 = MapPoint::from_lat_lon_deg(f64::from(-lat), f64::from(lon + 180));
                if haversine(p1, p2) > 1.0 {
                    rounded_past_one += 1;
                }
                let d = MapPoint::distance(p1, p2).to_meters();
                assert!(!d.is_nan(), "{p1} -> {p2}");
                assert!((d - half_circumference).abs() < 1.0, "{p1} -> {p2}: {d}");
            }
        }
        assert!(rounded_past_one > 0);
        assert!(haversine(
            MapPoint::from_lat_lon_deg(-12.0, -180.0),
            MapPoint::from_lat_lon_deg(12.0, 0.0)
        ) > 1.0);
    }

    #[test]
    fn degrees_to_radians() {
        let p = MapPoint::from_lat_lon_deg(3.0, -3.0);
        let (lat, lon) = p.to_lat_lon_rad();
        assert_eq!(lat.to_bits(), (3.0 * PI / 180.0).to_bits());
        assert_eq!(lon.to_bits(), (-3.0 * PI / 180.0).to_bits());
        // Multiplying by a precomputed π/180 rounds differently here.
        assert_ne!(lat.to_bits(), 3.0_f64.to_radians().to_bits());
    }

    #[test]
    fn haversine_formula_is_reproduced_exactly() {
        fn reference(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
            let hsin = |theta: f64| (theta / 2.0).sin().powi(2);
            let lat1 = lat1 * PI / 180.0;
            let lon1 = lon1 * PI / 180.0;
            let lat2 = lat2 * PI / 180.0;
            let lon2 = lon2 * PI / 180.0;
            let h = hsin(lat2 - lat1) + lat1.cos() * lat2.cos() * hsin(lon2 - lon1);
            2.0 * 6_378_100.0 * h.sqrt().asin()
        }
        let fixed = [
            (3.0, 0.0, 0.0, 0.0),
            (0.0, 3.0, 33.0, -3.0),
            (48.7755, 9.1827, 49.4836, 8.4630),
            (40.714268, -74.005974, -33.867138, 151.207108),
        ];
        for (lat1, lon1, lat2, lon2) in fixed {
            assert_eq!(
                distance_meters(lat1, lon1, lat2, lon2).to_bits(),
                reference(lat1, lon1, lat2, lon2).to_bits()
            );
        }
        let mut rng = rand::thread_rng();
        for _ in 0..10_000 {
            let p1 = random_map_point(&mut rng);
            let p2 = random_map_point(&mut rng);
            if haversine(p1, p2) > 1.0 {
                continue;
            }
            assert_eq!(
                MapPoint::distance(p1, p2).to_meters().to_bits(),
                reference(p1.lat(), p1.lon(), p2.lat(), p2.lon()).to_bits(),
                "{p1} -> {p2}"
            );
        }
    }

    #[test]
    fn real_distance() {
        let stuttgart = MapPoint::from_lat_lon_deg(48.7755, 9.1827);
        let mannheim = MapPoint::from_lat_lon_deg(49.4836, 8.4630);
        assert!(MapPoint::distance(stuttgart, mannheim) > Distance::from_meters(94_000.0));
        assert!(MapPoint::distance(stuttgart, mannheim) < Distance::from_meters(95_000.0));

        let new_york = MapPoint::from_lat_lon_deg(40.714268, -74.005974);
        let sidney = MapPoint::from_lat_lon_deg(-33.867138, 151.207108);
        assert!(MapPoint::distance(new_york, sidney) > Distance::from_meters(16_000_000.0));
        assert!(MapPoint::distance(new_york, sidney) < Distance::from_meters(16_010_000.0));
    }

    #[test]
    fn symetric_distance() {
        let a = MapPoint::from_lat_lon_deg(80.0, 0.0);
        let b = MapPoint::from_lat_lon_deg(90.0, 20.0);
        assert_eq!(MapPoint::distance(a, b), MapPoint::distance(b, a));
        assert_eq!(
            distance_meters(12.5, -3.0, -40.0, 77.7),
            distance_meters(-40.0, 77.7, 12.5, -3.0)
        );
    }

    fn random_map_point<T: Rng>(rng: &mut T) -> MapPoint {
        let lat = rng.gen_range(-90.0..=90.0);
        let lon = rng.gen_range(-180.0..=180.0);
        MapPoint::from_lat_lon_deg(lat, lon)
    }

    #[test]
    fn random_distances_are_valid() {
        let mut rng = rand::thread_rng();
        let max = PI * EARTH_RADIUS.to_meters() + 0.001;
        for _ in 0..10_000 {
            let p1 = random_map_point(&mut rng);
            let p2 = random_map_point(&mut rng);
            let d = MapPoint::distance(p1, p2);
            assert!(d.is_valid());
            assert!(d.to_meters() <= max);
            assert_eq!(MapPoint::distance(p1, p1).to_meters(), 0.0);
        }
    }

    #[test]
    fn parse_map_point() {
        assert_eq!(
            "48.7755,9.1827".parse::<MapPoint>().unwrap(),
            MapPoint::from_lat_lon_deg(48.7755, 9.1827)
        );
        assert_eq!(
            " -10.5 , 20 ".parse::<MapPoint>().unwrap(),
            MapPoint::from_lat_lon_deg(-10.5, 20.0)
        );
        assert_eq!(
            "foo,1".parse::<MapPoint>(),
            Err(MapPointParseError::Lat("foo".into()))
        );
        assert_eq!(
            "1,bar".parse::<MapPoint>(),
            Err(MapPointParseError::Lon("bar".into()))
        );
        assert!("1,2,3".parse::<MapPoint>().is_err());
        assert!("1".parse::<MapPoint>().is_err());
    }

    #[test]
    fn display_map_point() {
        let p = MapPoint::from_lat_lon_deg(1.5, -2.25);
        assert_eq!(p.to_string(), "1.5,-2.25");
        assert_eq!(p.to_string().parse::<MapPoint>().unwrap(), p);
    }
}
