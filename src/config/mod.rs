use anyhow::{anyhow, Context as _, Result};
use geosort_entities::geo::MapPoint;
use std::{env, fs, io::ErrorKind, path::Path};

mod raw;

const DEFAULT_CONFIG_FILE_NAME: &str = "geosort.toml";

const ENV_NAME_CENTER: &str = "GEOSORT_CENTER";

pub struct Config {
    pub sort: Sort,
    pub center: MapPoint,
    pub output: Output,
}

impl Config {
    pub fn try_load_from_file_or_default<P: AsRef<Path>>(file_path: Option<P>) -> Result<Self> {
        let file_path: &Path = file_path.as_ref().map(|p| p.as_ref()).unwrap_or_else(|| {
            log::info!("No configuration file specified. load {DEFAULT_CONFIG_FILE_NAME}");
            Path::new(DEFAULT_CONFIG_FILE_NAME)
        });

        let raw_config = match fs::read_to_string(file_path) {
            Ok(cfg_string) => toml::from_str(&cfg_string)
                .with_context(|| format!("Invalid configuration file {}", file_path.display()))?,
            Err(err) => match err.kind() {
                ErrorKind::NotFound => {
                    log::info!(
                        "{} not found => load default configuration.",
                        file_path.display()
                    );
                    raw::Config::default()
                }
                _ => return Err(err.into()),
            },
        };
        let mut cfg = Self::try_from(raw_config)?;
        if let Ok(center) = env::var(ENV_NAME_CENTER) {
            cfg.center = parse_center(&center)
                .with_context(|| format!("Invalid {ENV_NAME_CENTER} '{center}'"))?;
        }
        Ok(cfg)
    }
}

pub struct Sort {
    /// Dotted path from an element to its location.
    pub field_path: String,
}

pub struct Output {
    pub pretty: bool,
}

fn check_center(center: MapPoint) -> Result<MapPoint> {
    if !(-90.0..=90.0).contains(&center.lat()) {
        return Err(anyhow!("Invalid latitude of center: {}", center.lat()));
    }
    if !(-180.0..=180.0).contains(&center.lon()) {
        return Err(anyhow!("Invalid longitude of center: {}", center.lon()));
    }
    Ok(center)
}

pub fn parse_center(s: &str) -> Result<MapPoint> {
    check_center(s.parse()?)
}

impl TryFrom<raw::Config> for Config {
    type Error = anyhow::Error;
    fn try_from(from: raw::Config) -> Result<Self> {
        let raw::Config {
            sort,
            center,
            output,
        } = from;

        let raw::Sort { field_path } = sort.unwrap_or_default();
        let sort = Sort { field_path };

        let raw::Center { lat, lon } = center.unwrap_or_default();
        let center = check_center(MapPoint::from_lat_lon_deg(lat, lon))?;
        log::debug!("Center: {center}");

        let raw::Output { pretty } = output.unwrap_or_default();
        let output = Output { pretty };

        Ok(Self {
            sort,
            center,
            output,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_default_config() {
        let file: Option<&Path> = None;
        let _: Config = Config::try_load_from_file_or_default(file).unwrap();
    }

    #[test]
    fn default_values() {
        let cfg = Config::try_from(raw::Config::default()).unwrap();
        assert_eq!(cfg.sort.field_path, "location");
        assert_eq!(cfg.center, MapPoint::from_lat_lon_deg(0.0, 0.0));
        assert!(!cfg.output.pretty);
    }

    #[test]
    fn partial_config() {
        let raw: raw::Config = toml::from_str(
            r#"
            [center]
            lat = 48.7755
            lon = 9.1827
            "#,
        )
        .unwrap();
        let cfg = Config::try_from(raw).unwrap();
        assert_eq!(cfg.center, MapPoint::from_lat_lon_deg(48.7755, 9.1827));
        assert_eq!(cfg.sort.field_path, "location");
    }

    #[test]
    fn invalid_center() {
        let raw: raw::Config = toml::from_str(
            r#"
            [center]
            lat = 91.0
            lon = 0.0
            "#,
        )
        .unwrap();
        assert!(Config::try_from(raw).is_err());
        assert!(parse_center("0,181").is_err());
        assert!(parse_center("north,east").is_err());
        assert_eq!(
            parse_center("-10,20").unwrap(),
            MapPoint::from_lat_lon_deg(-10.0, 20.0)
        );
    }
}
