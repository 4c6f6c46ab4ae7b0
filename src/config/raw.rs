use serde::Deserialize;

const DEFAULT_CONFIG_FILE: &str = include_str!("geosort.default.toml");

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Config {
    pub sort: Option<Sort>,
    pub center: Option<Center>,
    pub output: Option<Output>,
}

impl Default for Config {
    fn default() -> Self {
        let cfg: Self = toml::from_str(DEFAULT_CONFIG_FILE).expect("Default configuration");
        cfg
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Sort {
    pub field_path: String,
}

impl Default for Sort {
    fn default() -> Self {
        Config::default().sort.expect("Sort configuration")
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Center {
    pub lat: f64,
    pub lon: f64,
}

impl Default for Center {
    fn default() -> Self {
        Config::default().center.expect("Center configuration")
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Output {
    pub pretty: bool,
}

impl Default for Output {
    fn default() -> Self {
        Config::default().output.expect("Output configuration")
    }
}
