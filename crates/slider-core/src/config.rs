use crate::geometry::{
    DEFAULT_DIVISION, DEFAULT_HOLE_ANGLE, Dimensions, GeometryConfig, GeometryError,
};
use directories::ProjectDirs;
use palette::Srgb;
use serde::{Deserialize, Serialize};
use serde_with::{DeserializeFromStr, SerializeDisplay};
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use thiserror::Error;

pub const ENV_PREFIX: &str = "CIRCLE_SLIDER";

/// An sRGB color written as `#rrggbb` in the config file.
#[derive(Debug, Clone, Copy, PartialEq, SerializeDisplay, DeserializeFromStr)]
pub struct HexColor(pub Srgb<u8>);

impl HexColor {
    pub fn new(red: u8, green: u8, blue: u8) -> Self {
        Self(Srgb::new(red, green, blue))
    }

    /// Components scaled to `0.0..=1.0`.
    pub fn to_f64(self) -> Srgb<f64> {
        self.0.into_format()
    }
}

impl FromStr for HexColor {
    type Err = palette::rgb::FromHexError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse::<Srgb<u8>>().map(Self)
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.0.red, self.0.green, self.0.blue)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct Colors {
    pub track: HexColor,
    pub active: HexColor,
    pub thumb: HexColor,
    pub thumb_shadow: HexColor,
}

impl Default for Colors {
    fn default() -> Self {
        Self {
            track: HexColor::new(0x99, 0xdd, 0xbf),
            active: HexColor::new(0x43, 0xbf, 0x83),
            thumb: HexColor::new(0xff, 0xff, 0xff),
            thumb_shadow: HexColor::new(0xcc, 0xcc, 0xcc),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    pub hole_angle: f64,
    pub division: u32,
    /// Pixels per dp on the host display.
    pub density: f64,
    pub dimensions: Dimensions,
    pub colors: Colors,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            hole_angle: DEFAULT_HOLE_ANGLE,
            division: DEFAULT_DIVISION,
            density: 1.0,
            dimensions: Dimensions::default(),
            colors: Colors::default(),
        }
    }
}

impl Config {
    /// Validated pixel geometry for this config.
    pub fn geometry(&self) -> Result<GeometryConfig, ConfigError> {
        let dimensions = self.dimensions.to_pixels(self.density)?;
        Ok(GeometryConfig::new(self.hole_angle, self.division, dimensions)?)
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to determine config directory")]
    ConfigDirNotFound,
    #[error("Config error: {0}")]
    Config(#[from] config::ConfigError),
    #[error("Invalid geometry: {0}")]
    Geometry(#[from] GeometryError),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub fn get_config_path() -> Result<PathBuf, ConfigError> {
    let proj_dirs = ProjectDirs::from("org", "circle-slider", "circle-slider")
        .ok_or(ConfigError::ConfigDirNotFound)?;
    Ok(proj_dirs.config_dir().join("config.toml"))
}

fn environment() -> config::Environment {
    config::Environment::with_prefix(ENV_PREFIX)
        .prefix_separator("_")
        .separator("__")
}

/// Reads `path` (optional) and layers `CIRCLE_SLIDER_*` env vars on top.
/// Nested keys use `__`, e.g. `CIRCLE_SLIDER_COLORS__TRACK`.
pub fn load_config_from(path: &Path) -> Result<Config, ConfigError> {
    load_layers(path, environment())
}

fn load_layers(path: &Path, env: config::Environment) -> Result<Config, ConfigError> {
    let s = config::Config::builder()
        .add_source(config::File::from(path).required(false))
        .add_source(env)
        .build()?;

    Ok(s.try_deserialize()?)
}

/// Like [`load_config_from`], but a broken file falls back to defaults.
pub fn load_or_default(path: &Path) -> Config {
    match load_config_from(path) {
        Ok(c) => c,
        Err(e) => {
            log::error!("Failed to load config {}: {}", path.display(), e);
            Config::default()
        }
    }
}

pub fn write_default_config(path: &Path) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        fs_err::create_dir_all(parent)?;
    }
    if !path.exists() {
        fs_err::write(path, DEFAULT_CONFIG)?;
        log::info!("Wrote default config to {}", path.display());
    }
    Ok(())
}

pub const DEFAULT_CONFIG: &str = include_str!("default_config.toml");
