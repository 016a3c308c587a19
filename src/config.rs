use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Which way up each hexagon sits.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Orientation {
    /// A flat edge along the top of each tile.
    FlatTop,
    /// A vertex at the top of each tile.
    PointyTop,
}

/// Geometry of a hex grid in pixel space.
///
/// Missing fields take their default values when deserializing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    /// Size of a tile in pixels
    pub tile_size: f64,

    /// Gap between adjacent tiles in pixels
    pub tile_spacing: f64,

    /// Lay tiles out pointy-top rather than flat-top
    pub pointy_tiles: bool,
}

impl Default for GridConfig {
    fn default() -> Self {
        GridConfig {
            tile_size: 100.0,
            tile_spacing: 0.0,
            pointy_tiles: false,
        }
    }
}

impl GridConfig {
    pub fn orientation(&self) -> Orientation {
        if self.pointy_tiles {
            Orientation::PointyTop
        } else {
            Orientation::FlatTop
        }
    }

    /// Distance in pixels from one tile to the next along an axis, before orientation factors.
    pub fn step(&self) -> f64 {
        self.tile_size + self.tile_spacing
    }

    /// Ensure this configuration describes a usable geometry.
    ///
    /// Pixel conversion divides by [`step`][Self::step], so it must be positive.
    pub fn validate(&self) -> Result<(), Error> {
        if !self.tile_size.is_finite() || self.tile_size <= 0.0 {
            return Err(Error::InvalidTileSize(self.tile_size));
        }
        if !self.tile_spacing.is_finite() {
            return Err(Error::InvalidTileSpacing(self.tile_spacing));
        }
        if self.step() <= 0.0 {
            return Err(Error::DegenerateTileStep {
                tile_size: self.tile_size,
                tile_spacing: self.tile_spacing,
            });
        }
        Ok(())
    }

    /// Parse and validate a configuration from TOML.
    pub fn from_toml_str(s: &str) -> Result<Self, Error> {
        let config: GridConfig = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_toml_string(&self) -> Result<String, Error> {
        toml::to_string_pretty(self).map_err(Into::into)
    }

    /// Read a configuration file the caller keeps for its own settings.
    ///
    /// Nothing else in this crate touches the filesystem.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, Error> {
        let path = path.as_ref();
        let data = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&data)?;
        log::debug!("loaded grid configuration from {}: {:?}", path.display(), config);
        Ok(config)
    }

    /// Write this configuration to a caller-chosen path, creating parent directories.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), Error> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                std::fs::create_dir_all(parent)?;
            }
        }
        let serialized = self.to_toml_string()?;
        std::fs::write(path, serialized.as_bytes())?;
        log::debug!("saved grid configuration to {}", path.display());
        Ok(())
    }
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("configuration could not be loaded")]
    CouldNotLoad(#[from] std::io::Error),
    #[error("malformed configuration")]
    Malformed(#[from] toml::de::Error),
    #[error("failed to serialize")]
    CouldNotSerialize(#[from] toml::ser::Error),
    #[error("tile size must be finite and positive; got {0}")]
    InvalidTileSize(f64),
    #[error("tile spacing must be finite; got {0}")]
    InvalidTileSpacing(f64),
    #[error("tile size ({tile_size}) plus spacing ({tile_spacing}) must be positive")]
    DegenerateTileStep { tile_size: f64, tile_spacing: f64 },
}
