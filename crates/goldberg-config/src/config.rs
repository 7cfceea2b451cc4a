//! Configuration sections with defaults and RON persistence.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

const FILE_NAME: &str = "config.ron";

/// Top-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// The tiled planet surface.
    pub surface: SurfaceConfig,
    /// The atmosphere shell around the surface.
    pub atmosphere: AtmosphereConfig,
    /// What gets written to disk.
    pub output: OutputConfig,
    pub debug: DebugConfig,
}

/// Surface polyhedron settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SurfaceConfig {
    /// Subdivision frequency; tile count is `10 g² + 2`.
    pub gp_index: u32,
    /// Hexagon spacing in 3D. `None` puts a `gp_index = 1` polyhedron on the
    /// unit sphere.
    pub edge_length_3d: Option<f64>,
    /// Hexagon edge length in atlas pixels.
    pub edge_length_2d: f64,
    /// `curvature`, `size` or `shape`.
    pub projection: String,
    /// Start every fan at a vertex in the tile center.
    pub center_vertex: bool,
}

/// Atmosphere shell settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct AtmosphereConfig {
    pub enabled: bool,
    pub gp_index: u32,
    /// Shell radius as a multiple of the surface radius.
    pub radius_scale: f64,
    pub projection: String,
    pub center_vertex: bool,
}

/// Output settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct OutputConfig {
    /// Directory for generated files, relative to the working directory.
    pub directory: PathBuf,
    /// Write the raw vertex and index buffers.
    pub write_buffers: bool,
    /// Render the tile atlas to a PNG.
    pub write_atlas: bool,
}

/// Debug/development settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DebugConfig {
    /// Log filter (e.g. "debug", "info,goldberg_mesh=trace").
    pub log_level: String,
    /// Start tile of a path to trace and draw.
    pub path_from: Option<u32>,
    /// End tile of that path.
    pub path_to: Option<u32>,
}

impl Default for SurfaceConfig {
    fn default() -> Self {
        Self {
            gp_index: 8,
            edge_length_3d: None,
            edge_length_2d: 30.0,
            projection: "shape".to_string(),
            center_vertex: false,
        }
    }
}

impl Default for AtmosphereConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            gp_index: 2,
            radius_scale: 1.2,
            projection: "shape".to_string(),
            center_vertex: true,
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            directory: PathBuf::from("output"),
            write_buffers: true,
            write_atlas: true,
        }
    }
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            path_from: None,
            path_to: None,
        }
    }
}

impl Config {
    /// Load `config.ron` from `config_dir`, writing the defaults there first
    /// if it does not exist yet.
    pub fn load_or_create(config_dir: &Path) -> Result<Self, ConfigError> {
        let path = config_dir.join(FILE_NAME);
        if path.exists() {
            let config = Self::read(&path)?;
            log::info!("Loaded config from {}", path.display());
            Ok(config)
        } else {
            let config = Config::default();
            config.save(config_dir)?;
            log::info!("Created default config at {}", path.display());
            Ok(config)
        }
    }

    /// Write this config to `config_dir/config.ron`.
    pub fn save(&self, config_dir: &Path) -> Result<(), ConfigError> {
        let path = config_dir.join(FILE_NAME);
        let write_error = |source| ConfigError::Write {
            path: path.clone(),
            source,
        };
        std::fs::create_dir_all(config_dir).map_err(write_error)?;

        let pretty = ron::ser::PrettyConfig::new()
            .depth_limit(2)
            .enumerate_arrays(false);
        let serialized = ron::ser::to_string_pretty(self, pretty).map_err(ConfigError::Serialize)?;
        std::fs::write(&path, serialized).map_err(write_error)?;
        Ok(())
    }

    /// Re-read the file; `Some` only if it differs from `self`.
    pub fn reload(&self, config_dir: &Path) -> Result<Option<Self>, ConfigError> {
        let config = Self::read(&config_dir.join(FILE_NAME))?;
        if &config != self {
            log::info!("Config reloaded with changes");
            Ok(Some(config))
        } else {
            Ok(None)
        }
    }

    /// The path the config is resolved from: `explicit`, or the platform
    /// config home joined with `goldberg`.
    pub fn resolve_dir(explicit: Option<&Path>) -> Result<PathBuf, ConfigError> {
        match explicit {
            Some(dir) => Ok(dir.to_path_buf()),
            None => dirs::config_dir()
                .map(|home| home.join("goldberg"))
                .ok_or(ConfigError::NoConfigDir),
        }
    }

    /// Both ends of the debug path, if configured.
    pub fn debug_path(&self) -> Option<(u32, u32)> {
        self.debug.path_from.zip(self.debug.path_to)
    }

    fn read(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        ron::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}
