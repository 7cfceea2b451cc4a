//! Configuration for the Goldberg polyhedron tools.
//!
//! Settings persist to disk as a RON file, can be overridden from the command
//! line via clap, and support reload detection. Unknown and missing fields are
//! tolerated so old config files keep loading.

mod cli;
mod config;
mod error;

pub use cli::CliArgs;
pub use config::{AtmosphereConfig, Config, DebugConfig, OutputConfig, SurfaceConfig};
pub use error::ConfigError;
