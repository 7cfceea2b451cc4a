//! Command-line arguments. Every value given here overrides `config.ron`.

use std::path::PathBuf;

use clap::Parser;

use crate::Config;

/// Generate a Goldberg polyhedron planet and its tile atlas.
#[derive(Parser, Debug, Default)]
#[command(name = "goldberg", about = "Goldberg polyhedron planet generator")]
pub struct CliArgs {
    /// Subdivision frequency of the surface.
    #[arg(long, short = 'g')]
    pub gp_index: Option<u32>,

    /// Hexagon spacing in 3D.
    #[arg(long)]
    pub edge_length_3d: Option<f64>,

    /// Hexagon edge length in atlas pixels.
    #[arg(long)]
    pub edge_length_2d: Option<f64>,

    /// Projection mode: curvature, size or shape.
    #[arg(long)]
    pub projection: Option<String>,

    /// Start every fan at a tile-center vertex.
    #[arg(long)]
    pub center_vertex: Option<bool>,

    /// Build the atmosphere shell.
    #[arg(long)]
    pub atmosphere: Option<bool>,

    /// Directory for generated files.
    #[arg(long, short = 'o')]
    pub output: Option<PathBuf>,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Trace a path starting at this tile.
    #[arg(long)]
    pub path_from: Option<u32>,

    /// Trace a path ending at this tile.
    #[arg(long)]
    pub path_to: Option<u32>,

    /// Path to config directory (overrides default location).
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl Config {
    /// Apply CLI overrides to a loaded config.
    pub fn apply_cli_overrides(&mut self, args: &CliArgs) {
        if let Some(g) = args.gp_index {
            self.surface.gp_index = g;
        }
        if let Some(edge) = args.edge_length_3d {
            self.surface.edge_length_3d = Some(edge);
        }
        if let Some(edge) = args.edge_length_2d {
            self.surface.edge_length_2d = edge;
        }
        if let Some(ref projection) = args.projection {
            self.surface.projection = projection.clone();
        }
        if let Some(center) = args.center_vertex {
            self.surface.center_vertex = center;
        }
        if let Some(enabled) = args.atmosphere {
            self.atmosphere.enabled = enabled;
        }
        if let Some(ref dir) = args.output {
            self.output.directory = dir.clone();
        }
        if let Some(ref level) = args.log_level {
            self.debug.log_level = level.clone();
        }
        if let Some(from) = args.path_from {
            self.debug.path_from = Some(from);
        }
        if let Some(to) = args.path_to {
            self.debug.path_to = Some(to);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_override() {
        let mut config = Config::default();
        let args = CliArgs {
            gp_index: Some(5),
            projection: Some("size".to_string()),
            atmosphere: Some(false),
            path_from: Some(0),
            path_to: Some(251),
            ..Default::default()
        };
        config.apply_cli_overrides(&args);
        assert_eq!(config.surface.gp_index, 5);
        assert_eq!(config.surface.projection, "size");
        assert!(!config.atmosphere.enabled);
        assert_eq!(config.debug_path(), Some((0, 251)));
        // Untouched fields keep their defaults.
        assert_eq!(config.surface.edge_length_2d, 30.0);
        assert_eq!(config.atmosphere.gp_index, 2);
    }

    #[test]
    fn test_cli_no_override() {
        let mut config = Config::default();
        config.apply_cli_overrides(&CliArgs::default());
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_parse_arguments() {
        let args = CliArgs::try_parse_from([
            "goldberg",
            "-g",
            "6",
            "--center-vertex",
            "true",
            "--edge-length-3d",
            "0.5",
            "-o",
            "out/planet",
        ])
        .unwrap();
        assert_eq!(args.gp_index, Some(6));
        assert_eq!(args.center_vertex, Some(true));
        assert_eq!(args.edge_length_3d, Some(0.5));
        assert_eq!(args.output, Some(PathBuf::from("out/planet")));
        assert!(CliArgs::try_parse_from(["goldberg", "--gp-index", "lots"]).is_err());
    }
}
