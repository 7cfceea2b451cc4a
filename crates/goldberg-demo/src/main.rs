//! Goldberg planet generator.
//!
//! Loads `config.ron`, applies command-line overrides, builds the planet and
//! writes its buffers and atlas images to the output directory.

mod export;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use goldberg_config::{CliArgs, Config};
use goldberg_coords::{CoordError, SpiralIndex};
use goldberg_debug::DebugRenderError;
use goldberg_mesh::{
    AtmosphereParams, GeometryError, Planet, PlanetParams, Polyhedron, PolyhedronParams,
};
use thiserror::Error;
use tracing::{error, info, warn};

use crate::export::export_polyhedron;

#[derive(Debug, Error)]
pub enum DemoError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),
    #[error(transparent)]
    Coord(#[from] CoordError),
    #[error(transparent)]
    Render(#[from] DebugRenderError),
    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

fn main() -> ExitCode {
    let args = CliArgs::parse();

    let config_dir = match Config::resolve_dir(args.config.as_deref()) {
        Ok(dir) => dir,
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::FAILURE;
        }
    };

    let mut config = Config::load_or_create(&config_dir).unwrap_or_else(|e| {
        eprintln!("Failed to load config: {e}, using defaults");
        Config::default()
    });
    config.apply_cli_overrides(&args);

    let log_dir = config_dir.join("logs");
    goldberg_log::init_logging(Some(&log_dir), cfg!(debug_assertions), Some(&config));

    match run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run(config: &Config) -> Result<(), DemoError> {
    let planet = Planet::new(planet_params(config)?)?;
    let surface = planet.surface();
    log_stats("surface", surface);
    if let Some(shell) = planet.atmosphere() {
        log_stats("atmosphere", shell);
    }

    let path = debug_path(config, surface)?;
    let output = &config.output;
    let atlas = output.write_atlas.then_some(path.as_slice());
    export_polyhedron(surface, "surface", &output.directory, output.write_buffers, atlas)?;
    if let Some(shell) = planet.atmosphere() {
        let atlas = output.write_atlas.then_some(&[][..]);
        export_polyhedron(shell, "atmosphere", &output.directory, output.write_buffers, atlas)?;
    }
    Ok(())
}

/// Translate the config sections into planet parameters.
fn planet_params(config: &Config) -> Result<PlanetParams, DemoError> {
    let surface = &config.surface;
    let atmosphere = &config.atmosphere;
    Ok(PlanetParams {
        surface: PolyhedronParams {
            gp_index: surface.gp_index,
            edge_length_3d: surface.edge_length_3d,
            edge_length_2d: surface.edge_length_2d,
            projection: surface.projection.parse()?,
            center_vertex: surface.center_vertex,
        },
        atmosphere: if atmosphere.enabled {
            Some(AtmosphereParams {
                gp_index: atmosphere.gp_index,
                radius_scale: atmosphere.radius_scale,
                projection: atmosphere.projection.parse()?,
                center_vertex: atmosphere.center_vertex,
            })
        } else {
            None
        },
    })
}

/// Trace the configured path across the surface, or nothing.
fn debug_path(config: &Config, surface: &Polyhedron) -> Result<Vec<SpiralIndex>, DemoError> {
    let Some((from, to)) = config.debug_path() else {
        if config.debug.path_from.is_some() || config.debug.path_to.is_some() {
            warn!("Debug path needs both path_from and path_to, ignoring");
        }
        return Ok(Vec::new());
    };
    let gp = surface.gp();
    let from = SpiralIndex::new(gp, from)?;
    let to = SpiralIndex::new(gp, to)?;
    let path = surface.shortest_path(from, to)?;
    info!(
        "Path {from} -> {to}: {} tiles, {}",
        path.len(),
        path.iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(" ")
    );
    Ok(path)
}

fn log_stats(name: &str, polyhedron: &Polyhedron) {
    let (width, height) = polyhedron.atlas().texture_size();
    let mesh = polyhedron.mesh();
    info!(
        "{name}: gp {} ({}), {} tiles, radius {:.4}, {} vertices, {} indices, atlas {}x{}",
        polyhedron.gp().get(),
        polyhedron.params().projection,
        polyhedron.field_count(),
        polyhedron.radius(),
        mesh.vertex_count(),
        mesh.draw_count(),
        width,
        height
    );
}
