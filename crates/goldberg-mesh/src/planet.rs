//! A planet: a surface polyhedron wrapped in an optional atmosphere shell.

use tracing::info;

use crate::geometry::radius_per_edge;
use crate::{GeometryError, Polyhedron, PolyhedronParams, ProjectionMode};

/// Atmosphere shell parameters.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AtmosphereParams {
    pub gp_index: u32,
    /// Shell radius as a multiple of the surface radius.
    pub radius_scale: f64,
    pub projection: ProjectionMode,
    pub center_vertex: bool,
}

impl Default for AtmosphereParams {
    fn default() -> Self {
        Self {
            gp_index: 2,
            radius_scale: 1.2,
            projection: ProjectionMode::Shape,
            center_vertex: true,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PlanetParams {
    pub surface: PolyhedronParams,
    /// `None` builds a planet without an atmosphere.
    pub atmosphere: Option<AtmosphereParams>,
}

#[derive(Clone, Debug)]
pub struct Planet {
    surface: Polyhedron,
    atmosphere: Option<Polyhedron>,
}

impl Planet {
    /// Build the surface, then size the atmosphere shell from its radius.
    pub fn new(params: PlanetParams) -> Result<Self, GeometryError> {
        let surface = Polyhedron::new(params.surface)?;
        let atmosphere = params
            .atmosphere
            .map(|atmosphere| {
                let scale = atmosphere.radius_scale;
                if !scale.is_finite() || scale <= 0.0 {
                    return Err(GeometryError::InvalidEdgeLength {
                        name: "radius_scale",
                        value: scale,
                    });
                }
                let radius = surface.radius() * scale;
                Polyhedron::new(PolyhedronParams {
                    gp_index: atmosphere.gp_index,
                    edge_length_3d: Some(atmosphere_edge_length(radius, atmosphere.gp_index)),
                    edge_length_2d: params.surface.edge_length_2d,
                    projection: atmosphere.projection,
                    center_vertex: atmosphere.center_vertex,
                })
            })
            .transpose()?;

        if let Some(shell) = &atmosphere {
            info!(
                "Planet radius {:.4}, atmosphere radius {:.4}",
                surface.radius(),
                shell.radius()
            );
        }
        Ok(Self {
            surface,
            atmosphere,
        })
    }

    #[must_use]
    pub fn surface(&self) -> &Polyhedron {
        &self.surface
    }

    #[must_use]
    pub fn atmosphere(&self) -> Option<&Polyhedron> {
        self.atmosphere.as_ref()
    }

    #[must_use]
    pub fn radius(&self) -> f64 {
        self.surface.radius()
    }

    /// Outer radius: the atmosphere shell if present, else the surface.
    #[must_use]
    pub fn outer_radius(&self) -> f64 {
        self.atmosphere
            .as_ref()
            .map_or_else(|| self.radius(), Polyhedron::radius)
    }
}

/// Hexagon spacing that gives a `gp_index` polyhedron the requested radius.
fn atmosphere_edge_length(radius: f64, gp_index: u32) -> f64 {
    radius / (f64::from(gp_index) * 3.0_f64.sqrt() * radius_per_edge())
}
