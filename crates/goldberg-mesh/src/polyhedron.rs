//! A generated Goldberg polyhedron and the queries it answers.

use glam::{DVec2, DVec3};
use goldberg_coords::{EquatorCoord, GpIndex, LayerCoord, SpiralIndex, locate, shortest_path};
use tracing::{info, warn};

use crate::geometry::radius_per_edge;
use crate::{
    AtlasLayout, GeometryError, PolyhedronMesh, ProjectionMode, SphereGeometry, build_topology,
};

/// Hexagon spacing that puts a `gp_index = 1` polyhedron on the unit sphere.
#[must_use]
pub fn default_edge_length_3d() -> f64 {
    1.0 / (3.0_f64.sqrt() * radius_per_edge())
}

/// Construction parameters for a [`Polyhedron`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PolyhedronParams {
    /// Subdivision frequency `g`.
    pub gp_index: u32,
    /// Hexagon spacing in 3D. `None` selects [`default_edge_length_3d`].
    pub edge_length_3d: Option<f64>,
    /// Hexagon edge length in atlas pixels.
    pub edge_length_2d: f64,
    pub projection: ProjectionMode,
    /// Whether every fan starts at a vertex in its tile center.
    pub center_vertex: bool,
}

impl Default for PolyhedronParams {
    fn default() -> Self {
        Self {
            gp_index: 4,
            edge_length_3d: None,
            edge_length_2d: 30.0,
            projection: ProjectionMode::default(),
            center_vertex: false,
        }
    }
}

/// Entry and exit distances of a ray through the circumscribed sphere.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RayHit {
    /// Distance along the ray to the first hit, clamped to 0 when the origin
    /// is inside the sphere.
    pub near: f64,
    pub far: f64,
}

/// Sphere geometry, fan buffers and atlas for one resolution.
#[derive(Clone, Debug)]
pub struct Polyhedron {
    params: PolyhedronParams,
    gp: GpIndex,
    geometry: SphereGeometry,
    atlas: AtlasLayout,
    mesh: PolyhedronMesh,
}

impl Polyhedron {
    /// Generate geometry, topology and atlas layout.
    pub fn new(params: PolyhedronParams) -> Result<Self, GeometryError> {
        let gp = GpIndex::new(params.gp_index)?;
        let edge_length_3d = params.edge_length_3d.unwrap_or_else(default_edge_length_3d);
        check_length("edge_length_3d", edge_length_3d)?;
        check_length("edge_length_2d", params.edge_length_2d)?;

        let geometry = SphereGeometry::generate(gp, edge_length_3d, params.projection)?;
        let atlas = AtlasLayout::new(gp, params.edge_length_2d);
        let mesh = build_topology(&geometry, &atlas, params.center_vertex)?;

        let (width, height) = atlas.texture_size();
        info!(
            "Built {} polyhedron: {} tiles, {} vertices, {} indices, radius {:.4}, atlas {}x{}",
            gp,
            gp.field_count(),
            mesh.vertex_count(),
            mesh.indices.len(),
            geometry.radius(),
            width,
            height
        );
        Ok(Self {
            params,
            gp,
            geometry,
            atlas,
            mesh,
        })
    }

    #[must_use]
    pub fn params(&self) -> &PolyhedronParams {
        &self.params
    }

    #[must_use]
    pub fn gp(&self) -> GpIndex {
        self.gp
    }

    #[must_use]
    pub fn field_count(&self) -> u32 {
        self.gp.field_count()
    }

    #[must_use]
    pub fn radius(&self) -> f64 {
        self.geometry.radius()
    }

    #[must_use]
    pub fn geometry(&self) -> &SphereGeometry {
        &self.geometry
    }

    #[must_use]
    pub fn atlas(&self) -> &AtlasLayout {
        &self.atlas
    }

    #[must_use]
    pub fn mesh(&self) -> &PolyhedronMesh {
        &self.mesh
    }

    /// Atlas pixel position of a tile center.
    #[must_use]
    pub fn field_position_2d(&self, tile: SpiralIndex) -> DVec2 {
        self.atlas.field_position(tile.to_equator(self.gp))
    }

    /// Tile under an atlas pixel position.
    pub fn pick_2d(&self, pixel: DVec2) -> Result<SpiralIndex, GeometryError> {
        Ok(self.atlas.pick(pixel)?.to_spiral(self.gp))
    }

    /// Tile whose center direction is closest to `dir`.
    pub fn locate(&self, dir: DVec3) -> Result<SpiralIndex, GeometryError> {
        Ok(locate(self.gp, dir, self.params.projection.interpolation())?)
    }

    /// Intersect a ray with the circumscribed sphere. `dir` need not be unit
    /// length. Returns `None` on a miss or when the sphere is behind the ray.
    #[must_use]
    pub fn ray_intersection(&self, origin: DVec3, dir: DVec3) -> Option<RayHit> {
        let dir = dir.try_normalize()?;
        let b = origin.dot(dir);
        let c = origin.length_squared() - self.radius() * self.radius();
        let disc = b * b - c;
        if disc < 0.0 {
            return None;
        }
        let root = disc.sqrt();
        let (near, far) = (-b - root, -b + root);
        if far < 0.0 {
            return None;
        }
        Some(RayHit {
            near: near.max(0.0),
            far,
        })
    }

    /// Tile hit first by a ray in polyhedron space.
    pub fn pick_ray(&self, origin: DVec3, dir: DVec3) -> Result<Option<SpiralIndex>, GeometryError> {
        let Some(hit) = self.ray_intersection(origin, dir) else {
            return Ok(None);
        };
        let point = origin + dir.normalize() * hit.near;
        if point.length_squared() < f64::EPSILON {
            warn!("Pick ray starts at the polyhedron center");
        }
        self.locate(point).map(Some)
    }

    /// Chain of adjacent tiles from `from` to `to`, both included.
    pub fn shortest_path(
        &self,
        from: SpiralIndex,
        to: SpiralIndex,
    ) -> Result<Vec<SpiralIndex>, GeometryError> {
        Ok(shortest_path(
            self.gp,
            from,
            to,
            self.params.projection.interpolation(),
        )?)
    }

    /// The tile on the opposite side.
    #[must_use]
    pub fn antipode(&self, tile: SpiralIndex) -> SpiralIndex {
        tile.to_layer(self.gp).antipode(self.gp).to_spiral(self.gp)
    }

    /// The five or six tiles adjacent to `tile`.
    #[must_use]
    pub fn neighbors(&self, tile: SpiralIndex) -> Vec<SpiralIndex> {
        tile.to_equator(self.gp)
            .neighbors(self.gp)
            .into_iter()
            .map(|n| n.to_spiral(self.gp))
            .collect()
    }

    /// Equatorial coordinates of a tile.
    #[must_use]
    pub fn equator(&self, tile: SpiralIndex) -> EquatorCoord {
        tile.to_equator(self.gp)
    }

    /// Layer coordinates of a tile.
    #[must_use]
    pub fn layer(&self, tile: SpiralIndex) -> LayerCoord {
        tile.to_layer(self.gp)
    }
}

fn check_length(name: &'static str, value: f64) -> Result<(), GeometryError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(GeometryError::InvalidEdgeLength { name, value })
    }
}
