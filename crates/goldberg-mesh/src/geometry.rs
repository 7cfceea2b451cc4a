//! Tile centers and tile-boundary vertices in 3D.

use glam::DVec3;
use goldberg_coords::{GpIndex, LayerCoord, SpiralIndex};
use tracing::{debug, instrument};

use crate::{GeometryError, ProjectionMode};

/// Distance from the center of an icosahedron to a vertex, per unit edge.
pub(crate) fn radius_per_edge() -> f64 {
    (2.0 * std::f64::consts::PI / 5.0).sin()
}

/// Positions and normals of all tile centers followed by all border vertices.
///
/// Index `s` for `s < field_count` is the center of tile `s`; index
/// `field_count + k` is the `k`-th border vertex in ring-walk order.
#[derive(Clone, Debug)]
pub struct SphereGeometry {
    gp: GpIndex,
    projection: ProjectionMode,
    radius: f64,
    positions: Vec<DVec3>,
    normals: Vec<DVec3>,
    border_fields: Vec<[SpiralIndex; 3]>,
}

impl SphereGeometry {
    /// Generate centers and border vertices.
    ///
    /// `edge_length_3d` is the hexagon spacing; the sphere radius follows as
    /// `g · edge · √3 · sin(2π/5)`.
    #[instrument(skip_all, fields(gp = gp.get(), projection = %projection))]
    pub fn generate(
        gp: GpIndex,
        edge_length_3d: f64,
        projection: ProjectionMode,
    ) -> Result<Self, GeometryError> {
        let field_count = gp.field_count() as usize;
        let total = field_count + gp.border_vertex_count() as usize;
        let radius = f64::from(gp.get()) * edge_length_3d * 3.0_f64.sqrt() * radius_per_edge();

        let mut geometry = Self {
            gp,
            projection,
            radius,
            positions: Vec::with_capacity(total),
            normals: Vec::with_capacity(total),
            border_fields: Vec::with_capacity(gp.border_vertex_count() as usize),
        };

        let directions: Vec<DVec3> = SpiralIndex::all(gp)
            .map(|s| s.direction(gp, projection.interpolation()))
            .collect();
        for &dir in &directions {
            geometry.push(dir);
        }
        debug!("Placed {} tile centers", field_count);

        geometry.generate_borders(&directions)?;
        debug!("Placed {} border vertices", geometry.border_fields.len());
        Ok(geometry)
    }

    /// Walk each ring strip as a zig-zag between ring `lon` and `lon + 1`,
    /// emitting one border vertex per triangle of adjacent tiles.
    fn generate_borders(&mut self, directions: &[DVec3]) -> Result<(), GeometryError> {
        let gp = self.gp;
        let tile = |index: u32, lon: u32| -> Result<SpiralIndex, GeometryError> {
            Ok(LayerCoord::new(gp, index, lon)?.to_spiral(gp))
        };

        for lon in 0..gp.max_longitude() {
            let steps = gp.border_vertices_per_edge(lon);
            let upper_parity = if lon < 2 * gp.get() { 0 } else { 1 };
            let (lower_size, upper_size) = (gp.layer_size(lon), gp.layer_size(lon + 1));
            let (mut lower, mut upper) = (0, 0);
            for _stripe in 0..5 {
                for step in 0..steps {
                    let triple = if step % 2 == upper_parity {
                        let previous = upper;
                        upper = (upper + 1) % upper_size;
                        [tile(lower, lon)?, tile(upper, lon + 1)?, tile(previous, lon + 1)?]
                    } else {
                        let previous = lower;
                        lower = (lower + 1) % lower_size;
                        [tile(lower, lon)?, tile(upper, lon + 1)?, tile(previous, lon)?]
                    };
                    let sum: DVec3 = triple.iter().map(|s| directions[s.get() as usize]).sum();
                    if self.projection.keeps_faces_flat() {
                        self.push(sum / 3.0);
                    } else {
                        self.push(sum);
                    }
                    self.border_fields.push(triple);
                }
            }
        }
        Ok(())
    }

    fn push(&mut self, point: DVec3) {
        let normal = point.normalize();
        let position = if self.projection.keeps_faces_flat() {
            point
        } else {
            normal
        };
        self.positions.push(position * self.radius);
        self.normals.push(normal);
    }

    /// Resolution the geometry was built for.
    #[must_use]
    pub fn gp(&self) -> GpIndex {
        self.gp
    }

    /// Projection mode used for the tile centers.
    #[must_use]
    pub fn projection(&self) -> ProjectionMode {
        self.projection
    }

    /// Radius of the circumscribed sphere.
    #[must_use]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Center of a tile.
    #[must_use]
    pub fn field_position(&self, tile: SpiralIndex) -> DVec3 {
        self.positions[tile.get() as usize]
    }

    /// Outward normal of a tile.
    #[must_use]
    pub fn field_normal(&self, tile: SpiralIndex) -> DVec3 {
        self.normals[tile.get() as usize]
    }

    /// Position of a border vertex, indexed in ring-walk order.
    #[must_use]
    pub fn border_position(&self, border: u32) -> DVec3 {
        self.positions[(self.gp.field_count() + border) as usize]
    }

    /// The three tiles meeting at a border vertex.
    #[must_use]
    pub fn border_fields(&self, border: u32) -> [SpiralIndex; 3] {
        self.border_fields[border as usize]
    }

    /// Positions of all centers followed by all border vertices.
    #[must_use]
    pub fn positions(&self) -> &[DVec3] {
        &self.positions
    }

    /// Normals in the same order as [`positions`](Self::positions).
    #[must_use]
    pub fn normals(&self) -> &[DVec3] {
        &self.normals
    }
}
