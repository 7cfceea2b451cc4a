//! Triangle-fan index buffer and interleaved vertex buffer.
//!
//! Tiles are visited in spiral order. Hexagons share the vertices of the ring
//! walk, copied once per atlas position so that the seams of the unwrap get
//! their own texture coordinates. Pentagons get five private copies each,
//! stored in the last 60 slots of the vertex buffer.

use glam::DVec2;
use goldberg_coords::{EquatorCoord, GpIndex, HexDirection, LayerCoord};
use tracing::{debug, instrument};

use crate::atlas::{AtlasLayout, Corner};
use crate::pole_class::{PoleClass, PoleContext};
use crate::vertex::{PRIMITIVE_RESTART, PolyhedronMesh, PolyhedronVertex};
use crate::{GeometryError, SphereGeometry};

/// Number of vertices the buffers for `gp` need.
#[must_use]
pub fn vertex_count(gp: GpIndex, center_vertex: bool) -> u64 {
    pentagon_vertex_offset(gp, center_vertex) + 60
}

/// First of the 60 pentagon-corner slots.
fn pentagon_vertex_offset(gp: GpIndex, center_vertex: bool) -> u64 {
    let g = u64::from(gp.get());
    let shared = 20 * (g * g + g) + 2 * g - 11;
    if center_vertex {
        shared + u64::from(gp.field_count())
    } else {
        shared
    }
}

/// Pack a generated sphere into fan buffers with atlas texture coordinates.
///
/// With `center_vertex` every fan starts at a vertex in the tile center, which
/// occupies slot `s` for tile `s`; otherwise fans start at a corner. Fails when
/// the vertex count does not fit a `u16` index.
#[instrument(skip_all, fields(gp = geometry.gp().get(), center_vertex = center_vertex))]
pub fn build_topology(
    geometry: &SphereGeometry,
    atlas: &AtlasLayout,
    center_vertex: bool,
) -> Result<PolyhedronMesh, GeometryError> {
    let gp = geometry.gp();
    let vertices = vertex_count(gp, center_vertex);
    if vertices >= u64::from(PRIMITIVE_RESTART) {
        return Err(GeometryError::TooManyVertices {
            vertices,
            max: u64::from(PRIMITIVE_RESTART) - 1,
        });
    }

    let mut builder = TopologyBuilder::new(geometry, atlas, center_vertex);
    builder.build()?;
    debug!(
        "Packed {} fans over {} vertices",
        gp.field_count(),
        builder.vertices.len()
    );
    Ok(PolyhedronMesh {
        vertices: builder.vertices,
        indices: builder.indices,
        field_count: gp.field_count(),
        elements_per_field: builder.elements_per_field,
    })
}

struct TopologyBuilder<'a> {
    geometry: &'a SphereGeometry,
    atlas: &'a AtlasLayout,
    gp: GpIndex,
    g: i64,
    field_count: i64,
    center_vertex: bool,
    elements_per_field: u32,
    /// Tile whose fan is emitted next.
    tile: i64,
    /// Next shared (hexagon) vertex slot.
    shared_slot: i64,
    /// Next pentagon vertex slot.
    pentagon_slot: i64,
    /// Next vertex of the border walk, as a global geometry index.
    border_cursor: i64,
    /// Atlas position of the tile being emitted.
    cursor: DVec2,
    vertices: Vec<PolyhedronVertex>,
    indices: Vec<u16>,
}

impl<'a> TopologyBuilder<'a> {
    fn new(geometry: &'a SphereGeometry, atlas: &'a AtlasLayout, center_vertex: bool) -> Self {
        let gp = geometry.gp();
        let field_count = i64::from(gp.field_count());
        let elements_per_field = if center_vertex { 9 } else { 7 };
        Self {
            geometry,
            atlas,
            gp,
            g: i64::from(gp.get()),
            field_count,
            center_vertex,
            elements_per_field,
            tile: 0,
            shared_slot: if center_vertex { field_count } else { 0 },
            pentagon_slot: pentagon_vertex_offset(gp, center_vertex) as i64,
            border_cursor: field_count,
            cursor: DVec2::ZERO,
            vertices: vec![PolyhedronVertex::default(); vertex_count(gp, center_vertex) as usize],
            indices: Vec::with_capacity(field_count as usize * elements_per_field as usize),
        }
    }

    fn build(&mut self) -> Result<(), GeometryError> {
        let gp = self.gp;
        let g = self.g;
        let fw = self.atlas.field_width;

        self.cursor = self.atlas.field_position(EquatorCoord::SOUTH_POLE);
        self.pentagon(PoleClass::South, 0, 0, 0);

        for lon in 1..3 * g {
            let ring_border_count = self.edge_count(lon) * 5;
            let below = self.edge_count(lon - 1);
            let two_below = if lon >= 2 { self.edge_count(lon - 2) } else { 0 };
            let ring_offset = if lon < g {
                lon * 10 + 5
            } else if lon <= 2 * g {
                let bump = match lon {
                    l if l > g && l + 1 == 2 * g => 1,
                    l if l > g && l < 2 * g => 2,
                    _ => 0,
                };
                g * 10 + bump
            } else {
                (3 * g - lon) * 10 + 5
            };

            for stripe in 0..5 {
                let edge_offset = ring_offset
                    + if lon < g - 1 {
                        stripe * 2
                    } else if lon == g - 1 {
                        stripe - 1
                    } else if lon == g {
                        1
                    } else if lon == 2 * g + 1 {
                        4 - stripe
                    } else if lon > 2 * g + 1 {
                        (4 - stripe) * 2
                    } else {
                        0
                    };

                let stripe_size = gp.stripe_size(lon as u32);
                for in_stripe in 0..stripe_size {
                    let index = stripe_size * stripe as u32 + in_stripe;
                    let tile = LayerCoord::new(gp, index, lon as u32)?.to_equator(gp);
                    let lat = i64::from(tile.latitude());
                    self.cursor = self.atlas.field_position(tile);

                    let is_pole = lat % g == 0 && lon % g == 0;
                    let lead = lat % g == 0 && (lat == 0 || lon <= g);
                    let tail = lat % g == g - 1 && (lat > 4 * g || lon > 2 * g);

                    // Seam copies left of the tile.
                    let b = self.border_cursor;
                    if lead || (lon > 2 * g && lat % g == lon % g) {
                        self.cursor.x -= fw;
                        if lon > 2 * g + 1 {
                            let source = if lat < g {
                                b - 2
                            } else {
                                b - two_below * (5 - stripe) - below * stripe - 2
                            };
                            self.emit(source, Corner::Hex(HexDirection::PosZ));
                        }
                        if !is_pole {
                            let source = if lon > 2 * g {
                                if lat < g { b + below * 5 - 1 } else { b - 1 }
                            } else if lon > g {
                                b + below * 5 - 2
                            } else if lat < g {
                                b + below * 5 + ring_border_count - 2
                            } else {
                                b + ring_border_count - (6 - stripe) * 2
                            };
                            self.emit(source, Corner::Hex(HexDirection::NegY));
                        }
                        self.cursor.x += fw;
                    }

                    match PoleClass::classify(gp, lon as u32, stripe as u32).filter(|_| is_pole) {
                        Some(class) => self.pentagon(class, edge_offset, ring_border_count, stripe),
                        None => self.hexagon(edge_offset),
                    }

                    let b = self.border_cursor;
                    let source = if !lead {
                        self.border_cursor += 1;
                        b
                    } else if lat == 0 {
                        b + below * 5 - 1
                    } else {
                        b - 1
                    };
                    self.emit(source, Corner::Hex(HexDirection::PosZ));
                    self.emit(self.border_cursor, Corner::Hex(HexDirection::NegY));
                    self.border_cursor += 1;

                    if tail && lon > g {
                        self.cursor.x += fw;
                        self.emit(self.border_cursor, Corner::Hex(HexDirection::PosZ));
                        self.border_cursor += 1;
                    }
                }
            }
        }

        // The crown of the last ring below the north pole.
        for stripe in 0..5 {
            let tile = EquatorCoord::new(gp, ((stripe + 1) * g - 1) as i32, (3 * g - 1) as i32)?;
            self.cursor = self.atlas.field_position(tile);
            let b = self.border_cursor;
            let (west, south) = if stripe == 0 {
                (b - 2, b + 4)
            } else {
                (b + stripe * 2 - 17, b - 1)
            };
            self.emit(west, Corner::Hex(HexDirection::PosY));
            self.emit(south, Corner::Hex(HexDirection::NegZ));
            self.emit(b, Corner::Hex(HexDirection::PosX));
            self.border_cursor += 1;
        }

        self.cursor = self.atlas.field_position(EquatorCoord::north_pole(gp));
        self.pentagon(PoleClass::North, 0, 0, 0);
        Ok(())
    }

    fn edge_count(&self, lon: i64) -> i64 {
        i64::from(self.gp.border_vertices_per_edge(lon as u32))
    }

    fn hexagon(&mut self, edge_offset: i64) {
        let s = self.shared_slot;
        let ring = [
            s - 1,
            s,
            s + 1,
            s + edge_offset + 2,
            s + edge_offset + 1,
            s + edge_offset,
        ];
        self.push_fan(&ring, false);
        self.emit(self.tile, Corner::Center);
        self.tile += 1;
    }

    fn pentagon(&mut self, class: PoleClass, edge_offset: i64, ring_border_count: i64, stripe: i64) {
        let first = self.pentagon_slot;
        self.push_fan(&[first, first + 1, first + 2, first + 3, first + 4], true);

        let ctx = PoleContext {
            field_count: self.field_count,
            border_count: i64::from(self.gp.border_vertex_count()),
            border_cursor: self.border_cursor,
            edge_offset,
            ring_border_count,
            stripe,
        };
        for (i, source) in class.corner_sources(&ctx).into_iter().enumerate() {
            self.emit(source, Corner::Pentagon(i as u8));
        }
        self.emit(self.tile, Corner::Center);
        self.tile += 1;

        if class.shifts_atlas() {
            self.cursor.x -= self.atlas.field_width * 5.0 * self.g as f64;
        }
    }

    /// Append one fan. Centered hexagons close on their first corner,
    /// centered pentagons close on the first corner and then the center.
    fn push_fan(&mut self, ring: &[i64], pentagon: bool) {
        let center = self.tile as u16;
        if self.center_vertex {
            self.indices.push(center);
        }
        self.indices.extend(ring.iter().map(|&i| i as u16));
        if pentagon || self.center_vertex {
            self.indices.push(ring[0] as u16);
        }
        if pentagon && self.center_vertex {
            self.indices.push(center);
        }
        self.indices.push(PRIMITIVE_RESTART);
    }

    /// Copy geometry vertex `source` into the next slot for `corner`.
    fn emit(&mut self, source: i64, corner: Corner) {
        let slot = match corner {
            Corner::Pentagon(_) => {
                self.pentagon_slot += 1;
                self.pentagon_slot - 1
            }
            // At g = 1 every tile is a pentagon and shared vertices are unused.
            Corner::Hex(_) if self.g == 1 => return,
            Corner::Hex(_) => {
                self.shared_slot += 1;
                self.shared_slot - 1
            }
            Corner::Center if !self.center_vertex => return,
            Corner::Center => source,
        };
        debug_assert!(
            source >= 0 && (source as usize) < self.geometry.positions().len(),
            "vertex source {source} out of range"
        );

        let southern = self.tile * 2 <= self.field_count;
        let pixel = self.cursor + self.atlas.corner_offset(corner, southern);
        let position = self.geometry.positions()[source as usize];
        let normal = self.geometry.normals()[source as usize];
        self.vertices[slot as usize] = PolyhedronVertex {
            position: position.as_vec3().to_array(),
            normal: normal.as_vec3().to_array(),
            texcoord: self.atlas.texcoord(pixel),
        };
    }
}
