//! Rasterize a polyhedron's fans into its texture atlas.

use std::collections::HashSet;

use glam::DVec2;
use goldberg_coords::SpiralIndex;
use goldberg_mesh::{PRIMITIVE_RESTART, Polyhedron};
use tracing::{debug, instrument};

use crate::{DebugImage, Rgba};

const PENTAGON: Rgba = [255, 255, 255, 255];
const PATH: Rgba = [230, 40, 40, 255];
const OUTLINE: Rgba = [16, 16, 16, 255];

/// Draws every tile at its atlas texture coordinates.
///
/// Hexagons are coloured by their barycentric position on the icosahedron
/// face, pentagons are white, and tiles on the highlighted path are red.
#[derive(Clone, Debug, Default)]
pub struct AtlasRenderer {
    /// Draw tile edges.
    pub outline: bool,
    /// Tiles drawn in the path colour.
    pub highlight: HashSet<SpiralIndex>,
}

impl AtlasRenderer {
    pub fn new() -> Self {
        Self {
            outline: true,
            highlight: HashSet::new(),
        }
    }

    /// Highlight the tiles of a path.
    pub fn with_path(mut self, path: &[SpiralIndex]) -> Self {
        self.highlight.extend(path.iter().copied());
        self
    }

    /// Colour a tile is filled with.
    pub fn tile_color(&self, polyhedron: &Polyhedron, tile: SpiralIndex) -> Rgba {
        if self.highlight.contains(&tile) {
            return PATH;
        }
        let gp = polyhedron.gp();
        let triangle = tile.to_equator(gp).to_triangle(gp);
        if triangle.is_pole(gp) {
            return PENTAGON;
        }
        let [r, g, b] = triangle.barycentric().map(|w| (48 + w * 160 / gp.get()) as u8);
        [r, g, b, 255]
    }

    /// Render an image the size of the polyhedron's atlas.
    #[instrument(skip_all, fields(gp = polyhedron.gp().get()))]
    pub fn render(&self, polyhedron: &Polyhedron) -> DebugImage {
        let atlas = polyhedron.atlas();
        let (width, height) = atlas.texture_size();
        let mut image = DebugImage::new(width, height);
        let mesh = polyhedron.mesh();
        let size = DVec2::new(atlas.texture_width, atlas.texture_height);
        let pixel = |index: u16| DVec2::from(mesh.vertices[index as usize].texcoord.map(f64::from)) * size;

        let center_vertex = polyhedron.params().center_vertex;
        for tile in SpiralIndex::all(polyhedron.gp()) {
            let fan: Vec<u16> = mesh
                .fan(tile.get())
                .iter()
                .copied()
                .take_while(|&i| i != PRIMITIVE_RESTART)
                .collect();
            let Some((&hub, rest)) = fan.split_first() else {
                continue;
            };

            let color = self.tile_color(polyhedron, tile);
            for pair in rest.windows(2) {
                image.fill_triangle(pixel(hub), pixel(pair[0]), pixel(pair[1]), color);
            }

            if self.outline {
                let mut ring: Vec<u16> = if center_vertex {
                    rest.iter().copied().filter(|&i| i != hub).collect()
                } else {
                    fan.clone()
                };
                ring.dedup();
                if ring.len() > 1 && ring.first() == ring.last() {
                    ring.pop();
                }
                for (i, &a) in ring.iter().enumerate() {
                    let b = ring[(i + 1) % ring.len()];
                    image.draw_line(pixel(a), pixel(b), OUTLINE);
                }
            }
        }

        debug!(
            "Rendered {} tiles into a {}x{} atlas ({} pixels covered)",
            polyhedron.field_count(),
            width,
            height,
            image.covered_pixels()
        );
        image
    }
}

#[cfg(test)]
mod tests {
    use goldberg_mesh::PolyhedronParams;

    use super::*;

    fn polyhedron(g: u32, center_vertex: bool) -> Polyhedron {
        Polyhedron::new(PolyhedronParams {
            gp_index: g,
            center_vertex,
            ..Default::default()
        })
        .unwrap()
    }

    fn center_pixel(polyhedron: &Polyhedron, tile: SpiralIndex) -> Option<Rgba> {
        let p = polyhedron.field_position_2d(tile).floor();
        AtlasRenderer::default()
            .render(polyhedron)
            .get(p.x as i64, p.y as i64)
    }

    #[test]
    fn test_image_matches_atlas_size() {
        let p = polyhedron(3, false);
        let image = AtlasRenderer::new().render(&p);
        assert_eq!(image.dimensions(), p.atlas().texture_size());
        assert!(image.covered_pixels() > 0);
    }

    #[test]
    fn test_tile_centers_have_tile_colour() {
        for center_vertex in [false, true] {
            let p = polyhedron(3, center_vertex);
            let renderer = AtlasRenderer::new();
            let image = renderer.render(&p);
            for tile in SpiralIndex::all(p.gp()) {
                let c = p.field_position_2d(tile).floor();
                assert_eq!(
                    image.get(c.x as i64, c.y as i64),
                    Some(renderer.tile_color(&p, tile)),
                    "tile {tile} (center_vertex={center_vertex})"
                );
            }
        }
    }

    #[test]
    fn test_pentagons_are_white() {
        let p = polyhedron(2, false);
        assert_eq!(center_pixel(&p, SpiralIndex::SOUTH_POLE), Some(PENTAGON));
        assert_eq!(center_pixel(&p, SpiralIndex::north_pole(p.gp())), Some(PENTAGON));
        let renderer = AtlasRenderer::default();
        let pentagons = SpiralIndex::all(p.gp())
            .filter(|&s| renderer.tile_color(&p, s) == PENTAGON)
            .count();
        assert_eq!(pentagons, 12);
    }

    #[test]
    fn test_path_is_highlighted() {
        let p = polyhedron(3, false);
        let path = p
            .shortest_path(SpiralIndex::SOUTH_POLE, SpiralIndex::north_pole(p.gp()))
            .unwrap();
        let renderer = AtlasRenderer::new().with_path(&path);
        let image = renderer.render(&p);
        for &tile in &path {
            let c = p.field_position_2d(tile).floor();
            assert_eq!(image.get(c.x as i64, c.y as i64), Some(PATH), "path tile {tile}");
        }
    }

    #[test]
    fn test_outline_is_drawn() {
        let p = polyhedron(2, false);
        let plain = AtlasRenderer::default().render(&p);
        let outlined = AtlasRenderer::new().render(&p);
        let outline_pixels = outlined
            .pixels
            .chunks_exact(4)
            .filter(|px| *px == OUTLINE)
            .count();
        assert!(outline_pixels > 0);
        assert!(!plain.pixels.chunks_exact(4).any(|px| px == OUTLINE));
    }
}
