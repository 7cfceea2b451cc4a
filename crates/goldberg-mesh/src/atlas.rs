//! 2D unwrap of the tiles into a texture atlas, and picking on it.
//!
//! Tiles are laid out on the axial grid: each ring is a row, sheared by half a
//! tile per ring so the five gores sit side by side. Pole tiles are moved next
//! to the gore they would otherwise split.

use std::f64::consts::PI;

use glam::DVec2;
use goldberg_coords::{CoordError, EquatorCoord, GpIndex, HexDirection, round_axial};

/// Which corner of a tile a vertex sits on, for texture-coordinate placement.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Corner {
    /// Hexagon corner in the given direction from the tile center.
    Hex(HexDirection),
    /// Pentagon corner `0..5`, counted clockwise.
    Pentagon(u8),
    /// The tile center itself.
    Center,
}

/// Pixel dimensions of the atlas for a given resolution and 2D edge length.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AtlasLayout {
    gp: GpIndex,
    /// Horizontal distance between neighbouring tile centers.
    pub field_width: f64,
    /// Height of a hexagon, corner to corner.
    pub field_height: f64,
    /// Circumradius of a pentagon.
    pub pentagon_radius: f64,
    /// Atlas width in pixels.
    pub texture_width: f64,
    /// Atlas height in pixels.
    pub texture_height: f64,
}

impl AtlasLayout {
    /// Layout for tiles whose hexagon edge is `edge_length_2d` pixels.
    #[must_use]
    pub fn new(gp: GpIndex, edge_length_2d: f64) -> Self {
        let g = f64::from(gp.get());
        let field_width = (edge_length_2d * 3.0_f64.sqrt()).ceil();
        let field_height = edge_length_2d.ceil() * 2.0;
        Self {
            gp,
            field_width,
            field_height,
            pentagon_radius: edge_length_2d / (2.0 * (PI / 5.0).sin()),
            texture_width: field_width * (5.5 * g - 0.5),
            texture_height: field_height * (2.25 * g - 0.5),
        }
    }

    /// Atlas size in whole pixels.
    #[must_use]
    pub fn texture_size(&self) -> (u32, u32) {
        (
            self.texture_width.ceil() as u32,
            self.texture_height.ceil() as u32,
        )
    }

    /// Pixel position of a tile center.
    #[must_use]
    pub fn field_position(&self, tile: EquatorCoord) -> DVec2 {
        let g = self.gp.get() as i32;
        let (mut lat, mut lon) = (tile.latitude(), tile.longitude());
        if lon == 0 {
            lat = -1;
            lon += 1;
        } else if lon == 3 * g {
            lat = 5 * g;
            lon -= 1;
        } else if lon == 2 * g && lat == 0 {
            lat = 5 * g;
        }
        let (g, lat, lon) = (f64::from(g), f64::from(lat), f64::from(lon));
        DVec2::new(
            self.field_width * (0.5 * (2.0 * g - lon) + lat),
            self.field_height * (0.75 * (3.0 * g - lon - 1.0) + 0.5),
        )
    }

    /// Pixel offset of a tile corner from the tile center.
    ///
    /// Pentagons in the southern half are turned by a tenth of a turn.
    #[must_use]
    pub fn corner_offset(&self, corner: Corner, southern: bool) -> DVec2 {
        let (w, h) = (self.field_width, self.field_height);
        match corner {
            Corner::Center => DVec2::ZERO,
            Corner::Pentagon(i) => {
                let angle =
                    2.0 * PI / 5.0 * f64::from(i) + if southern { 0.2 * PI } else { 0.0 };
                DVec2::new(angle.sin(), angle.cos()) * self.pentagon_radius
            }
            Corner::Hex(dir) => match dir {
                HexDirection::PosZ => DVec2::new(0.0, 0.5 * h),
                HexDirection::NegY => DVec2::new(0.5 * w, 0.25 * h),
                HexDirection::PosX => DVec2::new(0.5 * w, -0.25 * h),
                HexDirection::NegZ => DVec2::new(0.0, -0.5 * h),
                HexDirection::PosY => DVec2::new(-0.5 * w, -0.25 * h),
                HexDirection::NegX => DVec2::new(-0.5 * w, 0.25 * h),
            },
        }
    }

    /// Normalized texture coordinate of a pixel position.
    #[must_use]
    pub fn texcoord(&self, pixel: DVec2) -> [f32; 2] {
        [
            (pixel.x / self.texture_width) as f32,
            (pixel.y / self.texture_height) as f32,
        ]
    }

    /// Tile under a pixel position.
    ///
    /// Inverts [`field_position`](Self::field_position), rounds to the axial
    /// grid and undoes the pole and seam remapping. Positions between gores
    /// or outside the atlas are rejected.
    pub fn pick(&self, pixel: DVec2) -> Result<EquatorCoord, CoordError> {
        let g = f64::from(self.gp.get());
        let lon = 3.0 * g - 1.0 - (pixel.y / self.field_height - 0.5) / 0.75;
        let lat = pixel.x / self.field_width - 0.5 * (2.0 * g - lon);
        let (lat, lon) = round_axial(lat, lon);

        let g = self.gp.get() as i32;
        let (lat, lon) = if lat == -1 {
            (0, 0)
        } else if lat == 5 * g && lon == 3 * g - 1 {
            (g, 3 * g)
        } else if lat == 5 * g {
            (0, lon)
        } else {
            (lat, lon)
        };
        EquatorCoord::new(self.gp, lat, lon)
    }
}

#[cfg(test)]
mod tests {
    use goldberg_coords::SpiralIndex;

    use super::*;

    fn layout(g: u32) -> AtlasLayout {
        AtlasLayout::new(GpIndex::new(g).unwrap(), 30.0)
    }

    #[test]
    fn test_dimensions() {
        let atlas = layout(2);
        assert_eq!(atlas.field_width, 52.0);
        assert_eq!(atlas.field_height, 60.0);
        assert_eq!(atlas.texture_width, 52.0 * 10.5);
        assert_eq!(atlas.texture_height, 60.0 * 4.0);
        assert_eq!(atlas.texture_size(), (546, 240));
        assert!((atlas.pentagon_radius - 25.519524250561).abs() < 1e-9);
    }

    #[test]
    fn test_tile_centers_inside_atlas() {
        for g in [2, 3, 5] {
            let atlas = layout(g);
            let gp = GpIndex::new(g).unwrap();
            for s in SpiralIndex::all(gp) {
                let p = atlas.field_position(s.to_equator(gp));
                assert!(
                    p.x > 0.0 && p.x < atlas.texture_width && p.y > 0.0 && p.y < atlas.texture_height,
                    "g={g} tile {s} center {p} outside atlas"
                );
            }
        }
    }

    #[test]
    fn test_pick_tile_centers() {
        for g in [2, 3, 5] {
            let atlas = layout(g);
            let gp = GpIndex::new(g).unwrap();
            for s in SpiralIndex::all(gp) {
                let eq = s.to_equator(gp);
                let center = atlas.field_position(eq);
                for offset in [
                    DVec2::ZERO,
                    DVec2::new(3.0, 2.0),
                    DVec2::new(-4.0, 1.0),
                    DVec2::new(2.0, -5.0),
                ] {
                    assert_eq!(
                        atlas.pick(center + offset),
                        Ok(eq),
                        "g={g} tile {s} offset {offset}"
                    );
                }
            }
        }
    }

    #[test]
    fn test_pick_outside_is_rejected() {
        let atlas = layout(3);
        assert!(atlas.pick(DVec2::new(-500.0, -500.0)).is_err());
        assert!(atlas.pick(DVec2::new(10_000.0, 40.0)).is_err());
    }

    #[test]
    fn test_hex_corners_are_equidistant() {
        let atlas = layout(4);
        let first = atlas.corner_offset(Corner::Hex(HexDirection::PosZ), true).length();
        for dir in HexDirection::ALL {
            let d = atlas.corner_offset(Corner::Hex(dir), false).length();
            assert!((d - first).abs() / first < 0.05, "{dir:?} corner at {d}, expected ~{first}");
        }
        assert_eq!(atlas.corner_offset(Corner::Center, true), DVec2::ZERO);
    }

    #[test]
    fn test_pentagon_corners_on_circle() {
        let atlas = layout(2);
        for i in 0..5 {
            for southern in [false, true] {
                let d = atlas.corner_offset(Corner::Pentagon(i), southern).length();
                assert!((d - atlas.pentagon_radius).abs() < 1e-9);
            }
        }
    }
}
