//! Stepping between neighbouring tiles.
//!
//! Inside a gore a step is a plain axial delta. Steps that leave a gore in
//! the caps cross the seam around the shared pentagon, which turns the step by
//! 60°; the heading label turns with it. The poles hand out one ring-1
//! neighbour per stripe.

use crate::{EquatorCoord, GpIndex, HexDirection};

/// Heading leaving the south pole towards stripe `s`.
const SOUTH_POLE_DIRS: [HexDirection; 5] = [
    HexDirection::PosY,
    HexDirection::NegZ,
    HexDirection::PosX,
    HexDirection::NegY,
    HexDirection::PosZ,
];

/// Heading leaving the north pole towards stripe `s`.
const NORTH_POLE_DIRS: [HexDirection; 5] = [
    HexDirection::PosZ,
    HexDirection::NegY,
    HexDirection::PosX,
    HexDirection::NegZ,
    HexDirection::PosY,
];

/// Result of one navigation step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavigationStep {
    /// The neighbouring tile.
    pub tile: EquatorCoord,
    /// Direction that keeps going "forward" in the neighbour's frame. Its
    /// opposite leads back to the starting tile.
    pub heading: HexDirection,
}

/// Cube coordinates `(x, y, z)` of an axial offset.
fn to_cube(lat: i32, lon: i32) -> [i32; 3] {
    [lat, -lon, lon - lat]
}

fn from_cube(c: [i32; 3]) -> (i32, i32) {
    (c[0], -c[1])
}

fn rotate_ccw(c: [i32; 3]) -> [i32; 3] {
    [-c[2], -c[0], -c[1]]
}

fn rotate_cw(c: [i32; 3]) -> [i32; 3] {
    [-c[1], -c[2], -c[0]]
}

/// Rotate `(lat, lon)` around `apex` by 60°.
fn turn_around(apex: (i32, i32), lat: i32, lon: i32, ccw: bool) -> (i32, i32) {
    let c = to_cube(lat - apex.0, lon - apex.1);
    let (dl, dn) = from_cube(if ccw { rotate_ccw(c) } else { rotate_cw(c) });
    (apex.0 + dl, apex.1 + dn)
}

impl EquatorCoord {
    /// Step to the neighbour in `dir`.
    ///
    /// The poles have five neighbours: `dir` picks one by the pole tables and
    /// any direction without an entry falls back to stripe 0.
    #[must_use]
    pub fn navigate(self, gp: GpIndex, dir: HexDirection) -> NavigationStep {
        let g = gp.get() as i32;
        let (lat, lon) = (self.latitude(), self.longitude());

        if lon == 0 {
            let s = SOUTH_POLE_DIRS.iter().position(|&d| d == dir).unwrap_or(0) as i32;
            return NavigationStep {
                tile: EquatorCoord::from_raw(s * g, 1),
                heading: HexDirection::PosY,
            };
        }
        if lon == 3 * g {
            let s = NORTH_POLE_DIRS.iter().position(|&d| d == dir).unwrap_or(0) as i32;
            return NavigationStep {
                tile: EquatorCoord::from_raw(s * g + g - 1, 3 * g - 1),
                heading: HexDirection::PosZ,
            };
        }

        let (dl, dn) = dir.delta();
        let (mut nlat, mut nlon) = (lat + dl, lon + dn);
        let mut heading = dir;

        if nlon < g {
            let s = nlat.div_euclid(g);
            if nlat - s * g >= nlon {
                // Left the gore through a southern seam.
                let apex = ((s + 1) * g, g);
                let from_right = crosses_from_right(gp, lat, lon, apex);
                (nlat, nlon) = turn_around(apex, nlat, nlon, !from_right);
                heading = heading.rotate(if from_right { -1 } else { 1 });
            }
            if nlon <= 0 {
                let stripe = (lat / g).rem_euclid(5) as usize;
                return NavigationStep {
                    tile: EquatorCoord::SOUTH_POLE,
                    heading: SOUTH_POLE_DIRS[stripe].opposite(),
                };
            }
        } else if nlon > 2 * g {
            let s = nlat.div_euclid(g);
            if nlat < s * g + nlon - 2 * g {
                // Left the gore through a northern seam.
                let apex = (s * g, 2 * g);
                let from_right = crosses_from_right(gp, lat, lon, apex);
                (nlat, nlon) = turn_around(apex, nlat, nlon, from_right);
                heading = heading.rotate(if from_right { 1 } else { -1 });
            }
            if nlon >= 3 * g {
                let stripe = ((lat - (lon - 2 * g)) / g).rem_euclid(5) as usize;
                return NavigationStep {
                    tile: EquatorCoord::north_pole(gp),
                    heading: NORTH_POLE_DIRS[stripe].opposite(),
                };
            }
        }

        NavigationStep {
            tile: EquatorCoord::from_raw(nlat.rem_euclid(5 * g), nlon),
            heading,
        }
    }

    /// Distinct neighbouring tiles, counter-clockwise: six for hexagons, five
    /// for pentagons.
    #[must_use]
    pub fn neighbors(self, gp: GpIndex) -> Vec<EquatorCoord> {
        let mut out: Vec<EquatorCoord> = Vec::with_capacity(6);
        for dir in HexDirection::ALL {
            let tile = self.navigate(gp, dir).tile;
            if !out.contains(&tile) {
                out.push(tile);
            }
        }
        out
    }
}

/// Whether the step starts on the side of `apex` with larger latitude. The
/// pentagon at the apex itself counts as the left side.
fn crosses_from_right(gp: GpIndex, lat: i32, lon: i32, apex: (i32, i32)) -> bool {
    let five_g = 5 * gp.get() as i32;
    let offset = lat - apex.0;
    let at_apex = lat.rem_euclid(five_g) == apex.0.rem_euclid(five_g) && lon == apex.1;
    offset > 0 || (offset == 0 && !at_apex)
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::{Interpolation, SpiralIndex};

    fn gp(g: u32) -> GpIndex {
        GpIndex::new(g).unwrap()
    }

    #[test]
    fn test_navigation_lands_on_tiles() {
        for g in [1, 2, 3, 4, 7] {
            let gp = gp(g);
            for s in SpiralIndex::all(gp) {
                let eq = s.to_equator(gp);
                for dir in HexDirection::ALL {
                    let step = eq.navigate(gp, dir);
                    assert!(
                        EquatorCoord::is_tile(gp, step.tile.latitude(), step.tile.longitude()),
                        "g={g}: {eq} {dir:?} -> non-tile {}",
                        step.tile
                    );
                    assert_ne!(step.tile, eq, "g={g}: {eq} {dir:?} stayed in place");
                }
            }
        }
    }

    #[test]
    fn test_navigation_closure() {
        for g in [1, 2, 4] {
            let gp = gp(g);
            for s in SpiralIndex::all(gp) {
                let eq = s.to_equator(gp);
                for dir in HexDirection::ALL {
                    let there = eq.navigate(gp, dir);
                    let back = there.tile.navigate(gp, there.heading.opposite());
                    assert_eq!(
                        back.tile, eq,
                        "g={g}: {eq} --{dir:?}--> {} does not lead back",
                        there.tile
                    );
                }
            }
        }
    }

    #[test]
    fn test_neighbor_counts() {
        for g in [1, 2, 3, 5] {
            let gp = gp(g);
            let mut pentagons = 0;
            for s in SpiralIndex::all(gp) {
                let eq = s.to_equator(gp);
                let n = eq.neighbors(gp).len();
                let is_pole = eq.to_triangle(gp).is_pole(gp);
                assert_eq!(n, if is_pole { 5 } else { 6 }, "g={g} tile {eq}");
                pentagons += usize::from(is_pole);
            }
            assert_eq!(pentagons, 12);
        }
    }

    #[test]
    fn test_neighbors_are_geometrically_nearest() {
        for g in [1, 2, 3, 5] {
            let gp = gp(g);
            let dirs: Vec<_> = SpiralIndex::all(gp)
                .map(|s| s.direction(gp, Interpolation::Spherical))
                .collect();
            for s in SpiralIndex::all(gp) {
                let eq = s.to_equator(gp);
                let found: HashSet<u32> =
                    eq.neighbors(gp).iter().map(|n| n.to_spiral(gp).get()).collect();
                let mut by_distance: Vec<u32> = (0..gp.field_count())
                    .filter(|&t| t != s.get())
                    .collect();
                let here = dirs[s.get() as usize];
                by_distance.sort_by(|&a, &b| {
                    here.dot(dirs[b as usize])
                        .total_cmp(&here.dot(dirs[a as usize]))
                });
                let nearest: HashSet<u32> =
                    by_distance.into_iter().take(found.len()).collect();
                assert_eq!(found, nearest, "g={g} tile {eq}");
            }
        }
    }

    #[test]
    fn test_g1_south_pole_neighbours_are_ring_one() {
        let gp = gp(1);
        let neighbours: HashSet<u32> = EquatorCoord::SOUTH_POLE
            .neighbors(gp)
            .iter()
            .map(|n| n.to_spiral(gp).get())
            .collect();
        assert_eq!(neighbours, (1..=5).collect());
    }

    #[test]
    fn test_interior_step_is_axial_delta() {
        let gp = gp(4);
        let eq = EquatorCoord::new(gp, 7, 6).unwrap();
        for dir in HexDirection::ALL {
            let (dl, dn) = dir.delta();
            let step = eq.navigate(gp, dir);
            assert_eq!(step.tile, EquatorCoord::new(gp, 7 + dl, 6 + dn).unwrap());
            assert_eq!(step.heading, dir);
        }
    }

    #[test]
    fn test_latitude_wraps_around() {
        let gp = gp(2);
        let eq = EquatorCoord::new(gp, 9, 3).unwrap();
        let step = eq.navigate(gp, HexDirection::PosX);
        assert_eq!(step.tile, EquatorCoord::new(gp, 0, 3).unwrap());
    }
}
