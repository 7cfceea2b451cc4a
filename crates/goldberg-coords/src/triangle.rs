//! Barycentric triangle coordinates.

use glam::DVec3;

use crate::icosahedron::{FACE_COUNT, face_poles, icosahedron_vertices};
use crate::{CoordError, EquatorCoord, GpIndex, Interpolation, SpiralIndex};

/// A tile addressed by an icosahedron face and integer barycentric weights
/// summing to `g`.
///
/// `triangle = 5 * band + stripe`, with bands south cap, lower rhombus, upper
/// rhombus and north cap. Weights follow the corner order of
/// [`face_poles`]. Tiles on face edges and corners have several
/// representations; [`canonical`](Self::canonical) picks exactly one.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TriangleCoord {
    barycentric: [u32; 3],
    triangle: u8,
}

impl TriangleCoord {
    /// Validate weights and face index against `gp`.
    pub fn new(gp: GpIndex, barycentric: [u32; 3], triangle: u8) -> Result<Self, CoordError> {
        if triangle >= FACE_COUNT {
            return Err(CoordError::TriangleOutOfRange(triangle));
        }
        if barycentric.iter().sum::<u32>() != gp.get() {
            return Err(CoordError::BarycentricSum {
                weights: barycentric,
                gp: gp.get(),
            });
        }
        Ok(Self {
            barycentric,
            triangle,
        })
    }

    pub(crate) const fn from_raw(barycentric: [u32; 3], triangle: u8) -> Self {
        Self {
            barycentric,
            triangle,
        }
    }

    /// Weights of the three face corners.
    #[inline]
    #[must_use]
    pub const fn barycentric(self) -> [u32; 3] {
        self.barycentric
    }

    /// Face index in `0..20`.
    #[inline]
    #[must_use]
    pub const fn triangle(self) -> u8 {
        self.triangle
    }

    /// Band of the face, 0 (south cap) to 3 (north cap).
    #[inline]
    #[must_use]
    pub const fn band(self) -> u8 {
        self.triangle / 5
    }

    /// Icosahedron vertices at the face corners.
    #[must_use]
    pub fn poles(self) -> [usize; 3] {
        face_poles(self.triangle)
    }

    /// Whether this is the one representation kept for its tile.
    ///
    /// Each face owns its interior plus the edges and corners listed per band;
    /// the poles belong to faces 0 and 15.
    #[must_use]
    pub fn is_canonical(self, gp: GpIndex) -> bool {
        let [b0, b1, b2] = self.barycentric;
        let band = self.band();
        if b2 == gp.get() && band == 0 {
            return self.triangle == 0;
        }
        if b2 == gp.get() && band == 3 {
            return self.triangle == 15;
        }
        match band {
            0 => b2 >= 1 && b1 >= 1,
            1 => b0 >= 1,
            2 => b1 >= 1,
            _ => b2 >= 1 && b0 >= 1,
        }
    }

    /// The canonical representation of the same tile.
    #[must_use]
    pub fn canonical(self, gp: GpIndex) -> Self {
        if self.is_canonical(gp) {
            return self;
        }
        let poles = self.poles();
        let weight_of = |pole: usize| {
            poles
                .iter()
                .position(|&p| p == pole)
                .map_or(0, |i| self.barycentric[i])
        };
        let used: Vec<usize> = (0..3)
            .filter(|&i| self.barycentric[i] != 0)
            .map(|i| poles[i])
            .collect();
        (0..FACE_COUNT)
            .filter_map(|triangle| {
                let corners = face_poles(triangle);
                used.iter()
                    .all(|p| corners.contains(p))
                    .then(|| Self::from_raw(corners.map(weight_of), triangle))
            })
            .find(|candidate| candidate.is_canonical(gp))
            // Every valid coordinate has exactly one canonical face.
            .unwrap_or(self)
    }

    /// Axial coordinates of the tile.
    #[must_use]
    pub fn to_equator(self, gp: GpIndex) -> EquatorCoord {
        let c = self.canonical(gp);
        let g = gp.get() as i32;
        let [b0, _, b2] = c.barycentric.map(|b| b as i32);
        let band = c.band();
        let stripe = i32::from(c.triangle % 5);
        if c.triangle == 15 && b2 == g {
            return EquatorCoord::north_pole(gp);
        }
        let even = band % 2 == 0;
        let latitude = g * stripe + if even { b0 } else { g - b0 };
        let longitude = g * if band < 2 { 1 } else { 2 } + if even { -b2 } else { b2 };
        EquatorCoord::from_raw(latitude, longitude)
    }

    /// Spiral index of the tile.
    #[must_use]
    pub fn to_spiral(self, gp: GpIndex) -> SpiralIndex {
        self.to_equator(gp).to_spiral(gp)
    }

    /// Steps from this tile to the nearest icosahedron vertex along the face.
    #[must_use]
    pub fn distance_to_closest_pole(self, gp: GpIndex) -> u32 {
        gp.get() - self.barycentric.iter().copied().max().unwrap_or(0)
    }

    /// Whether the tile is one of the twelve pentagons.
    #[must_use]
    pub fn is_pole(self, gp: GpIndex) -> bool {
        self.distance_to_closest_pole(gp) == 0
    }

    /// Icosahedron vertex with the largest weight; the first corner wins ties.
    #[must_use]
    pub fn closest_pole(self) -> usize {
        let max = self.barycentric.iter().copied().max().unwrap_or(0);
        let corner = self
            .barycentric
            .iter()
            .position(|&b| b == max)
            .unwrap_or(0);
        self.poles()[corner]
    }

    /// Direction of the tile center. Unit length except for
    /// [`Interpolation::Planar`], which stays on the flat face.
    #[must_use]
    pub fn direction(self, gp: GpIndex, interpolation: Interpolation) -> DVec3 {
        let corners = self.poles().map(|p| icosahedron_vertices()[p]);
        interpolation.interpolate(corners, self.barycentric, gp.get())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    fn all_representations(gp: GpIndex) -> Vec<TriangleCoord> {
        let g = gp.get();
        let mut out = Vec::new();
        for t in 0..FACE_COUNT {
            for b0 in 0..=g {
                for b1 in 0..=g - b0 {
                    out.push(TriangleCoord::new(gp, [b0, b1, g - b0 - b1], t).unwrap());
                }
            }
        }
        out
    }

    #[test]
    fn test_new_validates() {
        let gp = GpIndex::new(3).unwrap();
        assert!(TriangleCoord::new(gp, [1, 1, 1], 19).is_ok());
        assert_eq!(
            TriangleCoord::new(gp, [1, 1, 1], 20),
            Err(CoordError::TriangleOutOfRange(20))
        );
        assert_eq!(
            TriangleCoord::new(gp, [1, 1, 2], 0),
            Err(CoordError::BarycentricSum {
                weights: [1, 1, 2],
                gp: 3
            })
        );
    }

    #[test]
    fn test_one_canonical_representation_per_tile() {
        for g in [1, 2, 3, 5] {
            let gp = GpIndex::new(g).unwrap();
            let canonical: Vec<_> = all_representations(gp)
                .into_iter()
                .filter(|t| t.is_canonical(gp))
                .collect();
            assert_eq!(canonical.len() as u32, gp.field_count(), "g={g}");
            let tiles: HashSet<_> = canonical.iter().map(|t| t.to_spiral(gp)).collect();
            assert_eq!(tiles.len() as u32, gp.field_count(), "g={g} canonical tiles collide");
        }
    }

    #[test]
    fn test_representations_agree_on_direction() {
        let gp = GpIndex::new(3).unwrap();
        for t in all_representations(gp) {
            let c = t.canonical(gp);
            assert!(c.is_canonical(gp), "{t:?} did not canonicalize");
            let a = t.direction(gp, Interpolation::Planar);
            let b = c.direction(gp, Interpolation::Planar);
            assert!(a.distance(b) < 1e-12, "{t:?} and {c:?} are different points");
        }
    }

    #[test]
    fn test_triangle_equator_roundtrip() {
        for g in [1, 2, 3, 10] {
            let gp = GpIndex::new(g).unwrap();
            for s in SpiralIndex::all(gp) {
                let layer = s.to_layer(gp);
                let tri = layer.to_triangle(gp);
                assert_eq!(tri.to_equator(gp), layer.to_equator(gp), "g={g} tile {s}");
                assert_eq!(tri.to_equator(gp).to_triangle(gp), tri.canonical(gp));
            }
        }
    }

    #[test]
    fn test_poles() {
        let gp = GpIndex::new(4).unwrap();
        let south = SpiralIndex::SOUTH_POLE.to_layer(gp).to_triangle(gp);
        assert_eq!(south, TriangleCoord::new(gp, [0, 0, 4], 0).unwrap());
        assert_eq!(south.closest_pole(), 0);
        let north = SpiralIndex::north_pole(gp).to_layer(gp).to_triangle(gp);
        assert_eq!(north, TriangleCoord::new(gp, [0, 0, 4], 15).unwrap());
        assert_eq!(north.closest_pole(), 11);

        let pentagons = SpiralIndex::all(gp)
            .filter(|s| s.to_equator(gp).to_triangle(gp).is_pole(gp))
            .count();
        assert_eq!(pentagons, 12);
    }

    #[test]
    fn test_distance_to_closest_pole() {
        let gp = GpIndex::new(6).unwrap();
        let t = TriangleCoord::new(gp, [2, 2, 2], 8).unwrap();
        assert_eq!(t.distance_to_closest_pole(gp), 4);
        assert_eq!(t.closest_pole(), t.poles()[0]);
        let t = TriangleCoord::new(gp, [1, 4, 1], 8).unwrap();
        assert_eq!(t.distance_to_closest_pole(gp), 2);
        assert_eq!(t.closest_pole(), t.poles()[1]);
    }
}
