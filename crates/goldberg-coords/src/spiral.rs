//! Spiral index: the canonical tile address.

use std::fmt;

use glam::DVec3;

use crate::{CoordError, EquatorCoord, GpIndex, Interpolation, LayerCoord};

/// Position of a tile in south-to-north "fruit peeling" order.
///
/// Index 0 is the south pole and `field_count - 1` the north pole. Inside a
/// ring the order follows increasing latitude.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SpiralIndex(u32);

impl SpiralIndex {
    /// The south pole tile.
    pub const SOUTH_POLE: SpiralIndex = SpiralIndex(0);

    /// Validate an index against the tile count of `gp`.
    pub fn new(gp: GpIndex, index: u32) -> Result<Self, CoordError> {
        if index >= gp.field_count() {
            return Err(CoordError::SpiralOutOfRange {
                index,
                field_count: gp.field_count(),
            });
        }
        Ok(Self(index))
    }

    pub(crate) const fn from_raw(index: u32) -> Self {
        Self(index)
    }

    /// The north pole tile.
    #[must_use]
    pub fn north_pole(gp: GpIndex) -> Self {
        Self(gp.field_count() - 1)
    }

    /// Iterate over every tile of `gp` in spiral order.
    pub fn all(gp: GpIndex) -> impl Iterator<Item = SpiralIndex> {
        (0..gp.field_count()).map(SpiralIndex)
    }

    /// The raw index, usable as a vertex or array offset.
    #[inline]
    #[must_use]
    pub const fn get(self) -> u32 {
        self.0
    }

    /// Whether this tile sits on one of the two poles.
    #[must_use]
    pub fn is_polar(self, gp: GpIndex) -> bool {
        self.0 == 0 || self.0 == gp.field_count() - 1
    }

    /// Ring and position inside the ring.
    ///
    /// The southern cap, the equatorial band and the northern cap each invert
    /// the cumulative ring-size sum in closed form.
    #[must_use]
    pub fn to_layer(self, gp: GpIndex) -> LayerCoord {
        let g = gp.get();
        if self.0 == 0 {
            return LayerCoord::from_raw(0, 0);
        }
        if self.0 == gp.field_count() - 1 {
            return LayerCoord::from_raw(0, 3 * g);
        }

        let mut i = self.0 - 1;
        let cap = 5 * g * (g - 1) / 2;
        if i < cap {
            let m = cap_ring(i);
            return LayerCoord::from_raw(i - 5 * m * (m + 1) / 2, m + 1);
        }

        i -= cap;
        let band = 5 * g * (g + 1);
        if i < band {
            return LayerCoord::from_raw(i % (5 * g), g + i / (5 * g));
        }

        // Northern cap: count backwards from the north pole.
        i -= band;
        let j = cap - 1 - i;
        let m = cap_ring(j);
        let size = 5 * (m + 1);
        LayerCoord::from_raw(size - 1 - (j - 5 * m * (m + 1) / 2), 3 * g - 1 - m)
    }

    /// Axial equatorial coordinates of this tile.
    #[must_use]
    pub fn to_equator(self, gp: GpIndex) -> EquatorCoord {
        self.to_layer(gp).to_equator(gp)
    }

    /// Direction of the tile center, see [`TriangleCoord::direction`](crate::TriangleCoord::direction).
    #[must_use]
    pub fn direction(self, gp: GpIndex, interpolation: Interpolation) -> DVec3 {
        self.to_layer(gp).to_triangle(gp).direction(gp, interpolation)
    }
}

impl fmt::Display for SpiralIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Largest `m` with `5m(m+1)/2 <= i`, i.e. the cap ring (minus one) holding
/// the `i`-th cap tile.
fn cap_ring(i: u32) -> u32 {
    let i = u64::from(i);
    let estimate = (5.0_f64.sqrt() * ((8 * i + 5) as f64).sqrt() - 5.0) / 10.0;
    let mut m = estimate.max(0.0) as u64;
    while 5 * (m + 1) * (m + 2) / 2 <= i {
        m += 1;
    }
    while m > 0 && 5 * m * (m + 1) / 2 > i {
        m -= 1;
    }
    m as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_out_of_range_rejected() {
        let gp = GpIndex::new(2).unwrap();
        assert!(SpiralIndex::new(gp, 41).is_ok());
        assert_eq!(
            SpiralIndex::new(gp, 42),
            Err(CoordError::SpiralOutOfRange {
                index: 42,
                field_count: 42
            })
        );
    }

    #[test]
    fn test_poles() {
        for g in [1, 2, 5] {
            let gp = GpIndex::new(g).unwrap();
            let south = SpiralIndex::SOUTH_POLE.to_layer(gp);
            let north = SpiralIndex::north_pole(gp).to_layer(gp);
            assert_eq!((south.index(), south.longitude()), (0, 0));
            assert_eq!((north.index(), north.longitude()), (0, 3 * g));
        }
    }

    #[test]
    fn test_cap_ring_matches_linear_search() {
        for i in 0..20_000u32 {
            let mut m = 0u32;
            while 5 * (m + 1) * (m + 2) / 2 <= i {
                m += 1;
            }
            assert_eq!(cap_ring(i), m, "cap ring of {i}");
        }
    }

    #[test]
    fn test_spiral_is_ring_major_order() {
        let gp = GpIndex::new(4).unwrap();
        let mut previous = (0, 0);
        for s in SpiralIndex::all(gp).skip(1) {
            let layer = s.to_layer(gp);
            let current = (layer.longitude(), layer.index());
            assert!(current > previous, "{s} breaks ring order: {current:?} after {previous:?}");
            previous = current;
        }
    }
}
