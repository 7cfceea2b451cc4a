//! Ring (longitude) coordinates.

use crate::{CoordError, EquatorCoord, GpIndex, SpiralIndex, TriangleCoord};

/// A tile addressed by its ring and its position inside the ring.
///
/// `longitude` runs from 0 (south pole) to `3g` (north pole). Rings below `g`
/// and above `2g` grow and shrink by five tiles per step; the band in between
/// holds `5g` tiles per ring.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct LayerCoord {
    index: u32,
    longitude: u32,
}

impl LayerCoord {
    /// Validate a ring position against `gp`.
    pub fn new(gp: GpIndex, index: u32, longitude: u32) -> Result<Self, CoordError> {
        if longitude > gp.max_longitude() {
            return Err(CoordError::LongitudeOutOfRange {
                longitude,
                max: gp.max_longitude(),
            });
        }
        let ring_size = gp.layer_size(longitude);
        if index >= ring_size {
            return Err(CoordError::RingIndexOutOfRange {
                index,
                longitude,
                ring_size,
            });
        }
        Ok(Self { index, longitude })
    }

    pub(crate) const fn from_raw(index: u32, longitude: u32) -> Self {
        Self { index, longitude }
    }

    /// Position inside the ring.
    #[inline]
    #[must_use]
    pub const fn index(self) -> u32 {
        self.index
    }

    /// Ring number counted from the south pole.
    #[inline]
    #[must_use]
    pub const fn longitude(self) -> u32 {
        self.longitude
    }

    /// Which of the five stripes of the ring this tile falls in.
    #[must_use]
    pub fn stripe(self, gp: GpIndex) -> u32 {
        self.index / gp.stripe_size(self.longitude)
    }

    /// Position inside the stripe.
    #[must_use]
    pub fn index_in_stripe(self, gp: GpIndex) -> u32 {
        self.index % gp.stripe_size(self.longitude)
    }

    /// Spiral index: all tiles of lower rings plus the position in the ring.
    #[must_use]
    pub fn to_spiral(self, gp: GpIndex) -> SpiralIndex {
        let g = gp.get();
        if self.longitude == 0 {
            return SpiralIndex::SOUTH_POLE;
        }
        let l = self.longitude - 1;
        // Tiles below this ring, divided by five.
        let offset = if l < g {
            (l * l + l) / 2
        } else if l < 2 * g {
            (g * (2 * l + 1) - g * g) / 2
        } else {
            let k = 3 * g - l - 1;
            2 * g * g - (k * k + k) / 2
        };
        SpiralIndex::from_raw(1 + 5 * offset + self.index)
    }

    /// Axial coordinates. Latitude gains the ring offset above the upper rhombus.
    #[must_use]
    pub fn to_equator(self, gp: GpIndex) -> EquatorCoord {
        let g = gp.get();
        let stripe = self.stripe(gp);
        let mut latitude = self.index_in_stripe(gp) + g * stripe;
        if self.longitude > 2 * g {
            latitude += self.longitude - 2 * g;
        }
        EquatorCoord::from_raw(latitude as i32, self.longitude as i32)
    }

    /// Barycentric coordinates in the face this ring position falls in.
    ///
    /// Tiles on face edges get the representation of the face they are
    /// enumerated in, which is not necessarily the canonical one.
    #[must_use]
    pub fn to_triangle(self, gp: GpIndex) -> TriangleCoord {
        let g = gp.get();
        let lon = self.longitude;
        let isl = self.index_in_stripe(gp);
        let mut triangle = self.stripe(gp);
        let (b0, b2) = if lon > 2 * g {
            triangle += 15;
            (3 * g - lon - isl, lon - 2 * g)
        } else if lon < g {
            (isl, g - lon)
        } else if isl + g < lon {
            triangle += 10;
            (isl, 2 * g - lon)
        } else {
            triangle += 5;
            (g - isl, lon - g)
        };
        TriangleCoord::from_raw([b0, g - b0 - b2, b2], triangle as u8)
    }

    /// The tile on the opposite side of the sphere.
    #[must_use]
    pub fn antipode(self, gp: GpIndex) -> LayerCoord {
        let g = gp.get();
        let lon = self.longitude;
        let opposite = 3 * g - lon;
        let shift = if lon < g {
            3 * lon
        } else if lon <= 2 * g {
            opposite + g
        } else {
            2 * opposite
        };
        LayerCoord::from_raw((self.index + shift) % gp.layer_size(opposite), opposite)
    }
}
