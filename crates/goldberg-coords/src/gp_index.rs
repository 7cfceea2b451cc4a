//! The resolution parameter and the closed-form counts derived from it.

use std::fmt;

use crate::CoordError;

/// Number of tile rings between a pole and the nearest pentagon ring (`g`).
///
/// Every count in the polyhedron is a closed form of this value, so all
/// buffers can be sized up front.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GpIndex(u32);

impl GpIndex {
    /// Largest accepted resolution. Keeps every count inside `u32`.
    pub const MAX: u32 = 4096;

    /// Number of pentagonal tiles, independent of resolution.
    pub const PENTAGON_COUNT: u32 = 12;

    /// Validate and wrap a resolution.
    pub fn new(value: u32) -> Result<Self, CoordError> {
        if value == 0 || value > Self::MAX {
            return Err(CoordError::GpIndexOutOfRange {
                value,
                max: Self::MAX,
            });
        }
        Ok(Self(value))
    }

    /// The raw value of `g`.
    #[inline]
    #[must_use]
    pub const fn get(self) -> u32 {
        self.0
    }

    /// Total tile count, `10g² + 2`.
    #[inline]
    #[must_use]
    pub const fn field_count(self) -> u32 {
        10 * self.0 * self.0 + 2
    }

    /// Number of tile-boundary vertices, `20g²`.
    #[inline]
    #[must_use]
    pub const fn border_vertex_count(self) -> u32 {
        20 * self.0 * self.0
    }

    /// Longitude of the north pole ring, `3g`.
    #[inline]
    #[must_use]
    pub const fn max_longitude(self) -> u32 {
        3 * self.0
    }

    /// Tiles per stripe (one fifth of a ring) at the given longitude.
    ///
    /// The pole rings hold a single tile and are reported as `1`.
    #[must_use]
    pub const fn stripe_size(self, longitude: u32) -> u32 {
        let g = self.0;
        if longitude == 0 || longitude >= 3 * g {
            1
        } else if longitude < g {
            longitude
        } else if longitude <= 2 * g {
            g
        } else {
            3 * g - longitude
        }
    }

    /// Tiles in the ring at the given longitude.
    #[must_use]
    pub const fn layer_size(self, longitude: u32) -> u32 {
        if longitude == 0 || longitude >= 3 * self.0 {
            1
        } else {
            5 * self.stripe_size(longitude)
        }
    }

    /// Border vertices emitted per stripe while walking the strip between
    /// ring `longitude` and ring `longitude + 1`.
    #[must_use]
    pub const fn border_vertices_per_edge(self, longitude: u32) -> u32 {
        let g = self.0;
        if longitude < g {
            2 * longitude + 1
        } else if longitude < 2 * g {
            2 * g
        } else {
            2 * (3 * g - longitude) - 1
        }
    }
}

impl TryFrom<u32> for GpIndex {
    type Error = CoordError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl fmt::Display for GpIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "gp{}", self.0)
    }
}
