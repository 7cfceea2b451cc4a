//! Axial equatorial coordinates.

use std::fmt;

use crate::{CoordError, GpIndex, LayerCoord, SpiralIndex, TriangleCoord};

/// A tile on the skewed axial grid that unrolls the five gores side by side.
///
/// `latitude` runs around the sphere in `0..5g`, `longitude` from the south
/// pole (0) to the north pole (`3g`). In the caps only the cells inside a gore
/// are tiles; the poles sit at `(0, 0)` and `(g, 3g)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct EquatorCoord {
    latitude: i32,
    longitude: i32,
}

impl EquatorCoord {
    /// The south pole tile.
    pub const SOUTH_POLE: EquatorCoord = EquatorCoord {
        latitude: 0,
        longitude: 0,
    };

    /// Validate a grid cell, rejecting cells between gores or off the grid.
    pub fn new(gp: GpIndex, latitude: i32, longitude: i32) -> Result<Self, CoordError> {
        if !Self::is_tile(gp, latitude, longitude) {
            return Err(CoordError::NotATile {
                latitude,
                longitude,
            });
        }
        Ok(Self {
            latitude,
            longitude,
        })
    }

    pub(crate) const fn from_raw(latitude: i32, longitude: i32) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// The north pole tile.
    #[must_use]
    pub fn north_pole(gp: GpIndex) -> Self {
        let g = gp.get() as i32;
        Self::from_raw(g, 3 * g)
    }

    /// Whether `(latitude, longitude)` addresses a tile of `gp`.
    #[must_use]
    pub fn is_tile(gp: GpIndex, latitude: i32, longitude: i32) -> bool {
        let g = gp.get() as i32;
        if longitude == 0 {
            return latitude == 0;
        }
        if longitude == 3 * g {
            return latitude == g;
        }
        if !(0..3 * g).contains(&longitude) || !(0..5 * g).contains(&latitude) {
            return false;
        }
        if longitude < g {
            latitude % g < longitude
        } else if longitude <= 2 * g {
            true
        } else {
            latitude % g >= longitude - 2 * g
        }
    }

    /// Position around the sphere.
    #[inline]
    #[must_use]
    pub const fn latitude(self) -> i32 {
        self.latitude
    }

    /// Ring number counted from the south pole.
    #[inline]
    #[must_use]
    pub const fn longitude(self) -> i32 {
        self.longitude
    }

    /// Whether this is one of the two polar tiles.
    #[must_use]
    pub fn is_polar(self, gp: GpIndex) -> bool {
        self.longitude == 0 || self.longitude == 3 * gp.get() as i32
    }

    /// Ring coordinates of this tile.
    #[must_use]
    pub fn to_layer(self, gp: GpIndex) -> LayerCoord {
        let g = gp.get() as i32;
        let lon = self.longitude;
        if self.is_polar(gp) {
            return LayerCoord::from_raw(0, lon as u32);
        }
        let unskewed = self.latitude - if lon > 2 * g { lon - 2 * g } else { 0 };
        let stripe = unskewed / g;
        let in_stripe = unskewed % g;
        let index = stripe as u32 * gp.stripe_size(lon as u32) + in_stripe as u32;
        LayerCoord::from_raw(index, lon as u32)
    }

    /// Spiral index of this tile.
    #[must_use]
    pub fn to_spiral(self, gp: GpIndex) -> SpiralIndex {
        self.to_layer(gp).to_spiral(gp)
    }

    /// Canonical barycentric coordinates of this tile.
    #[must_use]
    pub fn to_triangle(self, gp: GpIndex) -> TriangleCoord {
        self.to_layer(gp).to_triangle(gp).canonical(gp)
    }
}

impl fmt::Display for EquatorCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.latitude, self.longitude)
    }
}

/// Round fractional axial coordinates to the nearest grid cell.
///
/// Works in cube coordinates `x = lat, y = lon - lat, z = lon`: all three are
/// rounded and the one with the largest rounding error is rebuilt from the
/// other two. The result is not validated against any resolution.
#[must_use]
pub fn round_axial(latitude: f64, longitude: f64) -> (i32, i32) {
    let y = longitude - latitude;
    let mut xi = latitude.round();
    let yi = y.round();
    let mut zi = longitude.round();
    let x_err = (xi - latitude).abs();
    let y_err = (yi - y).abs();
    let z_err = (zi - longitude).abs();
    if x_err > y_err && x_err > z_err {
        xi = zi - yi;
    } else if y_err <= z_err {
        zi = xi + yi;
    }
    // A y with the largest error is implied by x and z and never returned.
    (xi as i32, zi as i32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_poles() {
        let gp = GpIndex::new(3).unwrap();
        assert_eq!(SpiralIndex::SOUTH_POLE.to_equator(gp), EquatorCoord::SOUTH_POLE);
        assert_eq!(
            SpiralIndex::north_pole(gp).to_equator(gp),
            EquatorCoord::north_pole(gp)
        );
        assert!(EquatorCoord::new(gp, 1, 0).is_err());
        assert!(EquatorCoord::new(gp, 0, 9).is_err());
        assert!(EquatorCoord::new(gp, 3, 9).is_ok());
    }

    #[test]
    fn test_gaps_between_gores_are_rejected() {
        let gp = GpIndex::new(3).unwrap();
        // Ring 1 has one tile per gore, at latitudes 0, 3, 6, 9, 12.
        assert!(EquatorCoord::new(gp, 3, 1).is_ok());
        assert_eq!(
            EquatorCoord::new(gp, 4, 1),
            Err(CoordError::NotATile {
                latitude: 4,
                longitude: 1
            })
        );
        // Ring 8 keeps the last cell of each gore.
        assert!(EquatorCoord::new(gp, 2, 8).is_ok());
        assert!(EquatorCoord::new(gp, 1, 8).is_err());
        assert!(EquatorCoord::new(gp, 15, 4).is_err());
        assert!(EquatorCoord::new(gp, -1, 4).is_err());
    }

    #[test]
    fn test_valid_cells_match_tile_count() {
        for g in [1, 2, 3, 10] {
            let gp = GpIndex::new(g).unwrap();
            let g = g as i32;
            let mut count = 0;
            for lon in 0..=3 * g {
                for lat in 0..5 * g {
                    if EquatorCoord::is_tile(gp, lat, lon) {
                        count += 1;
                    }
                }
            }
            assert_eq!(count, gp.field_count(), "valid cell count at g={g}");
        }
    }

    #[test]
    fn test_equator_layer_roundtrip() {
        for g in [1, 2, 3, 10] {
            let gp = GpIndex::new(g).unwrap();
            for s in SpiralIndex::all(gp) {
                let eq = s.to_equator(gp);
                assert!(
                    EquatorCoord::is_tile(gp, eq.latitude(), eq.longitude()),
                    "{s} maps to non-tile {eq} at g={g}"
                );
                assert_eq!(eq.to_spiral(gp), s, "roundtrip failed for {s} at g={g}");
            }
        }
    }

    #[test]
    fn test_round_axial_centers() {
        assert_eq!(round_axial(2.0, 5.0), (2, 5));
        assert_eq!(round_axial(2.2, 4.9), (2, 5));
        assert_eq!(round_axial(-0.9, 1.1), (-1, 1));
    }

    #[test]
    fn test_round_axial_hexagon_boundary() {
        // Halfway along +X the nearest cell is ambiguous, but stays on the ring.
        let (_, lon) = round_axial(3.49, 4.0);
        assert_eq!(lon, 4);
        // Points close to a neighbour cell snap to it.
        assert_eq!(round_axial(3.8, 4.9), (4, 5));
    }
}
