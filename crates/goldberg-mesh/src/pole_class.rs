//! The twelve pentagon tiles and where their corner vertices come from.
//!
//! Pentagon corners get private vertex copies, so their sources are found by
//! offset arithmetic into the border-vertex walk rather than by the shared
//! ring cursor used for hexagons.

use goldberg_coords::GpIndex;

/// Position of a pentagon relative to the poles and the atlas seam.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PoleClass {
    /// The south pole, ring 0.
    South,
    /// The north pole, ring `3g`.
    North,
    /// Ring `g`, first stripe: the pentagon next to the atlas seam.
    SeamSouthern,
    /// Ring `2g`, first stripe: split by the atlas seam.
    SeamNorthern,
    /// Ring `g`, stripes 1 to 4.
    Southern,
    /// Ring `2g`, stripes 1 to 4.
    Northern,
}

/// Walk state a pentagon's corner sources are derived from.
#[derive(Clone, Copy, Debug)]
pub(crate) struct PoleContext {
    /// Tile count, also the index of the first border vertex.
    pub field_count: i64,
    /// Total number of border vertices.
    pub border_count: i64,
    /// Next border vertex of the ring walk.
    pub border_cursor: i64,
    /// Offset between this ring's and the next ring's shared vertices.
    pub edge_offset: i64,
    /// Border vertices in the whole ring.
    pub ring_border_count: i64,
    pub stripe: i64,
}

impl PoleClass {
    /// Class of the pentagon in ring `longitude` and stripe `stripe`, or
    /// `None` when that ring holds no pentagons.
    #[must_use]
    pub fn classify(gp: GpIndex, longitude: u32, stripe: u32) -> Option<Self> {
        let g = gp.get();
        match longitude {
            0 => Some(Self::South),
            lon if lon == 3 * g => Some(Self::North),
            lon if lon == g && stripe == 0 => Some(Self::SeamSouthern),
            lon if lon == g => Some(Self::Southern),
            lon if lon == 2 * g && stripe == 0 => Some(Self::SeamNorthern),
            lon if lon == 2 * g => Some(Self::Northern),
            _ => None,
        }
    }

    /// Whether the atlas cursor jumps back across the seam after this tile.
    #[must_use]
    pub fn shifts_atlas(self) -> bool {
        self == Self::SeamNorthern
    }

    /// Global vertex indices (centers first, then border vertices) of the
    /// five corners, in clockwise atlas order.
    pub(crate) fn corner_sources(self, ctx: &PoleContext) -> [i64; 5] {
        let b = ctx.border_cursor;
        let eo = ctx.edge_offset;
        match self {
            Self::South => [b + 4, b + 3, b + 2, b + 1, b],
            Self::North => {
                let first = ctx.field_count + ctx.border_count - 5;
                [first, first + 1, first + 2, first + 3, first + 4]
            }
            Self::SeamSouthern => [
                b,
                b + eo - 5,
                b + eo - 6,
                b + eo + ctx.ring_border_count - 7,
                b + eo - 7,
            ],
            Self::SeamNorthern => [
                b + eo - 1,
                b,
                b + eo,
                b + eo + ctx.ring_border_count - 1,
                b + eo - 2,
            ],
            Self::Southern => {
                let e = eo + ctx.stripe;
                [b, b + e - 5, b + e - 6, b + e - 7, b - 1]
            }
            Self::Northern => {
                let e = eo - ctx.stripe;
                [b, b + 1, b + e + 1, b + e, b - 1]
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify() {
        let gp = GpIndex::new(3).unwrap();
        assert_eq!(PoleClass::classify(gp, 0, 0), Some(PoleClass::South));
        assert_eq!(PoleClass::classify(gp, 9, 0), Some(PoleClass::North));
        assert_eq!(PoleClass::classify(gp, 3, 0), Some(PoleClass::SeamSouthern));
        assert_eq!(PoleClass::classify(gp, 3, 4), Some(PoleClass::Southern));
        assert_eq!(PoleClass::classify(gp, 6, 0), Some(PoleClass::SeamNorthern));
        assert_eq!(PoleClass::classify(gp, 6, 2), Some(PoleClass::Northern));
        assert_eq!(PoleClass::classify(gp, 4, 0), None);
        assert!(PoleClass::SeamNorthern.shifts_atlas());
        assert!(!PoleClass::SeamSouthern.shifts_atlas());
    }

    #[test]
    fn test_poles_use_first_and_last_five_border_vertices() {
        let ctx = PoleContext {
            field_count: 42,
            border_count: 80,
            border_cursor: 42,
            edge_offset: 0,
            ring_border_count: 0,
            stripe: 0,
        };
        assert_eq!(PoleClass::South.corner_sources(&ctx), [46, 45, 44, 43, 42]);
        assert_eq!(PoleClass::North.corner_sources(&ctx), [117, 118, 119, 120, 121]);
    }
}
