//! The six step directions on the axial grid.

/// A step direction between neighbouring tiles.
///
/// Variants are listed counter-clockwise (seen from outside the sphere), so
/// rotating by one step is an index shift.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum HexDirection {
    /// Latitude +1.
    PosX = 0,
    /// Latitude +1, longitude +1.
    NegZ = 1,
    /// Longitude +1.
    PosY = 2,
    /// Latitude −1.
    NegX = 3,
    /// Latitude −1, longitude −1.
    PosZ = 4,
    /// Longitude −1.
    NegY = 5,
}

impl HexDirection {
    /// All six directions in counter-clockwise order.
    pub const ALL: [HexDirection; 6] = [
        HexDirection::PosX,
        HexDirection::NegZ,
        HexDirection::PosY,
        HexDirection::NegX,
        HexDirection::PosZ,
        HexDirection::NegY,
    ];

    /// Axial `(latitude, longitude)` delta of one step.
    #[must_use]
    pub const fn delta(self) -> (i32, i32) {
        match self {
            HexDirection::PosX => (1, 0),
            HexDirection::NegZ => (1, 1),
            HexDirection::PosY => (0, 1),
            HexDirection::NegX => (-1, 0),
            HexDirection::PosZ => (-1, -1),
            HexDirection::NegY => (0, -1),
        }
    }

    /// The direction pointing back.
    #[must_use]
    pub fn opposite(self) -> HexDirection {
        self.rotate(3)
    }

    /// Rotate by `steps` sixths of a turn; positive is counter-clockwise.
    #[must_use]
    pub fn rotate(self, steps: i32) -> HexDirection {
        Self::ALL[(self as i32 + steps).rem_euclid(6) as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opposite_deltas_cancel() {
        for dir in HexDirection::ALL {
            let (a, b) = dir.delta();
            let (c, d) = dir.opposite().delta();
            assert_eq!((a + c, b + d), (0, 0), "{dir:?} and its opposite do not cancel");
            assert_eq!(dir.opposite().opposite(), dir);
        }
    }

    #[test]
    fn test_rotation_wraps() {
        assert_eq!(HexDirection::PosX.rotate(-1), HexDirection::NegY);
        assert_eq!(HexDirection::NegY.rotate(1), HexDirection::PosX);
        assert_eq!(HexDirection::PosY.rotate(12), HexDirection::PosY);
        for dir in HexDirection::ALL {
            assert_eq!(dir.rotate(2).rotate(-2), dir);
        }
    }

    #[test]
    fn test_neighbouring_deltas_differ_by_one_step() {
        // Consecutive directions are 60° apart: their deltas differ by another unit step.
        let units: Vec<(i32, i32)> = HexDirection::ALL.iter().map(|d| d.delta()).collect();
        for dir in HexDirection::ALL {
            let (a, b) = dir.delta();
            let (c, d) = dir.rotate(1).delta();
            assert!(units.contains(&(c - a, d - b)), "{dir:?} -> next is not adjacent");
        }
    }
}
