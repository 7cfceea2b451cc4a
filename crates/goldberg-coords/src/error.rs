//! Coordinate-domain errors.

use thiserror::Error;

/// Errors raised when a value does not address a tile of the polyhedron.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CoordError {
    /// The resolution parameter is outside `1..=GpIndex::MAX`.
    #[error("gp index {value} out of range (1..={max})")]
    GpIndexOutOfRange { value: u32, max: u32 },

    /// Spiral index beyond the last tile.
    #[error("spiral index {index} out of range (field count {field_count})")]
    SpiralOutOfRange { index: u32, field_count: u32 },

    /// Longitude beyond the north pole ring.
    #[error("longitude {longitude} out of range (max {max})")]
    LongitudeOutOfRange { longitude: u32, max: u32 },

    /// Index inside a ring beyond the ring size.
    #[error("index {index} out of range for ring {longitude} of size {ring_size}")]
    RingIndexOutOfRange {
        index: u32,
        longitude: u32,
        ring_size: u32,
    },

    /// Axial grid cell that falls between gores or outside the grid.
    #[error("equatorial cell ({latitude}, {longitude}) is not a tile")]
    NotATile { latitude: i32, longitude: i32 },

    /// Barycentric weights that do not sum to the gp index.
    #[error("barycentric weights {weights:?} do not sum to {gp}")]
    BarycentricSum { weights: [u32; 3], gp: u32 },

    /// Icosahedron face index outside `0..20`.
    #[error("triangle index {0} out of range (max 19)")]
    TriangleOutOfRange(u8),

    /// Zero-length or non-finite direction vector.
    #[error("direction vector is degenerate")]
    DegenerateDirection,

    /// The greedy tracer found no neighbour closer to the target.
    #[error("no path from tile {from} to tile {to} (gave up after {steps} steps)")]
    PathNotFound { from: u32, to: u32, steps: u32 },
}
