//! Errors raised while building a polyhedron.

use goldberg_coords::CoordError;
use thiserror::Error;

/// Errors raised by polyhedron construction and queries.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeometryError {
    /// Projection name other than `curvature`, `size` or `shape`.
    #[error("unknown projection mode \"{0}\" (expected curvature, size or shape)")]
    UnknownProjection(String),

    /// Length or scale that is zero, negative or not finite.
    #[error("invalid {name} {value}: must be positive and finite")]
    InvalidEdgeLength { name: &'static str, value: f64 },

    /// The vertex buffer would not be addressable with 16-bit indices.
    #[error("{vertices} vertices exceed the 16-bit index range (max {max})")]
    TooManyVertices { vertices: u64, max: u64 },

    /// Coordinate-domain error from tile addressing.
    #[error(transparent)]
    Coord(#[from] CoordError),
}
