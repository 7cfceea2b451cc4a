//! How tile centers are projected onto the sphere.

use std::fmt;
use std::str::FromStr;

use goldberg_coords::Interpolation;

use crate::GeometryError;

/// Projection of tile centers from the icosahedron onto the sphere.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ProjectionMode {
    /// Planar interpolation, positions stay on the flat icosahedron faces.
    Curvature,
    /// Planar interpolation, then pushed out onto the sphere.
    Size,
    /// Spherical interpolation; the most uniform tile shapes.
    #[default]
    Shape,
}

impl ProjectionMode {
    /// All modes in declaration order.
    pub const ALL: [ProjectionMode; 3] = [
        ProjectionMode::Curvature,
        ProjectionMode::Size,
        ProjectionMode::Shape,
    ];

    /// Barycentric interpolation used to place tile centers.
    #[inline]
    #[must_use]
    pub fn interpolation(self) -> Interpolation {
        match self {
            ProjectionMode::Shape => Interpolation::Spherical,
            ProjectionMode::Curvature | ProjectionMode::Size => Interpolation::Planar,
        }
    }

    /// Whether positions keep the flat, off-sphere placement.
    #[inline]
    #[must_use]
    pub fn keeps_faces_flat(self) -> bool {
        self == ProjectionMode::Curvature
    }

    /// Lowercase name as used in configuration files.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            ProjectionMode::Curvature => "curvature",
            ProjectionMode::Size => "size",
            ProjectionMode::Shape => "shape",
        }
    }
}

impl FromStr for ProjectionMode {
    type Err = GeometryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ProjectionMode::ALL
            .into_iter()
            .find(|mode| mode.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| GeometryError::UnknownProjection(s.to_string()))
    }
}

impl fmt::Display for ProjectionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
