//! Goldberg polyhedron geometry and render-ready buffers.
//!
//! Builds tile centers and tile-boundary vertices on a sphere, packs every
//! tile into a triangle fan with primitive restart, and unwraps the tiles into
//! a seamless 2D texture atlas. [`Polyhedron`] ties the phases together and
//! answers picking and routing queries; [`Planet`] pairs a surface with an
//! optional atmosphere shell.

mod atlas;
mod error;
mod geometry;
mod planet;
mod pole_class;
mod polyhedron;
mod projection;
mod topology;
mod vertex;

pub use atlas::{AtlasLayout, Corner};
pub use error::GeometryError;
pub use geometry::SphereGeometry;
pub use planet::{AtmosphereParams, Planet, PlanetParams};
pub use pole_class::PoleClass;
pub use polyhedron::{Polyhedron, PolyhedronParams, RayHit, default_edge_length_3d};
pub use projection::ProjectionMode;
pub use topology::{build_topology, vertex_count};
pub use vertex::{FLOATS_PER_VERTEX, PRIMITIVE_RESTART, PolyhedronMesh, PolyhedronVertex};
