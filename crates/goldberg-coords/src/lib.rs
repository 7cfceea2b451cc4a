//! Tile addressing for icosahedral Class-I Goldberg polyhedra.
//!
//! A polyhedron of resolution `g` has `10g² + 2` tiles: twelve pentagons on the
//! icosahedron vertices and hexagons everywhere else. Tiles can be addressed in
//! four interchangeable ways:
//!
//! - [`SpiralIndex`]: the canonical address, peeling from the south pole to the north pole.
//! - [`LayerCoord`]: ring (longitude) plus position inside the ring.
//! - [`EquatorCoord`]: skewed axial grid over five gores, used for navigation and picking.
//! - [`TriangleCoord`]: icosahedron face plus integer barycentric weights.
//!
//! On top of the addressing this crate provides neighbour navigation, greedy
//! shortest paths and direction-to-tile lookup.

mod direction;
mod equator;
mod error;
mod gp_index;
mod icosahedron;
mod interpolation;
mod layer;
mod locate;
mod navigation;
mod path;
mod spiral;
mod triangle;

pub use direction::HexDirection;
pub use equator::{EquatorCoord, round_axial};
pub use error::CoordError;
pub use gp_index::GpIndex;
pub use icosahedron::{
    FACE_COUNT, NORTH_POLE_VERTEX, SOUTH_POLE_VERTEX, direction_to_face, face_center, face_poles,
    icosahedron_vertices,
};
pub use interpolation::{Interpolation, slerp};
pub use layer::LayerCoord;
pub use locate::locate;
pub use navigation::NavigationStep;
pub use path::shortest_path;
pub use spiral::SpiralIndex;
pub use triangle::TriangleCoord;
