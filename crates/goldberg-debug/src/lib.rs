//! Debug rendering of a polyhedron's tile atlas to PNG.
//!
//! [`AtlasRenderer`] rasterizes every tile fan at its texture coordinates, so
//! the output doubles as a check that the unwrap is seamless.

mod error;
mod image;
mod render;

pub use error::DebugRenderError;
pub use image::{DebugImage, Rgba};
pub use render::AtlasRenderer;
