//! Writing a planet's buffers and atlas to the output directory.

use std::path::{Path, PathBuf};

use goldberg_coords::SpiralIndex;
use goldberg_debug::AtlasRenderer;
use goldberg_mesh::Polyhedron;
use tracing::info;

use crate::DemoError;

/// Files written for one polyhedron.
#[derive(Debug, Default, PartialEq)]
pub struct Exported {
    pub vertices: Option<PathBuf>,
    pub indices: Option<PathBuf>,
    pub atlas: Option<PathBuf>,
}

/// Write `<name>.vertices`, `<name>.indices` and `<name>.atlas.png` into `dir`.
///
/// Buffers are raw little-endian `f32` and `u16` arrays, ready to upload.
pub fn export_polyhedron(
    polyhedron: &Polyhedron,
    name: &str,
    dir: &Path,
    write_buffers: bool,
    atlas_path: Option<&[SpiralIndex]>,
) -> Result<Exported, DemoError> {
    std::fs::create_dir_all(dir).map_err(|source| DemoError::Write {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut exported = Exported::default();
    if write_buffers {
        let mesh = polyhedron.mesh();
        exported.vertices = Some(write(dir.join(format!("{name}.vertices")), mesh.vertex_bytes())?);
        exported.indices = Some(write(dir.join(format!("{name}.indices")), mesh.index_bytes())?);
        info!(
            "{name}: wrote {} vertices ({} bytes) and {} indices ({} bytes)",
            mesh.vertex_count(),
            mesh.vertex_buffer_bytes(),
            mesh.indices.len(),
            mesh.index_buffer_bytes()
        );
    }

    if let Some(path) = atlas_path {
        let image = AtlasRenderer::new().with_path(path).render(polyhedron);
        let file = dir.join(format!("{name}.atlas.png"));
        image.save_png(&file)?;
        info!("{name}: wrote {}x{} atlas to {}", image.width, image.height, file.display());
        exported.atlas = Some(file);
    }
    Ok(exported)
}

fn write(path: PathBuf, bytes: &[u8]) -> Result<PathBuf, DemoError> {
    std::fs::write(&path, bytes).map_err(|source| DemoError::Write {
        path: path.clone(),
        source,
    })?;
    Ok(path)
}
