//! Vertex format and render-ready buffers.

/// Index value that ends a triangle fan.
pub const PRIMITIVE_RESTART: u16 = u16::MAX;

/// Floats per vertex in the interleaved buffer: position, normal, texcoord.
pub const FLOATS_PER_VERTEX: usize = 8;

/// An interleaved polyhedron vertex, 32 bytes.
///
/// Layout: `[px, py, pz, nx, ny, nz, u, v]`, all `f32`, tightly packed.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct PolyhedronVertex {
    /// Position in polyhedron space.
    pub position: [f32; 3],
    /// Unit normal.
    pub normal: [f32; 3],
    /// Atlas texture coordinate in `[0, 1]²`.
    pub texcoord: [f32; 2],
}

static_assertions::assert_eq_size!(PolyhedronVertex, [f32; FLOATS_PER_VERTEX]);

/// Vertex and index buffers for drawing every tile as one triangle fan.
///
/// Fans are laid out back to back, `elements_per_field` indices per tile in
/// spiral order, each terminated by [`PRIMITIVE_RESTART`].
#[derive(Clone, Debug, PartialEq)]
pub struct PolyhedronMesh {
    /// Interleaved vertex buffer.
    pub vertices: Vec<PolyhedronVertex>,
    /// Triangle-fan index buffer with primitive restart.
    pub indices: Vec<u16>,
    /// Number of tiles (fans).
    pub field_count: u32,
    /// Indices per fan, 7 without center vertices and 9 with.
    pub elements_per_field: u32,
}

impl PolyhedronMesh {
    /// Number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of indices to pass to a single fan draw call.
    pub fn draw_count(&self) -> usize {
        self.field_count as usize * self.elements_per_field as usize
    }

    /// The fan of one tile, including its restart terminator.
    pub fn fan(&self, field: u32) -> &[u16] {
        let start = field as usize * self.elements_per_field as usize;
        &self.indices[start..start + self.elements_per_field as usize]
    }

    /// The vertex buffer as a flat `f32` slice, stride [`FLOATS_PER_VERTEX`].
    pub fn vertex_floats(&self) -> &[f32] {
        bytemuck::cast_slice(&self.vertices)
    }

    /// Returns the vertex data as a byte slice for GPU upload (zero-copy).
    pub fn vertex_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    /// Returns the index data as a byte slice for GPU upload (zero-copy).
    pub fn index_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.indices)
    }

    /// Returns the size of the vertex buffer in bytes.
    pub fn vertex_buffer_bytes(&self) -> usize {
        self.vertices.len() * std::mem::size_of::<PolyhedronVertex>()
    }

    /// Returns the size of the index buffer in bytes.
    pub fn index_buffer_bytes(&self) -> usize {
        self.indices.len() * std::mem::size_of::<u16>()
    }

    /// Expand the fans into a plain triangle list for renderers without fan
    /// topology or primitive restart. Degenerate triangles are dropped.
    pub fn to_triangle_list(&self) -> Vec<u32> {
        let mut out = Vec::with_capacity(self.field_count as usize * 6 * 3);
        for fan in self.indices.split(|&i| i == PRIMITIVE_RESTART) {
            let Some((&hub, rest)) = fan.split_first() else {
                continue;
            };
            for pair in rest.windows(2) {
                let (a, b) = (pair[0], pair[1]);
                if a == hub || b == hub || a == b {
                    continue;
                }
                out.extend_from_slice(&[u32::from(hub), u32::from(a), u32::from(b)]);
            }
        }
        out
    }
}
