use super::arena::MeshArena;

/// A packed triangle mesh ready for device upload.
///
/// Immutable after generation; a reload event produces a fresh `MeshBuffer`
/// over a fresh backing store rather than mutating this one, so a consumer
/// holding the previous buffer can keep reading it. The uploader copies each
/// region into device memory and retains no reference.
///
/// The `normals` region carries the un-scaled shape-local direction of each
/// vertex (w = 0). It doubles as the lighting-normal attribute downstream,
/// which is an approximation: for shapes whose corners do not point away
/// from the center radially it is not the true surface normal.
pub struct MeshBuffer {
    arena: MeshArena,
    triangle_count: usize,
    vertex_count: usize,
}

impl MeshBuffer {
    /// Seal a fully written arena. Counts come from the layout because the
    /// planner only ever receives exact bounds.
    pub(crate) fn new(arena: MeshArena) -> Self {
        let triangle_count = arena.layout().max_triangles();
        let vertex_count = arena.layout().max_vertices();
        Self { arena, triangle_count, vertex_count }
    }

    pub fn triangle_count(&self) -> usize {
        self.triangle_count
    }

    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    /// 0-based vertex indices, three per triangle.
    pub fn indices(&self) -> &[u32] {
        self.arena.indices()
    }

    /// Local directions, four components (x, y, z, 0) per vertex.
    pub fn normals(&self) -> &[f32] {
        self.arena.normals()
    }

    /// World positions, four components (x, y, z, 1) per vertex.
    pub fn positions(&self) -> &[f32] {
        self.arena.positions()
    }

    /// Index region as element-buffer bytes.
    pub fn index_bytes(&self) -> &[u8] {
        self.arena.index_bytes()
    }

    /// Normal region as attribute-buffer bytes.
    pub fn normal_bytes(&self) -> &[u8] {
        self.arena.normal_bytes()
    }

    /// Position region as attribute-buffer bytes.
    pub fn position_bytes(&self) -> &[u8] {
        self.arena.position_bytes()
    }
}
