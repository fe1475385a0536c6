use super::error::PackError;
use std::ops::Range;

/// Index entries per triangle in the index region.
pub const INDICES_PER_TRIANGLE: usize = 3;

/// Float components per vertex in the normal and position regions.
pub const COMPONENTS_PER_VERTEX: usize = 4;

/// Placement of the three regions inside one contiguous backing allocation,
/// in the fixed order indices, normals, positions, back-to-back.
///
/// Counts are exact upper bounds computed from the shape descriptor before
/// any write happens; the store is never resized afterwards. Offsets are
/// expressed in 4-byte words so every region view starts on a `u32`/`f32`
/// boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BufferLayout {
    max_triangles: usize,
    max_vertices: usize,
}

impl BufferLayout {
    pub fn plan(max_triangles: usize, max_vertices: usize) -> Result<Self, PackError> {
        if max_triangles == 0 {
            return Err(PackError::Sizing { index: 0, capacity: max_triangles });
        }
        if max_vertices == 0 {
            return Err(PackError::Sizing { index: 0, capacity: max_vertices });
        }
        Ok(Self { max_triangles, max_vertices })
    }

    pub fn max_triangles(&self) -> usize {
        self.max_triangles
    }

    pub fn max_vertices(&self) -> usize {
        self.max_vertices
    }

    /// Size of the whole backing store in 4-byte words.
    pub fn total_words(&self) -> usize {
        self.index_words() + 2 * self.vertex_region_words()
    }

    fn index_words(&self) -> usize {
        self.max_triangles * INDICES_PER_TRIANGLE
    }

    fn vertex_region_words(&self) -> usize {
        self.max_vertices * COMPONENTS_PER_VERTEX
    }

    /// Index region, first in the store.
    pub fn index_range(&self) -> Range<usize> {
        0..self.index_words()
    }

    /// Normal region, directly after the index region.
    pub fn normal_range(&self) -> Range<usize> {
        let start = self.index_words();
        start..start + self.vertex_region_words()
    }

    /// Position region, back-to-back after the normal region.
    pub fn position_range(&self) -> Range<usize> {
        let start = self.index_words() + self.vertex_region_words();
        start..start + self.vertex_region_words()
    }

    pub fn index_byte_offset(&self) -> usize {
        0
    }

    pub fn normal_byte_offset(&self) -> usize {
        self.normal_range().start * size_of::<u32>()
    }

    pub fn position_byte_offset(&self) -> usize {
        self.position_range().start * size_of::<u32>()
    }
}
