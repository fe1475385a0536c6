use super::layout::{BufferLayout, COMPONENTS_PER_VERTEX, INDICES_PER_TRIANGLE};
use crate::math::Vec4;

/// One contiguous allocation hosting the index, normal and position regions.
///
/// The store is `u32`-granular, so reinterpreting the two vertex regions as
/// `f32` components can never fail on size or alignment. All three public
/// views borrow the same allocation; nothing is copied between generation
/// and upload.
pub struct MeshArena {
    layout: BufferLayout,
    store: Vec<u32>,
}

impl MeshArena {
    pub fn new(layout: BufferLayout) -> Self {
        Self { layout, store: vec![0; layout.total_words()] }
    }

    pub fn layout(&self) -> &BufferLayout {
        &self.layout
    }

    /// Triangle index triples, flat.
    pub fn indices(&self) -> &[u32] {
        &self.store[self.layout.index_range()]
    }

    /// Per-vertex local directions as flat (x, y, z, 0) components.
    pub fn normals(&self) -> &[f32] {
        bytemuck::cast_slice(&self.store[self.layout.normal_range()])
    }

    /// Per-vertex world positions as flat (x, y, z, 1) components.
    pub fn positions(&self) -> &[f32] {
        bytemuck::cast_slice(&self.store[self.layout.position_range()])
    }

    pub fn index_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(self.indices())
    }

    pub fn normal_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(self.normals())
    }

    pub fn position_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(self.positions())
    }

    pub(crate) fn triangle_mut(&mut self, slot: usize) -> &mut [u32] {
        let start = self.layout.index_range().start + slot * INDICES_PER_TRIANGLE;
        &mut self.store[start..start + INDICES_PER_TRIANGLE]
    }

    pub(crate) fn normal_mut(&mut self, slot: usize) -> &mut [f32] {
        let start = self.layout.normal_range().start + slot * COMPONENTS_PER_VERTEX;
        bytemuck::cast_slice_mut(&mut self.store[start..start + COMPONENTS_PER_VERTEX])
    }

    pub(crate) fn position_mut(&mut self, slot: usize) -> &mut [f32] {
        let start = self.layout.position_range().start + slot * COMPONENTS_PER_VERTEX;
        bytemuck::cast_slice_mut(&mut self.store[start..start + COMPONENTS_PER_VERTEX])
    }

    /// Copy of the direction stored at `slot`.
    pub(crate) fn direction_at(&self, slot: usize) -> Vec4 {
        let components = &self.normals()[slot * COMPONENTS_PER_VERTEX..];
        Vec4::new(components[0], components[1], components[2], components[3])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_arena_is_zeroed_with_planned_lengths() {
        let layout = BufferLayout::plan(4, 6).unwrap();
        let arena = MeshArena::new(layout);

        assert_eq!(arena.indices().len(), 12);
        assert_eq!(arena.normals().len(), 24);
        assert_eq!(arena.positions().len(), 24);
        assert!(arena.indices().iter().all(|&i| i == 0));
        assert!(arena.normals().iter().all(|&c| c == 0.0));
    }

    #[test]
    fn test_byte_views_cover_each_region_exactly() {
        let layout = BufferLayout::plan(4, 6).unwrap();
        let arena = MeshArena::new(layout);

        assert_eq!(arena.index_bytes().len(), 48);
        assert_eq!(arena.normal_bytes().len(), 96);
        assert_eq!(arena.position_bytes().len(), 96);
    }

    #[test]
    fn test_slot_writes_land_in_their_region() {
        let layout = BufferLayout::plan(2, 2).unwrap();
        let mut arena = MeshArena::new(layout);

        arena.triangle_mut(1).copy_from_slice(&[9, 8, 7]);
        arena.normal_mut(0).copy_from_slice(&[1.0, 2.0, 3.0, 0.0]);
        arena.position_mut(1).copy_from_slice(&[4.0, 5.0, 6.0, 1.0]);

        assert_eq!(arena.indices(), &[0, 0, 0, 9, 8, 7]);
        assert_eq!(&arena.normals()[..4], &[1.0, 2.0, 3.0, 0.0]);
        assert_eq!(&arena.positions()[4..], &[4.0, 5.0, 6.0, 1.0]);
        assert_eq!(arena.direction_at(0), Vec4::new(1.0, 2.0, 3.0, 0.0));
    }
}
