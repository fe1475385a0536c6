use super::arena::MeshArena;
use super::error::PackError;
use crate::math::Vec3;

/// Fills the index region by slot against the fixed triangle budget planned
/// into the arena's layout.
pub struct IndexWriter<'a> {
    arena: &'a mut MeshArena,
    vertex_limit: u32,
}

impl<'a> IndexWriter<'a> {
    /// `vertex_limit` is the exclusive bound every written index must obey.
    pub fn new(arena: &'a mut MeshArena, vertex_limit: u32) -> Self {
        Self { arena, vertex_limit }
    }

    /// Write one triangle of 0-based vertex indices at `slot`.
    pub fn put_triangle(&mut self, slot: usize, corners: [u32; 3]) -> Result<(), PackError> {
        let budget = self.arena.layout().max_triangles();
        if slot >= budget {
            return Err(PackError::Sizing { index: slot, capacity: budget });
        }
        for &corner in &corners {
            if corner >= self.vertex_limit {
                return Err(PackError::IndexOutOfRange { index: corner, limit: self.vertex_limit });
            }
        }
        self.arena.triangle_mut(slot).copy_from_slice(&corners);
        Ok(())
    }

    /// Split the quad at face position `quad` into two triangles.
    ///
    /// The budget holds two triangles per quad and is filled by position:
    /// first halves (a, b, c) occupy the front block of the region, second
    /// halves (a, c, d) the back block, so a triangle and its partner are
    /// never adjacent.
    pub fn put_quad(&mut self, quad: usize, corners: [u32; 4]) -> Result<(), PackError> {
        let half = self.arena.layout().max_triangles() / 2;
        let [a, b, c, d] = corners;
        self.put_triangle(quad, [a, b, c])?;
        self.put_triangle(quad + half, [a, c, d])
    }
}

/// Fills the normal region with shape-local directions and derives the
/// position region from them.
pub struct VertexWriter<'a> {
    arena: &'a mut MeshArena,
}

impl<'a> VertexWriter<'a> {
    pub fn new(arena: &'a mut MeshArena) -> Self {
        Self { arena }
    }

    /// Write the local direction for `slot` as (x, y, z, 0).
    pub fn set_direction(&mut self, slot: usize, direction: Vec3) -> Result<(), PackError> {
        let budget = self.arena.layout().max_vertices();
        if slot >= budget {
            return Err(PackError::Sizing { index: slot, capacity: budget });
        }
        let v = direction.as_vector4();
        self.arena.normal_mut(slot).copy_from_slice(&[v.x, v.y, v.z, v.w]);
        Ok(())
    }

    /// Derive one position per direction slot: center + radius * direction.
    ///
    /// The direction's zero w keeps every position homogeneous at w = 1. A
    /// radius of 0 legally collapses the whole mesh onto `center`.
    pub fn derive_positions(&mut self, center: Vec3, radius: f32) {
        let center = center.as_point4();
        for slot in 0..self.arena.layout().max_vertices() {
            let position = center + self.arena.direction_at(slot) * radius;
            self.arena
                .position_mut(slot)
                .copy_from_slice(&[position.x, position.y, position.z, position.w]);
        }
    }
}
