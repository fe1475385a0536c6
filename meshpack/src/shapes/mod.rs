pub mod blade;
pub mod cube;
pub mod imported;
pub mod star;

pub use blade::*;
pub use cube::*;
pub use imported::*;
pub use star::*;

use crate::math::Vec3;
use crate::pack::{BufferLayout, IndexWriter, MeshArena, MeshBuffer, PackError, VertexWriter};

/// One generation pass for a shape defined by fixed direction and triangle
/// tables: plan, write directions, derive positions, write indices.
fn pack_table(
    center: Vec3,
    radius: f32,
    directions: &[Vec3],
    triangles: &[[u32; 3]],
) -> Result<MeshBuffer, PackError> {
    let layout = BufferLayout::plan(triangles.len(), directions.len())?;
    let mut arena = MeshArena::new(layout);

    let mut vertices = VertexWriter::new(&mut arena);
    for (slot, &direction) in directions.iter().enumerate() {
        vertices.set_direction(slot, direction)?;
    }
    vertices.derive_positions(center, radius);

    let mut writer = IndexWriter::new(&mut arena, directions.len() as u32);
    for (slot, &corners) in triangles.iter().enumerate() {
        writer.put_triangle(slot, corners)?;
    }

    Ok(MeshBuffer::new(arena))
}
