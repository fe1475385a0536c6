use super::pack_table;
use crate::math::Vec3;
use crate::pack::{MeshBuffer, PackError};
use log::debug;

const S: f32 = 0.75;

const DIRECTIONS: [Vec3; 8] = [
    Vec3::new(S, S, S),
    Vec3::new(S, S, -S),
    Vec3::new(S, -S, S),
    Vec3::new(-S, S, S),
    Vec3::new(-S, -S, S),
    Vec3::new(-S, S, -S),
    Vec3::new(S, -S, -S),
    Vec3::new(-S, -S, -S),
];

// 6 faces of 2 triangles each, split along fixed diagonals
const TRIANGLES: [[u32; 3]; 12] = [
    [0, 1, 2],
    [1, 2, 6],
    [1, 6, 7],
    [1, 5, 7],
    [5, 7, 4],
    [5, 4, 3],
    [3, 4, 0],
    [0, 4, 2],
    [1, 0, 5],
    [3, 5, 0],
    [4, 7, 2],
    [2, 6, 7],
];

/// Axis-aligned cube: a fully static table of 8 corner directions at ±S per
/// axis, independent of the descriptor.
#[derive(Debug, Clone, Copy)]
pub struct Cube {
    pub center: Vec3,
    pub radius: f32,
}

impl Cube {
    pub fn new(center: Vec3, radius: f32) -> Self {
        Self { center, radius }
    }

    pub fn generate(&self) -> Result<MeshBuffer, PackError> {
        let mesh = pack_table(self.center, self.radius, &DIRECTIONS, &TRIANGLES)?;
        debug!("created cube with {} vertices", mesh.vertex_count());
        Ok(mesh)
    }
}
