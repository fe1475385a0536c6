use super::pack_table;
use crate::math::Vec3;
use crate::pack::{MeshBuffer, PackError};
use log::debug;

const S: f32 = 0.75;

/// Two quads crossed against each other, rising from y = S to y = 3S.
const DIRECTIONS: [Vec3; 8] = [
    Vec3::new(-S, S, -S),
    Vec3::new(S, S, S),
    Vec3::new(-S, S * 3.0, -S),
    Vec3::new(S, S * 3.0, S),
    Vec3::new(S, S, -S),
    Vec3::new(-S, S, S),
    Vec3::new(S, S * 3.0, -S),
    Vec3::new(-S, S * 3.0, S),
];

const TRIANGLES: [[u32; 3]; 4] = [
    [0, 1, 2],
    [1, 2, 3],
    [4, 5, 6],
    [5, 6, 7],
];

/// Crossed-quad "grass blade" strip.
#[derive(Debug, Clone, Copy)]
pub struct Blade {
    pub center: Vec3,
    pub radius: f32,
}

impl Blade {
    pub fn new(center: Vec3, radius: f32) -> Self {
        Self { center, radius }
    }

    pub fn generate(&self) -> Result<MeshBuffer, PackError> {
        let mesh = pack_table(self.center, self.radius, &DIRECTIONS, &TRIANGLES)?;
        debug!("created blade with {} vertices", mesh.vertex_count());
        Ok(mesh)
    }
}
