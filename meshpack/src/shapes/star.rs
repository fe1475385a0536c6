use super::pack_table;
use crate::math::Vec3;
use crate::pack::{MeshBuffer, PackError};
use log::debug;

const OUTER: f32 = 1.0;
const INNER: f32 = 0.4;
const DEPTH: f32 = 0.4;

/// Ring slots 0..8 alternate outer diamond points and inner notch points;
/// 8 and 9 are the front and back apex.
const DIRECTIONS: [Vec3; 10] = [
    Vec3::new(OUTER, 0.0, 0.0),
    Vec3::new(INNER, INNER, 0.0),
    Vec3::new(0.0, OUTER, 0.0),
    Vec3::new(-INNER, INNER, 0.0),
    Vec3::new(-OUTER, 0.0, 0.0),
    Vec3::new(-INNER, -INNER, 0.0),
    Vec3::new(0.0, -OUTER, 0.0),
    Vec3::new(INNER, -INNER, 0.0),
    Vec3::new(0.0, 0.0, DEPTH),
    Vec3::new(0.0, 0.0, -DEPTH),
];

// a bipyramid over the 8-gon ring: every triangle fans off exactly one apex
const TRIANGLES: [[u32; 3]; 16] = [
    [0, 1, 8],
    [1, 2, 8],
    [2, 3, 8],
    [3, 4, 8],
    [4, 5, 8],
    [5, 6, 8],
    [6, 7, 8],
    [7, 0, 8],
    [1, 0, 9],
    [2, 1, 9],
    [3, 2, 9],
    [4, 3, 9],
    [5, 4, 9],
    [6, 5, 9],
    [7, 6, 9],
    [0, 7, 9],
];

/// Four-pointed 3D star: an 8-vertex ring of alternating outer and inner
/// points in one plane, closed by two apex vertices along the third axis.
#[derive(Debug, Clone, Copy)]
pub struct Star {
    pub center: Vec3,
    pub radius: f32,
}

impl Star {
    pub fn new(center: Vec3, radius: f32) -> Self {
        Self { center, radius }
    }

    pub fn generate(&self) -> Result<MeshBuffer, PackError> {
        let mesh = pack_table(self.center, self.radius, &DIRECTIONS, &TRIANGLES)?;
        debug!("created star with {} vertices", mesh.vertex_count());
        Ok(mesh)
    }
}
