use crate::math::Vec3;
use crate::pack::{BufferLayout, IndexWriter, MeshArena, MeshBuffer, PackError, VertexWriter};
use log::{debug, trace};

/// One vertex position record from the interchange file.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VertexRecord {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

/// One vertex normal record from the interchange file.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NormalRecord {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

/// One face record: an ordered list of 1-based vertex indices. Only quads
/// are accepted by the generator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FaceRecord {
    pub vertices: Vec<u32>,
}

/// Generator for quad-faced meshes handed over by an external interchange
/// parser as plain vertex, normal and face records.
#[derive(Debug, Clone)]
pub struct ImportedMesh {
    pub center: Vec3,
    pub radius: f32,
    pub vertices: Vec<VertexRecord>,
    /// Carried for interchange completeness, never consulted: directions are
    /// always recomputed from the vertex records.
    pub normals: Vec<NormalRecord>,
    pub faces: Vec<FaceRecord>,
}

impl ImportedMesh {
    pub fn new(
        center: Vec3,
        radius: f32,
        vertices: Vec<VertexRecord>,
        normals: Vec<NormalRecord>,
        faces: Vec<FaceRecord>,
    ) -> Self {
        Self { center, radius, vertices, normals, faces }
    }

    pub fn generate(&self) -> Result<MeshBuffer, PackError> {
        trace!(
            "packing imported mesh: {} vertices, {} normals, {} faces",
            self.vertices.len(),
            self.normals.len(),
            self.faces.len()
        );

        // every face is assumed to be a quad and splits into two triangles
        let layout = BufferLayout::plan(self.faces.len() * 2, self.vertices.len())?;
        let mut arena = MeshArena::new(layout);

        let mut directions = VertexWriter::new(&mut arena);
        for (slot, record) in self.vertices.iter().enumerate() {
            directions.set_direction(slot, Vec3::new(record.x, record.y, record.z))?;
        }
        directions.derive_positions(self.center, self.radius);

        let vertex_count = self.vertices.len() as u32;
        let mut triangles = IndexWriter::new(&mut arena, vertex_count);
        for (face, record) in self.faces.iter().enumerate() {
            triangles.put_quad(face, quad_corners(face, record, vertex_count)?)?;
        }

        debug!("created imported mesh with {} vertices", self.vertices.len());
        Ok(MeshBuffer::new(arena))
    }
}

/// Convert one face record's 1-based indices into a 0-based quad.
fn quad_corners(face: usize, record: &FaceRecord, vertex_count: u32) -> Result<[u32; 4], PackError> {
    let arity = record.vertices.len();
    if arity != 4 {
        return Err(PackError::UnsupportedTopology { face, arity });
    }
    let mut corners = [0u32; 4];
    for (corner, &index) in corners.iter_mut().zip(&record.vertices) {
        if index == 0 || index > vertex_count {
            return Err(PackError::IndexOutOfRange { index, limit: vertex_count });
        }
        *corner = index - 1;
    }
    Ok(corners)
}
