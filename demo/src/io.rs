use meshpack::shapes::{FaceRecord, NormalRecord, VertexRecord};
use obj::raw::object::Polygon;
use obj::raw::{RawObj, parse_obj};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// The interchange arrays an OBJ file boils down to for the packer.
pub struct ObjRecords {
    pub vertices: Vec<VertexRecord>,
    pub normals: Vec<NormalRecord>,
    pub faces: Vec<FaceRecord>,
}

/// Load an OBJ file into packer input records.
///
/// Face records keep the file format's 1-based index convention; arity is
/// preserved as-is, so non-quad faces surface later as generation errors
/// rather than being silently triangulated here.
pub fn load_obj<P: AsRef<Path>>(path: P) -> Result<ObjRecords, Box<dyn std::error::Error>> {
    let file = File::open(path)?;
    let raw = parse_obj(BufReader::new(file))?;
    Ok(to_records(&raw))
}

fn to_records(raw: &RawObj) -> ObjRecords {
    let vertices = raw
        .positions
        .iter()
        .map(|&(x, y, z, _w)| VertexRecord { x, y, z })
        .collect();

    let normals = raw.normals.iter().map(|&(x, y, z)| NormalRecord { x, y, z }).collect();

    // raw polygons index 0-based; the packer speaks the file's 1-based terms
    let faces = raw
        .polygons
        .iter()
        .map(|polygon| {
            let vertices: Vec<u32> = match polygon {
                Polygon::P(corners) => corners.iter().map(|&v| v as u32 + 1).collect(),
                Polygon::PT(corners) => corners.iter().map(|&(v, _)| v as u32 + 1).collect(),
                Polygon::PN(corners) => corners.iter().map(|&(v, _)| v as u32 + 1).collect(),
                Polygon::PTN(corners) => corners.iter().map(|&(v, _, _)| v as u32 + 1).collect(),
            };
            FaceRecord { vertices }
        })
        .collect();

    ObjRecords { vertices, normals, faces }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quad_polygons_become_one_based_face_records() {
        let source = b"v 0 0 0\nv 1 0 0\nv 1 1 0\nv 0 1 0\nvn 0 0 1\nf 1 2 3 4\n";
        let raw = parse_obj(&source[..]).unwrap();
        let records = to_records(&raw);

        assert_eq!(records.vertices.len(), 4);
        assert_eq!(records.normals.len(), 1);
        assert_eq!(records.faces, vec![FaceRecord { vertices: vec![1, 2, 3, 4] }]);
        assert_eq!(records.vertices[2], VertexRecord { x: 1.0, y: 1.0, z: 0.0 });
    }
}
