//! STL writers.
//!
//! Both writers recompute facet normals from the triangle winding, emit
//! the full byte stream in memory first, and only then touch the
//! filesystem, so a failed export never leaves a partial file behind.

use std::io::Write as _;
use std::path::Path;

use mesh_kernel::TriMesh;
use nalgebra::Vector3;
use tracing::info;

use crate::ExportError;

const SOLID_NAME: &str = "pinplate";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StlFormat {
    #[default]
    Binary,
    Ascii,
}

fn facet_normal(mesh: &TriMesh, tri: &[u32; 3]) -> Vector3<f32> {
    let a = mesh.vertices[tri[0] as usize];
    let b = mesh.vertices[tri[1] as usize];
    let c = mesh.vertices[tri[2] as usize];
    let n = (b - a).cross(&(c - a));
    let len = n.norm();
    if len > 0.0 {
        (n / len).map(|v| v as f32)
    } else {
        Vector3::zeros()
    }
}

/// Encode as binary STL: 80-byte header, little-endian u32 facet count,
/// then 50 bytes per facet (normal, three vertices, attribute word).
pub fn encode_binary(mesh: &TriMesh) -> Vec<u8> {
    let mut out = Vec::with_capacity(84 + 50 * mesh.triangle_count());
    let mut header = [0u8; 80];
    let tag = SOLID_NAME.as_bytes();
    header[..tag.len()].copy_from_slice(tag);
    out.extend_from_slice(&header);
    out.extend_from_slice(&(mesh.triangle_count() as u32).to_le_bytes());
    for tri in &mesh.triangles {
        let n = facet_normal(mesh, tri);
        for v in [n.x, n.y, n.z] {
            out.extend_from_slice(&v.to_le_bytes());
        }
        for &i in tri {
            let p = mesh.vertices[i as usize];
            for v in [p.x as f32, p.y as f32, p.z as f32] {
                out.extend_from_slice(&v.to_le_bytes());
            }
        }
        out.extend_from_slice(&0u16.to_le_bytes());
    }
    out
}

/// Encode as ASCII STL.
pub fn encode_ascii(mesh: &TriMesh) -> String {
    let mut out = String::new();
    out.push_str(&format!("solid {SOLID_NAME}\n"));
    for tri in &mesh.triangles {
        let n = facet_normal(mesh, tri);
        out.push_str(&format!("  facet normal {:e} {:e} {:e}\n", n.x, n.y, n.z));
        out.push_str("    outer loop\n");
        for &i in tri {
            let p = mesh.vertices[i as usize];
            out.push_str(&format!(
                "      vertex {:e} {:e} {:e}\n",
                p.x as f32, p.y as f32, p.z as f32
            ));
        }
        out.push_str("    endloop\n");
        out.push_str("  endfacet\n");
    }
    out.push_str(&format!("endsolid {SOLID_NAME}\n"));
    out
}

/// Write `mesh` to `path` in the requested format.
pub fn write_stl(mesh: &TriMesh, path: &Path, format: StlFormat) -> Result<(), ExportError> {
    if mesh.is_empty() {
        return Err(ExportError::EmptyMesh);
    }
    let bytes = match format {
        StlFormat::Binary => encode_binary(mesh),
        StlFormat::Ascii => encode_ascii(mesh).into_bytes(),
    };
    let io_err = |source| ExportError::Io {
        path: path.display().to_string(),
        source,
    };
    let mut file = std::fs::File::create(path).map_err(io_err)?;
    file.write_all(&bytes).map_err(io_err)?;
    info!(path = %path.display(), bytes = bytes.len(), ?format, "exported");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use mesh_kernel::MeshBuilder;
    use nalgebra::Point3;

    fn tetrahedron() -> TriMesh {
        let o = Point3::new(0.0, 0.0, 0.0);
        let x = Point3::new(1.0, 0.0, 0.0);
        let y = Point3::new(0.0, 1.0, 0.0);
        let z = Point3::new(0.0, 0.0, 1.0);
        let mut mb = MeshBuilder::new();
        mb.add_triangle(o, y, x);
        mb.add_triangle(o, x, z);
        mb.add_triangle(o, z, y);
        mb.add_triangle(x, y, z);
        mb.build()
    }

    #[test]
    fn binary_layout_is_84_plus_50_per_facet() {
        let mesh = tetrahedron();
        let bytes = encode_binary(&mesh);
        assert_eq!(bytes.len(), 84 + 50 * 4);
        let count = u32::from_le_bytes(bytes[80..84].try_into().unwrap());
        assert_eq!(count, 4);
        assert!(bytes[..80].starts_with(b"pinplate"));
    }

    #[test]
    fn binary_normals_are_unit_length() {
        let mesh = tetrahedron();
        let bytes = encode_binary(&mesh);
        // First facet is (o, y, x): facing -z.
        let f = |off: usize| f32::from_le_bytes(bytes[off..off + 4].try_into().unwrap());
        let (nx, ny, nz) = (f(84), f(88), f(92));
        assert_relative_eq!(nx, 0.0);
        assert_relative_eq!(ny, 0.0);
        assert_relative_eq!(nz, -1.0);
    }

    #[test]
    fn ascii_facet_count_matches_the_mesh() {
        let mesh = tetrahedron();
        let text = encode_ascii(&mesh);
        assert!(text.starts_with("solid pinplate\n"));
        assert!(text.ends_with("endsolid pinplate\n"));
        let facets = text.lines().filter(|l| l.trim_start().starts_with("facet normal")).count();
        assert_eq!(facets, mesh.triangle_count());
        let vertices = text.lines().filter(|l| l.trim_start().starts_with("vertex")).count();
        assert_eq!(vertices, 3 * mesh.triangle_count());
    }

    #[test]
    fn write_refuses_an_empty_mesh() {
        let dir = tempfile::tempdir().unwrap();
        let err = write_stl(&TriMesh::default(), &dir.path().join("x.stl"), StlFormat::Binary)
            .unwrap_err();
        assert!(matches!(err, ExportError::EmptyMesh));
    }

    #[test]
    fn write_produces_the_encoded_bytes_on_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tetra.stl");
        let mesh = tetrahedron();
        write_stl(&mesh, &path, StlFormat::Binary).unwrap();
        let on_disk = std::fs::read(&path).unwrap();
        assert_eq!(on_disk, encode_binary(&mesh));
    }

    #[test]
    fn unwritable_path_reports_the_target() {
        let mesh = tetrahedron();
        let err = write_stl(
            &mesh,
            Path::new("/nonexistent-dir/out.stl"),
            StlFormat::Ascii,
        )
        .unwrap_err();
        match err {
            ExportError::Io { path, .. } => assert!(path.contains("out.stl")),
            other => panic!("unexpected error: {other}"),
        }
    }
}
