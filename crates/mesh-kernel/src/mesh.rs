use std::collections::HashMap;

use nalgebra::{Point3, Vector3};

/// Quantization grid for vertex deduplication, in mm.
///
/// All surface generators sample shared seams (circle rings, profile
/// corners) from identical arithmetic, so coincident vertices land on the
/// same grid cell and collapse to one index. Watertightness checks then
/// reduce to exact index-based edge pairing.
const DEDUP_GRID_MM: f64 = 1e-6;

/// Indexed triangle mesh. Triangles are CCW when viewed from outside.
#[derive(Debug, Clone, Default)]
pub struct TriMesh {
    pub vertices: Vec<Point3<f64>>,
    pub triangles: Vec<[u32; 3]>,
}

impl TriMesh {
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.triangles.is_empty()
    }

    /// Signed volume via the divergence theorem: sum of signed tetrahedra
    /// spanned by the origin and each triangle. Positive for an outward
    /// oriented closed surface.
    pub fn signed_volume(&self) -> f64 {
        let mut six_v = 0.0;
        for t in &self.triangles {
            let a = self.vertices[t[0] as usize].coords;
            let b = self.vertices[t[1] as usize].coords;
            let c = self.vertices[t[2] as usize].coords;
            six_v += a.dot(&b.cross(&c));
        }
        six_v / 6.0
    }

    pub fn volume(&self) -> f64 {
        self.signed_volume().abs()
    }

    pub fn surface_area(&self) -> f64 {
        let mut area = 0.0;
        for t in &self.triangles {
            let a = self.vertices[t[0] as usize];
            let b = self.vertices[t[1] as usize];
            let c = self.vertices[t[2] as usize];
            area += (b - a).cross(&(c - a)).norm() * 0.5;
        }
        area
    }

    /// Axis-aligned bounding box, or `None` for an empty mesh.
    pub fn bounding_box(&self) -> Option<(Point3<f64>, Point3<f64>)> {
        let first = *self.vertices.first()?;
        let mut min = first;
        let mut max = first;
        for v in &self.vertices {
            for i in 0..3 {
                min[i] = min[i].min(v[i]);
                max[i] = max[i].max(v[i]);
            }
        }
        Some((min, max))
    }

    /// Extents of the bounding box along x, y, z.
    pub fn extents(&self) -> Option<Vector3<f64>> {
        self.bounding_box().map(|(min, max)| max - min)
    }

    /// Number of directed edges without a matching opposite edge.
    ///
    /// A closed 2-manifold has every directed edge exactly once, paired
    /// with its reverse on the neighbouring triangle. Duplicated faces and
    /// flipped windings also show up here as unpaired edges.
    pub fn unpaired_edge_count(&self) -> usize {
        let mut directed: HashMap<(u32, u32), u32> = HashMap::new();
        for t in &self.triangles {
            for (a, b) in [(t[0], t[1]), (t[1], t[2]), (t[2], t[0])] {
                *directed.entry((a, b)).or_insert(0) += 1;
            }
        }
        directed
            .iter()
            .filter(|(&(a, b), &n)| n != 1 || directed.get(&(b, a)) != Some(&1))
            .count()
    }

    pub fn is_watertight(&self) -> bool {
        !self.is_empty() && self.unpaired_edge_count() == 0
    }

    /// Number of connected components over the triangle adjacency graph.
    pub fn connected_components(&self) -> usize {
        let n = self.vertices.len();
        if n == 0 {
            return 0;
        }
        let mut parent: Vec<u32> = (0..n as u32).collect();
        fn find(parent: &mut [u32], i: u32) -> u32 {
            let mut i = i;
            while parent[i as usize] != i {
                parent[i as usize] = parent[parent[i as usize] as usize];
                i = parent[i as usize];
            }
            i
        }
        for t in &self.triangles {
            let r0 = find(&mut parent, t[0]);
            let r1 = find(&mut parent, t[1]);
            let r2 = find(&mut parent, t[2]);
            parent[r1 as usize] = r0;
            parent[r2 as usize] = r0;
        }
        let mut roots: Vec<u32> = (0..n as u32).map(|i| find(&mut parent, i)).collect();
        roots.sort_unstable();
        roots.dedup();
        roots.len()
    }
}

/// Accumulates triangles, deduplicating vertices on a quantized grid and
/// dropping triangles that collapse to fewer than three distinct vertices.
#[derive(Debug, Default)]
pub struct MeshBuilder {
    mesh: TriMesh,
    index: HashMap<(i64, i64, i64), u32>,
}

impl MeshBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    fn key(p: &Point3<f64>) -> (i64, i64, i64) {
        (
            (p.x / DEDUP_GRID_MM).round() as i64,
            (p.y / DEDUP_GRID_MM).round() as i64,
            (p.z / DEDUP_GRID_MM).round() as i64,
        )
    }

    pub fn add_vertex(&mut self, p: Point3<f64>) -> u32 {
        let key = Self::key(&p);
        if let Some(&i) = self.index.get(&key) {
            return i;
        }
        let i = self.mesh.vertices.len() as u32;
        self.mesh.vertices.push(p);
        self.index.insert(key, i);
        i
    }

    /// Add one triangle; degenerate triangles (repeated vertex after
    /// deduplication) are silently dropped.
    pub fn add_triangle(&mut self, a: Point3<f64>, b: Point3<f64>, c: Point3<f64>) {
        let ia = self.add_vertex(a);
        let ib = self.add_vertex(b);
        let ic = self.add_vertex(c);
        if ia != ib && ib != ic && ic != ia {
            self.mesh.triangles.push([ia, ib, ic]);
        }
    }

    /// Add a planar quad split along the a-c diagonal.
    pub fn add_quad(&mut self, a: Point3<f64>, b: Point3<f64>, c: Point3<f64>, d: Point3<f64>) {
        self.add_triangle(a, b, c);
        self.add_triangle(a, c, d);
    }

    pub fn build(self) -> TriMesh {
        self.mesh
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn unit_tetrahedron() -> TriMesh {
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
    fn tetrahedron_is_watertight_with_expected_volume() {
        let m = unit_tetrahedron();
        assert_eq!(m.vertex_count(), 4);
        assert_eq!(m.triangle_count(), 4);
        assert!(m.is_watertight());
        assert_eq!(m.connected_components(), 1);
        assert_relative_eq!(m.signed_volume(), 1.0 / 6.0, epsilon = 1e-12);
    }

    #[test]
    fn coincident_vertices_collapse_to_one_index() {
        let mut mb = MeshBuilder::new();
        let a = Point3::new(0.0, 0.0, 0.0);
        let a_jittered = Point3::new(1e-9, -1e-9, 0.0);
        assert_eq!(mb.add_vertex(a), mb.add_vertex(a_jittered));
    }

    #[test]
    fn degenerate_triangles_are_dropped() {
        let mut mb = MeshBuilder::new();
        let a = Point3::new(0.0, 0.0, 0.0);
        let b = Point3::new(1.0, 0.0, 0.0);
        mb.add_triangle(a, b, b);
        mb.add_triangle(a, a, a);
        assert_eq!(mb.build().triangle_count(), 0);
    }

    #[test]
    fn open_surface_reports_unpaired_edges() {
        let mut mb = MeshBuilder::new();
        mb.add_triangle(
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(0.0, 1.0, 0.0),
        );
        let m = mb.build();
        assert!(!m.is_watertight());
        assert_eq!(m.unpaired_edge_count(), 3);
    }

    #[test]
    fn two_tetrahedra_are_two_components() {
        let mut mb = MeshBuilder::new();
        for offset in [0.0, 10.0] {
            let o = Point3::new(offset, 0.0, 0.0);
            let x = Point3::new(offset + 1.0, 0.0, 0.0);
            let y = Point3::new(offset, 1.0, 0.0);
            let z = Point3::new(offset, 0.0, 1.0);
            mb.add_triangle(o, y, x);
            mb.add_triangle(o, x, z);
            mb.add_triangle(o, z, y);
            mb.add_triangle(x, y, z);
        }
        let m = mb.build();
        assert!(m.is_watertight());
        assert_eq!(m.connected_components(), 2);
    }
}
