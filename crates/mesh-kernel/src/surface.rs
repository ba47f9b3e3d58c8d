//! Surface generators: revolved profiles, planar caps, prism walls.
//!
//! All generators write into one shared [`MeshBuilder`] so that seams
//! between surfaces (cap rims meeting walls, profile corners meeting caps)
//! collapse onto shared vertex indices and pair up edge-for-edge.

use geo::{Area, Coord, LineString, MultiPolygon, Polygon, TriangulateEarcut};
use nalgebra::Point3;
use tracing::debug;

use crate::errors::GeometryError;
use crate::mesh::MeshBuilder;

/// Radii below this are treated as lying on the revolution axis.
const AXIS_EPS: f64 = 1e-9;

/// Sample `segments` points of a circle of `radius` about the origin,
/// counter-clockwise starting at angle zero. The closing point is not
/// repeated.
pub fn circle_points(radius: f64, segments: u32) -> Vec<Coord<f64>> {
    (0..segments)
        .map(|j| {
            let theta = std::f64::consts::TAU * f64::from(j) / f64::from(segments);
            Coord {
                x: radius * theta.cos(),
                y: radius * theta.sin(),
            }
        })
        .collect()
}

/// Closed CCW polygon approximating a circle about the origin.
pub fn circle_polygon(radius: f64, segments: u32) -> Polygon<f64> {
    Polygon::new(LineString::from(circle_points(radius, segments)), vec![])
}

/// Shoelace signed area of a closed ring: positive for CCW.
pub fn ring_signed_area(ring: &LineString<f64>) -> f64 {
    let coords = &ring.0;
    let mut twice = 0.0;
    for w in coords.windows(2) {
        twice += w[0].x * w[1].y - w[1].x * w[0].y;
    }
    twice * 0.5
}

fn ring_point(c: Coord<f64>, z: f64) -> Point3<f64> {
    Point3::new(c.x, c.y, z)
}

/// Revolve an open `(r, z)` polyline about the z axis.
///
/// When the polyline walks the solid's outer boundary with increasing z
/// (bottom to top), the generated surface faces outward; walking top to
/// bottom (a hole wall) faces it inward. Points with `r` on the axis
/// collapse to apex fans.
pub fn revolve_polyline(
    mb: &mut MeshBuilder,
    profile: &[[f64; 2]],
    segments: u32,
) -> Result<(), GeometryError> {
    if profile.len() < 2 {
        return Err(GeometryError::DegenerateProfile {
            detail: format!("revolution profile has {} points", profile.len()),
        });
    }
    if profile.iter().any(|p| p[0] < -AXIS_EPS) {
        return Err(GeometryError::DegenerateProfile {
            detail: "revolution profile crosses the axis".to_string(),
        });
    }
    let point_at = |r: f64, z: f64, j: u32| {
        let theta = std::f64::consts::TAU * f64::from(j % segments) / f64::from(segments);
        Point3::new(r * theta.cos(), r * theta.sin(), z)
    };
    for pair in profile.windows(2) {
        let [ra, za] = pair[0];
        let [rb, zb] = pair[1];
        if ra < AXIS_EPS && rb < AXIS_EPS {
            continue;
        }
        for j in 0..segments {
            let a0 = point_at(ra, za, j);
            let a1 = point_at(ra, za, j + 1);
            let b0 = point_at(rb, zb, j);
            let b1 = point_at(rb, zb, j + 1);
            // Apex rows dedup to one index; the collapsed triangle drops.
            mb.add_triangle(a0, a1, b1);
            mb.add_triangle(a0, b1, b0);
        }
    }
    debug!(points = profile.len(), segments, "revolved profile");
    Ok(())
}

/// Every ring vertex of the region, closing duplicates skipped.
fn boundary_points(region: &MultiPolygon<f64>) -> Vec<Coord<f64>> {
    let mut pts = Vec::new();
    for poly in &region.0 {
        for ring in std::iter::once(poly.exterior()).chain(poly.interiors()) {
            let coords = &ring.0;
            let n = if coords.len() > 1 && coords.first() == coords.last() {
                coords.len() - 1
            } else {
                coords.len()
            };
            pts.extend_from_slice(&coords[..n]);
        }
    }
    pts
}

/// A boundary vertex lying strictly inside the segment `(p, q)`, if any;
/// the one nearest `p` when several are collinear.
fn split_point(pts: &[Coord<f64>], p: Coord<f64>, q: Coord<f64>) -> Option<Coord<f64>> {
    let (dx, dy) = (q.x - p.x, q.y - p.y);
    let len2 = dx * dx + dy * dy;
    if len2 == 0.0 {
        return None;
    }
    let len = len2.sqrt();
    let mut best: Option<(f64, Coord<f64>)> = None;
    for &r in pts {
        let (ux, uy) = (r.x - p.x, r.y - p.y);
        let (vx, vy) = (r.x - q.x, r.y - q.y);
        if ux * ux + uy * uy < 1e-18 || vx * vx + vy * vy < 1e-18 {
            continue;
        }
        if (dx * uy - dy * ux).abs() > 1e-9 * len {
            continue;
        }
        let t = (ux * dx + uy * dy) / len2;
        if t <= 0.0 || t >= 1.0 {
            continue;
        }
        if best.map_or(true, |(bt, _)| t < bt) {
            best = Some((t, r));
        }
    }
    best.map(|(_, r)| r)
}

/// Emit one cap triangle, splitting any edge that runs through a boundary
/// vertex first.
///
/// Earcut joins interior rings to the exterior with bridge edges; when
/// rings share a collinear line (two glyph rectangles on one baseline) a
/// bridge can span several ring vertices at once, leaving T-junctions
/// against the prism walls that carry the sub-segments. Splitting pins
/// every cap edge onto the same vertices the walls use.
fn emit_refined(
    mb: &mut MeshBuilder,
    pts: &[Coord<f64>],
    a: Coord<f64>,
    b: Coord<f64>,
    c: Coord<f64>,
    z: f64,
    depth: u32,
) {
    if depth > 0 {
        for (p, q, r) in [(a, b, c), (b, c, a), (c, a, b)] {
            if let Some(m) = split_point(pts, p, q) {
                emit_refined(mb, pts, p, m, r, z, depth - 1);
                emit_refined(mb, pts, m, q, r, z, depth - 1);
                return;
            }
        }
    }
    mb.add_triangle(ring_point(a, z), ring_point(b, z), ring_point(c, z));
}

/// Triangulate a planar region (polygons with holes) onto the plane `z`.
///
/// `upward` selects whether triangles face +z or -z; the earcut output is
/// reoriented per triangle and refined so no triangle edge passes over a
/// ring vertex of the region.
pub fn cap_region(
    mb: &mut MeshBuilder,
    region: &MultiPolygon<f64>,
    z: f64,
    upward: bool,
) -> Result<(), GeometryError> {
    let boundary = boundary_points(region);
    for poly in &region.0 {
        if poly.unsigned_area() < AXIS_EPS {
            continue;
        }
        let raw = poly.earcut_triangles_raw();
        if raw.triangle_indices.is_empty() {
            return Err(GeometryError::TriangulationFailed {
                detail: format!(
                    "polygon with {} exterior points, {} holes",
                    poly.exterior().0.len(),
                    poly.interiors().len()
                ),
            });
        }
        let coord_at = |i: usize| Coord {
            x: raw.vertices[2 * i],
            y: raw.vertices[2 * i + 1],
        };
        for tri in raw.triangle_indices.chunks_exact(3) {
            let (a, b, c) = (coord_at(tri[0]), coord_at(tri[1]), coord_at(tri[2]));
            let cross = (b.x - a.x) * (c.y - a.y) - (b.y - a.y) * (c.x - a.x);
            let ccw = cross > 0.0;
            let (p, q, r) = if ccw == upward { (a, b, c) } else { (a, c, b) };
            emit_refined(mb, &boundary, p, q, r, z, 32);
        }
    }
    debug!(polygons = region.0.len(), z, upward, "capped region");
    Ok(())
}

/// Extrude a closed ring into a vertical wall between `z0` and `z1`.
///
/// A CCW ring produces an outward-facing wall, a CW ring (a hole
/// boundary) an inward-facing one. Requires `z1 > z0`.
pub fn wall_ring(mb: &mut MeshBuilder, ring: &LineString<f64>, z0: f64, z1: f64) {
    for w in ring.0.windows(2) {
        let (p0, p1) = (w[0], w[1]);
        mb.add_quad(
            ring_point(p0, z0),
            ring_point(p1, z0),
            ring_point(p1, z1),
            ring_point(p0, z1),
        );
    }
}
