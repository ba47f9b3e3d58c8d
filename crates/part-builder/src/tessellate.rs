//! Turn a [`PartModel`] into one watertight triangle mesh.
//!
//! The whole outer silhouette (plate rim, ledge, chamfer, cylinder wall)
//! is one revolved profile; the hole wall is a second, inward-facing
//! revolution. Caps and label prisms are planar regions that reuse the
//! same ring coordinates as the walls, so every seam dedups onto shared
//! vertices and the closed-surface check is exact.

use geo::{LineString, MultiPolygon, Polygon};
use mesh_kernel::{
    cap_region, circle_points, revolve_polyline, ring_signed_area, wall_ring, GeometryError,
    MeshBuilder, TriMesh,
};
use tracing::{debug, instrument};

use crate::model::PartModel;

/// Return a closed copy of `ring` with the requested orientation.
fn oriented(ring: &LineString<f64>, ccw: bool) -> LineString<f64> {
    let mut r = ring.clone();
    r.close();
    if (ring_signed_area(&r) > 0.0) != ccw {
        r.0.reverse();
    }
    r
}

/// The outer (r, z) silhouette of the slab stack, bottom to top.
fn outer_profile(model: &PartModel) -> Vec<[f64; 2]> {
    let mut profile: Vec<[f64; 2]> = Vec::new();
    let mut push = |p: [f64; 2]| {
        if profile.last() != Some(&p) {
            profile.push(p);
        }
    };
    for s in &model.slabs {
        push([s.r_bottom, s.z0]);
        push([s.r_top, s.z1]);
    }
    profile
}

#[instrument(skip(model))]
pub fn tessellate(model: &PartModel, segments: u32) -> Result<TriMesh, GeometryError> {
    let mut mb = MeshBuilder::new();
    let top = model.top_z();
    let hole = model.hole_radius > 0.0;

    // Outer surface, walked bottom to top so it faces outward.
    revolve_polyline(&mut mb, &outer_profile(model), segments)?;

    // Hole wall, walked top to bottom so it faces inward.
    if hole {
        revolve_polyline(
            &mut mb,
            &[[model.hole_radius, top], [model.hole_radius, 0.0]],
            segments,
        )?;
    }

    let hole_interior = || {
        let mut ring = LineString::from(circle_points(model.hole_radius, segments));
        ring.close();
        ring.0.reverse();
        ring
    };

    // Bottom cap: the plate disc, minus the hole, facing down.
    let plate_radius = model.slabs.first().map_or(0.0, |s| s.r_bottom);
    let bottom = Polygon::new(
        LineString::from(circle_points(plate_radius, segments)),
        if hole { vec![hole_interior()] } else { vec![] },
    );
    cap_region(&mut mb, &MultiPolygon(vec![bottom]), 0.0, false)?;

    // Top cap: the cylinder's top disc minus the hole and the label
    // footprints. Glyph counters become islands of face inside the
    // footprint cut-outs.
    let top_radius = model.slabs.last().map_or(0.0, |s| s.r_top);
    let mut interiors = if hole { vec![hole_interior()] } else { vec![] };
    let mut cap_polys = Vec::new();
    for glyph in &model.label.0 {
        interiors.push(oriented(glyph.exterior(), false));
        for counter in glyph.interiors() {
            cap_polys.push(Polygon::new(oriented(counter, true), vec![]));
        }
    }
    cap_polys.insert(
        0,
        Polygon::new(
            LineString::from(circle_points(top_radius, segments)),
            interiors,
        ),
    );
    cap_region(&mut mb, &MultiPolygon(cap_polys), top, true)?;

    // Label prisms: vertical walls on every ink ring, capped above.
    let label_top = top + model.text_height;
    for glyph in &model.label.0 {
        wall_ring(&mut mb, &oriented(glyph.exterior(), true), top, label_top);
        for counter in glyph.interiors() {
            wall_ring(&mut mb, &oriented(counter, false), top, label_top);
        }
    }
    cap_region(&mut mb, &model.label, label_top, true)?;

    let mesh = mb.build();
    debug!(
        triangles = mesh.triangle_count(),
        vertices = mesh.vertex_count(),
        "tessellation complete"
    );
    let unpaired = mesh.unpaired_edge_count();
    if unpaired > 0 {
        return Err(GeometryError::NotWatertight {
            unpaired_edges: unpaired,
        });
    }
    let components = mesh.connected_components();
    if components != 1 {
        return Err(GeometryError::Disconnected { components });
    }
    Ok(mesh)
}
