use geo::{Area, BooleanOps, Coord, LineString, MultiPolygon, Polygon};
use mesh_kernel::circle_points;
use part_types::PartDimensions;

use crate::font;

/// Radial clearance kept between label ink and the through-hole rim, so
/// the hole's cap ring stays a plain polygon the hole wall can seal
/// against.
pub const HOLE_CLEARANCE_MM: f64 = 0.05;

/// Lay out the diameter label, centred on the origin of the top face.
pub fn build_label(dims: &PartDimensions) -> MultiPolygon<f64> {
    layout_text(&dims.label_text, dims.font_size)
}

/// Place each glyph of `text` on a horizontal baseline, centred on the
/// origin, scaled so the cap height equals `size` mm. Exteriors come out
/// CCW, counters CW.
pub fn layout_text(text: &str, size: f64) -> MultiPolygon<f64> {
    let total = font::text_em_width(text);
    let mut pen = -total / 2.0;
    let mut polys = Vec::new();
    for c in text.chars() {
        let Some(g) = font::glyph(c) else { continue };
        let place = |ring: &[[f64; 2]], pen: f64| -> LineString<f64> {
            let mut ls: LineString<f64> = ring
                .iter()
                .map(|&[x, y]| Coord {
                    x: (pen + x) * size,
                    y: (y - 0.5) * size,
                })
                .collect();
            ls.close();
            ls
        };
        let exterior = place(g.outline, pen);
        let interiors = g
            .counters
            .iter()
            .map(|counter| {
                let mut ls = place(counter, pen);
                ls.0.reverse();
                ls
            })
            .collect();
        polys.push(Polygon::new(exterior, interiors));
        pen += g.width + font::GLYPH_GAP_EM;
    }
    MultiPolygon(polys)
}

/// Drill the through-hole out of the label ink.
///
/// The ink is clipped against a circle slightly larger than the hole, so
/// trimmed ink never touches the hole's own cap ring. Returns the clipped
/// ink and whether anything was actually removed.
pub fn clip_to_hole(
    ink: MultiPolygon<f64>,
    hole_radius: f64,
    segments: u32,
) -> (MultiPolygon<f64>, bool) {
    if hole_radius <= 0.0 || ink.0.is_empty() {
        return (ink, false);
    }
    let clip = MultiPolygon(vec![Polygon::new(
        LineString::from(circle_points(hole_radius + HOLE_CLEARANCE_MM, segments)),
        vec![],
    )]);
    let before = ink.unsigned_area();
    let mut clipped = ink.difference(&clip);
    // Clipping can leave sliver polygons where the circle grazes a glyph
    // edge; they are below print resolution and would not seal.
    clipped.0.retain(|p| p.unsigned_area() > 1e-9);
    let trimmed = (before - clipped.unsigned_area()).abs() > 1e-9;
    (clipped, trimmed)
}
