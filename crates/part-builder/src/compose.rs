use geo::MultiPolygon;
use part_types::PartDimensions;
use tracing::{debug, warn};

use crate::label;
use crate::model::{PartModel, Slab};

/// Stack the plate and cylinder into one revolved solid, attach the label
/// ink to the top face, and drill the through-hole last so it cuts plate,
/// cylinder and label alike.
///
/// A hole passing through the label is the designed outcome of drilling
/// last and is only recorded, not warned about; losing the label entirely
/// is worth a warning.
pub fn compose(
    dims: &PartDimensions,
    plate: Slab,
    cylinder: Slab,
    ink: MultiPolygon<f64>,
    segments: u32,
) -> PartModel {
    let mut warnings = Vec::new();
    let had_ink = !ink.0.is_empty();
    let (label, trimmed) = label::clip_to_hole(ink, dims.hole_radius, segments);
    let label_trimmed = trimmed && !label.0.is_empty();
    if had_ink && label.0.is_empty() {
        warn!(
            hole_diameter = dims.hole_radius * 2.0,
            "label omitted: through-hole swallows the entire label"
        );
        warnings.push(format!(
            "label \"{}\" omitted: the {} mm through-hole swallows it entirely",
            dims.label_text,
            dims.hole_radius * 2.0
        ));
    } else if label_trimmed {
        debug!("through-hole passes through the label; ink trimmed at the rim");
    }
    PartModel {
        slabs: vec![plate, cylinder],
        hole_radius: dims.hole_radius,
        label,
        label_trimmed,
        text_height: dims.text_height,
        warnings,
    }
}
