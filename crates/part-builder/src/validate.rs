use part_types::{
    format_label, ParameterSet, PartDimensions, ValidationError, CHAMFER_LEG_MM, FONT_SCALE,
    TEXT_HEIGHT_MM,
};

use crate::font;

/// Fraction of the cylinder radius the label ink may reach.
const LABEL_FACE_MARGIN: f64 = 0.95;

/// Fraction of the available ledge/height the chamfer leg may consume.
const CHAMFER_CLEARANCE: f64 = 0.45;

/// Holes below one micron collapse under mesh quantization and are far
/// below anything a printer resolves; treat them as solid.
const MIN_HOLE_DIAMETER_MM: f64 = 1e-3;

/// Check the parameter invariants and derive the dependent dimensions.
///
/// The first violated invariant is reported; geometry is never built from
/// an unvalidated set.
pub fn validate(params: &ParameterSet) -> Result<PartDimensions, ValidationError> {
    for (name, value) in [
        ("plate diameter", params.plate_diameter),
        ("cylinder diameter", params.cylinder_diameter),
        ("cylinder height", params.cylinder_height),
        ("plate thickness", params.plate_thickness),
    ] {
        if !(value > 0.0) || !value.is_finite() {
            return Err(ValidationError::NonPositiveDimension { name, value });
        }
    }
    if !params.hole_diameter.is_finite() || params.hole_diameter < 0.0 {
        return Err(ValidationError::NegativeHoleDiameter {
            value: params.hole_diameter,
        });
    }
    if params.cylinder_diameter >= params.plate_diameter {
        return Err(ValidationError::CylinderExceedsPlate {
            cylinder_diameter: params.cylinder_diameter,
            plate_diameter: params.plate_diameter,
        });
    }
    if params.has_hole() && params.hole_diameter >= params.cylinder_diameter {
        return Err(ValidationError::HoleExceedsCylinder {
            hole_diameter: params.hole_diameter,
            cylinder_diameter: params.cylinder_diameter,
        });
    }

    let plate_radius = params.plate_diameter / 2.0;
    let cylinder_radius = params.cylinder_diameter / 2.0;
    let hole_radius = if params.hole_diameter < MIN_HOLE_DIAMETER_MM {
        0.0
    } else {
        params.hole_diameter / 2.0
    };

    // The embossed text names the plate diameter; its size tracks the
    // cylinder it sits on.
    let label_text = format_label(params.plate_diameter);
    // The ink's farthest corner from the face centre, in em units: half
    // the line width across, half the cap height up.
    let em_width = font::text_em_width(&label_text);
    let em_reach = ((em_width / 2.0).powi(2) + 0.25).sqrt();
    let face_cap = LABEL_FACE_MARGIN * cylinder_radius / em_reach;
    let font_size = (FONT_SCALE * params.cylinder_diameter).min(face_cap);

    let ledge = plate_radius - cylinder_radius;
    let chamfer_leg = CHAMFER_LEG_MM
        .min(CHAMFER_CLEARANCE * ledge)
        .min(CHAMFER_CLEARANCE * params.cylinder_height);

    Ok(PartDimensions {
        plate_radius,
        plate_thickness: params.plate_thickness,
        cylinder_radius,
        cylinder_height: params.cylinder_height,
        hole_radius,
        chamfer_leg,
        font_size,
        label_text,
        text_height: TEXT_HEIGHT_MM,
        total_height: params.plate_thickness + params.cylinder_height + TEXT_HEIGHT_MM,
    })
}
