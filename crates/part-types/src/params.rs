use serde::{Deserialize, Serialize};

/// Embossed label height above the pin's top face, in mm.
pub const TEXT_HEIGHT_MM: f64 = 0.8;

/// Label cap height as a fraction of the cylinder diameter (upper bound;
/// the label shrinks further if its ink would not fit the top face).
pub const FONT_SCALE: f64 = 0.4;

/// Printable build plate, in mm (Bambu/Voron class 256x256 printers).
pub const BUILD_PLATE_XY_MM: f64 = 256.0;

/// Maximum allowed extent of the part along any axis, in mm.
/// Leaves margin on the 256x256 build plate for brims and purge lines.
pub const MAX_PART_DIMENSION_MM: f64 = 250.0;

/// Nominal 45-degree chamfer leg at the plate-to-cylinder junction, in mm.
/// Clamped against the plate ledge and cylinder height when applied.
pub const CHAMFER_LEG_MM: f64 = 0.6;

/// User-supplied part dimensions, all in mm.
///
/// Immutable once constructed; `part_builder::validate` checks the
/// invariants and derives the dependent dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ParameterSet {
    /// Diameter of the circular base plate.
    pub plate_diameter: f64,
    /// Diameter of the concentric cylinder sitting on the plate.
    pub cylinder_diameter: f64,
    /// Height of the cylinder above the plate's top face.
    pub cylinder_height: f64,
    /// Thickness of the base plate.
    pub plate_thickness: f64,
    /// Diameter of the concentric through-hole; 0 disables the hole.
    pub hole_diameter: f64,
}

impl Default for ParameterSet {
    fn default() -> Self {
        Self {
            plate_diameter: 11.0,
            cylinder_diameter: 4.0,
            cylinder_height: 10.0,
            plate_thickness: 1.0,
            hole_diameter: 1.0,
        }
    }
}

impl ParameterSet {
    pub fn has_hole(&self) -> bool {
        self.hole_diameter > 0.0
    }
}

/// Dimensions derived from a validated [`ParameterSet`].
///
/// Computed once by `validate`; everything downstream of validation reads
/// radii and derived values from here, never from the raw parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PartDimensions {
    pub plate_radius: f64,
    pub plate_thickness: f64,
    pub cylinder_radius: f64,
    pub cylinder_height: f64,
    pub hole_radius: f64,
    /// 45-degree chamfer leg applied at the plate-to-cylinder junction.
    pub chamfer_leg: f64,
    /// Label cap height after the fit clamp.
    pub font_size: f64,
    /// Label text, e.g. "11" or "11.5".
    pub label_text: String,
    /// Emboss height of the label above the cylinder's top face.
    pub text_height: f64,
    /// Nominal total height: plate + cylinder + embossed label.
    pub total_height: f64,
}

impl PartDimensions {
    /// Z of the cylinder's top face (label base plane).
    pub fn top_z(&self) -> f64 {
        self.plate_thickness + self.cylinder_height
    }
}

/// Format a diameter value the way it is embossed: whole millimetres as an
/// integer ("11"), otherwise one decimal ("11.5").
pub fn format_label(diameter: f64) -> String {
    if (diameter - diameter.round()).abs() < 1e-9 {
        format!("{}", diameter.round() as i64)
    } else {
        format!("{:.1}", diameter)
    }
}
