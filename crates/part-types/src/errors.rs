/// Parameter invariant violations, reported before any geometry is built.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error(
        "cylinder diameter {cylinder_diameter} mm must be strictly smaller than \
         plate diameter {plate_diameter} mm"
    )]
    CylinderExceedsPlate {
        cylinder_diameter: f64,
        plate_diameter: f64,
    },

    #[error(
        "hole diameter {hole_diameter} mm must be strictly smaller than \
         cylinder diameter {cylinder_diameter} mm (zero wall thickness)"
    )]
    HoleExceedsCylinder {
        hole_diameter: f64,
        cylinder_diameter: f64,
    },

    #[error("{name} must be positive, got {value} mm")]
    NonPositiveDimension { name: &'static str, value: f64 },

    #[error("hole diameter must be zero or positive, got {value} mm")]
    NegativeHoleDiameter { value: f64 },
}

/// Build-volume violations, checked on the final assembly.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FitError {
    #[error(
        "part {axis} extent {extent:.1} mm exceeds the {limit:.0} mm build \
         volume limit (256x256 mm build plate)"
    )]
    BuildVolumeExceeded {
        axis: &'static str,
        extent: f64,
        limit: f64,
    },
}
