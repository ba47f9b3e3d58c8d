use part_types::PartDimensions;

use crate::model::Slab;

/// The concentric cylinder, seated on the plate's top face.
pub fn build_cylinder(dims: &PartDimensions) -> Slab {
    Slab::straight(
        dims.plate_thickness,
        dims.plate_thickness + dims.cylinder_height,
        dims.cylinder_radius,
    )
}
