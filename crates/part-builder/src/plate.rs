use part_types::PartDimensions;

use crate::model::Slab;

/// The circular base plate: a straight slab from z = 0 up to the plate
/// thickness. The through-hole is applied at compose time.
pub fn build_plate(dims: &PartDimensions) -> Slab {
    Slab::straight(0.0, dims.plate_thickness, dims.plate_radius)
}
