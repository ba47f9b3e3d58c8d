use part_types::PartDimensions;
use tracing::debug;

use crate::model::{PartModel, Slab};

/// Replace the sharp plate-to-cylinder junction with a 45-degree chamfer
/// so the cylinder wall never overhangs an FDM-unprintable ledge.
///
/// The chamfer eats the bottom of the upper slab: a frustum of height
/// `chamfer_leg` tapering from `r + leg` down to `r`. The leg is already
/// clamped by validation to fit both the ledge and the slab height.
pub fn chamfer_overhangs(model: &mut PartModel, dims: &PartDimensions) {
    let leg = dims.chamfer_leg;
    if leg <= 0.0 {
        return;
    }
    let Some(junction) = model
        .slabs
        .windows(2)
        .position(|w| w[0].r_top > w[1].r_bottom)
    else {
        return;
    };
    let upper = model.slabs[junction + 1];
    let chamfer_top = upper.z0 + leg;
    let chamfer = Slab {
        z0: upper.z0,
        z1: chamfer_top,
        r_bottom: upper.r_bottom + leg,
        r_top: upper.r_bottom,
    };
    model.slabs[junction + 1].z0 = chamfer_top;
    model.slabs.insert(junction + 1, chamfer);
    debug!(leg, z = chamfer.z0, "chamfered junction");
}
