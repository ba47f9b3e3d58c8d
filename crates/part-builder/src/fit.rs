use mesh_kernel::TriMesh;
use part_types::{FitError, MAX_PART_DIMENSION_MM};
use tracing::debug;

/// Check the finished part against the build-volume limit on every axis.
pub fn check_fit(mesh: &TriMesh) -> Result<(), FitError> {
    let Some(ext) = mesh.extents() else {
        return Ok(());
    };
    debug!(x = ext.x, y = ext.y, z = ext.z, "part extents");
    for (axis, extent) in [("x", ext.x), ("y", ext.y), ("z", ext.z)] {
        if extent > MAX_PART_DIMENSION_MM {
            return Err(FitError::BuildVolumeExceeded {
                axis,
                extent,
                limit: MAX_PART_DIMENSION_MM,
            });
        }
    }
    Ok(())
}
