//! Builds the registration pin plate: a circular base plate with a
//! concentric cylinder, an optional through-hole, a chamfered junction and
//! an embossed diameter label on the cylinder's top face.
//!
//! The pipeline is staged: parameter validation derives all dependent
//! dimensions, the plate/cylinder/chamfer stages describe the part as a
//! stack of revolved slabs, the label stage lays out 2D ink, and
//! tessellation turns the whole model into one watertight triangle mesh.

pub mod chamfer;
pub mod compose;
pub mod cylinder;
pub mod fit;
pub mod font;
pub mod label;
pub mod model;
pub mod plate;
pub mod tessellate;
pub mod validate;

use mesh_kernel::{GeometryError, TriMesh};
use part_types::{FitError, ParameterSet, PartDimensions, ValidationError};
use tracing::{debug, info, instrument};

/// Knobs that affect tessellation but not the part's nominal shape.
#[derive(Debug, Clone, Copy)]
pub struct BuildOptions {
    /// Circle segments per full turn.
    pub segments: u32,
}

impl Default for BuildOptions {
    fn default() -> Self {
        Self { segments: 64 }
    }
}

/// A fully built part: the mesh, the dimensions it was built from, and
/// any non-fatal warnings raised along the way.
#[derive(Debug, Clone)]
pub struct Assembly {
    pub mesh: TriMesh,
    pub dims: PartDimensions,
    /// The through-hole passes through the label ink.
    pub label_trimmed: bool,
    pub warnings: Vec<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Geometry(#[from] GeometryError),
    #[error(transparent)]
    Fit(#[from] FitError),
}

/// Run the full pipeline: validate, model, tessellate, check fit.
#[instrument(skip(params, opts), fields(
    plate = params.plate_diameter,
    cylinder = params.cylinder_diameter,
))]
pub fn build(params: &ParameterSet, opts: &BuildOptions) -> Result<Assembly, BuildError> {
    let dims = validate::validate(params)?;
    info!(
        label = %dims.label_text,
        font_size = dims.font_size,
        chamfer_leg = dims.chamfer_leg,
        "parameters validated"
    );

    let plate = plate::build_plate(&dims);
    let cylinder = cylinder::build_cylinder(&dims);
    let ink = label::build_label(&dims);
    let mut model = compose::compose(&dims, plate, cylinder, ink, opts.segments);
    chamfer::chamfer_overhangs(&mut model, &dims);
    debug!(slabs = model.slabs.len(), "model composed");

    let mesh = tessellate::tessellate(&model, opts.segments)?;
    info!(
        triangles = mesh.triangle_count(),
        vertices = mesh.vertex_count(),
        "tessellated"
    );
    fit::check_fit(&mesh)?;

    Ok(Assembly {
        mesh,
        dims,
        label_trimmed: model.label_trimmed,
        warnings: model.warnings,
    })
}
