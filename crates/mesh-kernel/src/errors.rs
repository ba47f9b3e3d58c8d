/// Errors from mesh construction and verification.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GeometryError {
    #[error("planar triangulation produced no triangles: {detail}")]
    TriangulationFailed { detail: String },

    #[error("degenerate profile: {detail}")]
    DegenerateProfile { detail: String },

    #[error("mesh is not watertight: {unpaired_edges} unpaired directed edges")]
    NotWatertight { unpaired_edges: usize },

    #[error("mesh is not a single connected solid: {components} components")]
    Disconnected { components: usize },
}
