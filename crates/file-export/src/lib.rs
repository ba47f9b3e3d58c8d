//! STL export for finished parts: binary and ASCII writers plus the
//! parameter-derived output naming scheme.

pub mod naming;
pub mod stl;

pub use naming::default_filename;
pub use stl::{write_stl, StlFormat};

/// Errors raised while exporting a mesh.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("refusing to export an empty mesh")]
    EmptyMesh,

    #[error("failed to write {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}
