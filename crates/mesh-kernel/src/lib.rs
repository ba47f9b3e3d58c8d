//! Geometry kernel for the pinplate generator.
//!
//! Provides an indexed triangle mesh with a deduplicating builder, surface
//! generators (surfaces of revolution, planar caps of polygons-with-holes,
//! vertical prism walls), and the mesh metrics the pipeline and test oracles
//! rely on (volume, area, bounding box, watertightness, connectivity).

pub mod errors;
pub mod mesh;
pub mod surface;

pub use errors::GeometryError;
pub use mesh::{MeshBuilder, TriMesh};
pub use surface::{cap_region, circle_points, circle_polygon, revolve_polyline, ring_signed_area, wall_ring};
